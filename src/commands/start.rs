//! Start a job at the current location.
//!
//! Resolves the current coordinate, looks up the site registry by
//! proximity, and creates the new active job. When no known site is within
//! range, `--site` registers one on the spot; without it the job starts
//! with no associated site.

use crate::libs::{config::Config, locator, messages::Message, store::Store, tracker::Tracker};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Latitude of the current location
    #[arg(long)]
    lat: Option<f64>,
    /// Longitude of the current location
    #[arg(long)]
    lon: Option<f64>,
    /// Site name to register when no known site is nearby
    #[arg(long)]
    site: Option<String>,
}

pub async fn cmd(args: StartArgs) -> Result<()> {
    let config = Config::read()?;
    let location = locator::resolve(locator::from_args(args.lat, args.lon), &config)?;

    let store = Store::open(&config).await?;
    let mut tracker = Tracker::new(store).await?;
    let job = tracker.start(location, args.site.as_deref()).await?;

    match &job.site {
        Some(site) => msg_success!(Message::JobStartedAtSite(job.id, site.name.clone())),
        None => msg_success!(Message::JobStarted(job.id)),
    }
    Ok(())
}
