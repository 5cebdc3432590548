//! List known sites or register a new one at the current location.

use crate::libs::{config::Config, locator, messages::Message, store::Store, view::View};
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct SitesArgs {
    /// Register a site with this name at the current location
    #[arg(long)]
    add: Option<String>,
    /// Latitude of the current location
    #[arg(long)]
    lat: Option<f64>,
    /// Longitude of the current location
    #[arg(long)]
    lon: Option<f64>,
}

pub async fn cmd(args: SitesArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = Store::open(&config).await?;

    if let Some(name) = args.add {
        let location = locator::resolve(locator::from_args(args.lat, args.lon), &config)?;
        let site = store.insert_site(&name, location.lat, location.lon, Local::now().naive_local()).await?;
        msg_success!(Message::SiteCreated(site.name));
        return Ok(());
    }

    let sites = store.fetch_sites().await?;
    if sites.is_empty() {
        msg_info!(Message::NoSitesFound);
        return Ok(());
    }

    msg_print!(Message::SitesHeader, true);
    View::sites(&sites)?;
    Ok(())
}
