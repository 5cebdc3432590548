//! End the active job.
//!
//! Collects the work summary, applies fuel parameter overrides and commits
//! the end timestamp together with the derived travel fields.

use crate::libs::{config::Config, locator, messages::Message, store::Store, tracker::Tracker, view::View};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EndArgs {
    /// Latitude of the current location
    #[arg(long)]
    lat: Option<f64>,
    /// Longitude of the current location
    #[arg(long)]
    lon: Option<f64>,
    /// Free-text summary of the work done on site
    #[arg(long, short)]
    summary: Option<String>,
    /// Fuel efficiency override in km/L
    #[arg(long)]
    efficiency: Option<f64>,
    /// Fuel price override per liter
    #[arg(long)]
    price: Option<f64>,
}

pub async fn cmd(args: EndArgs) -> Result<()> {
    let config = Config::read()?;

    let mut fuel = config.fuel();
    if let Some(efficiency) = args.efficiency {
        fuel.efficiency = efficiency;
    }
    if let Some(price) = args.price {
        fuel.price = price;
    }
    // The cost formula divides by efficiency, so reject it here.
    if fuel.efficiency <= 0.0 {
        msg_bail_anyhow!(Message::InvalidFuelEfficiency);
    }

    let store = Store::open(&config).await?;
    let mut tracker = Tracker::new(store).await?;
    if tracker.current().is_none() {
        msg_bail_anyhow!(Message::NoActiveJob);
    }

    let summary = match args.summary {
        Some(summary) => summary,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWorkSummary.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let location = locator::resolve(locator::from_args(args.lat, args.lon), &config).ok();
    let job = tracker.end(location, &fuel, &summary).await?;

    msg_success!(Message::JobEnded(job.id));
    View::job(&job)?;
    Ok(())
}
