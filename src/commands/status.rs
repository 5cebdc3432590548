//! Show the active job, if any.

use crate::libs::{config::Config, formatter, messages::Message, store::Store, tracker::Tracker, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let store = Store::open(&config).await?;
    let tracker = Tracker::new(store).await?;

    match tracker.current() {
        Some(job) => {
            msg_print!(Message::ActiveJobHeader(formatter::format_clock(job.start_time)), true);
            View::job(job)?;
        }
        None => msg_info!(Message::NoActiveJob),
    }
    Ok(())
}
