//! List jobs for a period with aggregate totals.

use crate::libs::{config::Config, history, job::JobFilter, messages::Message, store::Store, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Period to list jobs for
    #[arg(long, short, value_enum, default_value = "all")]
    filter: JobFilter,
}

pub async fn cmd(args: HistoryArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = Store::open(&config).await?;

    let jobs = store.fetch_jobs().await?;
    let jobs = history::filter(jobs, args.filter, Local::now());
    if jobs.is_empty() {
        msg_info!(Message::NoJobsFound);
        return Ok(());
    }

    let totals = history::aggregate(&jobs);
    msg_print!(Message::HistoryHeader(format!("{:?}", args.filter).to_lowercase()), true);
    View::totals(&totals)?;
    View::jobs(&jobs)?;
    Ok(())
}
