//! Export a timesheet to a spreadsheet file.
//!
//! The output file name defaults to the range label the template expects,
//! e.g. "July 1, 2025 to July 15.xlsx".

use crate::commands::report::resolve_range;
use crate::libs::{
    config::Config,
    export::{ExportFormat, Exporter},
    messages::Message,
    report::{self, Timesheet},
    store::Store,
};
use crate::msg_warning;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Range start (YYYY-MM-DD or 'today')
    #[arg(long)]
    from: Option<String>,
    /// Range end (YYYY-MM-DD or 'today')
    #[arg(long)]
    to: Option<String>,
    /// Use the suggested bi-monthly range containing today
    #[arg(long)]
    bi_monthly: bool,
    /// Output format
    #[arg(long, short, value_enum, default_value = "excel")]
    format: ExportFormat,
    /// Output file path; derived from the range when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let (start, end) = resolve_range(&args.from, &args.to, args.bi_monthly)?;

    let config = Config::read()?;
    let mut store = Store::open(&config).await?;
    let jobs = store.fetch_jobs_between(report::range_start(start), report::range_end(end)).await?;
    let timesheet = Timesheet::build(&jobs, start, end);

    if timesheet.job_count == 0 {
        msg_warning!(Message::NoJobsInRange);
        return Ok(());
    }

    Exporter::new(args.format, args.output, &timesheet).export(&timesheet)?;
    Ok(())
}
