//! Preview a timesheet for a date range.

use crate::libs::{config::Config, messages::Message, report, store::Store, view::View};
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Range start (YYYY-MM-DD or 'today')
    #[arg(long)]
    from: Option<String>,
    /// Range end (YYYY-MM-DD or 'today')
    #[arg(long)]
    to: Option<String>,
    /// Use the suggested bi-monthly range containing today
    #[arg(long)]
    bi_monthly: bool,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let (start, end) = resolve_range(&args.from, &args.to, args.bi_monthly)?;

    let config = Config::read()?;
    let mut store = Store::open(&config).await?;
    let jobs = store.fetch_jobs_between(report::range_start(start), report::range_end(end)).await?;
    let timesheet = report::Timesheet::build(&jobs, start, end);

    msg_print!(Message::TimesheetHeader(timesheet.range_label()), true);
    msg_print!(Message::TimesheetJobCount(timesheet.job_count));
    View::timesheet(&timesheet)?;
    Ok(())
}

/// Turns the range arguments into concrete dates.
///
/// `--bi-monthly` wins and fills the half-month window containing today;
/// otherwise both `--from` and `--to` are required.
pub(crate) fn resolve_range(from: &Option<String>, to: &Option<String>, bi_monthly: bool) -> Result<(NaiveDate, NaiveDate)> {
    if bi_monthly {
        return Ok(report::suggested_bimonthly_range(Local::now().date_naive()));
    }
    match (from, to) {
        (Some(from), Some(to)) => Ok((parse_date(from)?, parse_date(to)?)),
        _ => msg_bail_anyhow!(Message::ReportRangeRequired),
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(Local::now().date_naive())
    } else {
        Ok(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?)
    }
}
