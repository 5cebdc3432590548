//! Job history filtering and aggregate totals.
//!
//! Pure functions over a fetched job collection. Filtering uses each job's
//! creation timestamp; aggregation is plain summation and therefore
//! independent of input order.

use crate::libs::job::{Job, JobFilter};
use chrono::{DateTime, Duration, Local, Months, NaiveDateTime, NaiveTime};

/// Summed totals across a job collection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JobTotals {
    pub hours: f64,
    pub distance_km: f64,
    pub fuel_cost: f64,
}

/// Jobs whose creation timestamp falls inside the filter window, newest
/// first.
///
/// `Today` starts at local midnight; `Week` is a rolling 7x24h window;
/// `Month` starts at midnight of the same day of the previous calendar
/// month, clamped to that month's length (Mar 31 looks back to Feb 28/29).
pub fn filter(jobs: Vec<Job>, job_filter: JobFilter, now: DateTime<Local>) -> Vec<Job> {
    let cutoff = filter_cutoff(job_filter, now);
    let mut selected: Vec<Job> = match cutoff {
        Some(cutoff) => jobs.into_iter().filter(|job| job.created_at >= cutoff).collect(),
        None => jobs,
    };
    selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    selected
}

fn filter_cutoff(job_filter: JobFilter, now: DateTime<Local>) -> Option<NaiveDateTime> {
    let today = now.date_naive();
    match job_filter {
        JobFilter::All => None,
        JobFilter::Today => Some(today.and_time(NaiveTime::MIN)),
        JobFilter::Week => Some(now.naive_local() - Duration::hours(7 * 24)),
        JobFilter::Month => {
            let month_ago = today.checked_sub_months(Months::new(1)).unwrap_or(today);
            Some(month_ago.and_time(NaiveTime::MIN))
        }
    }
}

/// Sums travel time, distance and fuel cost over the collection.
///
/// Unset derived fields count as zero, so active jobs contribute nothing.
pub fn aggregate(jobs: &[Job]) -> JobTotals {
    jobs.iter().fold(JobTotals::default(), |acc, job| JobTotals {
        hours: acc.hours + job.travel_time.unwrap_or(0.0),
        distance_km: acc.distance_km + job.travel_km.unwrap_or(0.0),
        fuel_cost: acc.fuel_cost + job.fuel_cost.unwrap_or(0.0),
    })
}
