//! Job records and the end-of-job field snapshot.

use crate::libs::site::Site;
use chrono::NaiveDateTime;

/// Placeholder shown when a job has no associated site.
pub const UNKNOWN_SITE: &str = "Unknown Site";

/// One work engagement bounded by a start and, eventually, an end timestamp.
///
/// A job is active while `end_time` is unset. The derived fields
/// (`travel_km`, `travel_time`, `fuel_cost`) stay `None` until the end
/// transition writes all of them together with `end_time`; a job is never
/// observable with only some of them populated.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: i64,
    pub site_id: Option<i64>,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    /// Round-trip distance in kilometers, 0 for a job without a site.
    pub travel_km: Option<f64>,
    /// Wall-clock duration of the job in hours.
    pub travel_time: Option<f64>,
    pub fuel_cost: Option<f64>,
    pub work_summary: Option<String>,
    pub created_at: NaiveDateTime,
    /// Site record joined in by the store when `site_id` is set.
    pub site: Option<Site>,
}

impl Job {
    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }

    pub fn site_name(&self) -> &str {
        self.site.as_ref().map(|site| site.name.as_str()).unwrap_or(UNKNOWN_SITE)
    }
}

/// The full set of fields written by the end transition.
///
/// Buffered as one record so either store can commit it as a single update
/// and a reader never sees a partially ended job.
#[derive(Debug, Clone)]
pub struct JobCompletion {
    pub end_time: NaiveDateTime,
    pub travel_km: f64,
    pub travel_time: f64,
    pub fuel_cost: f64,
    pub work_summary: String,
}

/// Date-range filters over the job history, relative to "now" at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum JobFilter {
    /// Every recorded job.
    All,
    /// Jobs created since local midnight.
    Today,
    /// Jobs created within the last seven days.
    Week,
    /// Jobs created since the same day of the previous calendar month.
    Month,
}
