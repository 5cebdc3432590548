//! Timesheet table construction.
//!
//! Projects a date-filtered job collection into the tabular structure the
//! spreadsheet template expects: rows grouped by calendar day with the day
//! and date labels only on the first row of each day, followed by a totals
//! row and a summary row. The column set and blank-propagation rule are
//! kept compatible with the existing report template.

use crate::libs::formatter;
use crate::libs::job::Job;
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Column headers of the timesheet, in template order.
pub const COLUMNS: [&str; 11] = [
    "Day",
    "Date",
    "Time Start",
    "Time End",
    "Hours",
    "Customer",
    "Work Order",
    "Work Hours",
    "Train Hours",
    "Other Hours",
    "Notes",
];

/// One rendered timesheet row. All values are pre-formatted strings so the
/// table can be written to any output without further conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimesheetRow {
    pub day: String,
    pub date: String,
    pub time_start: String,
    pub time_end: String,
    pub hours: String,
    pub customer: String,
    pub work_order: String,
    pub work_hours: String,
    pub train_hours: String,
    pub other_hours: String,
    pub notes: String,
}

impl TimesheetRow {
    /// Cell values in [`COLUMNS`] order.
    pub fn cells(&self) -> [&str; 11] {
        [
            &self.day,
            &self.date,
            &self.time_start,
            &self.time_end,
            &self.hours,
            &self.customer,
            &self.work_order,
            &self.work_hours,
            &self.train_hours,
            &self.other_hours,
            &self.notes,
        ]
    }
}

/// A built timesheet for a date range: detail rows plus the trailing totals
/// and summary rows.
#[derive(Debug)]
pub struct Timesheet {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub rows: Vec<TimesheetRow>,
    pub total_hours: f64,
    pub job_count: usize,
}

impl Timesheet {
    /// Builds the timesheet from jobs created within `[start, end]`.
    ///
    /// The range is inclusive in local time, from 00:00:00 on the start day
    /// through 23:59:59 on the end day. Days and the jobs within each day
    /// are emitted in chronological order.
    pub fn build(jobs: &[Job], start: NaiveDate, end: NaiveDate) -> Self {
        let from = range_start(start);
        let to = range_end(end);

        let mut selected: Vec<&Job> = jobs.iter().filter(|job| job.created_at >= from && job.created_at <= to).collect();
        selected.sort_by_key(|job| job.created_at);

        let mut rows = Vec::with_capacity(selected.len() + 2);
        let mut current_day: Option<NaiveDate> = None;
        for job in &selected {
            let day = job.created_at.date();
            let first_of_day = current_day != Some(day);
            if first_of_day {
                current_day = Some(day);
            }
            let hours = job.travel_time.map(|hours| format!("{:.2}", hours)).unwrap_or_default();
            rows.push(TimesheetRow {
                day: if first_of_day { formatter::day_abbreviation(day).to_string() } else { String::new() },
                date: if first_of_day { formatter::format_template_date(day) } else { String::new() },
                time_start: formatter::format_template_time(job.start_time),
                time_end: job.end_time.map(formatter::format_template_time).unwrap_or_default(),
                hours: hours.clone(),
                customer: job.site_name().to_string(),
                work_order: job.site_id.map(|id| id.to_string()).unwrap_or_default(),
                work_hours: hours,
                train_hours: "0.00".to_string(),
                other_hours: "0.00".to_string(),
                notes: job.work_summary.clone().unwrap_or_default(),
            });
        }

        let total_hours: f64 = selected.iter().filter_map(|job| job.travel_time).sum();
        let total = format!("{:.2}", total_hours);

        // Totals row, then a summary row repeating the total in the cells
        // the template's footer formulas read from.
        rows.push(TimesheetRow {
            date: "Totals".to_string(),
            hours: total.clone(),
            work_hours: total.clone(),
            train_hours: "0.00".to_string(),
            other_hours: "0.00".to_string(),
            ..Default::default()
        });
        rows.push(TimesheetRow {
            customer: "Summary".to_string(),
            work_order: total.clone(),
            work_hours: total.clone(),
            train_hours: "0.00".to_string(),
            other_hours: "0.00".to_string(),
            notes: total,
            ..Default::default()
        });

        Timesheet {
            start,
            end,
            rows,
            total_hours,
            job_count: selected.len(),
        }
    }

    /// Range label used in headers and file names, e.g.
    /// "July 1, 2025 to July 15".
    pub fn range_label(&self) -> String {
        format!("{} to {}", formatter::format_long_date(self.start), formatter::format_short_date(self.end))
    }

    /// Default output file name for the given extension.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.range_label(), extension)
    }
}

/// First instant of the report range, 00:00:00 on the start day.
pub fn range_start(start: NaiveDate) -> NaiveDateTime {
    start.and_time(NaiveTime::MIN)
}

/// Last instant of the report range, 23:59:59 on the end day.
pub fn range_end(end: NaiveDate) -> NaiveDateTime {
    end.and_hms_opt(23, 59, 59).unwrap_or_else(|| end.and_time(NaiveTime::MIN))
}

/// The bi-monthly range containing `today`: days 1 through 15, or day 16
/// through the end of the month.
pub fn suggested_bimonthly_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).unwrap_or(today);
    if today.day() <= 15 {
        (first, first + chrono::Duration::days(14))
    } else {
        let next_month = first.checked_add_months(Months::new(1)).unwrap_or(first);
        let last = next_month.pred_opt().unwrap_or(today);
        (first + chrono::Duration::days(15), last)
    }
}
