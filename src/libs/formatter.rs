//! Time and date formatting utilities for display and timesheet output.
//!
//! Two groups of helpers live here: generic clock formatting used by table
//! views, and the timesheet template labels (day abbreviation, "JUL 9TH"
//! date, 12-hour clock) that must match the spreadsheet template the
//! reports are imported into.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Day-of-week abbreviations in template spelling, Sunday first.
const DAY_ABBREVIATIONS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THR", "FRI", "SAT"];

/// Month abbreviations for the template date label.
const MONTH_ABBREVIATIONS: [&str; 12] = ["JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC"];

/// Elapsed time between two timestamps in fractional hours.
///
/// Millisecond-precision subtraction divided by 3,600,000. No rounding is
/// applied here; rounding is a presentation concern.
pub fn elapsed_hours(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_milliseconds() as f64 / 3_600_000.0
}

/// 24-hour wall clock, e.g. "14:05".
pub fn format_clock(time: NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}

/// Long date, e.g. "July 9, 2025".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Short date without the year, e.g. "July 15".
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}

/// 12-hour template clock, e.g. "10:55 AM".
pub fn format_template_time(time: NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Template day-of-week column value, e.g. "WED".
pub fn day_abbreviation(date: NaiveDate) -> &'static str {
    DAY_ABBREVIATIONS[date.weekday().num_days_from_sunday() as usize]
}

/// Template date label, e.g. "JUL 9TH".
///
/// The suffix rule matches the report template: 1 -> ST, 2 -> ND, 3 -> RD,
/// every other day of the month -> TH.
pub fn format_template_date(date: NaiveDate) -> String {
    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    let day = date.day();
    let suffix = match day {
        1 => "ST",
        2 => "ND",
        3 => "RD",
        _ => "TH",
    };
    format!("{} {}{}", month, day, suffix)
}
