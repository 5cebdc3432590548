//! Terminal table rendering for jobs, sites and timesheets.

use crate::libs::history::JobTotals;
use crate::libs::job::Job;
use crate::libs::report::{Timesheet, COLUMNS};
use crate::libs::site::Site;
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Job history table, one row per job.
    pub fn jobs(jobs: &[Job]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "START", "END", "HOURS", "KM", "FUEL", "SITE", "SUMMARY"]);
        for job in jobs {
            table.add_row(row![
                job.id,
                job.created_at.format("%b %-d, %Y"),
                job.start_time.format("%H:%M"),
                job.end_time.map(|end| end.format("%H:%M").to_string()).unwrap_or_else(|| "-".to_string()),
                job.travel_time.map(|hours| format!("{:.2}h", hours)).unwrap_or_else(|| "-".to_string()),
                job.travel_km.map(|km| format!("{:.1}km", km)).unwrap_or_else(|| "-".to_string()),
                job.fuel_cost.map(|cost| format!("${:.2}", cost)).unwrap_or_else(|| "-".to_string()),
                job.site_name(),
                job.work_summary.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Summary totals shown above the history table.
    pub fn totals(totals: &JobTotals) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL HOURS", "TOTAL DISTANCE", "TOTAL FUEL COST"]);
        table.add_row(row![
            format!("{:.2}h", totals.hours),
            format!("{:.1}km", totals.distance_km),
            format!("${:.2}", totals.fuel_cost)
        ]);
        table.printstd();

        Ok(())
    }

    /// Site registry table in registry order.
    pub fn sites(sites: &[Site]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "LAT", "LON", "FIRST VISITED"]);
        for site in sites {
            table.add_row(row![
                site.id,
                site.name,
                format!("{:.6}", site.lat),
                format!("{:.6}", site.lon),
                site.first_visited.format("%b %-d, %Y")
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Detail view of a single job.
    pub fn job(job: &Job) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", job.id]);
        table.add_row(row!["SITE", job.site_name()]);
        table.add_row(row!["STARTED", job.start_time.format("%b %-d, %Y %H:%M")]);
        if let Some(end) = job.end_time {
            table.add_row(row!["ENDED", end.format("%b %-d, %Y %H:%M")]);
        }
        if let Some(hours) = job.travel_time {
            table.add_row(row!["HOURS", format!("{:.2}", hours)]);
        }
        if let Some(km) = job.travel_km {
            table.add_row(row!["DISTANCE", format!("{:.1}km", km)]);
        }
        if let Some(cost) = job.fuel_cost {
            table.add_row(row!["FUEL COST", format!("${:.2}", cost)]);
        }
        if let Some(summary) = &job.work_summary {
            table.add_row(row!["SUMMARY", summary]);
        }
        table.printstd();

        Ok(())
    }

    /// Timesheet preview in template column order.
    pub fn timesheet(timesheet: &Timesheet) -> Result<()> {
        let mut table = Table::new();

        table.add_row(Row::new(COLUMNS.iter().map(|header| Cell::new(header)).collect()));
        for row in &timesheet.rows {
            table.add_row(Row::new(row.cells().iter().map(|cell| Cell::new(cell)).collect()));
        }
        table.printstd();

        Ok(())
    }
}
