//! Timesheet export to spreadsheet files.
//!
//! Writes a built [`Timesheet`] to disk as an Excel workbook or a CSV file.
//! The default file name is derived from the selected date range so the
//! exported file matches the naming convention of the report template it is
//! imported into.

use crate::libs::messages::Message;
use crate::libs::report::{Timesheet, COLUMNS};
use crate::msg_success;
use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook};
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Excel workbook with a formatted header row.
    Excel,
    /// Plain CSV for universal compatibility.
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Writes timesheets to files in the selected format.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to the timesheet's
    /// range-derived default file name in the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, timesheet: &Timesheet) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(timesheet.file_name(format.extension())));
        Self { format, output_path }
    }

    /// Writes the timesheet and reports the output location.
    pub fn export(&self, timesheet: &Timesheet) -> Result<()> {
        match self.format {
            ExportFormat::Excel => self.export_excel(timesheet)?,
            ExportFormat::Csv => self.export_csv(timesheet)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_excel(&self, timesheet: &Timesheet) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet().set_name("Timesheet")?;

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, header) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (row, timesheet_row) in timesheet.rows.iter().enumerate() {
            for (col, cell) in timesheet_row.cells().iter().enumerate() {
                worksheet.write_string(row as u32 + 1, col as u16, *cell)?;
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_csv(&self, timesheet: &Timesheet) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(COLUMNS)?;
        for row in &timesheet.rows {
            wtr.write_record(row.cells())?;
        }

        wtr.flush()?;
        Ok(())
    }
}
