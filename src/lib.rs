//! # LogiTrack - field-service job tracking
//!
//! A command-line utility for tracking on-site work jobs at geolocated
//! sites, computing travel distance and fuel cost, and exporting
//! spreadsheet timesheets.
//!
//! ## Features
//!
//! - **Job Lifecycle**: Start and end timestamped jobs with a single active
//!   job per session
//! - **Site Registry**: Proximity lookup of known sites and on-demand site
//!   creation at the current location
//! - **Travel Accounting**: Round-trip distance and fuel cost computed once
//!   at job end
//! - **Job History**: Date-range filters with aggregate totals
//! - **Timesheet Reports**: Template-compatible tables exported to Excel
//!   or CSV
//! - **Storage**: Hosted remote store with a per-session local SQLite
//!   fallback
//!
//! ## Usage
//!
//! ```rust,no_run
//! use logitrack::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
