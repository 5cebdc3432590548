//! Display implementation turning [`Message`] variants into user-facing text.
//!
//! All terminal wording lives here so commands stay free of string literals
//! and the text can be adjusted in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleFuel => "Fuel parameters".to_string(),
            Message::ConfigModuleRemote => "Remote store connection".to_string(),
            Message::ConfigModuleHome => "Home base location".to_string(),

            // === STORE MESSAGES ===
            Message::RemoteStoreUnavailable(err) => format!("{}; falling back to the local store for this session", err),
            Message::UsingLocalStore => "Using the local store".to_string(),

            // === JOB MESSAGES ===
            Message::JobStarted(id) => format!("Job {} started with no site nearby", id),
            Message::JobStartedAtSite(id, site) => format!("Job {} started at {}", id, site),
            Message::JobEnded(id) => format!("Job {} ended", id),
            Message::JobDeleted(id) => format!("Job {} deleted", id),
            Message::JobNotFound(id) => format!("Job {} not found", id),
            Message::NoActiveJob => "No active job".to_string(),
            Message::ActiveJobHeader(start) => format!("Current job, started at {}", start),
            Message::InvalidFuelEfficiency => "Fuel efficiency must be greater than zero".to_string(),

            // === SITE MESSAGES ===
            Message::SiteCreated(name) => format!("Site '{}' created", name),
            Message::NoSitesFound => "No sites recorded yet".to_string(),
            Message::SitesHeader => "Known sites".to_string(),

            // === HISTORY MESSAGES ===
            Message::HistoryHeader(filter) => format!("Job history ({})", filter),
            Message::NoJobsFound => "No jobs found for the selected period".to_string(),

            // === REPORT MESSAGES ===
            Message::TimesheetHeader(range) => format!("Timesheet {}", range),
            Message::TimesheetJobCount(count) => format!("Found {} jobs for the selected date range", count),
            Message::NoJobsInRange => "No jobs found for the selected date range".to_string(),
            Message::ReportRangeRequired => "Provide --from and --to dates, or --bi-monthly".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptFuelEfficiency => "Fuel efficiency (km/L)".to_string(),
            Message::PromptFuelPrice => "Fuel price (currency per liter)".to_string(),
            Message::PromptRemoteUrl => "Remote store URL".to_string(),
            Message::PromptRemoteKey => "Remote store API key".to_string(),
            Message::PromptHomeLat => "Home base latitude".to_string(),
            Message::PromptHomeLon => "Home base longitude".to_string(),
            Message::PromptWorkSummary => "Work summary".to_string(),
            Message::PromptConfirmDeleteJob(id) => format!("Delete job {}?", id),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", message)
    }
}
