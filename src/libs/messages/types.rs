#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleFuel,
    ConfigModuleRemote,
    ConfigModuleHome,

    // === STORE MESSAGES ===
    RemoteStoreUnavailable(String), // probe error
    UsingLocalStore,

    // === JOB MESSAGES ===
    JobStarted(i64),
    JobStartedAtSite(i64, String), // id, site name
    JobEnded(i64),
    JobDeleted(i64),
    JobNotFound(i64),
    NoActiveJob,
    ActiveJobHeader(String), // start clock time
    InvalidFuelEfficiency,

    // === SITE MESSAGES ===
    SiteCreated(String),
    NoSitesFound,
    SitesHeader,

    // === HISTORY MESSAGES ===
    HistoryHeader(String), // filter label
    NoJobsFound,

    // === REPORT MESSAGES ===
    TimesheetHeader(String),  // range label
    TimesheetJobCount(usize), // jobs in range
    NoJobsInRange,
    ReportRangeRequired,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // output path

    // === PROMPTS ===
    PromptSelectModules,
    PromptFuelEfficiency,
    PromptFuelPrice,
    PromptRemoteUrl,
    PromptRemoteKey,
    PromptHomeLat,
    PromptHomeLon,
    PromptWorkSummary,
    PromptConfirmDeleteJob(i64),

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
