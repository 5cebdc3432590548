//! Typed error kinds for the job lifecycle and persistence seams.
//!
//! Commands work with `anyhow::Result` and propagate with `?`; these variants
//! carry the failures that have a defined user-facing meaning. None of them
//! is fatal to the process and no automatic retry happens anywhere.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackError {
    /// No current coordinate could be resolved. Blocks starting a job and
    /// ending a job that has an associated site.
    #[error("Current location is unknown. Pass --lat/--lon, set LOGITRACK_LAT/LOGITRACK_LON or configure a home base with `logitrack init`")]
    LocationUnavailable,

    /// The end transition was requested while no job is active. Command
    /// gating makes this unreachable in practice; the lifecycle still
    /// checks it.
    #[error("No active job")]
    NoActiveJob,

    /// A start was requested while a job is already active.
    #[error("Job {0} is already active; end or delete it first")]
    JobAlreadyActive(i64),

    /// The remote store did not answer the startup probe. Triggers the
    /// one-time fallback to the local store for the rest of the session.
    #[error("Remote store unreachable: {0}")]
    PersistenceUnavailable(String),

    /// An individual insert or update failed after the backend was already
    /// chosen. Retryable by re-running the command; in-memory state is not
    /// rolled back.
    #[error("Write to the {store} store failed: {reason}")]
    PersistenceWriteFailed { store: &'static str, reason: String },
}
