//! Job lifecycle management.
//!
//! The tracker is the session context for the single active job: it holds
//! the store handle and the current-job reference, and owns the start, end
//! and delete transitions. At most one job is active at a time; the end
//! transition computes every derived field from one snapshot and commits
//! them together with the end timestamp as a single store update.

use crate::libs::config::FuelConfig;
use crate::libs::error::TrackError;
use crate::libs::formatter;
use crate::libs::geo::{self, Coordinates};
use crate::libs::job::{Job, JobCompletion};
use crate::libs::site::{self, Site};
use crate::libs::store::Store;
use anyhow::Result;
use chrono::Local;

pub struct Tracker {
    store: Store,
    current: Option<Job>,
}

impl Tracker {
    /// Builds the session context, restoring the active job from the store.
    pub async fn new(mut store: Store) -> Result<Self> {
        let current = store.active_job().await?;
        Ok(Tracker { store, current })
    }

    /// The active job, if any.
    pub fn current(&self) -> Option<&Job> {
        self.current.as_ref()
    }

    pub async fn sites(&mut self) -> Result<Vec<Site>> {
        self.store.fetch_sites().await
    }

    /// Registers a new site at the given location, first visited now.
    pub async fn create_site(&mut self, name: &str, location: Coordinates) -> Result<Site> {
        self.store.insert_site(name, location.lat, location.lon, Local::now().naive_local()).await
    }

    /// Starts a job at the current location.
    ///
    /// The site is resolved by proximity against the registry; when nothing
    /// is nearby and a name hint is given, a site is created on demand at
    /// the current location, otherwise the job starts without a site.
    /// Starting while another job is active is rejected.
    pub async fn start(&mut self, location: Coordinates, site_hint: Option<&str>) -> Result<Job> {
        if let Some(active) = &self.current {
            return Err(TrackError::JobAlreadyActive(active.id).into());
        }

        let sites = self.store.fetch_sites().await?;
        let resolved = site::resolve(location.lat, location.lon, &sites).cloned();
        let resolved = match (resolved, site_hint) {
            (Some(found), _) => Some(found),
            (None, Some(name)) => Some(self.create_site(name, location).await?),
            (None, None) => None,
        };

        let now = Local::now().naive_local();
        let job = self.store.insert_job(resolved.as_ref().map(|site| site.id), now).await?;
        self.current = Some(job.clone());
        Ok(job)
    }

    /// Ends the active job, computing the derived fields.
    ///
    /// Travel distance is the one-way distance from the end-time location
    /// to the job's site, doubled for the round trip; a job without a site
    /// travels 0 km and needs no location. Travel time equals the
    /// wall-clock duration of the job. The end timestamp and all three
    /// derived fields are committed as one atomic update; the current-job
    /// reference is cleared only after the store accepts the write.
    pub async fn end(&mut self, location: Option<Coordinates>, fuel: &FuelConfig, summary: &str) -> Result<Job> {
        let job = self.current.clone().ok_or(TrackError::NoActiveJob)?;

        let end_time = Local::now().naive_local();
        let travel_time = formatter::elapsed_hours(job.start_time, end_time);
        let travel_km = match &job.site {
            Some(site) => {
                let here = location.ok_or(TrackError::LocationUnavailable)?;
                geo::distance(here.lat, here.lon, site.lat, site.lon) * 2.0
            }
            None => 0.0,
        };
        let fuel_cost = geo::fuel_cost(travel_km, fuel.efficiency, fuel.price);

        let completion = JobCompletion {
            end_time,
            travel_km,
            travel_time,
            fuel_cost,
            work_summary: summary.to_string(),
        };
        let ended = self.store.complete_job(job.id, &completion).await?;
        self.current = None;
        Ok(ended)
    }

    /// Deletes a job in either state.
    ///
    /// Deleting the active job clears the current reference, so a
    /// subsequent start is accepted again. Returns the number of removed
    /// records.
    pub async fn delete(&mut self, job_id: i64) -> Result<usize> {
        let deleted = self.store.delete_job(job_id).await?;
        if self.current.as_ref().is_some_and(|job| job.id == job_id) {
            self.current = None;
        }
        Ok(deleted)
    }
}
