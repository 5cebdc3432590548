//! Local persistence layer built on SQLite.
//!
//! Used as the durable store when no remote store is configured or when the
//! remote store is unreachable at session start. Each table is wrapped in a
//! struct owning its own connection, with the schema created on first use.

pub mod db;
pub mod jobs;
pub mod sites;

use crate::libs::job::{Job, JobCompletion};
use crate::libs::site::Site;
use anyhow::Result;
use chrono::NaiveDateTime;

/// Handle over both local tables, mirroring the remote store surface.
pub struct LocalStore {
    sites: sites::Sites,
    jobs: jobs::Jobs,
}

impl LocalStore {
    pub fn new() -> Result<Self> {
        Ok(LocalStore {
            sites: sites::Sites::new()?,
            jobs: jobs::Jobs::new()?,
        })
    }

    pub fn fetch_sites(&mut self) -> Result<Vec<Site>> {
        self.sites.fetch()
    }

    pub fn insert_site(&mut self, name: &str, lat: f64, lon: f64, first_visited: NaiveDateTime) -> Result<Site> {
        self.sites.insert(name, lat, lon, first_visited)
    }

    pub fn fetch_jobs(&mut self) -> Result<Vec<Job>> {
        self.jobs.fetch()
    }

    pub fn fetch_jobs_between(&mut self, from: NaiveDateTime, to: NaiveDateTime) -> Result<Vec<Job>> {
        self.jobs.fetch_between(from, to)
    }

    pub fn active_job(&mut self) -> Result<Option<Job>> {
        self.jobs.active()
    }

    pub fn insert_job(&mut self, site_id: Option<i64>, now: NaiveDateTime) -> Result<Job> {
        self.jobs.insert(site_id, now)
    }

    pub fn complete_job(&mut self, id: i64, completion: &JobCompletion) -> Result<Job> {
        self.jobs.complete(id, completion)
    }

    pub fn delete_job(&mut self, id: i64) -> Result<usize> {
        self.jobs.delete(id)
    }
}
