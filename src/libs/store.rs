//! Persistence backend selection and dispatch.
//!
//! The backend is chosen exactly once per session: when a remote store is
//! configured it is probed, and a failed probe degrades the session to the
//! local store with a user-visible notice. The decision is never
//! re-evaluated mid-session, and there is no synchronization between the
//! two stores afterwards.

use crate::api::remote::{RemoteConfig, RemoteStore};
use crate::db::LocalStore;
use crate::libs::config::Config;
use crate::libs::error::TrackError;
use crate::libs::job::{Job, JobCompletion};
use crate::libs::messages::Message;
use crate::libs::site::Site;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::NaiveDateTime;

/// The persistence backend chosen for this session.
pub enum Store {
    Remote(RemoteStore),
    Local(LocalStore),
}

impl Store {
    /// Opens the session backend.
    ///
    /// Remote configuration comes from the config file or, failing that,
    /// the `LOGITRACK_API_URL`/`LOGITRACK_API_KEY` environment.
    pub async fn open(config: &Config) -> Result<Self> {
        match config.remote.clone().or_else(RemoteConfig::from_env) {
            Some(remote_config) => {
                let remote = RemoteStore::new(&remote_config);
                match remote.probe().await {
                    Ok(()) => Ok(Store::Remote(remote)),
                    Err(err) => {
                        let reason = TrackError::PersistenceUnavailable(err.to_string());
                        msg_warning!(Message::RemoteStoreUnavailable(reason.to_string()));
                        Ok(Store::Local(LocalStore::new()?))
                    }
                }
            }
            None => {
                msg_debug!(Message::UsingLocalStore);
                Ok(Store::Local(LocalStore::new()?))
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Store::Remote(_) => "remote",
            Store::Local(_) => "local",
        }
    }

    fn write_error(&self, err: anyhow::Error) -> anyhow::Error {
        TrackError::PersistenceWriteFailed {
            store: self.name(),
            reason: err.to_string(),
        }
        .into()
    }

    /// All sites in registry order, most recently created first.
    pub async fn fetch_sites(&mut self) -> Result<Vec<Site>> {
        match self {
            Store::Remote(remote) => remote.fetch_sites().await,
            Store::Local(local) => local.fetch_sites(),
        }
    }

    pub async fn insert_site(&mut self, name: &str, lat: f64, lon: f64, first_visited: NaiveDateTime) -> Result<Site> {
        let result = match self {
            Store::Remote(remote) => remote.insert_site(name, lat, lon, first_visited).await,
            Store::Local(local) => local.insert_site(name, lat, lon, first_visited),
        };
        result.map_err(|err| self.write_error(err))
    }

    /// All jobs with their sites joined, newest first.
    pub async fn fetch_jobs(&mut self) -> Result<Vec<Job>> {
        match self {
            Store::Remote(remote) => remote.fetch_jobs().await,
            Store::Local(local) => local.fetch_jobs(),
        }
    }

    /// Jobs created within the inclusive timestamp range, newest first.
    pub async fn fetch_jobs_between(&mut self, from: NaiveDateTime, to: NaiveDateTime) -> Result<Vec<Job>> {
        match self {
            Store::Remote(remote) => remote.fetch_jobs_between(from, to).await,
            Store::Local(local) => local.fetch_jobs_between(from, to),
        }
    }

    pub async fn active_job(&mut self) -> Result<Option<Job>> {
        match self {
            Store::Remote(remote) => remote.active_job().await,
            Store::Local(local) => local.active_job(),
        }
    }

    pub async fn insert_job(&mut self, site_id: Option<i64>, now: NaiveDateTime) -> Result<Job> {
        let result = match self {
            Store::Remote(remote) => remote.insert_job(site_id, now).await,
            Store::Local(local) => local.insert_job(site_id, now),
        };
        result.map_err(|err| self.write_error(err))
    }

    pub async fn complete_job(&mut self, id: i64, completion: &JobCompletion) -> Result<Job> {
        let result = match self {
            Store::Remote(remote) => remote.complete_job(id, completion).await,
            Store::Local(local) => local.complete_job(id, completion),
        };
        result.map_err(|err| self.write_error(err))
    }

    /// Removes a job by id. Returns the number of removed records.
    pub async fn delete_job(&mut self, id: i64) -> Result<usize> {
        let result = match self {
            Store::Remote(remote) => remote.delete_job(id).await,
            Store::Local(local) => local.delete_job(id),
        };
        result.map_err(|err| self.write_error(err))
    }
}
