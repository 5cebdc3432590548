//! HTTP client for the hosted persistence service.
//!
//! The service exposes the `sites` and `jobs` collections through a generic
//! REST interface: insert returning the stored record, ordered selects,
//! filtered selects with an embedded site join, update by id and delete by
//! id. Requests carry the project API key both as the `apikey` header and
//! as a bearer token.
//!
//! Wire timestamps are strings; parsing accepts both timezone-qualified
//! RFC 3339 values (converted to local time) and bare local timestamps.

use crate::libs::config::ConfigModule;
use crate::libs::job::{Job, JobCompletion};
use crate::libs::messages::Message;
use crate::libs::site::Site;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDateTime};
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION},
    Client,
};
use serde::{Deserialize, Serialize};

const SITES_TABLE: &str = "sites";
const JOBS_TABLE: &str = "jobs";
/// Select expression embedding each job's site record.
const JOB_SELECT: &str = "*,site:sites(*)";
const PREFER_REPRESENTATION: &str = "return=representation";

/// Connection parameters for the hosted persistence service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RemoteConfig {
    /// Base project URL, e.g. `https://project.example.co`.
    pub api_url: String,
    /// Project API key sent with every request.
    pub api_key: String,
}

impl RemoteConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "remote".to_string(),
            name: "Remote store".to_string(),
        }
    }

    /// Interactive setup prompts, pre-filled from the existing values.
    pub fn init(existing: &Option<RemoteConfig>) -> Result<Self> {
        let default = existing.clone().unwrap_or(RemoteConfig {
            api_url: "".to_string(),
            api_key: "".to_string(),
        });
        crate::msg_print!(Message::ConfigModuleRemote);
        Ok(RemoteConfig {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRemoteUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
            api_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRemoteKey.to_string())
                .default(default.api_key)
                .interact_text()?,
        })
    }

    /// Connection parameters from the environment, when both are set.
    pub fn from_env() -> Option<Self> {
        let api_url = std::env::var("LOGITRACK_API_URL").ok()?;
        let api_key = std::env::var("LOGITRACK_API_KEY").ok()?;
        Some(RemoteConfig { api_url, api_key })
    }
}

#[derive(Debug, Serialize)]
struct NewSite<'a> {
    name: &'a str,
    lat: f64,
    lon: f64,
    first_visited: String,
}

#[derive(Debug, Deserialize)]
struct SiteRecord {
    id: i64,
    name: String,
    lat: f64,
    lon: f64,
    first_visited: String,
}

impl SiteRecord {
    fn into_site(self) -> Result<Site> {
        Ok(Site {
            id: self.id,
            name: self.name,
            lat: self.lat,
            lon: self.lon,
            first_visited: parse_timestamp(&self.first_visited)?,
        })
    }
}

#[derive(Debug, Serialize)]
struct NewJob {
    site_id: Option<i64>,
    start_time: String,
    created_at: String,
}

#[derive(Debug, Serialize)]
struct CompletionRecord<'a> {
    end_time: String,
    travel_km: f64,
    travel_time: f64,
    fuel_cost: f64,
    work_summary: &'a str,
}

#[derive(Debug, Deserialize)]
struct JobRecord {
    id: i64,
    site_id: Option<i64>,
    start_time: String,
    end_time: Option<String>,
    travel_km: Option<f64>,
    travel_time: Option<f64>,
    fuel_cost: Option<f64>,
    work_summary: Option<String>,
    created_at: String,
    #[serde(default)]
    site: Option<SiteRecord>,
}

impl JobRecord {
    fn into_job(self) -> Result<Job> {
        Ok(Job {
            id: self.id,
            site_id: self.site_id,
            start_time: parse_timestamp(&self.start_time)?,
            end_time: self.end_time.as_deref().map(parse_timestamp).transpose()?,
            travel_km: self.travel_km,
            travel_time: self.travel_time,
            fuel_cost: self.fuel_cost,
            work_summary: self.work_summary,
            created_at: parse_timestamp(&self.created_at)?,
            site: self.site.map(SiteRecord::into_site).transpose()?,
        })
    }
}

/// Client over the remote `sites` and `jobs` collections.
pub struct RemoteStore {
    client: Client,
    config: RemoteConfig,
}

impl RemoteStore {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.api_url.trim_end_matches('/'), table)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("apikey"), HeaderValue::from_str(&self.config.api_key)?);
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", self.config.api_key))?);
        Ok(headers)
    }

    /// One-shot availability check run at session start.
    pub async fn probe(&self) -> Result<()> {
        self.client
            .get(self.table_url(SITES_TABLE))
            .headers(self.headers()?)
            .query(&[("limit", "1")])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn fetch_sites(&self) -> Result<Vec<Site>> {
        let records: Vec<SiteRecord> = self
            .client
            .get(self.table_url(SITES_TABLE))
            .headers(self.headers()?)
            .query(&[("order", "first_visited.desc")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        records.into_iter().map(SiteRecord::into_site).collect()
    }

    pub async fn insert_site(&self, name: &str, lat: f64, lon: f64, first_visited: NaiveDateTime) -> Result<Site> {
        let record = NewSite {
            name,
            lat,
            lon,
            first_visited: encode_timestamp(first_visited),
        };
        let mut stored: Vec<SiteRecord> = self
            .client
            .post(self.table_url(SITES_TABLE))
            .headers(self.headers()?)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&record)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        stored
            .pop()
            .ok_or_else(|| anyhow!("remote store returned no record for the inserted site"))?
            .into_site()
    }

    pub async fn fetch_jobs(&self) -> Result<Vec<Job>> {
        let records: Vec<JobRecord> = self
            .client
            .get(self.table_url(JOBS_TABLE))
            .headers(self.headers()?)
            .query(&[("select", JOB_SELECT), ("order", "created_at.desc")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        records.into_iter().map(JobRecord::into_job).collect()
    }

    /// Jobs created within the inclusive timestamp range, sites joined.
    pub async fn fetch_jobs_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> Result<Vec<Job>> {
        let records: Vec<JobRecord> = self
            .client
            .get(self.table_url(JOBS_TABLE))
            .headers(self.headers()?)
            .query(&[
                ("select", JOB_SELECT.to_string()),
                ("created_at", format!("gte.{}", encode_timestamp(from))),
                ("created_at", format!("lte.{}", encode_timestamp(to))),
                ("order", "created_at.desc".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        records.into_iter().map(JobRecord::into_job).collect()
    }

    pub async fn active_job(&self) -> Result<Option<Job>> {
        let records: Vec<JobRecord> = self
            .client
            .get(self.table_url(JOBS_TABLE))
            .headers(self.headers()?)
            .query(&[
                ("select", JOB_SELECT),
                ("end_time", "is.null"),
                ("order", "created_at.desc"),
                ("limit", "1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        records.into_iter().next().map(JobRecord::into_job).transpose()
    }

    pub async fn insert_job(&self, site_id: Option<i64>, now: NaiveDateTime) -> Result<Job> {
        let record = NewJob {
            site_id,
            start_time: encode_timestamp(now),
            created_at: encode_timestamp(now),
        };
        let mut stored: Vec<JobRecord> = self
            .client
            .post(self.table_url(JOBS_TABLE))
            .headers(self.headers()?)
            .header("Prefer", PREFER_REPRESENTATION)
            .query(&[("select", JOB_SELECT)])
            .json(&record)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        stored
            .pop()
            .ok_or_else(|| anyhow!("remote store returned no record for the inserted job"))?
            .into_job()
    }

    /// Commits the whole end-of-job field set as one update.
    pub async fn complete_job(&self, id: i64, completion: &JobCompletion) -> Result<Job> {
        let record = CompletionRecord {
            end_time: encode_timestamp(completion.end_time),
            travel_km: completion.travel_km,
            travel_time: completion.travel_time,
            fuel_cost: completion.fuel_cost,
            work_summary: &completion.work_summary,
        };
        let mut stored: Vec<JobRecord> = self
            .client
            .patch(self.table_url(JOBS_TABLE))
            .headers(self.headers()?)
            .header("Prefer", PREFER_REPRESENTATION)
            .query(&[("id", format!("eq.{}", id).as_str()), ("select", JOB_SELECT)])
            .json(&record)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        stored.pop().ok_or_else(|| anyhow!("job {} not found on the remote store", id))?.into_job()
    }

    /// Deletes a job by id. Returns the number of removed records.
    pub async fn delete_job(&self, id: i64) -> Result<usize> {
        let removed: Vec<JobRecord> = self
            .client
            .delete(self.table_url(JOBS_TABLE))
            .headers(self.headers()?)
            .header("Prefer", PREFER_REPRESENTATION)
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(removed.len())
    }
}

fn encode_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Local).naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(timestamp);
        }
    }
    Err(anyhow!("unrecognized timestamp '{}'", value))
}
