use crate::db::db::Db;
use crate::db::sites;
use crate::libs::job::{Job, JobCompletion};
use crate::libs::site::Site;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SCHEMA_JOBS: &str = "CREATE TABLE IF NOT EXISTS jobs (
    id INTEGER PRIMARY KEY,
    site_id INTEGER REFERENCES sites (id),
    start_time TIMESTAMP NOT NULL,
    end_time TIMESTAMP,
    travel_km REAL,
    travel_time REAL,
    fuel_cost REAL,
    work_summary TEXT,
    created_at TIMESTAMP NOT NULL
);";
const SELECT_JOBS: &str = "SELECT j.id, j.site_id, j.start_time, j.end_time, j.travel_km, j.travel_time, j.fuel_cost, j.work_summary, j.created_at,
        s.id, s.name, s.lat, s.lon, s.first_visited
    FROM jobs j LEFT JOIN sites s ON s.id = j.site_id";
const ORDER_CREATED_DESC: &str = "ORDER BY j.created_at DESC, j.id DESC";
const WHERE_ACTIVE: &str = "WHERE j.end_time IS NULL";
const WHERE_ID: &str = "WHERE j.id = ?1";
const WHERE_CREATED_BETWEEN: &str = "WHERE j.created_at >= ?1 AND j.created_at <= ?2";
const INSERT_JOB: &str = "INSERT INTO jobs (site_id, start_time, created_at) VALUES (?1, ?2, ?3)";
const COMPLETE_JOB: &str = "UPDATE jobs SET end_time = ?1, travel_km = ?2, travel_time = ?3, fuel_cost = ?4, work_summary = ?5 WHERE id = ?6";
const DELETE_JOB: &str = "DELETE FROM jobs WHERE id = ?1";

pub struct Jobs {
    conn: Connection,
}

impl Jobs {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        // The join needs the sites schema in place even when no site was
        // ever stored.
        db.conn.execute(sites::SCHEMA_SITES, [])?;
        db.conn.execute(SCHEMA_JOBS, [])?;
        Ok(Jobs { conn: db.conn })
    }

    /// Creates a job in the active state, started now.
    pub fn insert(&mut self, site_id: Option<i64>, now: NaiveDateTime) -> Result<Job> {
        self.conn.execute(INSERT_JOB, params![site_id, now, now])?;
        let id = self.conn.last_insert_rowid();
        self.fetch_by_id(id)?.ok_or_else(|| anyhow::anyhow!("job {} vanished after insert", id))
    }

    /// All jobs with their sites joined, newest first.
    pub fn fetch(&mut self) -> Result<Vec<Job>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_JOBS, ORDER_CREATED_DESC))?;
        let job_iter = stmt.query_map([], map_job_row)?;
        let mut jobs = Vec::new();
        for job in job_iter {
            jobs.push(job?);
        }
        Ok(jobs)
    }

    /// Jobs created within the inclusive timestamp range, newest first.
    pub fn fetch_between(&mut self, from: NaiveDateTime, to: NaiveDateTime) -> Result<Vec<Job>> {
        let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_JOBS, WHERE_CREATED_BETWEEN, ORDER_CREATED_DESC))?;
        let job_iter = stmt.query_map(params![from, to], map_job_row)?;
        let mut jobs = Vec::new();
        for job in job_iter {
            jobs.push(job?);
        }
        Ok(jobs)
    }

    /// The job whose end timestamp is still unset, if any.
    pub fn active(&mut self) -> Result<Option<Job>> {
        let job = self
            .conn
            .query_row(&format!("{} {} {} LIMIT 1", SELECT_JOBS, WHERE_ACTIVE, ORDER_CREATED_DESC), [], map_job_row)
            .optional()?;
        Ok(job)
    }

    pub fn fetch_by_id(&mut self, id: i64) -> Result<Option<Job>> {
        let job = self.conn.query_row(&format!("{} {}", SELECT_JOBS, WHERE_ID), params![id], map_job_row).optional()?;
        Ok(job)
    }

    /// Writes the end timestamp and the derived fields as one UPDATE, so a
    /// concurrent reader never sees a partially ended job.
    pub fn complete(&mut self, id: i64, completion: &JobCompletion) -> Result<Job> {
        self.conn.execute(
            COMPLETE_JOB,
            params![
                completion.end_time,
                completion.travel_km,
                completion.travel_time,
                completion.fuel_cost,
                completion.work_summary,
                id
            ],
        )?;
        self.fetch_by_id(id)?.ok_or_else(|| anyhow::anyhow!("job {} vanished after update", id))
    }

    /// Removes a job in either state. Returns the number of deleted rows.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let deleted = self.conn.execute(DELETE_JOB, params![id])?;
        Ok(deleted)
    }
}

fn map_job_row(row: &Row<'_>) -> rusqlite::Result<Job> {
    let site = match row.get::<_, Option<i64>>(9)? {
        Some(site_id) => Some(Site {
            id: site_id,
            name: row.get(10)?,
            lat: row.get(11)?,
            lon: row.get(12)?,
            first_visited: row.get(13)?,
        }),
        None => None,
    };
    Ok(Job {
        id: row.get(0)?,
        site_id: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
        travel_km: row.get(4)?,
        travel_time: row.get(5)?,
        fuel_cost: row.get(6)?,
        work_summary: row.get(7)?,
        created_at: row.get(8)?,
        site,
    })
}
