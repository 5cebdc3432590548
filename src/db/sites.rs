use crate::db::db::Db;
use crate::libs::site::Site;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

pub(crate) const SCHEMA_SITES: &str = "CREATE TABLE IF NOT EXISTS sites (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    lat REAL NOT NULL,
    lon REAL NOT NULL,
    first_visited TIMESTAMP NOT NULL
);";
const INSERT_SITE: &str = "INSERT INTO sites (name, lat, lon, first_visited) VALUES (?1, ?2, ?3, ?4)";
const SELECT_SITES: &str = "SELECT id, name, lat, lon, first_visited FROM sites ORDER BY first_visited DESC, id DESC";

pub struct Sites {
    conn: Connection,
}

impl Sites {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_SITES, [])?;
        Ok(Sites { conn: db.conn })
    }

    pub fn insert(&mut self, name: &str, lat: f64, lon: f64, first_visited: NaiveDateTime) -> Result<Site> {
        self.conn.execute(INSERT_SITE, params![name, lat, lon, first_visited])?;
        Ok(Site {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            lat,
            lon,
            first_visited,
        })
    }

    /// All sites, most recently created first.
    pub fn fetch(&mut self) -> Result<Vec<Site>> {
        let mut stmt = self.conn.prepare(SELECT_SITES)?;
        let site_iter = stmt.query_map([], |row| {
            Ok(Site {
                id: row.get(0)?,
                name: row.get(1)?,
                lat: row.get(2)?,
                lon: row.get(3)?,
                first_visited: row.get(4)?,
            })
        })?;
        let mut sites = Vec::new();
        for site in site_iter {
            sites.push(site?);
        }
        Ok(sites)
    }
}
