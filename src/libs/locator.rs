//! One-shot resolution of the current coordinate.
//!
//! The location "sensor" of a terminal application is whatever the caller
//! can supply: explicit CLI arguments win, then the environment (loaded
//! from `.env` at startup), then the configured home base. When none of
//! those yields a coordinate the resolution fails, which blocks starting a
//! job.

use crate::libs::config::Config;
use crate::libs::error::TrackError;
use crate::libs::geo::Coordinates;
use std::env;

pub const ENV_LAT: &str = "LOGITRACK_LAT";
pub const ENV_LON: &str = "LOGITRACK_LON";

/// Combines the optional `--lat`/`--lon` argument pair into a coordinate.
///
/// Both halves must be present; a lone latitude or longitude is ignored.
pub fn from_args(lat: Option<f64>, lon: Option<f64>) -> Option<Coordinates> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
        _ => None,
    }
}

/// Resolves the current coordinate from arguments, environment or config.
pub fn resolve(cli: Option<Coordinates>, config: &Config) -> Result<Coordinates, TrackError> {
    if let Some(coordinates) = cli {
        return Ok(coordinates);
    }

    if let Some(coordinates) = from_env() {
        return Ok(coordinates);
    }

    if let Some(home) = &config.home {
        return Ok(Coordinates::new(home.lat, home.lon));
    }

    Err(TrackError::LocationUnavailable)
}

fn from_env() -> Option<Coordinates> {
    let lat = env::var(ENV_LAT).ok()?.parse().ok()?;
    let lon = env::var(ENV_LON).ok()?.parse().ok()?;
    Some(Coordinates::new(lat, lon))
}
