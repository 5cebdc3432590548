//! Site records and the proximity lookup over the registry.

use crate::libs::geo;
use chrono::NaiveDateTime;

/// Radius in kilometers within which an existing site is considered "here".
pub const PROXIMITY_RADIUS_KM: f64 = 0.5;

/// A named, geolocated place a user has visited.
///
/// Coordinates are immutable once the record exists; there is no edit or
/// delete operation for sites.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub first_visited: NaiveDateTime,
}

/// Every site within `radius_km` of the given point, in registry order.
///
/// The registry keeps sites most-recently-created first and this scan
/// preserves that order; results are NOT sorted by distance.
pub fn within_radius(lat: f64, lon: f64, sites: &[Site], radius_km: f64) -> Vec<&Site> {
    sites.iter().filter(|site| geo::distance(lat, lon, site.lat, site.lon) <= radius_km).collect()
}

/// The site a new job at this point should attach to, if any.
///
/// First registry-order match within [`PROXIMITY_RADIUS_KM`]. A linear scan
/// is fine at the expected registry size.
pub fn resolve(lat: f64, lon: f64, sites: &[Site]) -> Option<&Site> {
    within_radius(lat, lon, sites, PROXIMITY_RADIUS_KM).into_iter().next()
}
