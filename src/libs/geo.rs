//! Great-circle geometry and fuel cost arithmetic.
//!
//! Pure helpers shared by the job lifecycle and the site registry. Distances
//! are expressed in kilometers, coordinates in WGS-84 degrees.

/// Mean Earth radius in kilometers used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic point in WGS-84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Distance in kilometers from this point to another.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        distance(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Great-circle distance between two points in kilometers.
///
/// Haversine formula. Total over all inputs: identical points yield 0 and
/// the result is symmetric in the two coordinate pairs.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2) + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Fuel cost for a distance given efficiency (km per liter) and price
/// (currency per liter).
///
/// Performs no validation; callers must reject a non-positive efficiency
/// before invoking, otherwise the result is infinite or NaN.
pub fn fuel_cost(distance_km: f64, efficiency: f64, price: f64) -> f64 {
    (distance_km / efficiency) * price
}
