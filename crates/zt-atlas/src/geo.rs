//! Geographic coordinate type and great-circle distance.
//!
//! `Coord` stores `f64` (double-precision) latitude/longitude in decimal
//! degrees, southern and western hemispheres negative.  Distance math keeps
//! full double precision end to end; rounding to whole kilometres is a
//! presentation decision left to callers.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres (spherical model; no ellipsoid).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate in signed decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Identical coordinates reduce to `atan2(0, 1)` with no floating-point
    /// residue, so the result is exactly `0.0` and downstream "same place"
    /// checks can compare against zero.
    pub fn distance_km(self, other: Coord) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// Free-function form of [`Coord::distance_km`] for callers holding raw
/// degree pairs.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    Coord::new(lat1, lon1).distance_km(Coord::new(lat2, lon2))
}
