//! Travel-time and fuel-cost estimation.
//!
//! Pure arithmetic over a resolved distance.  Values keep full double
//! precision; rounding (two-decimal currency, whole minutes on screen) is
//! the presentation layer's concern.  The estimator holds no vehicle
//! state: efficiency presets such as "hybrid" are caller data and arrive
//! here as a plain km-per-litre number.

use std::fmt;

use zt_atlas::{CityAtlas, RoadDistanceTable};

use crate::error::{TripError, TripResult};
use crate::mode::{DistanceMode, DistanceSource};
use crate::resolver::{ResolvedDistance, resolve};

// ── TravelTime ────────────────────────────────────────────────────────────────

/// A duration split into whole hours and minutes.
///
/// Both fields are always populated; the zero-component collapse ("6h",
/// "45min") is applied by the `Display` impl only.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelTime {
    pub hours: u64,
    pub minutes: u32,
}

impl TravelTime {
    /// Split fractional hours into whole hours and rounded minutes.
    ///
    /// Rounding can push minutes to 60 (e.g. 1.999 h); the carry is folded
    /// into `hours` so `minutes` stays below 60.
    fn from_hours(total_hours: f64) -> Self {
        let hours = total_hours.floor();
        let minutes = ((total_hours - hours) * 60.0).round();
        if minutes >= 60.0 {
            Self {
                hours: hours as u64 + 1,
                minutes: 0,
            }
        } else {
            Self {
                hours: hours as u64,
                minutes: minutes as u32,
            }
        }
    }

    /// Total whole minutes, handy for comparisons and sorting.
    pub fn total_minutes(self) -> u64 {
        self.hours * 60 + self.minutes as u64
    }
}

impl fmt::Display for TravelTime {
    /// Collapses zero components: "6h 16min", "6h", "16min", "0min".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.hours, self.minutes) {
            (0, m) => write!(f, "{m}min"),
            (h, 0) => write!(f, "{h}h"),
            (h, m) => write!(f, "{h}h {m}min"),
        }
    }
}

// ── Estimator functions ───────────────────────────────────────────────────────

/// Estimated travel time for `distance_km` at `avg_speed_kmh`.
///
/// The speed must be a positive finite number; anything else is rejected
/// up front rather than coerced to a default.
pub fn travel_time(distance_km: f64, avg_speed_kmh: f64) -> TripResult<TravelTime> {
    if !avg_speed_kmh.is_finite() || avg_speed_kmh <= 0.0 {
        return Err(TripError::NonPositiveSpeed(avg_speed_kmh));
    }
    Ok(TravelTime::from_hours(distance_km / avg_speed_kmh))
}

/// Estimated fuel cost: litres needed at `km_per_liter`, priced at
/// `price_per_liter`.  Full precision; no currency rounding here.
pub fn fuel_cost(distance_km: f64, price_per_liter: f64, km_per_liter: f64) -> TripResult<f64> {
    if !km_per_liter.is_finite() || km_per_liter <= 0.0 {
        return Err(TripError::NonPositiveEfficiency(km_per_liter));
    }
    if !price_per_liter.is_finite() || price_per_liter < 0.0 {
        return Err(TripError::NegativeFuelPrice(price_per_liter));
    }
    Ok(distance_km / km_per_liter * price_per_liter)
}

// ── TripPlanner ───────────────────────────────────────────────────────────────

/// One trip question, parameters supplied by the caller in full.
#[derive(Copy, Clone, Debug)]
pub struct TripQuery<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub mode: DistanceMode,
    /// km/h, must be positive.
    pub avg_speed_kmh: f64,
    /// Currency units per litre, must be non-negative.
    pub fuel_price_per_liter: f64,
    /// km per litre, must be positive.
    pub fuel_km_per_liter: f64,
}

/// A complete estimate: resolved distance plus derived time and cost.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TripEstimate {
    pub distance_km: f64,
    pub source: DistanceSource,
    pub travel_time: TravelTime,
    pub fuel_cost: f64,
}

/// One-call façade over the resolver and estimator, borrowed over the
/// immutable data built at startup.
pub struct TripPlanner<'a> {
    pub atlas: &'a CityAtlas,
    pub roads: &'a RoadDistanceTable,
}

impl<'a> TripPlanner<'a> {
    pub fn new(atlas: &'a CityAtlas, roads: &'a RoadDistanceTable) -> Self {
        Self { atlas, roads }
    }

    /// Resolve the query's distance and derive travel time and fuel cost.
    ///
    /// Validation order: city names, then speed, then fuel inputs; the
    /// first invalid input wins.
    pub fn estimate(&self, query: &TripQuery<'_>) -> TripResult<TripEstimate> {
        let ResolvedDistance { km, source } = resolve(
            self.atlas,
            self.roads,
            query.origin,
            query.destination,
            query.mode,
        )?;
        let time = travel_time(km, query.avg_speed_kmh)?;
        let cost = fuel_cost(km, query.fuel_price_per_liter, query.fuel_km_per_liter)?;

        Ok(TripEstimate {
            distance_km: km,
            source,
            travel_time: time,
            fuel_cost: cost,
        })
    }

    /// Distance-only resolution, for callers that do their own math.
    pub fn distance(&self, from: &str, to: &str, mode: DistanceMode) -> TripResult<ResolvedDistance> {
        resolve(self.atlas, self.roads, from, to, mode)
    }
}
