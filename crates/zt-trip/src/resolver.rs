//! Distance resolution: curated road table first, geodesic fallback.
//!
//! # Dispatch
//!
//! 1. Both names must be registered — an unknown name is an error even
//!    when origin and destination are spelled the same.
//! 2. Same city → `0.0` in either mode.
//! 3. [`DistanceMode::Road`] consults the ordered `(from, to)` table entry
//!    and falls back to the geodesic value when the pair has no entry.
//!    The fallback is silent: a missing entry is expected table shape, not
//!    a failure.
//! 4. [`DistanceMode::Straight`] always computes the geodesic value.

use zt_atlas::{CityAtlas, RoadDistanceTable};

use crate::error::{TripError, TripResult};
use crate::mode::{DistanceMode, DistanceSource};

/// A resolved distance and the population that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedDistance {
    pub km: f64,
    pub source: DistanceSource,
}

/// Resolve the distance between two registered cities.
pub fn resolve(
    atlas: &CityAtlas,
    roads: &RoadDistanceTable,
    from: &str,
    to: &str,
    mode: DistanceMode,
) -> TripResult<ResolvedDistance> {
    let origin = atlas
        .find(from)
        .ok_or_else(|| TripError::UnknownCity(from.to_owned()))?;
    let dest = atlas
        .find(to)
        .ok_or_else(|| TripError::UnknownCity(to.to_owned()))?;

    // Same registry entry: zero in every mode.  The geodesic of identical
    // coordinates is exactly zero, so the source label stays truthful.
    if from == to {
        return Ok(ResolvedDistance {
            km: 0.0,
            source: DistanceSource::Geodesic,
        });
    }

    if mode == DistanceMode::Road {
        if let Some(km) = roads.get(from, to) {
            return Ok(ResolvedDistance {
                km,
                source: DistanceSource::RoadTable,
            });
        }
    }

    Ok(ResolvedDistance {
        km: origin.coord.distance_km(dest.coord),
        source: DistanceSource::Geodesic,
    })
}

/// Convenience wrapper around [`resolve`] returning the bare kilometre
/// value.
pub fn resolve_km(
    atlas: &CityAtlas,
    roads: &RoadDistanceTable,
    from: &str,
    to: &str,
    mode: DistanceMode,
) -> TripResult<f64> {
    resolve(atlas, roads, from, to, mode).map(|r| r.km)
}
