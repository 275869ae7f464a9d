//! `zt-trip` — distance resolution and trip cost estimation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`mode`]     | `DistanceMode`, `DistanceSource`                       |
//! | [`resolver`] | `resolve`, `resolve_km`, `ResolvedDistance`            |
//! | [`estimate`] | `TravelTime`, `travel_time`, `fuel_cost`, `TripPlanner`|
//! | [`error`]    | `TripError`, `TripResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the public types.      |
//!
//! Everything here is synchronous pure computation over the read-only
//! `zt-atlas` data: repeated calls with identical inputs produce identical
//! outputs, and concurrent callers need no coordination.

pub mod error;
pub mod estimate;
pub mod mode;
pub mod resolver;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TripError, TripResult};
pub use estimate::{TravelTime, TripEstimate, TripPlanner, TripQuery, fuel_cost, travel_time};
pub use mode::{DistanceMode, DistanceSource};
pub use resolver::{ResolvedDistance, resolve, resolve_km};
