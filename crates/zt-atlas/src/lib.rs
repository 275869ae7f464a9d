//! `zt-atlas` — city registry, geodesic distance, and curated road data.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`geo`]     | `Coord`, haversine distance                             |
//! | [`city`]    | `City`, `CityAtlas`, `CityAtlasBuilder`                 |
//! | [`roads`]   | `RoadDistanceTable`, `RoadTableBuilder`, symmetry audit |
//! | [`dataset`] | embedded Zimbabwe registry + road matrix                |
//! | [`loader`]  | CSV loading for registries and road tables              |
//! | [`error`]   | `AtlasError`, `AtlasResult<T>`                          |
//!
//! Everything in this crate is read-only after construction: build an atlas
//! and a road table once at startup, then share references freely.
//! Concurrent readers never observe a write, so no locking is needed.

pub mod city;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod loader;
pub mod roads;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use city::{City, CityAtlas, CityAtlasBuilder};
pub use error::{AtlasError, AtlasResult};
pub use geo::{Coord, EARTH_RADIUS_KM, haversine_km};
pub use loader::{load_cities_csv, load_cities_reader, load_roads_csv, load_roads_reader};
pub use roads::{
    RoadDistanceTable, RoadTableBuilder, SYMMETRY_TOLERANCE_KM, SymmetryMismatch, SymmetryReport,
};
