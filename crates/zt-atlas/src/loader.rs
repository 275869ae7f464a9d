//! CSV loaders for city registries and road tables.
//!
//! # CSV formats
//!
//! Cities, one row per city:
//!
//! ```csv
//! name,latitude,longitude
//! Harare,-17.8292,31.0522
//! Bulawayo,-20.1594,28.5906
//! ```
//!
//! Road distances, one **directed** entry per row:
//!
//! ```csv
//! from,to,distance_km
//! Harare,Bulawayo,439
//! Bulawayo,Harare,439
//! ```
//!
//! Road files usually author both directions by hand.  Run
//! [`RoadDistanceTable::audit_symmetry`] after loading to catch rows that
//! disagree or appear in one direction only.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::city::{CityAtlas, CityAtlasBuilder};
use crate::error::{AtlasError, AtlasResult};
use crate::roads::{RoadDistanceTable, RoadTableBuilder};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CityRecord {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RoadRecord {
    from: String,
    to: String,
    distance_km: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`CityAtlas`] from a CSV file.
pub fn load_cities_csv(path: &Path) -> AtlasResult<CityAtlas> {
    let file = std::fs::File::open(path).map_err(AtlasError::Io)?;
    load_cities_reader(file)
}

/// Like [`load_cities_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_cities_reader<R: Read>(reader: R) -> AtlasResult<CityAtlas> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = CityAtlasBuilder::new();

    for result in csv_reader.deserialize::<CityRecord>() {
        let row = result.map_err(|e| AtlasError::Parse(e.to_string()))?;
        builder.add_city(row.name, row.latitude, row.longitude)?;
    }

    Ok(builder.build())
}

/// Load a [`RoadDistanceTable`] from a CSV file.
///
/// Every endpoint must already be registered in `atlas`; an unregistered
/// name fails the whole load.
pub fn load_roads_csv(path: &Path, atlas: &CityAtlas) -> AtlasResult<RoadDistanceTable> {
    let file = std::fs::File::open(path).map_err(AtlasError::Io)?;
    load_roads_reader(file, atlas)
}

/// Like [`load_roads_csv`] but accepts any `Read` source.
pub fn load_roads_reader<R: Read>(reader: R, atlas: &CityAtlas) -> AtlasResult<RoadDistanceTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = RoadTableBuilder::new(atlas);

    for result in csv_reader.deserialize::<RoadRecord>() {
        let row = result.map_err(|e| AtlasError::Parse(e.to_string()))?;
        builder.insert(&row.from, &row.to, row.distance_km)?;
    }

    Ok(builder.build())
}
