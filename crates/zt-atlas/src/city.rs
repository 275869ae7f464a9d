//! City registry: named coordinates with exact-name lookup and spatial
//! queries.
//!
//! # Lookup contract
//!
//! Names are the public key — exact, case-sensitive match, no fuzzy
//! normalization ("Victoria Falls" resolves, "victoria falls" does not).
//! Selection UIs are expected to offer registered names only; a `find`
//! miss is a caller bug that surfaces as an unknown-city error one layer
//! up.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `[lat, lon]` to the nearest registered
//! city.  Used to suggest a starting point from a device location.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{AtlasError, AtlasResult};
use crate::geo::Coord;

// ── City ──────────────────────────────────────────────────────────────────────

/// A registered location: unique name plus decimal-degree coordinate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub coord: Coord,
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the spatial index: a 2-D `[lat, lon]` point with the
/// city's position in the registry vector.
#[derive(Clone, Debug)]
struct CityEntry {
    point: [f64; 2], // [lat, lon]
    index: usize,
}

impl RTreeObject for CityEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CityEntry {
    /// Squared Euclidean distance in lat/lon space.  Sufficient for
    /// nearest-city ranking across a single country's latitude band.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── CityAtlas ─────────────────────────────────────────────────────────────────

/// Immutable registry of known cities.
///
/// Construction goes through [`CityAtlasBuilder`]; after `build()` the
/// atlas never changes, so shared references are safe across threads with
/// no locking.
#[derive(Debug)]
pub struct CityAtlas {
    cities: Vec<City>,
    by_name: FxHashMap<String, usize>,
    spatial_idx: RTree<CityEntry>,
}

impl CityAtlas {
    /// Exact, case-sensitive lookup by registered name.
    pub fn find(&self, name: &str) -> Option<&City> {
        self.by_name.get(name).map(|&i| &self.cities[i])
    }

    /// `true` if `name` is registered (same matching rules as [`find`](Self::find)).
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All cities in stable insertion order.  Re-iterable and side-effect
    /// free; drives selection UIs.
    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The registered city nearest to `pos`.
    ///
    /// Returns `None` only for an empty atlas.
    pub fn nearest(&self, pos: Coord) -> Option<&City> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| &self.cities[e.index])
    }

    /// Up to `k` registered cities nearest to `pos`, ascending by distance.
    pub fn k_nearest(&self, pos: Coord, k: usize) -> Vec<&City> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .map(|e| &self.cities[e.index])
            .collect()
    }
}

// ── CityAtlasBuilder ──────────────────────────────────────────────────────────

/// Construct a [`CityAtlas`] incrementally, then call [`build`](Self::build).
pub struct CityAtlasBuilder {
    cities: Vec<City>,
    by_name: FxHashMap<String, usize>,
}

impl CityAtlasBuilder {
    pub fn new() -> Self {
        Self {
            cities: Vec::new(),
            by_name: FxHashMap::default(),
        }
    }

    /// Pre-allocate for the expected number of cities.
    pub fn with_capacity(cities: usize) -> Self {
        Self {
            cities: Vec::with_capacity(cities),
            by_name: FxHashMap::with_capacity_and_hasher(cities, Default::default()),
        }
    }

    /// Register a city.  Names must be unique; re-registering a name is an
    /// error rather than a silent overwrite.
    pub fn add_city(&mut self, name: impl Into<String>, lat: f64, lon: f64) -> AtlasResult<()> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(AtlasError::DuplicateCity(name));
        }
        self.by_name.insert(name.clone(), self.cities.len());
        self.cities.push(City {
            name,
            coord: Coord::new(lat, lon),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Consume the builder and produce a [`CityAtlas`].
    ///
    /// Bulk-loads the R-tree for O(N log N) construction (faster than N
    /// inserts).
    pub fn build(self) -> CityAtlas {
        let entries: Vec<CityEntry> = self
            .cities
            .iter()
            .enumerate()
            .map(|(i, c)| CityEntry {
                point: [c.coord.lat, c.coord.lon],
                index: i,
            })
            .collect();

        CityAtlas {
            cities: self.cities,
            by_name: self.by_name,
            spatial_idx: RTree::bulk_load(entries),
        }
    }
}

impl Default for CityAtlasBuilder {
    fn default() -> Self {
        Self::new()
    }
}
