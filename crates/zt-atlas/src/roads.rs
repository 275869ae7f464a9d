//! Curated road-distance override table and its consistency audit.
//!
//! # Shape
//!
//! Entries are **directed**: `(from, to)` and `(to, from)` are independent
//! rows, stored exactly as authored.  Nothing here assumes symmetry —
//! [`RoadDistanceTable::audit_symmetry`] exists so operators can see
//! disagreements between the two directions of a pair instead of silently
//! trusting either one.
//!
//! The table covers only a curated subset of major cities; pairs without
//! an entry resolve through the geodesic path (see `zt-trip`).  A missing
//! entry is expected table shape, not an error.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::city::CityAtlas;
use crate::error::{AtlasError, AtlasResult};

/// Two directions of a pair are considered equal within this tolerance.
pub const SYMMETRY_TOLERANCE_KM: f64 = 0.5;

// ── RoadDistanceTable ─────────────────────────────────────────────────────────

/// Directed road distances in kilometres.
///
/// Outer map is keyed by origin name, inner map by destination name — the
/// same nested shape the curated data is authored in.  A table is built
/// against a specific [`CityAtlas`], so every endpoint is guaranteed to be
/// a registered city.
#[derive(Debug)]
pub struct RoadDistanceTable {
    entries: FxHashMap<String, FxHashMap<String, f64>>,
    entry_count: usize,
}

impl RoadDistanceTable {
    /// Ordered-pair lookup: the distance from `from` to `to` as authored.
    /// `None` when no entry exists in that direction.
    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.entries.get(from)?.get(to).copied()
    }

    /// Number of directed entries.
    pub fn len(&self) -> usize {
        self.entry_count
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Startup consistency check over the directed entries.
    ///
    /// Flags pairs whose two directions disagree by more than
    /// [`SYMMETRY_TOLERANCE_KM`], and pairs present in one direction only.
    /// Returns a plain report value; the caller decides whether to print
    /// it, fail on it, or ignore it; the library itself never logs.
    pub fn audit_symmetry(&self) -> SymmetryReport {
        let mut report = SymmetryReport::default();

        for (from, inner) in &self.entries {
            for (to, &forward_km) in inner {
                match self.get(to, from) {
                    None => report.one_way.push((from.clone(), to.clone())),
                    // Visit each two-sided pair once.
                    Some(reverse_km) if from < to => {
                        if (forward_km - reverse_km).abs() > SYMMETRY_TOLERANCE_KM {
                            report.mismatches.push(SymmetryMismatch {
                                from: from.clone(),
                                to: to.clone(),
                                forward_km,
                                reverse_km,
                            });
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        // Map iteration order is arbitrary; sort so reports are stable.
        report.mismatches.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        report.one_way.sort();
        report
    }
}

// ── Symmetry report ───────────────────────────────────────────────────────────

/// A pair whose two directions disagree.
#[derive(Clone, Debug, Serialize)]
pub struct SymmetryMismatch {
    pub from: String,
    pub to: String,
    pub forward_km: f64,
    pub reverse_km: f64,
}

/// Result of [`RoadDistanceTable::audit_symmetry`], sorted by city names.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SymmetryReport {
    /// Pairs whose two directions disagree beyond the tolerance.
    pub mismatches: Vec<SymmetryMismatch>,
    /// `(from, to)` entries with no reverse counterpart.
    pub one_way: Vec<(String, String)>,
}

impl SymmetryReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.one_way.is_empty()
    }
}

// ── RoadTableBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadDistanceTable`] validated against a [`CityAtlas`].
///
/// Later inserts of the same ordered pair overwrite earlier ones, matching
/// how hand-authored tables are maintained (the last row wins).
pub struct RoadTableBuilder<'a> {
    atlas: &'a CityAtlas,
    entries: FxHashMap<String, FxHashMap<String, f64>>,
    entry_count: usize,
}

impl<'a> RoadTableBuilder<'a> {
    pub fn new(atlas: &'a CityAtlas) -> Self {
        Self {
            atlas,
            entries: FxHashMap::default(),
            entry_count: 0,
        }
    }

    /// Insert one directed entry, as CSV rows author them.
    ///
    /// Both endpoints must be registered in the atlas, and the distance
    /// must be a finite non-negative number.
    pub fn insert(&mut self, from: &str, to: &str, km: f64) -> AtlasResult<()> {
        if !self.atlas.contains(from) {
            return Err(AtlasError::UnknownCity(from.to_owned()));
        }
        if !self.atlas.contains(to) {
            return Err(AtlasError::UnknownCity(to.to_owned()));
        }
        if !km.is_finite() || km < 0.0 {
            return Err(AtlasError::InvalidDistance {
                from: from.to_owned(),
                to: to.to_owned(),
                km,
            });
        }

        let prev = self
            .entries
            .entry(from.to_owned())
            .or_default()
            .insert(to.to_owned(), km);
        if prev.is_none() {
            self.entry_count += 1;
        }
        Ok(())
    }

    /// Insert both directions of an undirected pair.
    pub fn insert_pair(&mut self, a: &str, b: &str, km: f64) -> AtlasResult<()> {
        self.insert(a, b, km)?;
        self.insert(b, a, km)
    }

    /// Consume the builder and produce a [`RoadDistanceTable`].
    pub fn build(self) -> RoadDistanceTable {
        RoadDistanceTable {
            entries: self.entries,
            entry_count: self.entry_count,
        }
    }
}
