//! Distance-mode and distance-source enums.

/// Which distance population the caller wants.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceMode {
    /// Prefer the curated road table, falling back to the great-circle
    /// value when the pair has no entry.  Default: travellers plan around
    /// roads.
    #[default]
    Road,
    /// Great-circle distance only; the road table is never consulted.
    Straight,
}

impl DistanceMode {
    /// Human-readable label, useful for CLI flags and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceMode::Road => "road",
            DistanceMode::Straight => "straight",
        }
    }
}

impl std::fmt::Display for DistanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which population actually produced a resolved distance.
///
/// `Road` mode yields [`Geodesic`](DistanceSource::Geodesic) whenever the
/// pair is absent from the table — a defined fallback, not an error.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceSource {
    /// A curated road-table entry.
    RoadTable,
    /// The haversine great-circle value.
    Geodesic,
}

impl DistanceSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceSource::RoadTable => "road table",
            DistanceSource::Geodesic => "great circle",
        }
    }
}

impl std::fmt::Display for DistanceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
