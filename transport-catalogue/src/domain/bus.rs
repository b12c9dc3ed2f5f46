//! Bus routes and their statistics.

use std::collections::HashSet;

use super::StopId;

/// Dense index of a bus in catalogue insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub usize);

/// A named bus route.
///
/// `stops` is the traversal order. For a route that is not a round trip the
/// sequence already holds the outbound leg followed by the mirrored return
/// leg, so it always describes the full trip.
///
/// # Invariants
///
/// - `stops` is non-empty
/// - every id in `stops` refers to a stop of the owning catalogue
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub name: String,
    pub is_roundtrip: bool,
    stops: Vec<StopId>,
    unique_stops: HashSet<StopId>,
}

impl Bus {
    /// Creates a bus; the unique-stop set is derived from `stops`.
    pub(crate) fn new(name: String, is_roundtrip: bool, stops: Vec<StopId>) -> Self {
        let unique_stops = stops.iter().copied().collect();
        Self {
            name,
            is_roundtrip,
            stops,
            unique_stops,
        }
    }

    /// Stops in traversal order.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    /// Number of stops visited, counting repeats.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of distinct stops visited.
    pub fn unique_stop_count(&self) -> usize {
        self.unique_stops.len()
    }

    /// Returns true if this bus visits `stop`.
    pub fn serves(&self, stop: StopId) -> bool {
        self.unique_stops.contains(&stop)
    }

    /// Consecutive stop pairs along the traversal.
    pub fn hops(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }

    /// The last stop of the outbound leg.
    ///
    /// For a round trip this is the first stop; otherwise it is the turning
    /// point in the middle of the mirrored sequence.
    pub fn final_stop(&self) -> StopId {
        if self.is_roundtrip {
            self.stops[0]
        } else {
            self.stops[self.stops.len() / 2]
        }
    }
}

/// Aggregate statistics for a single bus route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusStats {
    /// Stops visited, counting repeats
    pub stop_count: usize,
    /// Distinct stops visited
    pub unique_stop_count: usize,
    /// Sum of road distances along the route, in meters
    pub route_length: f64,
    /// Road length divided by geodesic length
    pub curvature: f64,
}
