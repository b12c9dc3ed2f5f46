//! In-memory transport catalogue.
//!
//! The catalogue owns every stop and bus, answers name lookups and road
//! distance queries, and derives per-route statistics. It is populated once
//! (stops, then distances, then buses) and read afterwards.

use std::collections::{BTreeSet, HashMap};

use tracing::trace;

use crate::domain::{Bus, BusId, BusStats, CatalogueError, Coordinates, Stop, StopId};

/// Stops, buses and road distances of one transit network.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_index: HashMap<String, StopId>,
    bus_index: HashMap<String, BusId>,
    /// Bus names serving each stop, indexed by `StopId`.
    stop_buses: Vec<BTreeSet<String>>,
    /// Directional road distances in meters.
    distances: HashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop.
    ///
    /// The stop is registered with an empty bus set, so it is known even
    /// before any bus visits it.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        let name = name.into();
        if self.stop_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop(name));
        }

        let id = StopId(self.stops.len());
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop::new(name, coordinates));
        self.stop_buses.push(BTreeSet::new());
        Ok(id)
    }

    /// Record the road distance from `from` to `to`.
    ///
    /// Overwrites a previous value for the same ordered pair. The reverse
    /// direction is left untouched.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: u32) -> Result<(), CatalogueError> {
        let from_id = self.require_stop(from)?;
        let to_id = self.require_stop(to)?;
        self.distances.insert((from_id, to_id), meters);
        Ok(())
    }

    /// Add a bus visiting `stops` in the given order.
    ///
    /// `stops` must already be the full traversal; a route that is not a round
    /// trip has to be mirrored by the caller.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        is_roundtrip: bool,
        stops: &[S],
    ) -> Result<BusId, CatalogueError> {
        let name = name.into();
        if self.bus_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateBus(name));
        }
        if stops.is_empty() {
            return Err(CatalogueError::EmptyRoute(name));
        }

        let stop_ids = stops
            .iter()
            .map(|s| self.require_stop(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        for id in &stop_ids {
            self.stop_buses[id.index()].insert(name.clone());
        }

        let id = BusId(self.buses.len());
        self.bus_index.insert(name.clone(), id);
        self.buses.push(Bus::new(name, is_roundtrip, stop_ids));
        Ok(id)
    }

    /// Road distance between two stops in meters.
    ///
    /// Falls back to the reverse direction when only that one was supplied.
    /// Never defaults to zero: a missing pair is an error.
    pub fn distance_between(&self, from: StopId, to: StopId) -> Result<u32, CatalogueError> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .ok_or_else(|| CatalogueError::MissingDistance {
                from: self.stops[from.index()].name.clone(),
                to: self.stops[to.index()].name.clone(),
            })
    }

    /// Road distance between two stops looked up by name.
    pub fn distance_between_names(&self, from: &str, to: &str) -> Result<u32, CatalogueError> {
        self.distance_between(self.require_stop(from)?, self.require_stop(to)?)
    }

    /// Sum of road distances along the bus's traversal, in meters.
    pub fn real_route_length(&self, bus: &str) -> Result<f64, CatalogueError> {
        let bus = self.require_bus(bus)?;
        bus.hops()
            .map(|(a, b)| self.distance_between(a, b).map(f64::from))
            .sum()
    }

    /// Sum of great-circle distances along the bus's traversal, in meters.
    pub fn geodesic_route_length(&self, bus: &str) -> Result<f64, CatalogueError> {
        let bus = self.require_bus(bus)?;
        Ok(bus
            .hops()
            .map(|(a, b)| {
                self.stops[a.index()]
                    .coordinates
                    .distance_to(&self.stops[b.index()].coordinates)
            })
            .sum())
    }

    /// Ratio of road length to geodesic length.
    ///
    /// Undefined, and reported as `DegenerateRoute`, when the geodesic length
    /// is zero (a single stop, or every stop at the same point).
    pub fn curvature(&self, bus: &str) -> Result<f64, CatalogueError> {
        let geodesic = self.geodesic_route_length(bus)?;
        if geodesic == 0.0 {
            return Err(CatalogueError::DegenerateRoute(bus.to_string()));
        }
        Ok(self.real_route_length(bus)? / geodesic)
    }

    /// Statistics for a bus, or `None` if no such bus exists.
    pub fn bus_stats(&self, name: &str) -> Result<Option<BusStats>, CatalogueError> {
        let Some(bus) = self.bus(name) else {
            return Ok(None);
        };

        let stats = BusStats {
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
            route_length: self.real_route_length(name)?,
            curvature: self.curvature(name)?,
        };
        trace!(bus = name, ?stats, "computed bus stats");
        Ok(Some(stats))
    }

    /// Names of the buses serving a stop, sorted alphabetically.
    ///
    /// Returns `None` for an unknown stop and an empty list for a known stop
    /// that no bus visits.
    pub fn buses_for_stop(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.stop_id(name)?;
        Some(self.stop_buses[id.index()].iter().map(String::as_str).collect())
    }

    /// Look up a stop id by name.
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// Look up a stop by name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id.index()])
    }

    /// Look up a stop by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalogue.
    pub fn stop_by_id(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// Look up a bus by name.
    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.bus_index.get(name).map(|id| &self.buses[id.0])
    }

    /// All stops in insertion order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in insertion order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Number of stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if a stop with this name exists.
    pub fn has_stop(&self, name: &str) -> bool {
        self.stop_index.contains_key(name)
    }

    /// Returns true if a bus with this name exists.
    pub fn has_bus(&self, name: &str) -> bool {
        self.bus_index.contains_key(name)
    }

    fn require_stop(&self, name: &str) -> Result<StopId, CatalogueError> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_string()))
    }

    fn require_bus(&self, name: &str) -> Result<&Bus, CatalogueError> {
        self.bus(name)
            .ok_or_else(|| CatalogueError::UnknownBus(name.to_string()))
    }
}
