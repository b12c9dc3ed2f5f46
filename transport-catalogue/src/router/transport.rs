//! Route planner over a frozen catalogue.
//!
//! The router builds the route graph once and answers from/to queries by
//! running the path search and translating the edge path back into waits
//! and rides.

use tracing::debug;

use super::config::RoutingSettings;
use super::graph::{RouteGraph, node};
use super::itinerary::{Itinerary, ItineraryItem};
use super::search::build_route;
use crate::catalogue::TransportCatalogue;
use crate::domain::CatalogueError;

/// Minimum-time itinerary planner.
///
/// Borrows the catalogue for its whole lifetime, so the catalogue cannot
/// change while a router built from it exists. The graph is immutable after
/// construction and queries only read it.
#[derive(Debug, Clone)]
pub struct TransportRouter<'a> {
    catalogue: &'a TransportCatalogue,
    settings: RoutingSettings,
    graph: RouteGraph,
}

impl<'a> TransportRouter<'a> {
    /// Build the route graph for `catalogue`.
    pub fn new(
        catalogue: &'a TransportCatalogue,
        settings: RoutingSettings,
    ) -> Result<Self, CatalogueError> {
        let graph = RouteGraph::build(catalogue, &settings)?;
        Ok(Self {
            catalogue,
            settings,
            graph,
        })
    }

    /// Plan the fastest itinerary from stop `from` to stop `to`.
    ///
    /// Returns `None` if either stop is unknown or no path exists; the two
    /// cases are not distinguished.
    ///
    /// Adjacent rides on the same bus are kept as separate steps.
    pub fn route(&self, from: &str, to: &str) -> Option<Itinerary> {
        let (Some(from_id), Some(to_id)) = (self.catalogue.stop_id(from), self.catalogue.stop_id(to))
        else {
            debug!(from, to, "route requested for unknown stop");
            return None;
        };

        let Some(route) = build_route(self.graph.graph(), node(from_id), node(to_id)) else {
            debug!(from, to, "no route between stops");
            return None;
        };

        let wait_time = self.settings.bus_wait_time;
        let mut itinerary = Itinerary::new();
        for edge in route.edges {
            let param = self.graph.edge(edge);
            let wait = ItineraryItem::Wait {
                stop_name: self.catalogue.stop_by_id(param.from).name.clone(),
                time: wait_time,
            };
            let ride = ItineraryItem::Bus {
                bus: param.bus.clone(),
                span_count: param.span,
                time: param.time - wait_time,
            };
            itinerary.push_ride(wait, ride);
        }

        debug!(
            from,
            to,
            rides = itinerary.rides(),
            total_time = itinerary.total_time(),
            "planned route"
        );
        Some(itinerary)
    }

    /// The route graph.
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// The routing settings the graph was built with.
    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
