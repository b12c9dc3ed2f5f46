//! Route graph construction.
//!
//! Each node is a stop and each edge is a ride on one bus from a boarding
//! stop to any later stop on its traversal, without getting off. Every
//! reachable (board, alight) pair gets its own edge, so the graph is not
//! simple: the search can ride further on one bus without paying another
//! wait, and transfers only appear where they actually save time.

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use tracing::debug;

use super::config::RoutingSettings;
use crate::catalogue::TransportCatalogue;
use crate::domain::{CatalogueError, StopId};

/// Attributes of one graph edge, stored at the edge's index.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeParam {
    /// Name of the bus ridden along this edge
    pub bus: String,
    /// Boarding stop
    pub from: StopId,
    /// Alighting stop
    pub to: StopId,
    /// Number of stop-to-stop hops ridden
    pub span: usize,
    /// Total minutes: one wait plus the ride
    pub time: f64,
}

/// Weighted directed graph over stops, plus its edge side table.
///
/// `params[e.index()]` describes edge `e` for every edge in `graph`.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    graph: DiGraph<StopId, f64>,
    params: Vec<EdgeParam>,
}

impl RouteGraph {
    /// Build the graph from the catalogue's current content.
    ///
    /// Node `i` is the stop with `StopId(i)`. Fails if two adjacent stops on
    /// some bus have no road distance in either direction.
    pub fn build(
        catalogue: &TransportCatalogue,
        settings: &RoutingSettings,
    ) -> Result<Self, CatalogueError> {
        let mut graph = DiGraph::with_capacity(catalogue.stop_count(), 0);
        for index in 0..catalogue.stop_count() {
            graph.add_node(StopId(index));
        }

        let mut params = Vec::new();

        for bus in catalogue.buses() {
            let stops = bus.stops();
            for i in 0..stops.len().saturating_sub(1) {
                let mut total_time = settings.bus_wait_time;

                for j in (i + 1)..stops.len() {
                    total_time += time_between_stops(catalogue, settings, stops[j - 1], stops[j])?;

                    graph.add_edge(node(stops[i]), node(stops[j]), total_time);
                    params.push(EdgeParam {
                        bus: bus.name.clone(),
                        from: stops[i],
                        to: stops[j],
                        span: j - i,
                        time: total_time,
                    });
                }
            }
        }

        debug!(
            stops = graph.node_count(),
            edges = graph.edge_count(),
            buses = catalogue.buses().len(),
            "built route graph"
        );

        Ok(Self { graph, params })
    }

    /// The underlying petgraph graph.
    pub fn graph(&self) -> &DiGraph<StopId, f64> {
        &self.graph
    }

    /// Attributes of an edge returned by the path search.
    pub fn edge(&self, edge: EdgeIndex) -> &EdgeParam {
        &self.params[edge.index()]
    }

    /// All edge attributes in insertion order.
    pub fn edges(&self) -> &[EdgeParam] {
        &self.params
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.params.len()
    }

    /// Number of nodes (one per stop).
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

/// Graph node of a stop.
pub(crate) fn node(stop: StopId) -> NodeIndex {
    NodeIndex::new(stop.index())
}

/// Minutes to ride from `from` to the adjacent stop `to`.
///
/// A hop that stays at the same stop (a route listing one stop twice in a
/// row) costs one wait.
pub fn time_between_stops(
    catalogue: &TransportCatalogue,
    settings: &RoutingSettings,
    from: StopId,
    to: StopId,
) -> Result<f64, CatalogueError> {
    if from == to {
        return Ok(settings.bus_wait_time);
    }
    let meters = catalogue.distance_between(from, to)?;
    Ok(settings.ride_minutes(meters))
}
