//! Shortest path search over the route graph.
//!
//! A thin, stateless wrapper around petgraph. The search runs A* with a zero
//! heuristic (plain Dijkstra) and returns the node path; since the route
//! graph has parallel edges, each consecutive node pair is then resolved to
//! its cheapest edge, which is the one the search relaxed.

use petgraph::algo::astar;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

/// A shortest path expressed as graph edges.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    /// Sum of edge weights along the path
    pub weight: f64,
    /// Edges in travel order
    pub edges: Vec<EdgeIndex>,
}

/// Find the lowest-weight path from `from` to `to`.
///
/// Returns `None` if `to` is unreachable. A path from a node to itself is
/// empty with zero weight. Weights must be non-negative.
pub fn build_route<N>(graph: &DiGraph<N, f64>, from: NodeIndex, to: NodeIndex) -> Option<RouteInfo> {
    let (weight, nodes) = astar(graph, from, |n| n == to, |e| *e.weight(), |_| 0.0)?;

    let edges = nodes
        .windows(2)
        .map(|pair| {
            graph
                .edges_connecting(pair[0], pair[1])
                .min_by(|a, b| a.weight().total_cmp(b.weight()))
                .map(|e| e.id())
        })
        .collect::<Option<Vec<_>>>()?;

    Some(RouteInfo { weight, edges })
}
