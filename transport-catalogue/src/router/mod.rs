//! Minimum-time route planning.
//!
//! This module answers "how do I get from stop A to stop B fastest?" by
//! building a weighted directed graph over the catalogue's stops, where each
//! edge is a ride on one bus across one or more hops, and running a
//! shortest-path search over it.

mod config;
mod graph;
mod itinerary;
mod search;
mod transport;

pub use config::RoutingSettings;
pub use graph::{EdgeParam, RouteGraph, time_between_stops};
pub use itinerary::{Itinerary, ItineraryItem};
pub use search::{RouteInfo, build_route};
pub use transport::TransportRouter;
