//! Transport catalogue and route planner.
//!
//! Loads a bus network from a JSON request document, then answers queries
//! about it: per-bus statistics, the buses serving a stop, an SVG map of
//! the network, and the fastest itinerary between two stops.

pub mod catalogue;
pub mod domain;
pub mod json;
pub mod render;
pub mod request;
pub mod router;
