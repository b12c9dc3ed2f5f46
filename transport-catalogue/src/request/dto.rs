//! Data transfer objects for the request document.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::render::RenderSettings;
use crate::router::RoutingSettings;

/// The complete input: network description, settings and queries.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RequestDocument {
    /// Stops and buses that make up the network
    pub base_requests: Vec<BaseRequest>,

    /// Map styling
    pub render_settings: RenderSettings,

    /// Wait time and bus velocity for route planning
    pub routing_settings: RoutingSettings,

    /// Queries to answer, in order
    pub stat_requests: Vec<StatRequest>,
}

/// A network definition record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

/// A stop definition with its outgoing road distances.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Neighbour stop name → road distance in meters, from this stop
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

/// A bus definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusRequest {
    pub name: String,

    /// Stops as listed: the full loop for a round trip, otherwise the
    /// outbound leg only
    pub stops: Vec<String>,

    pub is_roundtrip: bool,
}

impl BusRequest {
    /// The stops in the order the bus visits them.
    ///
    /// A route that is not a round trip runs out and back, so `A B C`
    /// becomes `A B C B A`.
    pub fn traversal(&self) -> Vec<&str> {
        let outbound = self.stops.iter().map(String::as_str);
        if self.is_roundtrip {
            return outbound.collect();
        }
        let back = self.stops.iter().rev().skip(1).map(String::as_str);
        outbound.chain(back).collect()
    }
}

/// A query to answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    /// Statistics for one bus
    Bus { id: i64, name: String },
    /// Buses serving one stop
    Stop { id: i64, name: String },
    /// The rendered network map
    Map { id: i64 },
    /// The fastest itinerary between two stops
    Route { id: i64, from: String, to: String },
}

impl StatRequest {
    /// The caller-chosen request id echoed in the response.
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Map { id }
            | StatRequest::Route { id, .. } => *id,
        }
    }
}
