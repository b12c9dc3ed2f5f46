//! Answering stat requests.
//!
//! Each request produces one JSON object carrying the caller's
//! `request_id`. Lookups that miss (unknown bus, unknown stop, no route) are
//! answered with `"error_message": "not found"` rather than failing.

use serde_json::Value;
use tracing::{debug, trace};

use super::dto::StatRequest;
use super::error::RequestError;
use crate::catalogue::TransportCatalogue;
use crate::domain::BusStats;
use crate::json::Builder;
use crate::render::MapRenderer;
use crate::router::{Itinerary, ItineraryItem, RoutingSettings, TransportRouter};

const NOT_FOUND: &str = "not found";

/// Answers queries against a loaded catalogue.
pub struct RequestHandler<'a> {
    catalogue: &'a TransportCatalogue,
    router: TransportRouter<'a>,
    renderer: MapRenderer,
}

impl<'a> RequestHandler<'a> {
    /// Build the route graph and prepare to answer requests.
    pub fn new(
        catalogue: &'a TransportCatalogue,
        routing: RoutingSettings,
        renderer: MapRenderer,
    ) -> Result<Self, RequestError> {
        let router = TransportRouter::new(catalogue, routing)?;
        Ok(Self {
            catalogue,
            router,
            renderer,
        })
    }

    /// Answer every request, in order, as a JSON array.
    pub fn answer_all(&self, requests: &[StatRequest]) -> Result<Value, RequestError> {
        let mut answers = Vec::with_capacity(requests.len());
        for request in requests {
            answers.push(self.answer(request)?);
        }
        Ok(Value::Array(answers))
    }

    /// Answer a single request.
    pub fn answer(&self, request: &StatRequest) -> Result<Value, RequestError> {
        trace!(?request, "answering request");
        let id = request.id();
        match request {
            StatRequest::Bus { name, .. } => match self.catalogue.bus_stats(name)? {
                Some(stats) => bus_response(id, &stats),
                None => not_found(id),
            },
            StatRequest::Stop { name, .. } => match self.catalogue.buses_for_stop(name) {
                Some(buses) => stop_response(id, &buses),
                None => not_found(id),
            },
            StatRequest::Map { .. } => {
                let svg = self.renderer.render_svg(self.catalogue);
                object(id, |b| b.key("map")?.value(svg))
            }
            StatRequest::Route { from, to, .. } => match self.router.route(from, to) {
                Some(itinerary) => route_response(id, &itinerary),
                None => {
                    debug!(id, from = from.as_str(), to = to.as_str(), "route not found");
                    not_found(id)
                }
            },
        }
    }
}

/// Build `{..fields, "request_id": id}`.
fn object<F>(id: i64, fields: F) -> Result<Value, RequestError>
where
    F: FnOnce(Builder) -> Result<Builder, crate::json::BuilderError>,
{
    let builder = fields(Builder::new().start_object()?)?;
    Ok(builder.key("request_id")?.value(id)?.end_object()?.build()?)
}

fn not_found(id: i64) -> Result<Value, RequestError> {
    object(id, |b| b.key("error_message")?.value(NOT_FOUND))
}

fn bus_response(id: i64, stats: &BusStats) -> Result<Value, RequestError> {
    object(id, |b| {
        b.key("curvature")?
            .value(stats.curvature)?
            .key("route_length")?
            .value(stats.route_length)?
            .key("stop_count")?
            .value(stats.stop_count)?
            .key("unique_stop_count")?
            .value(stats.unique_stop_count)
    })
}

fn stop_response(id: i64, buses: &[&str]) -> Result<Value, RequestError> {
    object(id, |b| {
        let mut b = b.key("buses")?.start_array()?;
        for bus in buses {
            b = b.value(*bus)?;
        }
        b.end_array()
    })
}

fn route_response(id: i64, itinerary: &Itinerary) -> Result<Value, RequestError> {
    object(id, |b| {
        let mut b = b.key("items")?.start_array()?;
        for item in itinerary.items() {
            b = match item {
                ItineraryItem::Wait { stop_name, time } => b
                    .start_object()?
                    .key("stop_name")?
                    .value(stop_name.as_str())?
                    .key("time")?
                    .value(*time)?
                    .key("type")?
                    .value("Wait")?
                    .end_object()?,
                ItineraryItem::Bus {
                    bus,
                    span_count,
                    time,
                } => b
                    .start_object()?
                    .key("bus")?
                    .value(bus.as_str())?
                    .key("span_count")?
                    .value(*span_count)?
                    .key("time")?
                    .value(*time)?
                    .key("type")?
                    .value("Bus")?
                    .end_object()?,
            };
        }
        b.end_array()?
            .key("total_time")?
            .value(itinerary.total_time())
    })
}
