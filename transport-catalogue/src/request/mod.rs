//! The JSON request layer.
//!
//! A request document describes the network (`base_requests`), how to plan
//! routes and draw the map, and a list of queries (`stat_requests`).
//! [`process`] loads the network and answers every query in order.

mod dto;
mod error;
mod handler;
mod reader;

pub use dto::{BaseRequest, BusRequest, RequestDocument, StatRequest, StopRequest};
pub use error::RequestError;
pub use handler::RequestHandler;
pub use reader::{build_catalogue, load_document, read_document};

use serde_json::Value;

use crate::render::MapRenderer;

/// Build the catalogue described by `document` and answer its queries.
pub fn process(document: &RequestDocument) -> Result<Value, RequestError> {
    let catalogue = build_catalogue(&document.base_requests)?;
    let handler = RequestHandler::new(
        &catalogue,
        document.routing_settings,
        MapRenderer::new(document.render_settings.clone()),
    )?;
    handler.answer_all(&document.stat_requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DOCUMENT: &str = r#"{
        "base_requests": [
            {"type": "Bus", "name": "297", "stops": ["Biryulyovo Zapadnoye", "Biryulyovo Tovarnaya",
             "Universam", "Biryulyovo Zapadnoye"], "is_roundtrip": true},
            {"type": "Bus", "name": "635", "stops": ["Biryulyovo Tovarnaya", "Universam",
             "Prazhskaya"], "is_roundtrip": false},
            {"type": "Stop", "name": "Biryulyovo Zapadnoye", "latitude": 55.574371, "longitude": 37.6517,
             "road_distances": {"Biryulyovo Tovarnaya": 2600}},
            {"type": "Stop", "name": "Universam", "latitude": 55.587655, "longitude": 37.645687,
             "road_distances": {"Biryulyovo Tovarnaya": 1380, "Biryulyovo Zapadnoye": 2500,
                                "Prazhskaya": 4650}},
            {"type": "Stop", "name": "Biryulyovo Tovarnaya", "latitude": 55.592028, "longitude": 37.653656,
             "road_distances": {"Universam": 890}},
            {"type": "Stop", "name": "Prazhskaya", "latitude": 55.611717, "longitude": 37.603938,
             "road_distances": {}}
        ],
        "render_settings": {"width": 600, "height": 400, "padding": 50, "color_palette": ["green"]},
        "routing_settings": {"bus_wait_time": 2, "bus_velocity": 30},
        "stat_requests": [
            {"id": 1, "type": "Bus", "name": "297"},
            {"id": 2, "type": "Bus", "name": "635"},
            {"id": 3, "type": "Stop", "name": "Universam"},
            {"id": 4, "type": "Route", "from": "Biryulyovo Zapadnoye", "to": "Universam"},
            {"id": 5, "type": "Route", "from": "Biryulyovo Zapadnoye", "to": "Prazhskaya"},
            {"id": 6, "type": "Stop", "name": "Nowhere"},
            {"id": 7, "type": "Map"}
        ]
    }"#;

    #[test]
    fn whole_document() {
        let doc = read_document(DOCUMENT.as_bytes()).unwrap();
        let answers = process(&doc).unwrap();
        let answers = answers.as_array().unwrap();
        assert_eq!(answers.len(), 7);

        assert_eq!(answers[0]["route_length"], json!(5990.0));
        assert_eq!(answers[0]["stop_count"], json!(4));
        assert_eq!(answers[0]["unique_stop_count"], json!(3));

        assert_eq!(answers[1]["route_length"], json!(11570.0));
        assert_eq!(answers[1]["stop_count"], json!(5));

        assert_eq!(answers[2]["buses"], json!(["297", "635"]));

        // 2600 + 890 meters at 500 m/min, plus one wait.
        let route = &answers[3];
        assert_eq!(route["items"].as_array().unwrap().len(), 2);
        assert_eq!(route["items"][0]["type"], json!("Wait"));
        assert_eq!(route["items"][1]["bus"], json!("297"));
        assert_eq!(route["items"][1]["span_count"], json!(2));
        approx::assert_relative_eq!(
            route["total_time"].as_f64().unwrap(),
            2.0 + 6.98,
            epsilon = 1e-9
        );

        let transfer = &answers[4];
        let items = transfer["items"].as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["stop_name"], json!("Biryulyovo Zapadnoye"));
        assert_eq!(items[1]["bus"], json!("297"));
        assert_eq!(items[3]["bus"], json!("635"));
        // Changing at Tovarnaya or at Universam costs the same.
        approx::assert_relative_eq!(
            transfer["total_time"].as_f64().unwrap(),
            2.0 + 6.98 + 2.0 + 9.3,
            epsilon = 1e-9
        );

        assert_eq!(answers[5]["error_message"], json!("not found"));
        assert!(answers[6]["map"].as_str().unwrap().contains("<svg"));
    }

    #[test]
    fn empty_document_answers_nothing() {
        let answers = process(&RequestDocument::default()).unwrap();
        assert_eq!(answers, json!([]));
    }

    #[test]
    fn bad_network_is_an_error() {
        let doc = read_document(
            r#"{"base_requests": [
                {"type": "Bus", "name": "1", "stops": ["Ghost"], "is_roundtrip": true}
            ]}"#
                .as_bytes(),
        )
        .unwrap();
        assert!(matches!(
            process(&doc).unwrap_err(),
            RequestError::Catalogue(_)
        ));
    }
}
