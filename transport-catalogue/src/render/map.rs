//! Route map rendering.

use std::collections::BTreeMap;

use tracing::debug;

use super::projector::SphereProjector;
use super::settings::{Color, RenderSettings};
use super::svg::{Circle, Document, PathProps, Point, Polyline, Text};
use crate::catalogue::TransportCatalogue;
use crate::domain::{Bus, Stop};

const FONT_FAMILY: &str = "Verdana";

/// Draws every bus route and every served stop of a catalogue.
#[derive(Debug, Clone, Default)]
pub struct MapRenderer {
    settings: RenderSettings,
}

impl MapRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Render the map as an SVG document string.
    pub fn render_svg(&self, catalogue: &TransportCatalogue) -> String {
        self.render(catalogue).to_string()
    }

    /// Render the map.
    ///
    /// Layers, bottom to top: route lines, bus labels, stop circles, stop
    /// labels. Buses are drawn in name order; stops that no bus visits are
    /// left out and do not affect the projection.
    pub fn render(&self, catalogue: &TransportCatalogue) -> Document {
        let mut buses: Vec<&Bus> = catalogue
            .buses()
            .iter()
            .filter(|b| !b.stops().is_empty())
            .collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));

        let stops: BTreeMap<&str, &Stop> = buses
            .iter()
            .flat_map(|bus| bus.stops())
            .map(|&id| catalogue.stop_by_id(id))
            .map(|stop| (stop.name.as_str(), stop))
            .collect();

        let s = &self.settings;
        let projector = SphereProjector::new(
            stops.values().map(|stop| stop.coordinates),
            s.width,
            s.height,
            s.padding,
        );
        let at = |stop: &Stop| projector.project(stop.coordinates);

        let mut doc = Document::new();

        for (index, bus) in buses.iter().enumerate() {
            doc.add(Polyline {
                points: bus
                    .stops()
                    .iter()
                    .map(|&id| at(catalogue.stop_by_id(id)))
                    .collect(),
                props: PathProps {
                    fill: Some(Color::None),
                    stroke: Some(s.palette_color(index)),
                    stroke_width: Some(s.line_width),
                    round: true,
                },
            });
        }

        for (index, bus) in buses.iter().enumerate() {
            let first = bus.stops()[0];
            let mut label_stops = vec![first];
            if !bus.is_roundtrip && bus.final_stop() != first {
                label_stops.push(bus.final_stop());
            }
            for id in label_stops {
                let position = at(catalogue.stop_by_id(id));
                doc.add(self.underlayer(self.bus_label(&bus.name, position)));
                doc.add(Text {
                    props: PathProps {
                        fill: Some(s.palette_color(index)),
                        ..PathProps::default()
                    },
                    ..self.bus_label(&bus.name, position)
                });
            }
        }

        for stop in stops.values() {
            doc.add(Circle {
                center: at(stop),
                radius: s.stop_radius,
                props: PathProps {
                    fill: Some(Color::from("white")),
                    ..PathProps::default()
                },
            });
        }

        for stop in stops.values() {
            let label = self.stop_label(&stop.name, at(stop));
            doc.add(self.underlayer(label.clone()));
            doc.add(Text {
                props: PathProps {
                    fill: Some(Color::from("black")),
                    ..PathProps::default()
                },
                ..label
            });
        }

        debug!(
            buses = buses.len(),
            stops = stops.len(),
            elements = doc.elements().len(),
            "rendered route map"
        );
        doc
    }

    fn bus_label(&self, name: &str, position: Point) -> Text {
        let [dx, dy] = self.settings.bus_label_offset;
        Text {
            position,
            offset: Point::new(dx, dy),
            font_size: self.settings.bus_label_font_size,
            font_family: Some(FONT_FAMILY.to_string()),
            font_weight: Some("bold".to_string()),
            data: name.to_string(),
            props: PathProps::default(),
        }
    }

    fn stop_label(&self, name: &str, position: Point) -> Text {
        let [dx, dy] = self.settings.stop_label_offset;
        Text {
            position,
            offset: Point::new(dx, dy),
            font_size: self.settings.stop_label_font_size,
            font_family: Some(FONT_FAMILY.to_string()),
            font_weight: None,
            data: name.to_string(),
            props: PathProps::default(),
        }
    }

    /// The halo drawn beneath a label so it stays readable over route lines.
    fn underlayer(&self, label: Text) -> Text {
        let color = self.settings.underlayer_color.clone();
        Text {
            props: PathProps {
                fill: Some(color.clone()),
                stroke: Some(color),
                stroke_width: Some(self.settings.underlayer_width),
                round: true,
            },
            ..label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;
    use crate::render::svg::Element;

    fn catalogue() -> TransportCatalogue {
        let mut tc = TransportCatalogue::new();
        tc.add_stop("Rivierski most", Coordinates::new(43.587795, 39.716901))
            .unwrap();
        tc.add_stop("Morskoy vokzal", Coordinates::new(43.581969, 39.719848))
            .unwrap();
        tc.add_stop("Elektroseti", Coordinates::new(43.598701, 39.730623))
            .unwrap();
        tc.add_stop("Unused", Coordinates::new(10.0, 10.0)).unwrap();
        tc.add_bus(
            "114",
            false,
            &["Morskoy vokzal", "Rivierski most", "Morskoy vokzal"],
        )
        .unwrap();
        tc.add_bus(
            "14",
            true,
            &["Elektroseti", "Rivierski most", "Elektroseti"],
        )
        .unwrap();
        tc
    }

    fn count<F: Fn(&Element) -> bool>(doc: &Document, f: F) -> usize {
        doc.elements().iter().filter(|e| f(e)).count()
    }

    #[test]
    fn element_layers() {
        let tc = catalogue();
        let doc = MapRenderer::new(RenderSettings::default()).render(&tc);

        assert_eq!(count(&doc, |e| matches!(e, Element::Polyline(_))), 2);
        assert_eq!(count(&doc, |e| matches!(e, Element::Circle(_))), 3);
        // 114: two labels (linear route), 14: one label; two texts each.
        // Three stop labels, two texts each.
        assert_eq!(count(&doc, |e| matches!(e, Element::Text(_))), 6 + 6);

        // Polylines first, circles after all bus labels
        assert!(matches!(doc.elements()[0], Element::Polyline(_)));
        assert!(matches!(doc.elements()[1], Element::Polyline(_)));
        assert!(matches!(doc.elements()[8], Element::Circle(_)));
    }

    #[test]
    fn buses_drawn_in_name_order_with_palette() {
        let tc = catalogue();
        let doc = MapRenderer::new(RenderSettings::default()).render(&tc);

        let strokes: Vec<_> = doc
            .elements()
            .iter()
            .filter_map(|e| match e {
                Element::Polyline(p) => p.props.stroke.clone(),
                _ => None,
            })
            .collect();
        // "114" < "14"
        assert_eq!(strokes, vec![Color::from("green"), Color::Rgb(255, 160, 0)]);

        let Element::Polyline(first) = &doc.elements()[0] else {
            panic!("expected polyline");
        };
        assert_eq!(first.points.len(), 3);
    }

    #[test]
    fn stops_sorted_by_name() {
        let tc = catalogue();
        let doc = MapRenderer::new(RenderSettings::default()).render(&tc);

        let labels: Vec<_> = doc
            .elements()
            .iter()
            .filter_map(|e| match e {
                Element::Text(t) if t.font_weight.is_none() => Some(t.data.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            labels,
            vec![
                "Elektroseti",
                "Elektroseti",
                "Morskoy vokzal",
                "Morskoy vokzal",
                "Rivierski most",
                "Rivierski most",
            ]
        );
    }

    #[test]
    fn svg_output() {
        let tc = catalogue();
        let svg = MapRenderer::default().render_svg(&tc);
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert!(!svg.contains("Unused"));
    }

    #[test]
    fn empty_catalogue_renders_empty_document() {
        let doc = MapRenderer::default().render(&TransportCatalogue::new());
        assert!(doc.elements().is_empty());
    }
}
