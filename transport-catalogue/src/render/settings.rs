//! Map rendering configuration.

use std::fmt;

use serde::Deserialize;

/// An SVG paint value.
///
/// Deserializes from a JSON string (`"red"`), a 3-element array
/// (`[255, 160, 0]`) or a 4-element array with opacity (`[255, 255, 255, 0.85]`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
    #[default]
    None,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
            Color::None => f.write_str("none"),
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

/// Canvas geometry, label styling and palette for the route map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    /// Margin between the canvas edge and the outermost stop.
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    /// `[dx, dy]` of bus labels relative to their stop.
    pub bus_label_offset: [f64; 2],
    pub stop_label_font_size: u32,
    /// `[dx, dy]` of stop labels relative to their stop.
    pub stop_label_offset: [f64; 2],
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    /// Route colours, assigned to buses in name order and cycled.
    pub color_palette: Vec<Color>,
}

impl RenderSettings {
    /// Palette colour for the `index`-th drawn bus.
    ///
    /// An empty palette paints everything `none`.
    pub fn palette_color(&self, index: usize) -> Color {
        if self.color_palette.is_empty() {
            return Color::None;
        }
        self.color_palette[index % self.color_palette.len()].clone()
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1200.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: [7.0, 15.0],
            stop_label_font_size: 20,
            stop_label_offset: [7.0, -3.0],
            underlayer_color: Color::Rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec![Color::from("green"), Color::Rgb(255, 160, 0), Color::from("red")],
        }
    }
}
