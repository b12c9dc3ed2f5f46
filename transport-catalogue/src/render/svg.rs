//! Minimal SVG document model.
//!
//! Only the three shapes the route map needs: polylines for routes, circles
//! for stops and text for labels. Documents render through `Display`.

use std::fmt;

use super::settings::Color;

/// A canvas position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fill and stroke attributes shared by all shapes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathProps {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    /// Round line caps and joins
    pub round: bool,
}

impl fmt::Display for PathProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(f, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(f, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(f, " stroke-width=\"{width}\"")?;
        }
        if self.round {
            f.write_str(" stroke-linecap=\"round\" stroke-linejoin=\"round\"")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub props: PathProps,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub props: PathProps,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    pub position: Point,
    pub offset: Point,
    pub font_size: u32,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub data: String,
    pub props: PathProps,
}

/// A drawable element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Element {
    fn from(c: Circle) -> Self {
        Element::Circle(c)
    }
}

impl From<Polyline> for Element {
    fn from(p: Polyline) -> Self {
        Element::Polyline(p)
    }
}

impl From<Text> for Element {
    fn from(t: Text) -> Self {
        Element::Text(t)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Circle(c) => write!(
                f,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
                c.center.x, c.center.y, c.radius, c.props
            ),
            Element::Polyline(p) => {
                f.write_str("<polyline points=\"")?;
                for (i, point) in p.points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{},{}", point.x, point.y)?;
                }
                write!(f, "\"{}/>", p.props)
            }
            Element::Text(t) => {
                write!(
                    f,
                    "<text{} x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
                    t.props, t.position.x, t.position.y, t.offset.x, t.offset.y, t.font_size
                )?;
                if let Some(family) = &t.font_family {
                    write!(f, " font-family=\"{family}\"")?;
                }
                if let Some(weight) = &t.font_weight {
                    write!(f, " font-weight=\"{weight}\"")?;
                }
                write!(f, ">{}</text>", Escaped(&t.data))
            }
        }
    }
}

/// XML-escapes text content.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '&' => f.write_str("&amp;")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

/// An ordered collection of elements; later elements draw on top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>")?;
        writeln!(f, "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">")?;
        for element in &self.elements {
            writeln!(f, "  {element}")?;
        }
        f.write_str("</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_markup() {
        let circle = Circle {
            center: Point::new(20.0, 30.5),
            radius: 5.0,
            props: PathProps {
                fill: Some(Color::from("white")),
                ..PathProps::default()
            },
        };
        assert_eq!(
            Element::from(circle).to_string(),
            r#"<circle cx="20" cy="30.5" r="5" fill="white"/>"#
        );
    }

    #[test]
    fn polyline_markup() {
        let line = Polyline {
            points: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
            props: PathProps {
                fill: Some(Color::None),
                stroke: Some(Color::Rgb(255, 160, 0)),
                stroke_width: Some(14.0),
                round: true,
            },
        };
        assert_eq!(
            Element::from(line).to_string(),
            r#"<polyline points="1,2 3,4" fill="none" stroke="rgb(255,160,0)" stroke-width="14" stroke-linecap="round" stroke-linejoin="round"/>"#
        );
    }

    #[test]
    fn text_markup_is_escaped() {
        let text = Text {
            position: Point::new(10.0, 20.0),
            offset: Point::new(7.0, -3.0),
            font_size: 20,
            font_family: Some("Verdana".into()),
            font_weight: None,
            data: "Tom & Jerry's <\"stop\">".into(),
            props: PathProps {
                fill: Some(Color::from("black")),
                ..PathProps::default()
            },
        };
        assert_eq!(
            Element::from(text).to_string(),
            r#"<text fill="black" x="10" y="20" dx="7" dy="-3" font-size="20" font-family="Verdana">Tom &amp; Jerry&apos;s &lt;&quot;stop&quot;&gt;</text>"#
        );
    }

    #[test]
    fn document_wrapper() {
        let mut doc = Document::new();
        doc.add(Circle {
            center: Point::new(1.0, 1.0),
            radius: 2.0,
            props: PathProps::default(),
        });
        assert_eq!(
            doc.to_string(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n  \
             <circle cx=\"1\" cy=\"1\" r=\"2\"/>\n\
             </svg>"
        );
    }
}
