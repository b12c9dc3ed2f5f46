//! Projection of geographic coordinates onto the map canvas.

use super::svg::Point;
use crate::domain::Coordinates;

const EPSILON: f64 = 1e-6;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Linear projection that fits a set of coordinates into a padded canvas.
///
/// Longitude grows to the right and latitude grows upwards, so the
/// northernmost point lands on the top padding line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    /// Fit `points` into a `width` x `height` canvas with `padding` margins.
    ///
    /// The zoom is the smaller of the horizontal and vertical zooms; an axis
    /// whose points all share one value does not constrain it. With no points,
    /// or all points identical, the zoom is zero.
    pub fn new<I>(points: I, width: f64, height: f64, padding: f64) -> Self
    where
        I: IntoIterator<Item = Coordinates>,
    {
        let mut iter = points.into_iter().peekable();
        if iter.peek().is_none() {
            return Self {
                padding,
                min_lng: 0.0,
                max_lat: 0.0,
                zoom: 0.0,
            };
        }

        let (mut min_lng, mut max_lng) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        for c in iter {
            min_lng = min_lng.min(c.lng);
            max_lng = max_lng.max(c.lng);
            min_lat = min_lat.min(c.lat);
            max_lat = max_lat.max(c.lat);
        }

        let width_zoom =
            (!is_zero(max_lng - min_lng)).then(|| (width - 2.0 * padding) / (max_lng - min_lng));
        let height_zoom =
            (!is_zero(max_lat - min_lat)).then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };

        Self {
            padding,
            min_lng,
            max_lat,
            zoom,
        }
    }

    /// Canvas position of `coords`.
    pub fn project(&self, coords: Coordinates) -> Point {
        Point {
            x: (coords.lng - self.min_lng) * self.zoom + self.padding,
            y: (self.max_lat - coords.lat) * self.zoom + self.padding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fits_the_limiting_axis() {
        let points = [Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 2.0)];
        let proj = SphereProjector::new(points, 200.0, 200.0, 10.0);

        // width zoom 90, height zoom 180 -> 90
        let top_right = proj.project(Coordinates::new(1.0, 2.0));
        assert_relative_eq!(top_right.x, 190.0);
        assert_relative_eq!(top_right.y, 10.0);

        let bottom_left = proj.project(Coordinates::new(0.0, 0.0));
        assert_relative_eq!(bottom_left.x, 10.0);
        assert_relative_eq!(bottom_left.y, 100.0);
    }

    #[test]
    fn flat_axis_uses_the_other() {
        let points = [Coordinates::new(5.0, 0.0), Coordinates::new(5.0, 4.0)];
        let proj = SphereProjector::new(points, 100.0, 50.0, 10.0);

        let p = proj.project(Coordinates::new(5.0, 4.0));
        assert_relative_eq!(p.x, 90.0);
        assert_relative_eq!(p.y, 10.0);
    }

    #[test]
    fn single_point_lands_on_padding() {
        let proj = SphereProjector::new([Coordinates::new(55.0, 37.0)], 100.0, 100.0, 25.0);
        let p = proj.project(Coordinates::new(55.0, 37.0));
        assert_eq!(p, Point { x: 25.0, y: 25.0 });
    }

    #[test]
    fn no_points() {
        let proj = SphereProjector::new(std::iter::empty(), 100.0, 100.0, 5.0);
        let p = proj.project(Coordinates::new(10.0, 10.0));
        assert_eq!(p, Point { x: 5.0, y: 5.0 });
    }
}
