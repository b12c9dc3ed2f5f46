//! Stops and geographic coordinates.

use std::fmt;

/// Mean Earth radius used for great-circle distances, in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in meters.
    ///
    /// Identical coordinates are exactly zero apart, which keeps
    /// `acos` away from rounding just above 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use transport_catalogue::domain::Coordinates;
    ///
    /// let a = Coordinates::new(55.611087, 37.20829);
    /// assert_eq!(a.distance_to(&a), 0.0);
    ///
    /// let b = Coordinates::new(55.595884, 37.209755);
    /// let d = a.distance_to(&b);
    /// assert!((d - 1692.99).abs() < 1.0);
    /// ```
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }
        let dr = std::f64::consts::PI / 180.0;
        let cos_angle = (self.lat * dr).sin() * (other.lat * dr).sin()
            + (self.lat * dr).cos() * (other.lat * dr).cos() * ((self.lng - other.lng).abs() * dr).cos();
        cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
    }
}

/// Dense index of a stop in catalogue insertion order.
///
/// The same index doubles as the stop's node in the route graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

impl StopId {
    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named location on the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub coordinates: Coordinates,
}

impl Stop {
    /// Creates a stop.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}
