//! Routing configuration for the route planner.

use serde::Deserialize;

/// Minutes per hour.
const MINUTES_PER_HOUR: f64 = 60.0;

/// Meters per kilometer.
const METERS_PER_KILOMETER: f64 = 1000.0;

/// Wait time and travel speed used to weight the route graph.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoutingSettings {
    /// Time spent waiting at a stop before each boarding (minutes).
    pub bus_wait_time: f64,

    /// Bus speed between stops (km/h).
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings with the given wait time (minutes) and velocity (km/h).
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Bus speed expressed in meters per minute.
    pub fn meters_per_minute(&self) -> f64 {
        self.bus_velocity * METERS_PER_KILOMETER / MINUTES_PER_HOUR
    }

    /// Minutes needed to ride `meters` at the configured velocity.
    pub fn ride_minutes(&self, meters: u32) -> f64 {
        f64::from(meters) / self.meters_per_minute()
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6.0,
            bus_velocity: 40.0,
        }
    }
}
