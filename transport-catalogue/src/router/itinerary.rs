//! Itinerary types.
//!
//! An `Itinerary` answers a from/to query as an ordered list of waits and
//! bus rides. Each ride is preceded by exactly one wait at its boarding stop.

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryItem {
    /// Wait at a stop before boarding
    Wait { stop_name: String, time: f64 },
    /// Ride a bus for `span_count` hops
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl ItineraryItem {
    /// Duration of this step in minutes.
    pub fn time(&self) -> f64 {
        match self {
            ItineraryItem::Wait { time, .. } => *time,
            ItineraryItem::Bus { time, .. } => *time,
        }
    }

    /// Returns true if this is a wait step.
    pub fn is_wait(&self) -> bool {
        matches!(self, ItineraryItem::Wait { .. })
    }

    /// Returns true if this is a ride step.
    pub fn is_bus(&self) -> bool {
        matches!(self, ItineraryItem::Bus { .. })
    }
}

/// An ordered sequence of waits and rides from one stop to another.
///
/// # Invariants
///
/// - Items alternate Wait, Bus, Wait, Bus, ...
/// - `total_time` is the sum of item times
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary {
    items: Vec<ItineraryItem>,
    total_time: f64,
}

impl Itinerary {
    /// Create an empty itinerary (origin equals destination).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a wait followed by the ride it precedes.
    pub(crate) fn push_ride(&mut self, wait: ItineraryItem, ride: ItineraryItem) {
        debug_assert!(wait.is_wait() && ride.is_bus());
        self.total_time += wait.time() + ride.time();
        self.items.push(wait);
        self.items.push(ride);
    }

    /// Steps in travel order.
    pub fn items(&self) -> &[ItineraryItem] {
        &self.items
    }

    /// Total minutes from the first wait to the last alighting.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Number of buses boarded.
    pub fn rides(&self) -> usize {
        self.items.iter().filter(|i| i.is_bus()).count()
    }

    /// Returns true if no travel is needed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
