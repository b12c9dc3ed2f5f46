//! Domain types for the transport catalogue.
//!
//! Stops and buses are plain values owned by the catalogue. Other components
//! refer to them through the dense `StopId` and `BusId` indices, which are
//! stable for the lifetime of the catalogue.

mod bus;
mod error;
mod stop;

pub use bus::{Bus, BusId, BusStats};
pub use error::CatalogueError;
pub use stop::{Coordinates, Stop, StopId};
