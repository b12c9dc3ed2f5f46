//! Catalogue error types.
//!
//! These errors represent defects in the input data: references to stops or
//! buses that do not exist, missing road distances, and routes whose
//! statistics are undefined. Query misses (an unknown name asked about at
//! query time) are not errors and never appear here.

/// Errors raised while building or measuring the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A stop with this name was already added
    #[error("stop {0:?} is already defined")]
    DuplicateStop(String),

    /// A bus with this name was already added
    #[error("bus {0:?} is already defined")]
    DuplicateBus(String),

    /// A record references a stop that was never added
    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    /// A statistic was requested for a bus that was never added
    #[error("unknown bus {0:?}")]
    UnknownBus(String),

    /// A bus was defined without any stops
    #[error("bus {0:?} has no stops")]
    EmptyRoute(String),

    /// Neither direction of a road distance was supplied for adjacent stops
    #[error("no road distance known between {from:?} and {to:?}")]
    MissingDistance { from: String, to: String },

    /// Curvature is undefined because the geodesic route length is zero
    #[error("bus {0:?} has zero geodesic length, curvature is undefined")]
    DegenerateRoute(String),
}
