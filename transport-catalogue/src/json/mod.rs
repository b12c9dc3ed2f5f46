//! JSON output helpers.
//!
//! Parsing uses serde derives directly; responses are assembled with the
//! validating [`Builder`].

mod builder;

pub use builder::{Builder, BuilderError, BuilderState};
