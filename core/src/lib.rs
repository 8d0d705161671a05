//! Domain model and shared logic for the wildfire-risk dashboard.
//!
//! The modules mirror the legacy browser layer while providing typed
//! records, derived marker visibility, and well-defined summary statistics.

pub mod feed_interface;
pub mod geo;
pub mod markers;
pub mod polling;
pub mod prelude;
pub mod telemetry;

pub use prelude::{DomainError, DomainResult};
