pub mod collection;
pub mod filter;
pub mod icon;
pub mod stats;

pub use collection::{FireMarker, MarkerCollections};
pub use filter::FilterState;
pub use icon::{MarkerIcon, Rgb};
pub use stats::BatchStats;
