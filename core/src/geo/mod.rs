pub mod coordinate;
pub mod projection;

pub use coordinate::Coordinate;
pub use projection::MapProjection;
