use crate::geo::Coordinate;

/// Equirectangular projection between geographic coordinates and a
/// rectangular canvas of a given pixel size.
#[derive(Debug, Clone, Copy)]
pub struct MapProjection {
    pub width: f32,
    pub height: f32,
}

impl MapProjection {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn to_xy(&self, lat: f64, lon: f64) -> (f32, f32) {
        let x = ((lon + 180.0) / 360.0) as f32 * self.width;
        let y = ((90.0 - lat) / 180.0) as f32 * self.height;
        (x, y)
    }

    /// Inverse mapping used for canvas clicks. Pixels outside the canvas
    /// clamp to the nearest valid coordinate.
    pub fn to_coordinate(&self, x: f32, y: f32) -> Coordinate {
        let lon = (f64::from(x / self.width) * 360.0 - 180.0).clamp(-180.0, 180.0);
        let lat = (90.0 - f64::from(y / self.height) * 180.0).clamp(-90.0, 90.0);
        Coordinate { lat, lon }
    }
}
