use crate::feed_interface::{ConfidenceTier, Satellite};

/// Marker colour as 8-bit RGB, kept independent of any GUI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const LANDSAT_BASE: Rgb = Rgb(0xff, 0x44, 0x44);
const VIIRS_BASE: Rgb = Rgb(0xff, 0xaa, 0x33);
const MODIS_BASE: Rgb = Rgb(0xff, 0xdd, 0x33);

const LANDSAT_TINT: Rgb = Rgb(0xff, 0x88, 0x88);
const VIIRS_TINT: Rgb = Rgb(0xff, 0xcc, 0x88);
const MODIS_TINT: Rgb = Rgb(0xff, 0xee, 0x88);

/// Visual marker attributes derived from (satellite, confidence).
///
/// Size follows satellite resolution and confidence; low confidence keeps
/// the satellite's size tier but forces the lighter tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerIcon {
    pub size_px: f32,
    pub color: Rgb,
}

impl MarkerIcon {
    pub fn for_detection(satellite: Satellite, confidence: ConfidenceTier) -> Self {
        let (size_px, base) = match satellite {
            Satellite::Landsat => (
                match confidence {
                    ConfidenceTier::High => 14.0,
                    ConfidenceTier::Nominal => 12.0,
                    ConfidenceTier::Low => 10.0,
                },
                LANDSAT_BASE,
            ),
            Satellite::Viirs => (
                match confidence {
                    ConfidenceTier::High => 12.0,
                    ConfidenceTier::Nominal => 10.0,
                    ConfidenceTier::Low => 8.0,
                },
                VIIRS_BASE,
            ),
            Satellite::Modis => (
                match confidence {
                    ConfidenceTier::High => 10.0,
                    ConfidenceTier::Nominal => 8.0,
                    ConfidenceTier::Low => 6.0,
                },
                MODIS_BASE,
            ),
        };

        let color = if confidence == ConfidenceTier::Low {
            match satellite {
                Satellite::Landsat => LANDSAT_TINT,
                Satellite::Viirs => VIIRS_TINT,
                Satellite::Modis => MODIS_TINT,
            }
        } else {
            base
        };

        Self { size_px, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_size_tracks_satellite_and_confidence() {
        let high = MarkerIcon::for_detection(Satellite::Landsat, ConfidenceTier::High);
        let nominal = MarkerIcon::for_detection(Satellite::Landsat, ConfidenceTier::Nominal);
        let modis_low = MarkerIcon::for_detection(Satellite::Modis, ConfidenceTier::Low);
        assert_eq!(high.size_px, 14.0);
        assert_eq!(nominal.size_px, 12.0);
        assert_eq!(modis_low.size_px, 6.0);
    }

    #[test]
    fn icon_color_uses_satellite_base_for_high_and_nominal() {
        let viirs = MarkerIcon::for_detection(Satellite::Viirs, ConfidenceTier::High);
        assert_eq!(viirs.color, Rgb(0xff, 0xaa, 0x33));
        let modis = MarkerIcon::for_detection(Satellite::Modis, ConfidenceTier::Nominal);
        assert_eq!(modis.color, Rgb(0xff, 0xdd, 0x33));
    }

    #[test]
    fn low_confidence_forces_lighter_tint() {
        assert_eq!(
            MarkerIcon::for_detection(Satellite::Landsat, ConfidenceTier::Low).color,
            Rgb(0xff, 0x88, 0x88)
        );
        assert_eq!(
            MarkerIcon::for_detection(Satellite::Viirs, ConfidenceTier::Low).color,
            Rgb(0xff, 0xcc, 0x88)
        );
        assert_eq!(
            MarkerIcon::for_detection(Satellite::Modis, ConfidenceTier::Low).color,
            Rgb(0xff, 0xee, 0x88)
        );
    }
}
