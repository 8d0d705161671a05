use crate::feed_interface::{ConfidenceTier, DetectionRecord, Satellite};

/// Two independent visibility facets: enabled confidence tiers and
/// enabled satellite sources. A marker is visible iff both facets allow it.
#[derive(Debug, Clone, Copy)]
pub struct FilterState {
    tiers: [bool; 3],
    sources: [bool; 3],
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            tiers: [true; 3],
            sources: [true; 3],
        }
    }
}

impl FilterState {
    pub fn all_enabled() -> Self {
        Self::default()
    }

    pub fn is_tier_enabled(&self, tier: ConfidenceTier) -> bool {
        self.tiers[tier.index()]
    }

    pub fn is_source_enabled(&self, source: Satellite) -> bool {
        self.sources[source.index()]
    }

    pub fn set_tier(&mut self, tier: ConfidenceTier, enabled: bool) {
        self.tiers[tier.index()] = enabled;
    }

    pub fn set_source(&mut self, source: Satellite, enabled: bool) {
        self.sources[source.index()] = enabled;
    }

    pub fn toggle_tier(&mut self, tier: ConfidenceTier) {
        self.tiers[tier.index()] = !self.tiers[tier.index()];
    }

    pub fn toggle_source(&mut self, source: Satellite) {
        self.sources[source.index()] = !self.sources[source.index()];
    }

    pub fn allows(&self, record: &DetectionRecord) -> bool {
        self.is_tier_enabled(record.confidence) && self.is_source_enabled(record.satellite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(satellite: Satellite, confidence: ConfidenceTier) -> DetectionRecord {
        DetectionRecord {
            satellite,
            confidence,
            latitude: 20.0,
            longitude: 78.0,
            acq_date: Utc::now(),
            brightness: 320.0,
            frp: 10.0,
        }
    }

    #[test]
    fn default_filters_allow_everything() {
        let filters = FilterState::default();
        for satellite in Satellite::ALL {
            for confidence in ConfidenceTier::ALL {
                assert!(filters.allows(&record(satellite, confidence)));
            }
        }
    }

    #[test]
    fn visibility_requires_both_facets() {
        let mut filters = FilterState::default();
        filters.set_tier(ConfidenceTier::Low, false);
        assert!(!filters.allows(&record(Satellite::Viirs, ConfidenceTier::Low)));
        assert!(filters.allows(&record(Satellite::Viirs, ConfidenceTier::High)));

        filters.set_source(Satellite::Viirs, false);
        assert!(!filters.allows(&record(Satellite::Viirs, ConfidenceTier::High)));
        assert!(filters.allows(&record(Satellite::Modis, ConfidenceTier::High)));
    }

    #[test]
    fn toggle_flips_a_single_facet() {
        let mut filters = FilterState::default();
        filters.toggle_source(Satellite::Landsat);
        assert!(!filters.is_source_enabled(Satellite::Landsat));
        assert!(filters.is_source_enabled(Satellite::Viirs));
        filters.toggle_source(Satellite::Landsat);
        assert!(filters.is_source_enabled(Satellite::Landsat));
    }
}
