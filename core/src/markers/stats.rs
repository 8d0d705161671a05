use crate::feed_interface::{ConfidenceTier, DetectionRecord};
use chrono::{DateTime, Duration, Utc};

/// Summary counters recomputed from the full batch on every successful
/// poll, independent of the active filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchStats {
    pub total: usize,
    pub high_confidence: usize,
    pub last_24h: usize,
}

impl BatchStats {
    pub fn from_records(records: &[DetectionRecord], now: DateTime<Utc>) -> Self {
        let day_ago = now - Duration::hours(24);
        Self {
            total: records.len(),
            high_confidence: records
                .iter()
                .filter(|r| r.confidence == ConfidenceTier::High)
                .count(),
            last_24h: records.iter().filter(|r| r.acq_date > day_ago).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed_interface::Satellite;

    fn record(confidence: ConfidenceTier, hours_ago: i64) -> DetectionRecord {
        DetectionRecord {
            satellite: Satellite::Viirs,
            confidence,
            latitude: 20.0,
            longitude: 78.0,
            acq_date: Utc::now() - Duration::hours(hours_ago),
            brightness: 320.0,
            frp: 8.0,
        }
    }

    #[test]
    fn stats_count_total_high_and_recent() {
        // 5 records: exactly 2 high confidence, exactly 3 within 24 hours.
        let now = Utc::now();
        let batch = vec![
            record(ConfidenceTier::High, 1),
            record(ConfidenceTier::High, 30),
            record(ConfidenceTier::Nominal, 2),
            record(ConfidenceTier::Low, 23),
            record(ConfidenceTier::Low, 48),
        ];
        let stats = BatchStats::from_records(&batch, now);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.high_confidence, 2);
        assert_eq!(stats.last_24h, 3);
    }

    #[test]
    fn stats_of_empty_batch_are_zero() {
        let stats = BatchStats::from_records(&[], Utc::now());
        assert_eq!(stats, BatchStats::default());
    }

    #[test]
    fn boundary_record_exactly_24h_old_is_excluded() {
        let now = Utc::now();
        let mut old = record(ConfidenceTier::Nominal, 0);
        old.acq_date = now - Duration::hours(24);
        let stats = BatchStats::from_records(&[old], now);
        assert_eq!(stats.last_24h, 0);
    }
}
