use std::time::Duration;

/// Explicit polling configuration for the live feed. The interval doubles
/// per consecutive failure up to `max_interval`, then recovers to the base
/// interval on the next success.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            max_interval: Duration::from_secs(120),
        }
    }
}

impl PollPolicy {
    pub fn new(interval: Duration, max_interval: Duration) -> Self {
        Self {
            interval,
            max_interval,
        }
    }

    /// Delay to wait before the next poll given the current failure streak.
    pub fn delay_after(&self, consecutive_failures: u32) -> Duration {
        let shift = consecutive_failures.min(6);
        let stretched = self.interval.saturating_mul(1u32 << shift);
        stretched.min(self.max_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_is_base_interval_without_failures() {
        let policy = PollPolicy::default();
        assert_eq!(policy.delay_after(0), Duration::from_secs(10));
    }

    #[test]
    fn delay_doubles_per_failure() {
        let policy = PollPolicy::new(Duration::from_secs(10), Duration::from_secs(600));
        assert_eq!(policy.delay_after(1), Duration::from_secs(20));
        assert_eq!(policy.delay_after(2), Duration::from_secs(40));
        assert_eq!(policy.delay_after(3), Duration::from_secs(80));
    }

    #[test]
    fn delay_is_capped_at_max_interval() {
        let policy = PollPolicy::default();
        assert_eq!(policy.delay_after(10), Duration::from_secs(120));
        // the shift itself saturates, so large streaks cannot overflow
        assert_eq!(policy.delay_after(u32::MAX), Duration::from_secs(120));
    }
}
