use std::sync::Mutex;

/// Counters for feed polls and prediction requests, shared behind a mutex
/// so the recorder can be read from tests and status views.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Default)]
struct Metrics {
    polls_succeeded: usize,
    polls_failed: usize,
    predictions_issued: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_poll_success(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.polls_succeeded += 1;
        }
    }

    pub fn record_poll_failure(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.polls_failed += 1;
        }
    }

    pub fn record_prediction(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.predictions_issued += 1;
        }
    }

    /// (polls succeeded, polls failed, predictions issued)
    pub fn snapshot(&self) -> (usize, usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (
                metrics.polls_succeeded,
                metrics.polls_failed,
                metrics.predictions_issued,
            )
        } else {
            (0, 0, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_counts_each_outcome_independently() {
        let recorder = MetricsRecorder::new();
        recorder.record_poll_success();
        recorder.record_poll_success();
        recorder.record_poll_failure();
        recorder.record_prediction();
        assert_eq!(recorder.snapshot(), (2, 1, 1));
    }
}
