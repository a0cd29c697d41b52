use serde::Serialize;
use std::sync::Mutex;

/// Counts reductions and failures across a workflow run.
pub struct MetricsRecorder {
    inner: Mutex<Counters>,
}

#[derive(Default)]
struct Counters {
    reductions: usize,
    failures: usize,
}

/// Point-in-time view of the counters, embeddable in run reports.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MetricsSnapshot {
    pub reductions: usize,
    pub failures: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters::default()),
        }
    }

    pub fn record_reduction(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.reductions += 1;
        }
    }

    pub fn record_failure(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.failures += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(counters) = self.inner.lock() {
            MetricsSnapshot {
                reductions: counters.reductions,
                failures: counters.failures,
            }
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_counts() {
        let metrics = MetricsRecorder::new();
        metrics.record_reduction();
        metrics.record_reduction();
        metrics.record_failure();
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.reductions, 2);
        assert_eq!(snapshot.failures, 1);
    }
}
