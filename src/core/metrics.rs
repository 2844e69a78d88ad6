//! Logger metrics for observability
//!
//! Counters for lines handed to destinations, destination write failures and
//! lines discarded by the filter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_console_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_failed();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.failed_writes(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines accepted by their destination
    lines_written: AtomicU64,

    /// Lines whose destination returned an error
    failed_writes: AtomicU64,

    /// Lines dropped because the layout setting was not recognized
    lines_discarded: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
            lines_discarded: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lines_discarded(&self) -> u64 {
        self.lines_discarded.load(Ordering::Relaxed)
    }

    /// Record a written line, returning the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed write, returning the previous count
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a discarded line, returning the previous count
    #[inline]
    pub fn record_discarded(&self) -> u64 {
        self.lines_discarded.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been written yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_writes() as f64;
        let total = self.lines_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            failed_writes: AtomicU64::new(self.failed_writes()),
            lines_discarded: AtomicU64::new(self.lines_discarded()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.failed_writes(), 0);
        assert_eq!(metrics.lines_discarded(), 0);
    }

    #[test]
    fn test_record_returns_previous() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_discarded(), 0);
        assert_eq!(metrics.record_discarded(), 1);
        assert_eq!(metrics.lines_discarded(), 2);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_written();
        }
        for _ in 0..10 {
            metrics.record_failed();
        }
        let rate = metrics.failure_rate();
        assert!((rate - 10.0).abs() < 1e-9, "Failure rate was {}", rate);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let metrics = LoggerMetrics::new();
        metrics.record_written();
        metrics.record_failed();

        let snapshot = metrics.clone();
        metrics.record_written();

        assert_eq!(metrics.lines_written(), 2);
        assert_eq!(snapshot.lines_written(), 1);
        assert_eq!(snapshot.failed_writes(), 1);
    }
}
