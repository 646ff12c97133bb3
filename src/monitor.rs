//! Observability channel for diagnostics and long-batch progress.

use std::sync::Mutex;

use tracing::{debug, warn};

use crate::types::{LogMessage, ProgressUnit};

/// Sink for per-record diagnostics and incremental progress updates.
///
/// Stages call this after each record; implementations must not block the
/// batch. Diagnostics cover non-fatal anomalies (for example an identifier
/// with no category match), progress covers long-running scoring loops.
pub trait Monitor: Send + Sync {
    /// Record a one-line diagnostic for a non-fatal per-record anomaly.
    fn diagnostic(&self, message: &str);
    /// Record incremental progress: `processed` out of `total` units.
    fn progress(&self, processed: usize, total: usize, unit: &str);
}

/// Default monitor emitting structured tracing events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingMonitor;

impl Monitor for TracingMonitor {
    fn diagnostic(&self, message: &str) {
        warn!(detail = %message, "enrichment diagnostic");
    }

    fn progress(&self, processed: usize, total: usize, unit: &str) {
        debug!(processed, total, unit = %unit, "enrichment progress");
    }
}

/// Monitor that records every event in memory, for tests and audits.
#[derive(Debug, Default)]
pub struct RecordingMonitor {
    diagnostics: Mutex<Vec<LogMessage>>,
    progress: Mutex<Vec<(usize, usize, ProgressUnit)>>,
}

impl RecordingMonitor {
    /// Create an empty recording monitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics recorded so far, in emission order.
    pub fn diagnostics(&self) -> Vec<LogMessage> {
        self.diagnostics.lock().expect("monitor lock").clone()
    }

    /// `(processed, total)` progress pairs recorded so far.
    pub fn progress_updates(&self) -> Vec<(usize, usize)> {
        self.progress
            .lock()
            .expect("monitor lock")
            .iter()
            .map(|(processed, total, _)| (*processed, *total))
            .collect()
    }

    /// Unit labels recorded so far, one per progress update.
    pub fn units(&self) -> Vec<ProgressUnit> {
        self.progress
            .lock()
            .expect("monitor lock")
            .iter()
            .map(|(_, _, unit)| unit.clone())
            .collect()
    }
}

impl Monitor for RecordingMonitor {
    fn diagnostic(&self, message: &str) {
        self.diagnostics
            .lock()
            .expect("monitor lock")
            .push(message.to_string());
    }

    fn progress(&self, processed: usize, total: usize, unit: &str) {
        self.progress
            .lock()
            .expect("monitor lock")
            .push((processed, total, unit.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_monitor_keeps_emission_order() {
        let monitor = RecordingMonitor::new();
        monitor.diagnostic("first");
        monitor.progress(1, 2, "text");
        monitor.diagnostic("second");
        monitor.progress(2, 2, "row");

        assert_eq!(monitor.diagnostics(), vec!["first", "second"]);
        assert_eq!(monitor.progress_updates(), vec![(1, 2), (2, 2)]);
        assert_eq!(monitor.units(), vec!["text", "row"]);
    }
}
