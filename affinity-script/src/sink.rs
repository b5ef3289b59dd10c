//! Where `@showstats` output goes.

use affinity_core::StatsReport;
use tracing::info;

/// Receiver for rendered stat dumps.
pub trait StatsSink {
    /// Write one report.
    fn emit(&mut self, report: &StatsReport);
}

/// Writes each report line to the `tracing` log at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl StatsSink for TracingSink {
    fn emit(&mut self, report: &StatsReport) {
        for line in report.lines() {
            info!(target: "affinity::stats", "{line}");
        }
    }
}

/// Collects rendered reports in memory, for UI panels and tests.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    reports: Vec<String>,
}

impl BufferSink {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every report emitted so far, rendered.
    #[must_use]
    pub fn reports(&self) -> &[String] {
        &self.reports
    }

    /// Most recent report, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.reports.last().map(String::as_str)
    }
}

impl StatsSink for BufferSink {
    fn emit(&mut self, report: &StatsReport) {
        self.reports.push(report.to_string());
    }
}

impl<S: StatsSink + ?Sized> StatsSink for &mut S {
    fn emit(&mut self, report: &StatsReport) {
        (**self).emit(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use affinity_core::{DEFAULT_ROSTER, RelationshipStore};

    #[test]
    fn buffer_collects_rendered_reports() {
        let mut store = RelationshipStore::with_roster(DEFAULT_ROSTER);
        let mut sink = BufferSink::new();
        sink.emit(&store.dump_stats());
        store.add_points("brownsugar", 20);
        sink.emit(&store.dump_stats());

        assert_eq!(sink.reports().len(), 2);
        let last = sink.last().expect("two reports");
        assert!(last.contains("brownsugar: 20/100 (Acquaintance)"));
    }

    fn emit_into<S: StatsSink>(mut sink: S, report: &StatsReport) {
        sink.emit(report);
    }

    #[test]
    fn borrowed_sink_forwards() {
        let store = RelationshipStore::with_roster(["brownsugar"]);
        let mut sink = BufferSink::new();
        emit_into(&mut sink, &store.dump_stats());
        assert_eq!(sink.reports().len(), 1);
    }
}
