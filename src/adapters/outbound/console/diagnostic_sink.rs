use crate::ports::outbound::{DiagnosticEntry, DiagnosticLevel, DiagnosticSink};

/// TracingDiagnosticSink adapter - forwards view diagnostics to `tracing`
///
/// Errors are emitted at `error` level and warnings at `warn`, so they show
/// up with the default log filter.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnosticSink;

impl TracingDiagnosticSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnosticSink {
    fn record(&self, entry: DiagnosticEntry) {
        let at = entry.at.to_rfc3339();
        match entry.level {
            DiagnosticLevel::Error => {
                tracing::error!(source = %entry.source, at = %at, "{}", entry.message)
            }
            DiagnosticLevel::Warning => {
                tracing::warn!(source = %entry.source, at = %at, "{}", entry.message)
            }
        }
    }
}
