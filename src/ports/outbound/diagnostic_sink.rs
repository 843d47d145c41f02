use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// One diagnostic record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub level: DiagnosticLevel,
    /// Component that produced the entry (e.g. a view label)
    pub source: String,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl DiagnosticEntry {
    pub fn error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            source: source.into(),
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn warning(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            source: source.into(),
            message: message.into(),
            at: Utc::now(),
        }
    }
}

/// DiagnosticSink port - where swallowed failures are recorded
///
/// Read-through views report fetch failures here instead of raising them.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, entry: DiagnosticEntry);
}
