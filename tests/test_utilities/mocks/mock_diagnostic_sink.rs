use relief_board::prelude::*;
use std::sync::Mutex;

/// Mock DiagnosticSink collecting every recorded entry
#[derive(Default)]
pub struct MockDiagnosticSink {
    entries: Mutex<Vec<DiagnosticEntry>>,
}

impl MockDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl DiagnosticSink for MockDiagnosticSink {
    fn record(&self, entry: DiagnosticEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}
