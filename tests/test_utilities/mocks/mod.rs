/// Mock implementations for testing
mod mock_diagnostic_sink;
mod mock_progress_reporter;
mod mock_record_provider;
mod mock_record_source;

pub use mock_diagnostic_sink::MockDiagnosticSink;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_record_provider::MockRecordProvider;
pub use mock_record_source::MockRecordSource;
