/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the view and use cases use
/// to interact with external systems (chain node, file system, console, etc.).
pub mod board_formatter;
pub mod diagnostic_sink;
pub mod output_presenter;
pub mod progress_reporter;
pub mod record_provider;
pub mod record_source;

pub use board_formatter::BoardFormatter;
pub use diagnostic_sink::{DiagnosticEntry, DiagnosticLevel, DiagnosticSink};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use record_provider::RecordProvider;
pub use record_source::RecordSource;
