use crate::application::read_models::BoardReport;
use crate::shared::Result;

/// BoardFormatter port for formatting board output
///
/// This port abstracts the formatting logic for the output formats
/// (terminal table, Markdown, JSON).
pub trait BoardFormatter {
    /// Formats every listing of the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &BoardReport) -> Result<String>;
}
