use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TableFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::BoardFormatter;

/// Factory for creating board formatters
///
/// Selects the formatter adapter for an output format. Lives in the
/// application layer because it picks infrastructure on the application's
/// behalf.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the specified output format
    ///
    /// `color` only affects the terminal table.
    ///
    /// # Examples
    /// ```
    /// use relief_board::application::dto::OutputFormat;
    /// use relief_board::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn BoardFormatter> {
        match format {
            OutputFormat::Table => Box::new(TableFormatter::new(color)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use relief_board::application::dto::OutputFormat;
    /// use relief_board::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Rendering JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Table => "📝 Rendering table output...",
            OutputFormat::Markdown => "📝 Rendering Markdown output...",
            OutputFormat::Json => "📝 Rendering JSON output...",
        }
    }
}
