use crate::application::read_models::{BoardReport, ListingReport, ListingStatus};
use crate::ports::outbound::BoardFormatter;
use crate::shared::Result;

/// MarkdownFormatter adapter for rendering the board as Markdown tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace(['\r', '\n'], " ")
    }

    fn render_header(&self, output: &mut String, report: &BoardReport) {
        output.push_str("# Relief Board\n\n");
        output.push_str(&format!(
            "Source: {}  \nGenerated: {}\n\n",
            Self::escape_markdown_table_cell(&report.metadata.source),
            report.metadata.generated_at.to_rfc3339()
        ));
    }

    fn render_listing(&self, output: &mut String, listing: &ListingReport) {
        output.push_str(&format!("## {}\n\n", listing.title()));

        match &listing.status {
            ListingStatus::Loaded => {}
            ListingStatus::Unavailable { reason } => {
                output.push_str(&format!(
                    "> ⚠️ Unavailable: {}\n\n",
                    Self::escape_markdown_table_cell(reason)
                ));
            }
            ListingStatus::Discarded => {
                output.push_str("> ⚠️ Discarded before the fetch completed\n\n");
            }
        }

        output.push_str(&format!("| # | {} | Address |\n", listing.name_column()));
        output.push_str("|---|---|---|\n");
        for row in listing.table.rows() {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                row.index,
                Self::escape_markdown_table_cell(&row.name),
                Self::escape_markdown_table_cell(&row.address)
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardFormatter for MarkdownFormatter {
    fn format(&self, report: &BoardReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, report);
        for listing in &report.listings {
            self.render_listing(&mut output, listing);
        }
        Ok(output)
    }
}
