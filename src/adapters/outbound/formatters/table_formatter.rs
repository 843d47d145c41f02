use crate::application::read_models::{BoardReport, ListingReport, ListingStatus};
use crate::ports::outbound::BoardFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::borrow::Cow;

const INDEX_HEADER: &str = "#";
const ADDRESS_HEADER: &str = "Address";
const COLUMN_GAP: &str = "  ";

/// TableFormatter adapter for aligned plain-text tables on a terminal
///
/// Column widths are measured in characters. Headers are bold when colour is
/// enabled; padding is applied before styling so alignment is unaffected.
pub struct TableFormatter {
    color: bool,
}

impl TableFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn style_title(&self, title: &str) -> String {
        if self.color {
            title.bold().underline().to_string()
        } else {
            title.to_string()
        }
    }

    fn style_header(&self, header: &str) -> String {
        if self.color {
            header.bold().to_string()
        } else {
            header.to_string()
        }
    }

    fn style_marker(&self, marker: &str) -> String {
        if self.color {
            marker.red().to_string()
        } else {
            marker.to_string()
        }
    }

    fn pad(text: &str, width: usize) -> String {
        let length = text.chars().count();
        format!("{}{}", text, " ".repeat(width.saturating_sub(length)))
    }

    /// Control characters are shown as escapes so record data cannot move the cursor
    fn printable(text: &str) -> Cow<'_, str> {
        if !text.chars().any(char::is_control) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(
            text.chars()
                .map(|c| {
                    if c.is_control() {
                        c.escape_debug().to_string()
                    } else {
                        c.to_string()
                    }
                })
                .collect(),
        )
    }

    fn render_listing(&self, output: &mut String, listing: &ListingReport) {
        output.push_str(&self.style_title(listing.title()));
        match &listing.status {
            ListingStatus::Loaded => {}
            ListingStatus::Unavailable { .. } => {
                output.push(' ');
                output.push_str(&self.style_marker("(unavailable)"));
            }
            ListingStatus::Discarded => {
                output.push(' ');
                output.push_str(&self.style_marker("(discarded)"));
            }
        }
        output.push('\n');

        let rows: Vec<(String, Cow<'_, str>, Cow<'_, str>)> = listing
            .table
            .rows()
            .iter()
            .map(|row| {
                (
                    row.index.to_string(),
                    Self::printable(&row.name),
                    Self::printable(&row.address),
                )
            })
            .collect();
        let index_width = rows
            .iter()
            .map(|(index, _, _)| index.len())
            .chain(std::iter::once(INDEX_HEADER.len()))
            .max()
            .unwrap_or(1);
        let name_width = rows
            .iter()
            .map(|(_, name, _)| name.chars().count())
            .chain(std::iter::once(listing.name_column().chars().count()))
            .max()
            .unwrap_or(0);

        let header = format!(
            "{}{}{}{}{}",
            self.style_header(&Self::pad(INDEX_HEADER, index_width)),
            COLUMN_GAP,
            self.style_header(&Self::pad(listing.name_column(), name_width)),
            COLUMN_GAP,
            self.style_header(ADDRESS_HEADER)
        );
        output.push_str(header.trim_end());
        output.push('\n');

        if rows.is_empty() {
            output.push_str("(no entries)\n");
            return;
        }

        for (index, name, address) in &rows {
            let line = format!(
                "{}{}{}{}{}",
                Self::pad(index, index_width),
                COLUMN_GAP,
                Self::pad(name, name_width),
                COLUMN_GAP,
                address
            );
            output.push_str(line.trim_end());
            output.push('\n');
        }
    }
}

impl BoardFormatter for TableFormatter {
    fn format(&self, report: &BoardReport) -> Result<String> {
        let mut output = String::new();
        for (position, listing) in report.listings.iter().enumerate() {
            if position > 0 {
                output.push('\n');
            }
            self.render_listing(&mut output, listing);
        }
        Ok(output)
    }
}
