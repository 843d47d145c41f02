use crate::application::read_models::{BoardReport, ListingReport, ListingStatus, ReportMetadata};
use crate::ports::outbound::BoardFormatter;
use crate::registry::domain::Listing;
use crate::registry::view::TableRow;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BoardDocument<'a> {
    metadata: MetadataDocument<'a>,
    listings: Vec<ListingDocument<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MetadataDocument<'a> {
    snapshot_id: String,
    generated_at: String,
    source: &'a str,
    tool_name: &'a str,
    tool_version: &'a str,
}

#[derive(Debug, Serialize)]
struct ListingDocument<'a> {
    listing: Listing,
    title: &'a str,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
    rows: Vec<RowDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct RowDocument<'a> {
    index: usize,
    key: &'a str,
    name: &'a str,
    address: &'a str,
}

impl<'a> From<&'a ReportMetadata> for MetadataDocument<'a> {
    fn from(metadata: &'a ReportMetadata) -> Self {
        Self {
            snapshot_id: metadata.snapshot_id.to_string(),
            generated_at: metadata.generated_at.to_rfc3339(),
            source: &metadata.source,
            tool_name: &metadata.tool_name,
            tool_version: &metadata.tool_version,
        }
    }
}

impl<'a> From<&'a ListingReport> for ListingDocument<'a> {
    fn from(listing: &'a ListingReport) -> Self {
        let reason = match &listing.status {
            ListingStatus::Unavailable { reason } => Some(reason.as_str()),
            _ => None,
        };
        Self {
            listing: listing.listing,
            title: listing.title(),
            status: listing.status.to_string(),
            reason,
            rows: listing.table.rows().iter().map(RowDocument::from).collect(),
        }
    }
}

impl<'a> From<&'a TableRow> for RowDocument<'a> {
    fn from(row: &'a TableRow) -> Self {
        Self {
            index: row.index,
            key: row.key(),
            name: &row.name,
            address: &row.address,
        }
    }
}

/// JsonFormatter adapter for machine-readable board output
///
/// Rows carry both their display index and a `key` (the record address),
/// so consumers can track records across reorderings.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardFormatter for JsonFormatter {
    fn format(&self, report: &BoardReport) -> Result<String> {
        let document = BoardDocument {
            metadata: MetadataDocument::from(&report.metadata),
            listings: report.listings.iter().map(ListingDocument::from).collect(),
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
