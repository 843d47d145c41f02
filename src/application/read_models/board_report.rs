//! Board read model
//!
//! Aggregates the rendered listings of one run together with run metadata.

use crate::registry::domain::Listing;
use crate::registry::view::{FetchOutcome, RenderedTable};
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// How a listing's fetch ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingStatus {
    Loaded,
    /// The provider failed; the table is empty
    Unavailable { reason: String },
    /// The view was torn down before its fetch settled
    Discarded,
}

impl ListingStatus {
    pub fn from_outcome(outcome: &FetchOutcome) -> Self {
        match outcome {
            FetchOutcome::Loaded { .. } => ListingStatus::Loaded,
            FetchOutcome::Failed(error) => ListingStatus::Unavailable {
                reason: error.to_string(),
            },
            FetchOutcome::Discarded => ListingStatus::Discarded,
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingStatus::Loaded => write!(f, "loaded"),
            ListingStatus::Unavailable { .. } => write!(f, "unavailable"),
            ListingStatus::Discarded => write!(f, "discarded"),
        }
    }
}

/// One listing as rendered by its view
#[derive(Debug, Clone)]
pub struct ListingReport {
    pub listing: Listing,
    pub status: ListingStatus,
    pub table: RenderedTable,
}

impl ListingReport {
    pub fn new(listing: Listing, status: ListingStatus, table: RenderedTable) -> Self {
        Self {
            listing,
            status,
            table,
        }
    }

    pub fn title(&self) -> &'static str {
        self.listing.title()
    }

    pub fn name_column(&self) -> &'static str {
        self.listing.name_column()
    }

    pub fn is_loaded(&self) -> bool {
        self.status == ListingStatus::Loaded
    }
}

/// Metadata of one board run
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    pub snapshot_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Where the records came from (RPC endpoint and contract, or snapshot file)
    pub source: String,
    pub tool_name: String,
    pub tool_version: String,
}

impl ReportMetadata {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            snapshot_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            source: source.into(),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Main read model handed to formatters
#[derive(Debug, Clone)]
pub struct BoardReport {
    pub metadata: ReportMetadata,
    pub listings: Vec<ListingReport>,
}

impl BoardReport {
    pub fn new(metadata: ReportMetadata, listings: Vec<ListingReport>) -> Self {
        Self { metadata, listings }
    }

    /// Number of listings that did not load
    pub fn unavailable_count(&self) -> usize {
        self.listings.iter().filter(|l| !l.is_loaded()).count()
    }

    pub fn total_rows(&self) -> usize {
        self.listings.iter().map(|l| l.table.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::domain::AuthorityRecord;
    use crate::registry::view::render;
    use crate::shared::error::ProviderError;

    #[test]
    fn test_status_from_outcome() {
        assert_eq!(
            ListingStatus::from_outcome(&FetchOutcome::Loaded { count: 3 }),
            ListingStatus::Loaded
        );
        assert_eq!(
            ListingStatus::from_outcome(&FetchOutcome::Failed(ProviderError::Network(
                "connection refused".to_string()
            ))),
            ListingStatus::Unavailable {
                reason: "network error: connection refused".to_string()
            }
        );
        assert_eq!(
            ListingStatus::from_outcome(&FetchOutcome::Discarded),
            ListingStatus::Discarded
        );
    }

    #[test]
    fn test_report_counts() {
        let table = render(&[
            AuthorityRecord::new("Delhi", "0xAA"),
            AuthorityRecord::new("Kerala", "0xBB"),
        ]);
        let report = BoardReport::new(
            ReportMetadata::new("snapshot board.json"),
            vec![
                ListingReport::new(Listing::State, ListingStatus::Loaded, table),
                ListingReport::new(
                    Listing::Supply,
                    ListingStatus::Unavailable {
                        reason: "timeout".to_string(),
                    },
                    RenderedTable::default(),
                ),
            ],
        );

        assert_eq!(report.unavailable_count(), 1);
        assert_eq!(report.total_rows(), 2);
        assert_eq!(report.listings[0].title(), "State Authorities");
        assert_eq!(report.listings[1].name_column(), "Requester Name");
    }

    #[test]
    fn test_metadata_identifies_tool() {
        let metadata = ReportMetadata::new("rpc");
        assert_eq!(metadata.tool_name, "relief-board");
        assert!(!metadata.tool_version.is_empty());
        assert_ne!(metadata.snapshot_id, ReportMetadata::new("rpc").snapshot_id);
    }
}
