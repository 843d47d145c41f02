//! relief-board - read-only board for a disaster-relief registry contract
//!
//! This library reads the authority and request listings kept by a relief
//! registry contract (either live over JSON-RPC or from an exported JSON
//! snapshot) and renders them as tables.
//!
//! Each listing is loaded through a read-through view: mounting the view issues
//! exactly one read call to its provider, stores the result wholesale and
//! exposes a derived table. Failed reads are recorded to a diagnostic sink and
//! leave the view empty.
//!
//! # Architecture
//!
//! - **Registry core** (`registry`): records, listings, view state and the read-through view
//! - **Application Layer** (`application`): use cases, DTOs, read models and factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): JSON-RPC and snapshot providers, formatters, console output
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use relief_board::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<()> {
//! let source = SnapshotRecordSource::new(PathBuf::from("board.json"))?;
//! let use_case = ShowListingsUseCase::new(
//!     source,
//!     Arc::new(TracingDiagnosticSink::new()),
//!     StderrProgressReporter::new(),
//! );
//!
//! let report = use_case.execute(ListingRequest::all()).await?;
//! let output = MarkdownFormatter::new().format(&report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod registry;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, TracingDiagnosticSink};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, SnapshotRecordSource, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TableFormatter,
    };
    pub use crate::adapters::outbound::network::{
        ContractRecordSource, ContractSettings, FieldOrder,
    };
    pub use crate::application::dto::{ListingRequest, OutputFormat};
    pub use crate::application::read_models::{BoardReport, ListingReport, ListingStatus};
    pub use crate::application::use_cases::ShowListingsUseCase;
    pub use crate::ports::outbound::{
        BoardFormatter, DiagnosticEntry, DiagnosticLevel, DiagnosticSink, OutputPresenter,
        ProgressReporter, RecordProvider, RecordSource,
    };
    pub use crate::registry::domain::{AuthorityRecord, Listing};
    pub use crate::registry::view::{FetchOutcome, ReadThroughView, RenderedTable, TableRow};
    pub use crate::shared::error::{ProviderError, ReliefBoardError};
    pub use crate::shared::Result;
}
