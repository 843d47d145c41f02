//! Read models for CQRS-lite pattern
//!
//! View-optimized structs handed to the formatters.

pub mod board_report;

pub use board_report::{BoardReport, ListingReport, ListingStatus, ReportMetadata};
