/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use cases, keeping the
/// registry core isolated from argument parsing.
mod listing_request;
mod output_format;

pub use listing_request::ListingRequest;
pub use output_format::OutputFormat;
