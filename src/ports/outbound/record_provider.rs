use crate::registry::domain::AuthorityRecord;
use crate::shared::error::ProviderError;
use async_trait::async_trait;

/// RecordProvider port - read capability over one registry listing
///
/// This port abstracts the external store (e.g. the relief registry contract
/// reached over JSON-RPC) that a read-through view fetches from.
///
/// # Async Support
/// Implementations must be `Send + Sync`: views run the fetch on a spawned task.
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Fetches every record of the listing, in the order the store returns them
    ///
    /// # Errors
    /// Returns a `ProviderError` if:
    /// - The network request fails or times out
    /// - The contract call reverts
    /// - The response cannot be decoded
    async fn fetch_all(&self) -> Result<Vec<AuthorityRecord>, ProviderError>;
}
