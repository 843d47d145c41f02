/// Type alias for Result with anyhow::Error as the error type.
/// Application plumbing propagates through this; provider failures use `ProviderError`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
