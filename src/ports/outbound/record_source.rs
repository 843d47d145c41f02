use crate::ports::outbound::RecordProvider;
use crate::registry::domain::Listing;
use crate::shared::Result;
use std::sync::Arc;

/// RecordSource port - hands out one provider per listing
///
/// The application bootstrap owns the source; views receive the providers it
/// builds instead of reaching for a shared contract handle.
pub trait RecordSource {
    /// Builds the provider for a listing
    ///
    /// # Errors
    /// Returns an error if the provider cannot be configured (e.g. an invalid
    /// method signature); fetch failures are reported by the provider itself
    fn provider(&self, listing: Listing) -> Result<Arc<dyn RecordProvider>>;

    /// Human-readable description of where records come from
    fn describe(&self) -> String;
}

impl<T: RecordSource + ?Sized> RecordSource for Box<T> {
    fn provider(&self, listing: Listing) -> Result<Arc<dyn RecordProvider>> {
        (**self).provider(listing)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
