use super::MockRecordProvider;
use relief_board::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Mock RecordSource handing out pre-built providers per listing
///
/// Listings without a registered provider get one that returns no records.
#[derive(Default)]
pub struct MockRecordSource {
    providers: HashMap<Listing, Arc<MockRecordProvider>>,
    broken: HashSet<Listing>,
}

impl MockRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, listing: Listing, provider: MockRecordProvider) -> Self {
        self.providers.insert(listing, Arc::new(provider));
        self
    }

    /// Building the provider for this listing fails
    pub fn with_broken_listing(mut self, listing: Listing) -> Self {
        self.broken.insert(listing);
        self
    }

    pub fn provider_for(&self, listing: Listing) -> Option<Arc<MockRecordProvider>> {
        self.providers.get(&listing).cloned()
    }
}

impl RecordSource for MockRecordSource {
    fn provider(&self, listing: Listing) -> Result<Arc<dyn RecordProvider>> {
        if self.broken.contains(&listing) {
            return Err(ReliefBoardError::Validation {
                message: format!("{} listing: invalid method signature", listing),
            }
            .into());
        }
        let provider = self
            .providers
            .get(&listing)
            .cloned()
            .unwrap_or_else(|| Arc::new(MockRecordProvider::with_records(&[])));
        Ok(provider)
    }

    fn describe(&self) -> String {
        "mock registry".to_string()
    }
}
