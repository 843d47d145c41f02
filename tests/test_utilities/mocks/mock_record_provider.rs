use async_trait::async_trait;
use relief_board::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock RecordProvider returning a canned result, optionally after a delay
pub struct MockRecordProvider {
    result: std::result::Result<Vec<AuthorityRecord>, ProviderError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockRecordProvider {
    pub fn with_records(records: &[(&str, &str)]) -> Self {
        Self {
            result: Ok(records
                .iter()
                .map(|(name, address)| AuthorityRecord::new(*name, *address))
                .collect()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            result: Err(error),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordProvider for MockRecordProvider {
    async fn fetch_all(&self) -> std::result::Result<Vec<AuthorityRecord>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }
}
