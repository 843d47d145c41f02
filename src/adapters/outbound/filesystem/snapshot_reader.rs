use crate::ports::outbound::{RecordProvider, RecordSource};
use crate::registry::domain::{AuthorityRecord, Listing};
use crate::shared::error::{ProviderError, ReliefBoardError};
use crate::shared::security::{read_regular_file, validate_regular_file};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// On-disk layout of an exported registry snapshot
#[derive(Debug, Default, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    state: Vec<AuthorityRecord>,
    #[serde(default)]
    ground: Vec<AuthorityRecord>,
    #[serde(default)]
    supply: Vec<AuthorityRecord>,
    #[serde(default)]
    demand: Vec<AuthorityRecord>,
}

impl SnapshotFile {
    fn take(self, listing: Listing) -> Vec<AuthorityRecord> {
        match listing {
            Listing::State => self.state,
            Listing::Ground => self.ground,
            Listing::Supply => self.supply,
            Listing::Demand => self.demand,
        }
    }
}

/// SnapshotRecordSource adapter - serves listings from a JSON snapshot file
///
/// The file is checked when the source is created; its contents are read by
/// each provider when its view fetches.
pub struct SnapshotRecordSource {
    path: PathBuf,
}

impl SnapshotRecordSource {
    /// # Errors
    /// Returns an error if the path is missing, a symlink, not a regular file
    /// or larger than the snapshot size limit
    pub fn new(path: PathBuf) -> Result<Self> {
        validate_regular_file(&path, "snapshot").map_err(|e| ReliefBoardError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(Self { path })
    }
}

impl RecordSource for SnapshotRecordSource {
    fn provider(&self, listing: Listing) -> Result<Arc<dyn RecordProvider>> {
        Ok(Arc::new(SnapshotRecordProvider::new(self.path.clone(), listing)))
    }

    fn describe(&self) -> String {
        format!("snapshot {}", self.path.display())
    }
}

/// SnapshotRecordProvider adapter - reads one listing of a snapshot file
pub struct SnapshotRecordProvider {
    path: PathBuf,
    listing: Listing,
}

impl SnapshotRecordProvider {
    pub fn new(path: PathBuf, listing: Listing) -> Self {
        Self { path, listing }
    }

    fn load(path: &Path, listing: Listing) -> std::result::Result<Vec<AuthorityRecord>, ProviderError> {
        let snapshot_error = |details: String| ProviderError::Snapshot {
            path: path.to_path_buf(),
            details,
        };

        let content = read_regular_file(path, "snapshot").map_err(|e| snapshot_error(e.to_string()))?;
        let snapshot: SnapshotFile =
            serde_json::from_str(&content).map_err(|e| snapshot_error(e.to_string()))?;
        Ok(snapshot.take(listing))
    }
}

#[async_trait]
impl RecordProvider for SnapshotRecordProvider {
    async fn fetch_all(&self) -> std::result::Result<Vec<AuthorityRecord>, ProviderError> {
        tracing::debug!(path = %self.path.display(), listing = %self.listing, "reading snapshot");
        let path = self.path.clone();
        let listing = self.listing;
        tokio::task::spawn_blocking(move || Self::load(&path, listing))
            .await
            .map_err(|e| ProviderError::Snapshot {
                path: self.path.clone(),
                details: e.to_string(),
            })?
    }
}
