use crate::adapters::outbound::filesystem::SnapshotRecordSource;
use crate::adapters::outbound::network::{ContractRecordSource, ContractSettings};
use crate::ports::outbound::RecordSource;
use crate::shared::Result;
use std::path::PathBuf;

/// Where listing records are read from
#[derive(Debug, Clone)]
pub enum SourceSpec {
    /// An exported JSON snapshot of the registry
    Snapshot(PathBuf),
    /// The live registry contract over JSON-RPC
    Contract(ContractSettings),
}

/// Factory for creating the record source the views read through
pub struct RecordSourceFactory;

impl RecordSourceFactory {
    /// Creates the record source the views will read through
    ///
    /// # Errors
    /// Returns an error if the snapshot file is unusable, or the RPC endpoint
    /// or contract address is invalid
    pub fn create(spec: SourceSpec) -> Result<Box<dyn RecordSource>> {
        match spec {
            SourceSpec::Snapshot(path) => Ok(Box::new(SnapshotRecordSource::new(path)?)),
            SourceSpec::Contract(settings) => Ok(Box::new(ContractRecordSource::new(settings)?)),
        }
    }
}
