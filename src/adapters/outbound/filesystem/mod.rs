/// Filesystem adapters for snapshot input and board output
mod file_writer;
mod snapshot_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use snapshot_reader::{SnapshotRecordProvider, SnapshotRecordSource};
