//! Read-through view: fetch a snapshot of records once per mount and
//! render it as a table.

pub mod read_through_view;
pub mod table;
pub mod view_state;

pub use read_through_view::{FetchOutcome, MountHandle, ReadThroughView};
pub use table::{render, RenderedTable, TableRow};
pub use view_state::{ViewPhase, ViewState};
