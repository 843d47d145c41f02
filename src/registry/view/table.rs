use crate::registry::domain::AuthorityRecord;
use serde::Serialize;

/// One rendered row.
///
/// `index` is the 1-based position in the fetched sequence and changes when
/// the provider reorders records. Use [`TableRow::key`] to identify a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub index: usize,
    pub name: String,
    pub address: String,
}

impl TableRow {
    /// Stable identifier of the row's record (its chain address)
    pub fn key(&self) -> &str {
        &self.address
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedTable {
    rows: Vec<TableRow>,
}

impl RenderedTable {
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Renders records into table rows, numbering them from 1 in input order.
pub fn render(records: &[AuthorityRecord]) -> RenderedTable {
    let rows = records
        .iter()
        .enumerate()
        .map(|(position, record)| TableRow {
            index: position + 1,
            name: record.name.clone(),
            address: record.address.clone(),
        })
        .collect();
    RenderedTable { rows }
}
