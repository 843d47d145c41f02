use serde::{Deserialize, Serialize};

/// A single authority or request entry as stored by the registry contract.
///
/// The address is an opaque chain account identifier. The board never
/// validates or mutates it; it only displays what the provider returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorityRecord {
    pub name: String,
    #[serde(alias = "stateAddress", alias = "groundAddress")]
    pub address: String,
}

impl AuthorityRecord {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// Returns the addresses that occur more than once, in first-seen order.
///
/// Addresses are expected to be unique within a listing; rows are keyed by them.
pub fn duplicate_addresses(records: &[AuthorityRecord]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    let mut duplicates: Vec<&str> = Vec::new();
    for record in records {
        let address = record.address.as_str();
        if !seen.insert(address) && !duplicates.contains(&address) {
            duplicates.push(address);
        }
    }
    duplicates
}
