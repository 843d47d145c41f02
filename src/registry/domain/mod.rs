pub mod authority_record;
pub mod chain_address;
pub mod listing;

pub use authority_record::{duplicate_addresses, AuthorityRecord};
pub use chain_address::{parse_address, AddressError};
pub use listing::Listing;
