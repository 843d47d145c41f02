/// Network adapters for reading the registry contract over JSON-RPC
pub mod abi;
mod contract_provider;

pub use abi::FieldOrder;
pub use contract_provider::{
    ContractRecordProvider, ContractRecordSource, ContractSettings, DEFAULT_REQUEST_TIMEOUT,
    MAX_ATTEMPTS_LIMIT,
};
