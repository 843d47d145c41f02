use alloy_primitives::Address;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address must start with 0x")]
    MissingPrefix,
    #[error("address is not valid hex: {0}")]
    InvalidHex(String),
    #[error("expected 20 bytes, got {0}")]
    InvalidLength(usize),
}

/// Parses a `0x`-prefixed hex account address.
///
/// Mixed case is accepted without verifying the EIP-55 checksum.
pub fn parse_address(input: &str) -> Result<Address, AddressError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .ok_or(AddressError::MissingPrefix)?;

    Address::from_str(digits).map_err(|e| {
        let all_hex = digits.chars().all(|c| c.is_ascii_hexdigit());
        if all_hex && digits.len() % 2 == 0 {
            AddressError::InvalidLength(digits.len() / 2)
        } else {
            AddressError::InvalidHex(e.to_string())
        }
    })
}
