//! Contract ABI support for the registry's read methods.
//!
//! Only what the board needs: selectors for argument-less calls and decoding of
//! a dynamic array of `(string, address)` tuples.

use crate::registry::domain::AuthorityRecord;
use alloy_primitives::{hex, keccak256, Address};
use alloy_sol_types::SolValue;
use serde::Deserialize;
use thiserror::Error;

/// Upper bound on records decoded from one response
pub const MAX_RECORDS: usize = 10_000;

/// Upper bound on the byte length of a decoded name
pub const MAX_NAME_LENGTH: usize = 4096;

/// Order of the two fields inside each returned struct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrder {
    /// `struct { string name; address addr; }`
    #[default]
    NameFirst,
    /// `struct { address addr; string name; }`
    AddressFirst,
}

impl std::str::FromStr for FieldOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "name_first" => Ok(FieldOrder::NameFirst),
            "address_first" => Ok(FieldOrder::AddressFirst),
            _ => Err(format!(
                "Invalid field order: {}. Please specify 'name_first' or 'address_first'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    #[error("empty return data")]
    Empty,
    #[error("malformed return data: {0}")]
    Malformed(String),
    #[error("too many records: {0} (limit 10000)")]
    TooManyRecords(usize),
    #[error("name of record {index} is {length} bytes (limit 4096)")]
    NameTooLong { index: usize, length: usize },
    #[error("invalid method signature: {0}")]
    InvalidSignature(String),
}

/// Returns the 4-byte selector of a method signature such as `getStateData()`
pub fn function_selector(signature: &str) -> Result<[u8; 4], AbiError> {
    validate_signature(signature)?;
    let hash = keccak256(signature.as_bytes());
    Ok([hash[0], hash[1], hash[2], hash[3]])
}

/// Checks that a signature names an argument-less method: `identifier()`
pub fn validate_signature(signature: &str) -> Result<(), AbiError> {
    let name = signature
        .strip_suffix("()")
        .ok_or_else(|| AbiError::InvalidSignature(signature.to_string()))?;

    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Err(AbiError::InvalidSignature(signature.to_string()));
    }
    Ok(())
}

/// Encodes call data for an argument-less method as a `0x` hex string
pub fn encode_call(selector: [u8; 4]) -> String {
    hex::encode_prefixed(selector)
}

/// Decodes the return data of a method returning `(string,address)[]`
/// (or `(address,string)[]` with [`FieldOrder::AddressFirst`]).
///
/// Addresses are rendered in EIP-55 checksum form.
pub fn decode_record_array(data: &[u8], order: FieldOrder) -> Result<Vec<AuthorityRecord>, AbiError> {
    if data.is_empty() {
        return Err(AbiError::Empty);
    }

    let pairs: Vec<(String, Address)> = match order {
        FieldOrder::NameFirst => <Vec<(String, Address)>>::abi_decode(data).map_err(malformed)?,
        FieldOrder::AddressFirst => <Vec<(Address, String)>>::abi_decode(data)
            .map_err(malformed)?
            .into_iter()
            .map(|(address, name)| (name, address))
            .collect(),
    };

    if pairs.len() > MAX_RECORDS {
        return Err(AbiError::TooManyRecords(pairs.len()));
    }

    pairs
        .into_iter()
        .enumerate()
        .map(|(index, (name, address))| {
            if name.len() > MAX_NAME_LENGTH {
                return Err(AbiError::NameTooLong {
                    index,
                    length: name.len(),
                });
            }
            Ok(AuthorityRecord::new(name, address.to_checksum(None)))
        })
        .collect()
}

fn malformed(error: alloy_sol_types::Error) -> AbiError {
    AbiError::Malformed(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const DELHI: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const KERALA: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    fn address(value: &str) -> Address {
        Address::from_str(value).unwrap()
    }

    fn encode(records: &[(&str, &str)]) -> Vec<u8> {
        records
            .iter()
            .map(|(name, addr)| (name.to_string(), address(addr)))
            .collect::<Vec<_>>()
            .abi_encode()
    }

    #[test]
    fn test_selector_matches_known_erc20_selector() {
        assert_eq!(
            function_selector("totalSupply()").unwrap(),
            [0x18, 0x16, 0x0d, 0xdd]
        );
        assert_eq!(
            function_selector("getStateData()").unwrap(),
            keccak256("getStateData()")[..4]
        );
    }

    #[test]
    fn test_encode_call() {
        assert_eq!(encode_call([0x18, 0x16, 0x0d, 0xdd]), "0x18160ddd");
    }

    #[test]
    fn test_validate_signature() {
        assert!(validate_signature("getStateData()").is_ok());
        assert!(validate_signature("_private$()").is_ok());
        assert!(validate_signature("getStateData").is_err());
        assert!(validate_signature("()").is_err());
        assert!(validate_signature("1bad()").is_err());
        assert!(validate_signature("get State()").is_err());
        assert!(validate_signature("transfer(address,uint256)").is_err());
    }

    #[test]
    fn test_field_order_from_str() {
        assert_eq!(FieldOrder::from_str("name_first").unwrap(), FieldOrder::NameFirst);
        assert_eq!(
            FieldOrder::from_str("address-first").unwrap(),
            FieldOrder::AddressFirst
        );
        assert!(FieldOrder::from_str("random").is_err());
    }

    #[test]
    fn test_decode_single_record_hand_laid() {
        let hex_data = concat!(
            "0000000000000000000000000000000000000000000000000000000000000020",
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0000000000000000000000000000000000000000000000000000000000000020",
            "0000000000000000000000000000000000000000000000000000000000000040",
            "0000000000000000000000005aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "0000000000000000000000000000000000000000000000000000000000000005",
            "44656c6869000000000000000000000000000000000000000000000000000000",
        );
        let data = hex::decode(hex_data).unwrap();

        let records = decode_record_array(&data, FieldOrder::NameFirst).unwrap();

        assert_eq!(records, vec![AuthorityRecord::new("Delhi", DELHI)]);
    }

    #[test]
    fn test_decode_preserves_order() {
        let data = encode(&[("Delhi", DELHI), ("Kerala", KERALA)]);

        let records = decode_record_array(&data, FieldOrder::NameFirst).unwrap();

        assert_eq!(
            records,
            vec![
                AuthorityRecord::new("Delhi", DELHI),
                AuthorityRecord::new("Kerala", KERALA),
            ]
        );
    }

    #[test]
    fn test_decode_address_first_layout() {
        let data = vec![(address(KERALA), "Wayanad Relief Camp".to_string())].abi_encode();

        let records = decode_record_array(&data, FieldOrder::AddressFirst).unwrap();

        assert_eq!(records, vec![AuthorityRecord::new("Wayanad Relief Camp", KERALA)]);
    }

    #[test]
    fn test_decode_checksums_lowercase_input() {
        let lowercase = DELHI.to_lowercase();
        let data = encode(&[("Delhi", lowercase.as_str())]);

        let records = decode_record_array(&data, FieldOrder::NameFirst).unwrap();

        assert_eq!(records[0].address, DELHI);
    }

    #[test]
    fn test_decode_empty_array() {
        let data = encode(&[]);
        assert_eq!(data.len(), 64);
        assert!(decode_record_array(&data, FieldOrder::NameFirst)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_decode_long_name_spanning_words() {
        let name = "Uttarakhand State Disaster Management Authority";
        let data = encode(&[(name, DELHI)]);

        let records = decode_record_array(&data, FieldOrder::NameFirst).unwrap();

        assert_eq!(records[0].name, name);
    }

    #[test]
    fn test_decode_empty_return_data() {
        assert_eq!(
            decode_record_array(&[], FieldOrder::NameFirst),
            Err(AbiError::Empty)
        );
    }

    #[test]
    fn test_decode_truncated_data() {
        let mut data = encode(&[("Delhi", DELHI)]);
        data.truncate(data.len() - 64);

        let result = decode_record_array(&data, FieldOrder::NameFirst);

        assert!(matches!(result, Err(AbiError::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_too_many_records() {
        let data = vec![("a".to_string(), Address::ZERO); MAX_RECORDS + 1].abi_encode();

        let result = decode_record_array(&data, FieldOrder::NameFirst);

        assert_eq!(result, Err(AbiError::TooManyRecords(MAX_RECORDS + 1)));
    }

    #[test]
    fn test_decode_rejects_long_name() {
        let long_name = "x".repeat(MAX_NAME_LENGTH + 1);
        let data = encode(&[("Delhi", DELHI), (long_name.as_str(), KERALA)]);

        let result = decode_record_array(&data, FieldOrder::NameFirst);

        assert_eq!(
            result,
            Err(AbiError::NameTooLong {
                index: 1,
                length: MAX_NAME_LENGTH + 1
            })
        );
    }
}
