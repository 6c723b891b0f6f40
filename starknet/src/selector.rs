//! Entry point selectors.

use quest_types::Felt;
use sha3::{Digest, Keccak256};

/// Starknet keccak of an entry point name: Keccak-256 truncated to 250 bits.
pub fn get_selector_from_name(name: &str) -> Felt {
    let digest = Keccak256::digest(name.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest);
    bytes[0] &= 0x03;
    Felt::new(bytes)
}
