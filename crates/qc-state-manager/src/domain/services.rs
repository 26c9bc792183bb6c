//! # Domain Services
//!
//! Pure hashing functions behind selector derivation.
//! These functions are deterministic and have no side effects.

use crate::domain::value_objects::{Hash, Selector, SELECTOR_SIZE};
use sha3::{Digest, Keccak256};

/// keccak256 of the empty byte string, the code hash of an account without code.
pub const EMPTY_CODE_HASH: Hash = Hash([
    0xc5, 0xd2, 0x46, 0x01, 0x86, 0xf7, 0x23, 0x3c, 0x92, 0x7e, 0x7d, 0xb2, 0xdc, 0xc7, 0x03, 0xc0,
    0xe5, 0x00, 0xb6, 0x53, 0xca, 0x82, 0x27, 0x3b, 0x7b, 0xfa, 0xd8, 0x04, 0x5d, 0x85, 0xa4, 0x70,
]);

/// Computes keccak256 of `data`.
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    let digest = Keccak256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    Hash::new(out)
}

/// Derives the method selector for a canonical signature such as
/// `getStorage(address,bytes32)`.
///
/// The selector is the first four bytes of `keccak256(signature)`, so it
/// agrees with any external caller computing selectors the standard way.
/// The signature is hashed verbatim: no whitespace or type normalization.
#[must_use]
pub fn derive_selector(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    let mut bytes = [0u8; SELECTOR_SIZE];
    bytes.copy_from_slice(&hash.as_bytes()[..SELECTOR_SIZE]);
    Selector::new(bytes)
}

// =============================================================================
// TESTS
// =============================================================================
