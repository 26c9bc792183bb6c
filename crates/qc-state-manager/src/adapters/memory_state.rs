//! # In-Memory State
//!
//! Reference [`StateBackend`] backed by hash maps. Used by tests and by
//! embedders that need a scratch state without a real store behind it.

use crate::domain::services::{keccak256, EMPTY_CODE_HASH};
use crate::domain::value_objects::{Address, Bytes, Hash, StorageKey, StorageValue};
use crate::errors::StateError;
use crate::ports::outbound::StateBackend;
use std::collections::HashMap;

/// In-memory state.
#[derive(Debug, Default, Clone)]
pub struct InMemoryState {
    /// Account nonces.
    nonces: HashMap<Address, u64>,
    /// Contract code.
    code: HashMap<Address, Bytes>,
    /// Storage.
    storage: HashMap<(Address, StorageKey), StorageValue>,
}

impl InMemoryState {
    /// Create a new empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set code for a contract.
    pub fn set_code(&mut self, address: Address, code: Bytes) {
        self.code.insert(address, code);
    }

    /// Number of non-default storage slots, across all addresses.
    #[must_use]
    pub fn storage_len(&self) -> usize {
        self.storage.len()
    }
}

impl StateBackend for InMemoryState {
    fn get_storage(&self, address: Address, key: StorageKey) -> Result<StorageValue, StateError> {
        Ok(self
            .storage
            .get(&(address, key))
            .copied()
            .unwrap_or(StorageValue::ZERO))
    }

    fn set_storage(
        &mut self,
        address: Address,
        key: StorageKey,
        value: StorageValue,
    ) -> Result<(), StateError> {
        if value.is_zero() {
            self.storage.remove(&(address, key));
        } else {
            self.storage.insert((address, key), value);
        }
        Ok(())
    }

    fn get_nonce(&self, address: Address) -> Result<u64, StateError> {
        Ok(self.nonces.get(&address).copied().unwrap_or(0))
    }

    fn set_nonce(&mut self, address: Address, nonce: u64) -> Result<(), StateError> {
        self.nonces.insert(address, nonce);
        Ok(())
    }

    fn get_code(&self, address: Address) -> Result<Bytes, StateError> {
        Ok(self.code.get(&address).cloned().unwrap_or_default())
    }

    fn get_code_hash(&self, address: Address) -> Result<Hash, StateError> {
        Ok(match self.code.get(&address) {
            Some(code) if !code.is_empty() => keccak256(code.as_slice()),
            _ => EMPTY_CODE_HASH,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_storage() {
        let mut state = InMemoryState::new();
        let addr = Address::new([1u8; 20]);
        let key = StorageKey::new([0u8; 32]);

        // Initially zero
        assert!(state.get_storage(addr, key).unwrap().is_zero());

        let value = StorageValue::new([0x2a; 32]);
        state.set_storage(addr, key, value).unwrap();
        assert_eq!(state.get_storage(addr, key).unwrap(), value);

        // Zeroing a slot frees it
        state.set_storage(addr, key, StorageValue::ZERO).unwrap();
        assert_eq!(state.storage_len(), 0);
    }

    #[test]
    fn test_storage_is_per_address() {
        let mut state = InMemoryState::new();
        let key = StorageKey::new([9u8; 32]);
        state
            .set_storage(Address::new([1u8; 20]), key, StorageValue::new([1u8; 32]))
            .unwrap();

        assert!(state
            .get_storage(Address::new([2u8; 20]), key)
            .unwrap()
            .is_zero());
    }

    #[test]
    fn test_get_set_nonce() {
        let mut state = InMemoryState::new();
        let addr = Address::new([1u8; 20]);

        assert_eq!(state.get_nonce(addr).unwrap(), 0);
        state.set_nonce(addr, 7).unwrap();
        assert_eq!(state.get_nonce(addr).unwrap(), 7);
    }

    #[test]
    fn test_get_set_code() {
        let mut state = InMemoryState::new();
        let addr = Address::new([1u8; 20]);
        let code = Bytes::from_slice(&[0x60, 0x00, 0x60, 0x00, 0xF3]);

        assert_eq!(state.get_code_hash(addr).unwrap(), EMPTY_CODE_HASH);

        state.set_code(addr, code.clone());
        assert_eq!(state.get_code(addr).unwrap(), code);
        assert_eq!(
            state.get_code_hash(addr).unwrap(),
            keccak256(code.as_slice())
        );
    }
}
