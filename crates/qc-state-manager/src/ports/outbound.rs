//! # Driven Ports (SPI - Outbound)
//!
//! The state backend the state manager reads and mutates.
//!
//! - Dependencies point INWARD (adapters implement these traits)
//! - Calls are synchronous: a dispatch runs to completion inside one call frame

use crate::domain::value_objects::{Address, Bytes, Hash, StorageKey, StorageValue};
use crate::errors::StateError;

// =============================================================================
// STATE BACKEND
// =============================================================================

/// Per-address storage, nonce and code access.
///
/// ## Implementation Notes
///
/// The backend owns its own mutation discipline (locking, journaling,
/// transaction isolation). The state manager only requires that writes made
/// through one handle are visible, in issue order, to later reads through
/// the same handle.
pub trait StateBackend: Send {
    /// Get storage value.
    ///
    /// # Returns
    ///
    /// * `StorageValue` - Value at slot (zero if never written)
    fn get_storage(&self, address: Address, key: StorageKey) -> Result<StorageValue, StateError>;

    /// Set storage value.
    fn set_storage(
        &mut self,
        address: Address,
        key: StorageKey,
        value: StorageValue,
    ) -> Result<(), StateError>;

    /// Get account nonce (zero for unknown accounts).
    fn get_nonce(&self, address: Address) -> Result<u64, StateError>;

    /// Set account nonce.
    fn set_nonce(&mut self, address: Address, nonce: u64) -> Result<(), StateError>;

    /// Get contract code.
    ///
    /// # Returns
    ///
    /// * `Bytes` - Contract bytecode (empty for EOA)
    fn get_code(&self, address: Address) -> Result<Bytes, StateError>;

    /// Get code hash for an address.
    fn get_code_hash(&self, address: Address) -> Result<Hash, StateError>;
}

// =============================================================================
// TESTS
// =============================================================================
