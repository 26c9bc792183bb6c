//! # QC State Manager - Selector-Dispatched State Precompile
//!
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Exposes storage, nonce and code access to contract code through the
//! Ethereum ABI calling convention. A call is a 4-byte selector followed by
//! 32-byte argument words; the dispatcher routes it to a method, which reads
//! or mutates the state backend and returns raw or dynamic-bytes framed data.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Selector = `keccak256(signature)[0..4]` | `domain/services.rs` - `derive_selector()` |
//! | No selector collisions in a registry | `registry.rs` - `Registry::build()` |
//! | Registry immutable after build | `registry.rs` - no mutating API |
//! | Arguments length-checked before extraction | `abi/decoder.rs` - `decode_args()` |
//! | Unknown selectors never reach a method | `dispatcher.rs` - `Dispatcher::route()` |
//!
//! ## Wire Format
//!
//! | Direction | Layout |
//! |-----------|--------|
//! | Input | `[4-byte selector][N x 32-byte words]` |
//! | Output (fixed) | raw 32-byte word |
//! | Output (dynamic) | `[offset=0x20][length][data, zero-padded to 32]` |
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `StateBackend` | Storage slots, nonces, code and code hashes |
//!
//! ## Usage Example
//!
//! ```ignore
//! use qc_state_manager::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(Registry::standard()?);
//! let dispatcher = Dispatcher::from_config(registry, &DispatcherConfig::from_env());
//!
//! let mut ctx = ExecutionContext::new(&mut backend, caller);
//! let output = dispatcher.dispatch(&mut ctx, &call_input)?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// =============================================================================
// MODULES
// =============================================================================

pub mod abi;
pub mod adapters;
pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod errors;
pub mod methods;
pub mod metrics;
pub mod observer;
pub mod ports;
pub mod registry;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Value objects
    pub use crate::domain::value_objects::{
        Address, Bytes, Hash, Selector, StorageKey, StorageValue, Word, SELECTOR_SIZE, U256,
        WORD_SIZE,
    };

    // Domain services
    pub use crate::domain::services::{derive_selector, keccak256, EMPTY_CODE_HASH};

    // Calling convention
    pub use crate::abi::{
        decode_args, decode_dynamic_bytes, encode_dynamic_bytes, encode_u64_word, Arg, ArgKind,
        CallArgs,
    };

    // Methods
    pub use crate::methods::{signatures, standard_methods, ExecutionContext, StateManagerMethod};

    // Routing
    pub use crate::dispatcher::Dispatcher;
    pub use crate::registry::Registry;

    // Ports & adapters
    pub use crate::adapters::InMemoryState;
    pub use crate::ports::outbound::StateBackend;

    // Observability & config
    pub use crate::config::DispatcherConfig;
    pub use crate::observer::{CallObserver, CallRecord, TracingObserver};

    // Errors
    pub use crate::errors::{kinds, AbiError, DispatchError, RegistryError, StateError};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_exports() {
        // Verify prelude exports compile
        use prelude::*;
        let _ = DispatcherConfig::default();
        let _ = Address::ZERO;
        assert_eq!(standard_methods().len(), 8);
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
