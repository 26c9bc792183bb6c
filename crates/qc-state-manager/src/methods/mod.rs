//! # State Manager Methods
//!
//! The fixed set of operations reachable through the state manager precompile.
//! Each method is a unit struct declaring its canonical signature and argument
//! layout; the dispatcher decodes the layout before calling [`execute`].
//!
//! | Signature | Return |
//! |-----------|--------|
//! | `getStorage(address,bytes32)` | raw 32-byte value |
//! | `setStorage(address,bytes32,bytes32)` | empty |
//! | `getOvmContractNonce(address)` | nonce as 32-byte big-endian word |
//! | `incrementOvmContractNonce(address)` | empty |
//! | `getCodeContractBytecode(address)` | code, dynamic-bytes framed |
//! | `getCodeContractHash(address)` | raw 32-byte hash |
//! | `getCodeContractAddress(address)` | first argument word, unchanged |
//! | `associateCodeContract(address,address)` | empty |
//!
//! [`execute`]: StateManagerMethod::execute

pub mod code;
pub mod nonce;
pub mod storage;

use crate::abi::{ArgKind, CallArgs};
use crate::domain::value_objects::{Address, Bytes};
use crate::errors::DispatchError;
use crate::ports::outbound::StateBackend;
use std::sync::Arc;

pub use code::{
    AssociateCodeContract, GetCodeContractAddress, GetCodeContractBytecode, GetCodeContractHash,
};
pub use nonce::{GetNonce, IncrementNonce};
pub use storage::{GetStorage, SetStorage};

/// Canonical signatures of the standard methods.
pub mod signatures {
    /// Read a storage slot.
    pub const GET_STORAGE: &str = "getStorage(address,bytes32)";
    /// Write a storage slot.
    pub const SET_STORAGE: &str = "setStorage(address,bytes32,bytes32)";
    /// Read an account nonce.
    pub const GET_NONCE: &str = "getOvmContractNonce(address)";
    /// Increment an account nonce.
    pub const INCREMENT_NONCE: &str = "incrementOvmContractNonce(address)";
    /// Read contract code.
    pub const GET_CODE: &str = "getCodeContractBytecode(address)";
    /// Read contract code hash.
    pub const GET_CODE_HASH: &str = "getCodeContractHash(address)";
    /// Resolve the code contract for an address.
    pub const GET_CODE_ADDRESS: &str = "getCodeContractAddress(address)";
    /// Associate a code contract with an address.
    pub const ASSOCIATE_CODE_CONTRACT: &str = "associateCodeContract(address,address)";
}

/// Per-call context handed to a method.
///
/// Each concurrent dispatch brings its own backend handle; nothing in the
/// context is shared between calls.
pub struct ExecutionContext<'a> {
    backend: &'a mut dyn StateBackend,
    caller: Address,
}

impl<'a> ExecutionContext<'a> {
    /// Create a context over `backend` for a call made by `caller`.
    pub fn new(backend: &'a mut dyn StateBackend, caller: Address) -> Self {
        Self { backend, caller }
    }

    /// Address of the contract calling the state manager.
    #[must_use]
    pub fn caller(&self) -> Address {
        self.caller
    }

    /// Read access to the backend.
    #[must_use]
    pub fn backend(&self) -> &dyn StateBackend {
        &*self.backend
    }

    /// Write access to the backend.
    pub fn backend_mut(&mut self) -> &mut dyn StateBackend {
        &mut *self.backend
    }
}

/// Trait for state manager methods.
pub trait StateManagerMethod: Send + Sync {
    /// Canonical signature, e.g. `getStorage(address,bytes32)`.
    fn signature(&self) -> &'static str;

    /// Argument layout following the selector.
    fn layout(&self) -> &'static [ArgKind];

    /// Execute the method with arguments already decoded against [`layout`].
    ///
    /// # Returns
    ///
    /// * `Bytes` - Encoded return data (may be empty)
    ///
    /// [`layout`]: StateManagerMethod::layout
    fn execute(
        &self,
        ctx: &mut ExecutionContext<'_>,
        args: &CallArgs,
    ) -> Result<Bytes, DispatchError>;
}

/// The eight standard state manager methods.
#[must_use]
pub fn standard_methods() -> Vec<Arc<dyn StateManagerMethod>> {
    vec![
        Arc::new(GetStorage),
        Arc::new(SetStorage),
        Arc::new(GetNonce),
        Arc::new(IncrementNonce),
        Arc::new(GetCodeContractBytecode),
        Arc::new(GetCodeContractHash),
        Arc::new(GetCodeContractAddress),
        Arc::new(AssociateCodeContract),
    ]
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::abi::decode_args;
    use crate::domain::services::derive_selector;
    use crate::domain::value_objects::{Word, SELECTOR_SIZE};

    /// Builds selector-prefixed call input for `method`.
    pub(crate) fn encode_call(method: &dyn StateManagerMethod, words: &[Word]) -> Vec<u8> {
        let mut input = derive_selector(method.signature()).as_bytes().to_vec();
        for word in words {
            input.extend_from_slice(word);
        }
        input
    }

    /// Decodes and executes `method` in one step.
    pub(crate) fn run(
        method: &dyn StateManagerMethod,
        backend: &mut dyn StateBackend,
        words: &[Word],
    ) -> Result<Bytes, DispatchError> {
        let input = encode_call(method, words);
        let args = decode_args(&input, method.layout())?;
        let mut ctx = ExecutionContext::new(backend, Address::ZERO);
        method.execute(&mut ctx, &args)
    }

    #[test]
    fn test_standard_signatures_are_distinct() {
        let methods = standard_methods();
        let mut signatures: Vec<_> = methods.iter().map(|m| m.signature()).collect();
        signatures.sort_unstable();
        signatures.dedup();
        assert_eq!(signatures.len(), 8);
    }

    #[test]
    fn test_layouts_match_signatures() {
        for method in standard_methods() {
            let signature = method.signature();
            let params = &signature[signature.find('(').unwrap() + 1..signature.len() - 1];
            let arity = params.split(',').filter(|p| !p.is_empty()).count();
            assert_eq!(method.layout().len(), arity, "{signature}");
        }
    }

    #[test]
    fn test_encode_call_prefix() {
        let input = encode_call(&GetNonce, &[[0u8; 32]]);
        assert_eq!(input.len(), SELECTOR_SIZE + 32);
        assert_eq!(&input[..4], &[0x0e, 0x7d, 0x0f, 0xff]);
    }
}
