//! # Code Methods
//!
//! Code lookup plus the two code-contract association methods.
//!
//! `getCodeContractAddress` and `associateCodeContract` do not touch the
//! backend: the first echoes its argument word, the second only validates
//! its layout. The backend port has no association capability to call.

use super::{signatures, ExecutionContext, StateManagerMethod};
use crate::abi::{encode_dynamic_bytes, ArgKind, CallArgs};
use crate::domain::value_objects::Bytes;
use crate::errors::DispatchError;

/// Reads contract code, framed as ABI dynamic `bytes`.
pub struct GetCodeContractBytecode;

impl StateManagerMethod for GetCodeContractBytecode {
    fn signature(&self) -> &'static str {
        signatures::GET_CODE
    }

    fn layout(&self) -> &'static [ArgKind] {
        &[ArgKind::Address]
    }

    fn execute(
        &self,
        ctx: &mut ExecutionContext<'_>,
        args: &CallArgs,
    ) -> Result<Bytes, DispatchError> {
        let address = args.address(0)?;
        let code = ctx.backend().get_code(address)?;
        Ok(encode_dynamic_bytes(code.as_slice()))
    }
}

/// Reads the contract code hash as a raw 32-byte word.
pub struct GetCodeContractHash;

impl StateManagerMethod for GetCodeContractHash {
    fn signature(&self) -> &'static str {
        signatures::GET_CODE_HASH
    }

    fn layout(&self) -> &'static [ArgKind] {
        &[ArgKind::Address]
    }

    fn execute(
        &self,
        ctx: &mut ExecutionContext<'_>,
        args: &CallArgs,
    ) -> Result<Bytes, DispatchError> {
        let address = args.address(0)?;
        let hash = ctx.backend().get_code_hash(address)?;
        Ok(Bytes::from_slice(hash.as_bytes()))
    }
}

/// Resolves the code contract for an address: returns the argument word as-is.
pub struct GetCodeContractAddress;

impl StateManagerMethod for GetCodeContractAddress {
    fn signature(&self) -> &'static str {
        signatures::GET_CODE_ADDRESS
    }

    fn layout(&self) -> &'static [ArgKind] {
        &[ArgKind::Address]
    }

    fn execute(
        &self,
        _ctx: &mut ExecutionContext<'_>,
        args: &CallArgs,
    ) -> Result<Bytes, DispatchError> {
        Ok(Bytes::from_slice(&args.word(0)?))
    }
}

/// Associates a code contract with an address. Inert; returns nothing.
pub struct AssociateCodeContract;

impl StateManagerMethod for AssociateCodeContract {
    fn signature(&self) -> &'static str {
        signatures::ASSOCIATE_CODE_CONTRACT
    }

    fn layout(&self) -> &'static [ArgKind] {
        &[ArgKind::Address, ArgKind::Address]
    }

    fn execute(
        &self,
        _ctx: &mut ExecutionContext<'_>,
        _args: &CallArgs,
    ) -> Result<Bytes, DispatchError> {
        Ok(Bytes::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::decode_dynamic_bytes;
    use crate::adapters::InMemoryState;
    use crate::domain::services::{keccak256, EMPTY_CODE_HASH};
    use crate::domain::value_objects::Address;
    use crate::methods::tests::run;

    #[test]
    fn test_get_code_is_framed() {
        let mut state = InMemoryState::new();
        let address = Address::new([0x0c; 20]);
        let code = vec![0x60, 0x80, 0x60, 0x40, 0x52];
        state.set_code(address, Bytes::from_slice(&code));

        let out = run(&GetCodeContractBytecode, &mut state, &[address.to_word()]).unwrap();
        assert_eq!(out.len(), 96);
        assert_eq!(decode_dynamic_bytes(out.as_slice()).unwrap().as_slice(), &code[..]);
    }

    #[test]
    fn test_get_code_of_empty_account() {
        let mut state = InMemoryState::new();
        let out = run(&GetCodeContractBytecode, &mut state, &[[0u8; 32]]).unwrap();
        assert_eq!(out.len(), 64);
        assert!(decode_dynamic_bytes(out.as_slice()).unwrap().is_empty());
    }

    #[test]
    fn test_get_code_hash() {
        let mut state = InMemoryState::new();
        let address = Address::new([0x0d; 20]);

        let out = run(&GetCodeContractHash, &mut state, &[address.to_word()]).unwrap();
        assert_eq!(out.as_slice(), EMPTY_CODE_HASH.as_bytes());

        state.set_code(address, Bytes::from_slice(&[0x00]));
        let out = run(&GetCodeContractHash, &mut state, &[address.to_word()]).unwrap();
        assert_eq!(out.as_slice(), keccak256(&[0x00]).as_bytes());
    }

    #[test]
    fn test_get_code_address_echoes_word() {
        let mut state = InMemoryState::new();
        let mut word = [0x33u8; 32];
        word[0] = 0xee;

        let out = run(&GetCodeContractAddress, &mut state, &[word]).unwrap();
        assert_eq!(out.as_slice(), &word);
    }

    #[test]
    fn test_associate_is_inert() {
        let mut state = InMemoryState::new();
        let out = run(
            &AssociateCodeContract,
            &mut state,
            &[[0x01; 32], [0x02; 32]],
        )
        .unwrap();
        assert!(out.is_empty());
        assert_eq!(state.storage_len(), 0);
    }
}
