//! # Nonce Methods
//!
//! `getOvmContractNonce(address)` and `incrementOvmContractNonce(address)`.

use super::{signatures, ExecutionContext, StateManagerMethod};
use crate::abi::{encode_u64_word, ArgKind, CallArgs};
use crate::domain::value_objects::Bytes;
use crate::errors::DispatchError;

/// Reads an account nonce as a 32-byte big-endian word.
pub struct GetNonce;

impl StateManagerMethod for GetNonce {
    fn signature(&self) -> &'static str {
        signatures::GET_NONCE
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
        let nonce = ctx.backend().get_nonce(address)?;
        Ok(Bytes::from_slice(&encode_u64_word(nonce)))
    }
}

/// Increments an account nonce by one. Returns nothing.
///
/// A nonce already at `u64::MAX` is left untouched and the call fails.
pub struct IncrementNonce;

impl StateManagerMethod for IncrementNonce {
    fn signature(&self) -> &'static str {
        signatures::INCREMENT_NONCE
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
        let current = ctx.backend().get_nonce(address)?;
        let next = current
            .checked_add(1)
            .ok_or(DispatchError::NonceOverflow(address))?;

        ctx.backend_mut().set_nonce(address, next)?;
        Ok(Bytes::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryState;
    use crate::domain::value_objects::Address;
    use crate::methods::tests::run;
    use crate::ports::outbound::StateBackend;

    #[test]
    fn test_get_nonce_encoding() {
        let mut state = InMemoryState::new();
        let address = Address::new([0x01; 20]);
        state.set_nonce(address, 0x0102).unwrap();

        let out = run(&GetNonce, &mut state, &[address.to_word()]).unwrap();
        assert_eq!(out.len(), 32);
        assert_eq!(&out.as_slice()[..30], &[0u8; 30]);
        assert_eq!(&out.as_slice()[30..], &[0x01, 0x02]);
    }

    #[test]
    fn test_increment_nonce() {
        let mut state = InMemoryState::new();
        let address = Address::new([0x02; 20]);

        let out = run(&IncrementNonce, &mut state, &[address.to_word()]).unwrap();
        assert!(out.is_empty());
        run(&IncrementNonce, &mut state, &[address.to_word()]).unwrap();

        assert_eq!(state.get_nonce(address).unwrap(), 2);
    }

    #[test]
    fn test_increment_nonce_overflow() {
        let mut state = InMemoryState::new();
        let address = Address::new([0x03; 20]);
        state.set_nonce(address, u64::MAX).unwrap();

        let err = run(&IncrementNonce, &mut state, &[address.to_word()]).unwrap_err();
        assert_eq!(err, DispatchError::NonceOverflow(address));
        assert_eq!(state.get_nonce(address).unwrap(), u64::MAX);
    }
}
