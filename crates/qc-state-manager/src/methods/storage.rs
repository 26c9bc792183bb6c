//! # Storage Methods
//!
//! `getStorage(address,bytes32)` and `setStorage(address,bytes32,bytes32)`.

use super::{signatures, ExecutionContext, StateManagerMethod};
use crate::abi::{ArgKind, CallArgs};
use crate::domain::value_objects::{Bytes, StorageKey, StorageValue};
use crate::errors::DispatchError;

/// Reads a storage slot. Returns the raw 32-byte value.
pub struct GetStorage;

impl StateManagerMethod for GetStorage {
    fn signature(&self) -> &'static str {
        signatures::GET_STORAGE
    }

    fn layout(&self) -> &'static [ArgKind] {
        &[ArgKind::Address, ArgKind::Word]
    }

    fn execute(
        &self,
        ctx: &mut ExecutionContext<'_>,
        args: &CallArgs,
    ) -> Result<Bytes, DispatchError> {
        let address = args.address(0)?;
        let key = StorageKey::new(args.word(1)?);

        let value = ctx.backend().get_storage(address, key)?;
        Ok(Bytes::from_slice(value.as_bytes()))
    }
}

/// Writes a storage slot. Returns nothing.
pub struct SetStorage;

impl StateManagerMethod for SetStorage {
    fn signature(&self) -> &'static str {
        signatures::SET_STORAGE
    }

    fn layout(&self) -> &'static [ArgKind] {
        &[ArgKind::Address, ArgKind::Word, ArgKind::Word]
    }

    fn execute(
        &self,
        ctx: &mut ExecutionContext<'_>,
        args: &CallArgs,
    ) -> Result<Bytes, DispatchError> {
        let address = args.address(0)?;
        let key = StorageKey::new(args.word(1)?);
        let value = StorageValue::new(args.word(2)?);

        ctx.backend_mut().set_storage(address, key, value)?;
        Ok(Bytes::new())
    }
}
