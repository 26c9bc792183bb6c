//! # Calling Convention
//!
//! Binary layer between raw call input and typed method arguments:
//! `[4-byte selector][N x 32-byte words]` in, raw or dynamic-bytes framed
//! words out.

pub mod decoder;
pub mod encoder;

pub use decoder::{decode_args, required_len, Arg, ArgKind, CallArgs};
pub use encoder::{decode_dynamic_bytes, encode_dynamic_bytes, encode_u64_word};
