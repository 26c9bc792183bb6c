//! # Error Types
//!
//! All error types for state manager dispatch.

use crate::domain::value_objects::{Address, Selector};
use thiserror::Error;

// =============================================================================
// DISPATCH ERRORS
// =============================================================================

/// Labels returned by [`DispatchError::kind`].
pub mod kinds {
    /// Input too short for the selector or the method's layout.
    pub const MALFORMED_INPUT: &str = "malformed_input";
    /// Selector not registered.
    pub const UNKNOWN_SELECTOR: &str = "unknown_selector";
    /// State backend failure.
    pub const BACKEND_FAILURE: &str = "backend_failure";
    /// Nonce increment past `u64::MAX`.
    pub const NONCE_OVERFLOW: &str = "nonce_overflow";
    /// Method read an argument its layout does not declare.
    pub const ARGUMENT_OUT_OF_LAYOUT: &str = "argument_out_of_layout";
}

/// Errors returned by the dispatcher and the methods it routes to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Call input is shorter than the layout it must carry.
    #[error("malformed input: expected at least {expected} bytes, got {actual}")]
    MalformedInput { expected: usize, actual: usize },

    /// No method is registered for the selector.
    #[error("unknown selector: {0}")]
    UnknownSelector(Selector),

    /// The state backend failed. Propagated unchanged.
    #[error("backend failure: {0}")]
    Backend(#[from] StateError),

    /// A method read an argument index its layout does not declare.
    #[error("argument {index} is outside the declared layout of {declared} words")]
    ArgumentOutOfLayout { index: usize, declared: usize },

    /// Incrementing the nonce would wrap past `u64::MAX`.
    #[error("nonce overflow for address: {0}")]
    NonceOverflow(Address),
}

impl DispatchError {
    /// Stable label for logs and metrics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedInput { .. } => kinds::MALFORMED_INPUT,
            Self::UnknownSelector(_) => kinds::UNKNOWN_SELECTOR,
            Self::Backend(_) => kinds::BACKEND_FAILURE,
            Self::NonceOverflow(_) => kinds::NONCE_OVERFLOW,
            Self::ArgumentOutOfLayout { .. } => kinds::ARGUMENT_OUT_OF_LAYOUT,
        }
    }

    /// Returns true if the caller can succeed by correcting its input.
    ///
    /// Backend failures are left to the backend's own retry policy.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MalformedInput { .. } | Self::UnknownSelector(_))
    }
}

// =============================================================================
// STATE ERRORS
// =============================================================================

/// Errors from state backend operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// State not found for the address.
    #[error("state not found for address: {0}")]
    NotFound(Address),

    /// State database is corrupted.
    #[error("state corruption detected")]
    Corrupted,

    /// State access was rejected (permission denied).
    #[error("state access denied")]
    AccessDenied,

    /// Backend is not reachable.
    #[error("state backend unavailable")]
    Unavailable,

    /// Other state error.
    #[error("state error: {0}")]
    Other(String),
}

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Errors raised while building a [`Registry`](crate::registry::Registry).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two distinct signatures hash to the same selector.
    #[error("selector collision on {selector}: `{existing}` vs `{incoming}`")]
    SelectorCollision {
        selector: Selector,
        existing: &'static str,
        incoming: &'static str,
    },

    /// The same signature was registered twice.
    #[error("duplicate signature: `{0}`")]
    DuplicateSignature(&'static str),
}

// =============================================================================
// ABI ERRORS
// =============================================================================

/// Errors from decoding a dynamic-bytes return buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AbiError {
    /// Buffer ends before a required field.
    #[error("buffer truncated: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    /// Head offset does not point inside the buffer.
    #[error("dynamic offset out of range: {0}")]
    OffsetOutOfRange(String),

    /// Declared length does not fit the buffer.
    #[error("dynamic length out of range: {0}")]
    LengthOutOfRange(String),
}

// =============================================================================
// TESTS
// =============================================================================
