//! # Call Observers
//!
//! Per-dispatch observability hook. The dispatcher never writes output on
//! its own; it hands a [`CallRecord`] to the configured observer once per
//! call, and the integrating system decides what to keep.

use crate::domain::value_objects::{Address, Selector};
use crate::errors::kinds;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Outcome label for a successful call.
pub const OUTCOME_OK: &str = "ok";

/// Outcome label for an empty input, which dispatches nothing.
pub const OUTCOME_NOOP: &str = "noop";

/// Metadata about a single dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct CallRecord {
    /// Selector read from the input, if it carried one.
    pub selector: Option<Selector>,
    /// Signature of the routed method, if the selector was registered.
    pub signature: Option<&'static str>,
    /// Contract that called the state manager.
    pub caller: Address,
    /// Length of the call input in bytes.
    pub input_len: usize,
    /// Length of the return data in bytes (zero on failure).
    pub output_len: usize,
    /// `ok`, `noop`, or the error kind.
    pub outcome: &'static str,
    /// Decoded arguments, hex encoded. Empty unless argument logging is on.
    pub arguments: Vec<String>,
    /// Wall time spent in the dispatch.
    pub elapsed: Duration,
}

impl CallRecord {
    pub(crate) fn new(caller: Address, input_len: usize) -> Self {
        Self {
            selector: None,
            signature: None,
            caller,
            input_len,
            output_len: 0,
            outcome: OUTCOME_NOOP,
            arguments: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Returns true if the call succeeded (including the empty-input no-op).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == OUTCOME_OK || self.outcome == OUTCOME_NOOP
    }
}

/// Receives one [`CallRecord`] per dispatch.
pub trait CallObserver: Send + Sync {
    /// Called after the dispatch completes, successful or not.
    fn on_call(&self, record: &CallRecord);
}

/// Emits call records as `tracing` events.
///
/// Successful calls and input errors log at `DEBUG`; backend failures, nonce
/// overflows and out-of-layout argument reads at `WARN`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CallObserver for TracingObserver {
    fn on_call(&self, record: &CallRecord) {
        let selector = record.selector.map(|s| s.to_string()).unwrap_or_default();
        let method = record.signature.unwrap_or("-");

        if is_fault(record.outcome) {
            warn!(
                selector = %selector,
                method,
                caller = ?record.caller,
                outcome = record.outcome,
                "[State Mgr] Call failed"
            );
        } else {
            debug!(
                selector = %selector,
                method,
                caller = ?record.caller,
                input_len = record.input_len,
                output_len = record.output_len,
                outcome = record.outcome,
                arguments = ?record.arguments,
                elapsed_us = record.elapsed.as_micros() as u64,
                "[State Mgr] Call dispatched"
            );
        }
    }
}

/// Outcomes not caused by the caller's input.
fn is_fault(outcome: &str) -> bool {
    matches!(
        outcome,
        kinds::BACKEND_FAILURE | kinds::NONCE_OVERFLOW | kinds::ARGUMENT_OUT_OF_LAYOUT
    )
}

// =============================================================================
// TESTS
// =============================================================================
