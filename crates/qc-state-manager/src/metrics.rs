//! # State Manager Metrics
//!
//! Prometheus counters for dispatch volume and failures.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! qc-state-manager = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `state_manager_calls_total` - Counter of dispatched calls (by method)
//! - `state_manager_errors_total` - Counter of failed calls (by error kind)
//!
//! ## Panics
//!
//! Both counters register with the default Prometheus registry on first use
//! and panic if a metric with the same name is already registered there.
//! That is a start-up wiring error; recording itself never panics.

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter_vec, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total dispatched calls, labeled by method signature
    pub static ref CALLS: IntCounterVec = register_int_counter_vec!(
        "state_manager_calls_total",
        "Total number of state manager calls dispatched",
        &["method"]
    )
    .expect("Failed to create CALLS metric");

    /// Total failed calls, labeled by error kind
    pub static ref ERRORS: IntCounterVec = register_int_counter_vec!(
        "state_manager_errors_total",
        "Total number of state manager calls that failed",
        &["kind"]
    )
    .expect("Failed to create ERRORS metric");
}

// =============================================================================
// METRIC RECORDING FUNCTIONS
// =============================================================================

/// Record a dispatched call
#[cfg(feature = "metrics")]
pub fn record_call(method: &str) {
    CALLS.with_label_values(&[method]).inc();
}

/// Record a failed call
#[cfg(feature = "metrics")]
pub fn record_error(kind: &str) {
    ERRORS.with_label_values(&[kind]).inc();
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_call(_method: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_error(_kind: &str) {}
