//! Dispatcher configuration from environment variables.

use std::env;

/// Configuration for a [`Dispatcher`](crate::dispatcher::Dispatcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Record every dispatch through the tracing observer.
    pub trace_calls: bool,

    /// Include hex-encoded argument words in call records.
    pub log_arguments: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            trace_calls: true,
            log_arguments: false,
        }
    }
}

impl DispatcherConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_STATE_MANAGER_TRACE`: Record calls (default: true)
    /// - `QC_STATE_MANAGER_LOG_ARGS`: Log argument words (default: false)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            trace_calls: lookup("QC_STATE_MANAGER_TRACE")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            log_arguments: lookup("QC_STATE_MANAGER_LOG_ARGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Configuration with all call recording off.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            trace_calls: false,
            log_arguments: false,
        }
    }
}
