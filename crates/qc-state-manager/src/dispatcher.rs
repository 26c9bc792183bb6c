//! # Dispatcher
//!
//! Routes one call input to its state manager method:
//!
//! 1. Empty input is a no-op: nothing is looked up or invoked.
//! 2. The leading four bytes select the method (`UnknownSelector` on a miss).
//! 3. The method's argument layout is length-checked and decoded.
//! 4. The method runs against the caller's backend; its result and any
//!    failure are returned unchanged.
//!
//! The dispatcher holds no mutable state. Clones share the same registry and
//! observer and can serve independent call frames concurrently.

use crate::abi::decode_args;
use crate::config::DispatcherConfig;
use crate::domain::value_objects::{Bytes, Selector, SELECTOR_SIZE};
use crate::errors::DispatchError;
use crate::methods::ExecutionContext;
use crate::metrics;
use crate::observer::{CallObserver, CallRecord, TracingObserver, OUTCOME_NOOP, OUTCOME_OK};
use crate::registry::Registry;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Selector-based router over a shared [`Registry`].
#[derive(Clone)]
pub struct Dispatcher {
    /// Immutable method table.
    registry: Arc<Registry>,
    /// Optional per-call hook.
    observer: Option<Arc<dyn CallObserver>>,
    /// Decode arguments into call records.
    log_arguments: bool,
}

impl Dispatcher {
    /// Create a dispatcher with no observer.
    #[must_use]
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            observer: None,
            log_arguments: false,
        }
    }

    /// Create a dispatcher wired according to `config`.
    ///
    /// With `trace_calls` on, calls are recorded through [`TracingObserver`].
    #[must_use]
    pub fn from_config(registry: Arc<Registry>, config: &DispatcherConfig) -> Self {
        let observer: Option<Arc<dyn CallObserver>> = if config.trace_calls {
            Some(Arc::new(TracingObserver))
        } else {
            None
        };

        Self {
            registry,
            observer,
            log_arguments: config.log_arguments,
        }
    }

    /// Replace the observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Include decoded arguments in call records.
    #[must_use]
    pub fn with_argument_logging(mut self, enabled: bool) -> Self {
        self.log_arguments = enabled;
        self
    }

    /// The registry this dispatcher routes through.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Dispatch one call.
    ///
    /// # Returns
    ///
    /// * `Bytes` - Return data: empty, a raw word, or dynamic-bytes framed
    ///
    /// # Errors
    ///
    /// - `MalformedInput` if the input is 1-3 bytes long or shorter than the
    ///   method's argument layout
    /// - `UnknownSelector` if no method is registered for the selector
    /// - any error raised by the method itself, including backend failures
    pub fn dispatch(
        &self,
        ctx: &mut ExecutionContext<'_>,
        input: &[u8],
    ) -> Result<Bytes, DispatchError> {
        let started = Instant::now();
        let mut record = CallRecord::new(ctx.caller(), input.len());

        let result = self.route(ctx, input, &mut record);

        match &result {
            Ok(output) => {
                record.output_len = output.len();
                if record.selector.is_some() {
                    record.outcome = OUTCOME_OK;
                }
            }
            Err(err) => {
                metrics::record_error(err.kind());
                record.outcome = err.kind();
            }
        }

        if let Some(observer) = &self.observer {
            record.elapsed = started.elapsed();
            observer.on_call(&record);
        }

        result
    }

    fn route(
        &self,
        ctx: &mut ExecutionContext<'_>,
        input: &[u8],
        record: &mut CallRecord,
    ) -> Result<Bytes, DispatchError> {
        if input.is_empty() {
            record.outcome = OUTCOME_NOOP;
            return Ok(Bytes::new());
        }

        let selector = Selector::from_input(input).ok_or(DispatchError::MalformedInput {
            expected: SELECTOR_SIZE,
            actual: input.len(),
        })?;
        record.selector = Some(selector);

        let method = self
            .registry
            .lookup(selector)
            .ok_or(DispatchError::UnknownSelector(selector))?;
        record.signature = Some(method.signature());
        metrics::record_call(method.signature());

        let args = decode_args(input, method.layout())?;
        if self.log_arguments {
            record.arguments = args.iter().map(|arg| format!("{arg:?}")).collect();
        }

        method.execute(ctx, &args)
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("methods", &self.registry.len())
            .field("observed", &self.observer.is_some())
            .field("log_arguments", &self.log_arguments)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
