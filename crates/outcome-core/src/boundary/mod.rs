//! Boundary module - turning faults into failed outcomes
//!
//! A [`Boundary`] runs a unit of work and captures whatever fault it raises:
//! an `Err` it returns, or a panic. The fault is converted into an [`Error`]
//! (by default from its message, or by a caller-supplied handler) and
//! returned as a failure. Faults are captured exactly once and never
//! re-raised by the boundary itself.
//!
//! There is no cancellation or timeout handling here; a future dropped by
//! its caller simply never produces an outcome.

mod config;

pub use config::{BoundaryConfig, ConfigError};

use crate::{Error, Outcome, ValueOutcome};
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error as ThisError;
use tracing::{debug, warn};

/// Error type accepted from a unit of work
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A fault raised by a unit of work run inside a [`Boundary`]
#[derive(Debug, ThisError)]
pub enum Fault {
    /// The unit of work returned an error
    #[error("{0}")]
    Raised(BoxError),

    /// The unit of work panicked
    #[error("{message}")]
    Panicked {
        /// Text of the panic payload
        message: String,
    },
}

impl Fault {
    /// The fault's message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Short label for the fault kind: `"raised"` or `"panicked"`
    pub fn kind(&self) -> &'static str {
        match self {
            Fault::Raised(_) => "raised",
            Fault::Panicked { .. } => "panicked",
        }
    }

    /// Whether the fault came from a panic
    pub fn is_panic(&self) -> bool {
        matches!(self, Fault::Panicked { .. })
    }

    /// Inspect a raised error as a concrete type
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Fault::Raised(error) => error.downcast_ref::<E>(),
            Fault::Panicked { .. } => None,
        }
    }

    fn from_panic(payload: Box<dyn Any + Send>, fallback: &str) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            fallback.to_string()
        };

        Fault::Panicked { message }
    }
}

/// Runs units of work and converts their faults into failed outcomes
///
/// Capturing a panic does not silence the process panic hook: the usual
/// "thread ... panicked at" line still reaches stderr before the boundary
/// converts the panic, and with `log_faults` set the capture also emits a
/// `warn!` event. Callers running panicking work on hot paths should
/// install their own hook (`std::panic::set_hook`) or use
/// [`BoundaryConfig::lenient`] to drop the tracing event.
///
/// # Examples
///
/// ```
/// use outcome_core::{Boundary, BoundaryConfig, Error};
///
/// let boundary = Boundary::new(BoundaryConfig::default());
///
/// let parsed = boundary.value(|| "42".parse::<i32>());
/// assert_eq!(parsed.into_value(), 42);
///
/// let failed = boundary.value_with(|| "x".parse::<i32>(), |fault| {
///     Error::with_entry("not a number", "cause", fault.message())
/// });
/// assert_eq!(failed.errors()[0].message(), "not a number");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Boundary {
    config: BoundaryConfig,
}

impl Boundary {
    /// Create a boundary with the given configuration
    pub fn new(config: BoundaryConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    /// Run `action`; success on `Ok(())`, failure on a fault
    pub fn run<F, E>(&self, action: F) -> Outcome
    where
        F: FnOnce() -> Result<(), E>,
        E: Into<BoxError>,
    {
        self.value(action).into()
    }

    /// Like [`run`](Self::run) with a custom fault conversion
    pub fn run_with<F, E, H>(&self, action: F, handler: H) -> Outcome
    where
        F: FnOnce() -> Result<(), E>,
        E: Into<BoxError>,
        H: FnOnce(&Fault) -> Error,
    {
        self.value_with(action, handler).into()
    }

    /// Run `func`; its value on `Ok`, failure on a fault
    pub fn value<T, F, E>(&self, func: F) -> ValueOutcome<T>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        self.value_with(func, |fault| self.default_error(fault))
    }

    /// Like [`value`](Self::value) with a custom fault conversion
    pub fn value_with<T, F, E, H>(&self, func: F, handler: H) -> ValueOutcome<T>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
        H: FnOnce(&Fault) -> Error,
    {
        let result = if self.config.catch_panics {
            panic::catch_unwind(AssertUnwindSafe(func))
        } else {
            Ok(func())
        };

        self.settle(result, handler)
    }

    /// Await the future built by `action`; success on `Ok(())`
    pub async fn run_async<F, Fut, E>(&self, action: F) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Into<BoxError>,
    {
        self.value_async(action).await.into()
    }

    /// Like [`run_async`](Self::run_async) with a custom fault conversion
    pub async fn run_async_with<F, Fut, E, H>(&self, action: F, handler: H) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Into<BoxError>,
        H: FnOnce(&Fault) -> Error,
    {
        self.value_async_with(action, handler).await.into()
    }

    /// Await the future built by `func`; its value on `Ok`
    pub async fn value_async<T, F, Fut, E>(&self, func: F) -> ValueOutcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<BoxError>,
    {
        self.value_async_with(func, |fault| self.default_error(fault)).await
    }

    /// Like [`value_async`](Self::value_async) with a custom fault conversion
    ///
    /// Building the future happens inside the capture, so a panic while
    /// `func` constructs it is captured like one raised while polling.
    pub async fn value_async_with<T, F, Fut, E, H>(&self, func: F, handler: H) -> ValueOutcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<BoxError>,
        H: FnOnce(&Fault) -> Error,
    {
        let work = async move { func().await };

        let result = if self.config.catch_panics {
            AssertUnwindSafe(work).catch_unwind().await
        } else {
            Ok(work.await)
        };

        self.settle(result, handler)
    }

    /// The default conversion: the fault's message, plus its kind when configured
    pub fn default_error(&self, fault: &Fault) -> Error {
        if self.config.record_fault_kind {
            Error::with_entry(fault.message(), "fault", fault.kind())
        } else {
            Error::new(fault.message())
        }
    }

    fn settle<T, E, H>(
        &self,
        result: Result<Result<T, E>, Box<dyn Any + Send>>,
        handler: H,
    ) -> ValueOutcome<T>
    where
        E: Into<BoxError>,
        H: FnOnce(&Fault) -> Error,
    {
        let fault = match result {
            Ok(Ok(value)) => return ValueOutcome::ok(value),
            Ok(Err(error)) => Fault::Raised(error.into()),
            Err(payload) => Fault::from_panic(payload, &self.config.default_message),
        };

        self.observe(&fault);
        ValueOutcome::fail_error(handler(&fault))
    }

    fn observe(&self, fault: &Fault) {
        if !self.config.log_faults {
            return;
        }

        match fault {
            Fault::Raised(_) => debug!(kind = fault.kind(), "Captured fault at outcome boundary: {}", fault),
            Fault::Panicked { .. } => warn!(kind = fault.kind(), "Captured panic at outcome boundary: {}", fault),
        }
    }
}
