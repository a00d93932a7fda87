//! ValueOutcome module - success carrying a payload, or failure

use crate::boundary::{BoxError, Boundary, Fault};
use crate::fallible::OutcomeFailed;
use crate::{merge, Error, ErrorList, Fallible};
use std::fmt;
use std::future::Future;

/// The result of a computation that produces a `T`
///
/// The payload is present exactly when the outcome is a success. Reading it
/// through the strict accessors ([`value`](Self::value),
/// [`into_value`](Self::into_value)) on a failure is a contract violation
/// and panics; [`value_or_default`](Self::value_or_default) is the safe
/// accessor.
///
/// # Examples
///
/// ```
/// use outcome_core::ValueOutcome;
///
/// fn parse_port(raw: &str) -> ValueOutcome<u16> {
///     raw.parse::<u16>()
///         .map(ValueOutcome::ok)
///         .unwrap_or_else(|e| ValueOutcome::fail_with_entry(e.to_string(), "input", raw))
/// }
///
/// assert_eq!(*parse_port("8080").value(), 8080);
/// assert!(parse_port("eighty").is_failure());
/// assert_eq!(parse_port("eighty").value_or_default(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueOutcome<T> {
    /// Completed with a value
    Success(T),

    /// Failed with at least one error
    Failure(ErrorList),
}

impl<T> ValueOutcome<T> {
    /// A success carrying `value`
    pub fn ok(value: T) -> Self {
        Self::Success(value)
    }

    /// Same as [`ok`](Self::ok)
    pub fn from_value(value: T) -> Self {
        Self::ok(value)
    }

    /// A success for `Some`, a failure built by `on_none` for `None`
    ///
    /// A success never lacks its value; absence has to be reported as a
    /// failure.
    pub fn from_option<F>(value: Option<T>, on_none: F) -> Self
    where
        F: FnOnce() -> Error,
    {
        match value {
            Some(value) => Self::Success(value),
            None => Self::fail_error(on_none()),
        }
    }

    /// A failure carrying the canonical empty error
    pub fn fail() -> Self {
        Self::Failure(ErrorList::empty_error())
    }

    /// A failure with a single message
    pub fn fail_message(message: impl Into<String>) -> Self {
        Self::fail_error(Error::new(message))
    }

    /// A failure with a message and one metadata entry
    pub fn fail_with_entry(message: impl Into<String>, key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::fail_error(Error::with_entry(message, key, value))
    }

    /// A failure carrying `error`
    pub fn fail_error(error: Error) -> Self {
        Self::Failure(ErrorList::single(error))
    }

    /// A failure carrying `errors` in order; empty becomes [`fail`](Self::fail)
    pub fn fail_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self::Failure(ErrorList::collect_or_empty(errors))
    }

    /// Same as [`fail_error`](Self::fail_error)
    pub fn from_error(error: Error) -> Self {
        Self::fail_error(error)
    }

    /// Same as [`fail_many`](Self::fail_many)
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self::fail_many(errors)
    }

    /// Errors reported by this outcome; empty on success
    pub fn errors(&self) -> &[Error] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors,
        }
    }

    /// Whether the outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether the outcome is a failure
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Whether the outcome is a success whose value satisfies `predicate`
    pub fn is_success_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// The error list of a failure
    pub fn failure(&self) -> Option<&ErrorList> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Panic with the errors of a failure; no-op on success
    ///
    /// # Panics
    ///
    /// Panics when the outcome is a failure.
    pub fn throw_if_failed(&self) {
        Fallible::throw_if_failed(self)
    }

    /// The payload of a success
    ///
    /// # Panics
    ///
    /// Panics when the outcome is a failure. Use
    /// [`value_or_default`](Self::value_or_default) when failure is expected.
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => contract_violation(errors),
        }
    }

    /// Consume into the payload of a success
    ///
    /// # Panics
    ///
    /// Panics when the outcome is a failure.
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => contract_violation(&errors),
        }
    }

    /// The payload, or `None` on failure; never panics
    pub fn value_or_default(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The payload, or `T::default()` on failure
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Borrow the payload
    pub fn as_ref(&self) -> ValueOutcome<&T> {
        match self {
            Self::Success(value) => ValueOutcome::Success(value),
            Self::Failure(errors) => ValueOutcome::Failure(errors.clone()),
        }
    }

    /// Run exactly one branch and return its result
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(ErrorList) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => on_failure(errors),
        }
    }

    /// Continue with the payload; a failure is carried over unchanged
    pub fn and_then<U, S>(self, on_success: S) -> ValueOutcome<U>
    where
        S: FnOnce(T) -> ValueOutcome<U>,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => ValueOutcome::Failure(errors),
        }
    }

    /// Async form of [`fold`](Self::fold)
    pub async fn fold_async<U, S, SF, F, FF>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> SF,
        SF: Future<Output = U>,
        F: FnOnce(ErrorList) -> FF,
        FF: Future<Output = U>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(errors) => on_failure(errors).await,
        }
    }

    /// Async form of [`and_then`](Self::and_then)
    pub async fn and_then_async<U, S, SF>(self, on_success: S) -> ValueOutcome<U>
    where
        S: FnOnce(T) -> SF,
        SF: Future<Output = ValueOutcome<U>>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(errors) => ValueOutcome::Failure(errors),
        }
    }

    /// Transform the payload; `f` is never called on a failure
    pub fn map<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => ValueOutcome::Success(f(value)),
            Self::Failure(errors) => ValueOutcome::Failure(errors),
        }
    }

    /// Async form of [`map`](Self::map); the future is never built on a failure
    pub async fn map_async<U, F, Fut>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => ValueOutcome::Success(f(value).await),
            Self::Failure(errors) => ValueOutcome::Failure(errors),
        }
    }

    /// Apply `f` to the whole outcome
    pub fn transform<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }

    /// Merge this outcome with `others`, keeping one value of type `R`
    ///
    /// See [`merge_values`](crate::merge_values) for the exact rules,
    /// including the default-value edge case.
    pub fn merge_with<R, I>(self, others: I) -> ValueOutcome<R>
    where
        I: IntoIterator<Item = ValueOutcome<T>>,
        R: TryFrom<T> + Default + PartialEq,
    {
        merge::merge_values(std::iter::once(self).chain(others))
    }

    /// Run `func`, wrapping its value or converting a fault into a failure
    pub fn try_run<F, E>(func: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        Boundary::default().value(func)
    }

    /// Like [`try_run`](Self::try_run) with a custom fault conversion
    pub fn try_run_with<F, E, H>(func: F, handler: H) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
        H: FnOnce(&Fault) -> Error,
    {
        Boundary::default().value_with(func, handler)
    }

    /// Await the future built by `func`, capturing faults
    pub async fn try_run_async<F, Fut, E>(func: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<BoxError>,
    {
        Boundary::default().value_async(func).await
    }

    /// Like [`try_run_async`](Self::try_run_async) with a custom fault conversion
    pub async fn try_run_async_with<F, Fut, E, H>(func: F, handler: H) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<BoxError>,
        H: FnOnce(&Fault) -> Error,
    {
        Boundary::default().value_async_with(func, handler).await
    }

    /// Split into `(is_success, value, errors)`
    pub fn into_parts(self) -> (bool, Option<T>, Vec<Error>) {
        match self {
            Self::Success(value) => (true, Some(value), Vec::new()),
            Self::Failure(errors) => (false, None, errors.into_vec()),
        }
    }

    /// The error sequence; empty on success
    pub fn into_errors(self) -> Vec<Error> {
        match self {
            Self::Success(_) => Vec::new(),
            Self::Failure(errors) => errors.into_vec(),
        }
    }

    /// Bridge to `?`: the value on success, `Err(OutcomeFailed)` on failure
    pub fn into_result(self) -> Result<T, OutcomeFailed> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(OutcomeFailed::new(errors)),
        }
    }
}

impl<T> Fallible for ValueOutcome<T> {
    fn errors(&self) -> &[Error] {
        ValueOutcome::errors(self)
    }
}

impl<T> From<Error> for ValueOutcome<T> {
    fn from(error: Error) -> Self {
        Self::fail_error(error)
    }
}

impl<T> From<ErrorList> for ValueOutcome<T> {
    fn from(errors: ErrorList) -> Self {
        Self::Failure(errors)
    }
}

impl<T> From<Vec<Error>> for ValueOutcome<T> {
    /// Always a failure; an empty vector becomes [`ValueOutcome::fail`]
    fn from(errors: Vec<Error>) -> Self {
        Self::fail_many(errors)
    }
}

impl<T> From<OutcomeFailed> for ValueOutcome<T> {
    fn from(failed: OutcomeFailed) -> Self {
        Self::Failure(failed.into_errors())
    }
}

impl<T> From<ValueOutcome<T>> for Result<T, ErrorList> {
    fn from(outcome: ValueOutcome<T>) -> Self {
        match outcome {
            ValueOutcome::Success(value) => Ok(value),
            ValueOutcome::Failure(errors) => Err(errors),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ValueOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "success: {value}"),
            Self::Failure(errors) => write!(f, "failure:\n{errors}"),
        }
    }
}

#[cold]
#[track_caller]
fn contract_violation(errors: &ErrorList) -> ! {
    panic!("value read from a failed outcome: {}", OutcomeFailed::new(errors.clone()))
}
