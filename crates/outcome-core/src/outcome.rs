//! Outcome module - success or failure without a payload

use crate::boundary::{BoxError, Boundary, Fault};
use crate::fallible::OutcomeFailed;
use crate::{merge, Error, ErrorList, Fallible, ValueOutcome};
use std::fmt;
use std::future::Future;

/// The result of a computation that produces no value
///
/// A success carries nothing; a failure carries a non-empty [`ErrorList`].
/// There is no separate status field: the variant *is* the status, and
/// `is_success()` is always equal to `errors().is_empty()`.
///
/// Outcomes are immutable. Combinators consume an outcome and produce a new
/// one.
///
/// # Examples
///
/// ```
/// use outcome_core::Outcome;
///
/// let checks = [Outcome::ok(), Outcome::fail_message("disk full"), Outcome::fail_message("no quota")];
/// let merged = outcome_core::merge_results(&checks);
///
/// assert!(merged.is_failure());
/// assert_eq!(merged.failure().unwrap().messages(), vec!["disk full", "no quota"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// Completed without errors
    #[default]
    Success,

    /// Failed with at least one error
    Failure(ErrorList),
}

impl Outcome {
    /// The shared success outcome
    pub const OK: Outcome = Outcome::Success;

    /// A successful outcome
    pub fn ok() -> Self {
        Self::OK
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

    /// A failure carrying `errors` in order
    ///
    /// An empty sequence is coerced to [`Outcome::fail`]: asking for a
    /// failure never yields a success.
    pub fn fail_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self::Failure(ErrorList::collect_or_empty(errors))
    }

    /// Success when `errors` is empty, failure otherwise
    pub(crate) fn from_collected(errors: Vec<Error>) -> Self {
        match ErrorList::new(errors) {
            Some(list) => Self::Failure(list),
            None => Self::Success,
        }
    }

    /// Errors reported by this outcome; empty on success
    pub fn errors(&self) -> &[Error] {
        match self {
            Self::Success => &[],
            Self::Failure(errors) => errors,
        }
    }

    /// Whether the outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether the outcome is a failure
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The error list of a failure
    pub fn failure(&self) -> Option<&ErrorList> {
        match self {
            Self::Success => None,
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

    /// Run exactly one branch and return its result
    ///
    /// With `U = ()` this is the side-effect-only form.
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce() -> U,
        F: FnOnce(ErrorList) -> U,
    {
        match self {
            Self::Success => on_success(),
            Self::Failure(errors) => on_failure(errors),
        }
    }

    /// Continue with `on_success`; a failure is returned unchanged
    pub fn and_then<S>(self, on_success: S) -> Outcome
    where
        S: FnOnce() -> Outcome,
    {
        match self {
            Self::Success => on_success(),
            failure => failure,
        }
    }

    /// Async form of [`fold`](Self::fold)
    pub async fn fold_async<U, S, SF, F, FF>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce() -> SF,
        SF: Future<Output = U>,
        F: FnOnce(ErrorList) -> FF,
        FF: Future<Output = U>,
    {
        match self {
            Self::Success => on_success().await,
            Self::Failure(errors) => on_failure(errors).await,
        }
    }

    /// Async form of [`and_then`](Self::and_then)
    pub async fn and_then_async<S, SF>(self, on_success: S) -> Outcome
    where
        S: FnOnce() -> SF,
        SF: Future<Output = Outcome>,
    {
        match self {
            Self::Success => on_success().await,
            failure => failure,
        }
    }

    /// Produce a value on success; a failure is re-typed without calling `f`
    pub fn map<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce() -> U,
    {
        match self {
            Self::Success => ValueOutcome::Success(f()),
            Self::Failure(errors) => ValueOutcome::Failure(errors),
        }
    }

    /// Apply `f` to the whole outcome
    ///
    /// `f` always runs and sees failures as they are; any conversion is
    /// `f`'s own.
    pub fn transform<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }

    /// Merge this outcome with `others`, collecting every error in order
    pub fn merge_with<I>(self, others: I) -> Outcome
    where
        I: IntoIterator,
        I::Item: Fallible,
    {
        let mut errors = self.into_errors();
        merge::collect_errors(&mut errors, others);
        Self::from_collected(errors)
    }

    /// Run `action`, converting a returned error or a panic into a failure
    ///
    /// Uses [`Boundary::default`]; see [`Boundary::run`].
    pub fn try_run<F, E>(action: F) -> Outcome
    where
        F: FnOnce() -> Result<(), E>,
        E: Into<BoxError>,
    {
        Boundary::default().run(action)
    }

    /// Like [`try_run`](Self::try_run) with a custom fault conversion
    pub fn try_run_with<F, E, H>(action: F, handler: H) -> Outcome
    where
        F: FnOnce() -> Result<(), E>,
        E: Into<BoxError>,
        H: FnOnce(&Fault) -> Error,
    {
        Boundary::default().run_with(action, handler)
    }

    /// Await the future built by `action`, capturing faults
    pub async fn try_run_async<F, Fut, E>(action: F) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Into<BoxError>,
    {
        Boundary::default().run_async(action).await
    }

    /// Like [`try_run_async`](Self::try_run_async) with a custom fault conversion
    pub async fn try_run_async_with<F, Fut, E, H>(action: F, handler: H) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Into<BoxError>,
        H: FnOnce(&Fault) -> Error,
    {
        Boundary::default().run_async_with(action, handler).await
    }

    /// Split into `(is_success, errors)`
    pub fn into_parts(self) -> (bool, Vec<Error>) {
        (self.is_success(), self.into_errors())
    }

    /// The error sequence; empty on success
    pub fn into_errors(self) -> Vec<Error> {
        match self {
            Self::Success => Vec::new(),
            Self::Failure(errors) => errors.into_vec(),
        }
    }

    /// Bridge to `?`: `Ok(())` on success, `Err(OutcomeFailed)` on failure
    pub fn into_result(self) -> Result<(), OutcomeFailed> {
        match self {
            Self::Success => Ok(()),
            Self::Failure(errors) => Err(OutcomeFailed::new(errors)),
        }
    }
}

impl Fallible for Outcome {
    fn errors(&self) -> &[Error] {
        Outcome::errors(self)
    }
}

impl From<Error> for Outcome {
    fn from(error: Error) -> Self {
        Self::fail_error(error)
    }
}

impl From<ErrorList> for Outcome {
    fn from(errors: ErrorList) -> Self {
        Self::Failure(errors)
    }
}

impl From<Vec<Error>> for Outcome {
    /// Always a failure; an empty vector becomes [`Outcome::fail`]
    fn from(errors: Vec<Error>) -> Self {
        Self::fail_many(errors)
    }
}

impl From<OutcomeFailed> for Outcome {
    fn from(failed: OutcomeFailed) -> Self {
        Self::Failure(failed.into_errors())
    }
}

impl<T> From<ValueOutcome<T>> for Outcome {
    fn from(outcome: ValueOutcome<T>) -> Self {
        match outcome {
            ValueOutcome::Success(_) => Self::Success,
            ValueOutcome::Failure(errors) => Self::Failure(errors),
        }
    }
}

impl From<Outcome> for Vec<Error> {
    fn from(outcome: Outcome) -> Self {
        outcome.into_errors()
    }
}

impl FromIterator<Outcome> for Outcome {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        merge::merge_results(iter)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Failure(errors) => write!(f, "failure:\n{errors}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_ok_has_no_errors() {
        let outcome = Outcome::ok();
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert!(outcome.errors().is_empty());
        assert_eq!(outcome, Outcome::OK);
        assert_eq!(Outcome::default(), Outcome::ok());
    }

    #[test]
    fn test_fail_carries_empty_error() {
        let outcome = Outcome::fail();
        assert!(outcome.is_failure());
        assert_eq!(outcome.errors(), &[Error::EMPTY]);
    }

    #[test]
    fn test_fail_constructors() {
        assert_eq!(Outcome::fail_message("x").errors(), &[Error::new("x")]);

        let with_entry = Outcome::fail_with_entry("x", "k", 1);
        assert_eq!(with_entry.errors()[0].metadata_value("k"), Some("1"));

        let e1 = Error::new("e1");
        let e2 = Error::new("e2");
        let many = Outcome::fail_many(vec![e1.clone(), e2.clone()]);
        assert_eq!(many.errors(), &[e1, e2]);
    }

    #[test]
    fn test_fail_many_empty_coerces_to_fail() {
        assert_eq!(Outcome::fail_many(Vec::new()), Outcome::fail());
        assert_eq!(Outcome::from(Vec::<Error>::new()), Outcome::fail());
    }

    #[test]
    fn test_fold_runs_one_branch() {
        let success_calls = Cell::new(0);
        let failure_calls = Cell::new(0);

        Outcome::ok().fold(|| success_calls.set(success_calls.get() + 1), |_| failure_calls.set(failure_calls.get() + 1));
        assert_eq!((success_calls.get(), failure_calls.get()), (1, 0));

        Outcome::fail().fold(|| success_calls.set(success_calls.get() + 1), |_| failure_calls.set(failure_calls.get() + 1));
        assert_eq!((success_calls.get(), failure_calls.get()), (1, 1));

        let label = Outcome::fail_message("x").fold(|| "ok".to_string(), |errors| errors.primary().message().to_string());
        assert_eq!(label, "x");
    }

    #[test]
    fn test_and_then_identity_on_failure() {
        let failure = Outcome::fail_message("first");
        let called = Cell::new(false);

        let result = failure.clone().and_then(|| {
            called.set(true);
            Outcome::ok()
        });

        assert!(!called.get());
        assert_eq!(result, failure);

        let chained = Outcome::ok().and_then(|| Outcome::fail_message("second"));
        assert_eq!(chained, Outcome::fail_message("second"));
    }

    #[test]
    fn test_map_short_circuits() {
        let called = Cell::new(false);
        let mapped: ValueOutcome<i32> = Outcome::fail_message("no").map(|| {
            called.set(true);
            1
        });
        assert!(!called.get());
        assert_eq!(mapped.errors(), &[Error::new("no")]);

        assert_eq!(Outcome::ok().map(|| 7).into_value(), 7);
    }

    #[test]
    fn test_transform_sees_whole_outcome() {
        let count = Outcome::fail_many(vec![Error::new("a"), Error::new("b")]).transform(|o| o.errors().len());
        assert_eq!(count, 2);
    }

    #[test]
    fn test_merge_with_collects_in_order() {
        let merged = Outcome::fail_message("a").merge_with([Outcome::ok(), Outcome::fail_message("b")]);
        assert_eq!(merged.failure().unwrap().messages(), vec!["a", "b"]);

        let all_ok = Outcome::ok().merge_with([Outcome::ok()]);
        assert!(all_ok.is_success());
    }

    #[test]
    fn test_from_iterator_merges() {
        let merged: Outcome = vec![Outcome::fail_message("a"), Outcome::ok(), Outcome::fail_message("b")]
            .into_iter()
            .collect();
        assert_eq!(merged.failure().unwrap().messages(), vec!["a", "b"]);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Outcome::from(Error::new("x")), Outcome::fail_message("x"));
        assert!(Vec::<Error>::from(Outcome::ok()).is_empty());
        assert_eq!(Outcome::from(ValueOutcome::ok(3)), Outcome::ok());
        assert_eq!(Outcome::from(ValueOutcome::<i32>::fail_message("x")), Outcome::fail_message("x"));

        let (is_success, errors) = Outcome::fail_message("x").into_parts();
        assert!(!is_success);
        assert_eq!(errors, vec![Error::new("x")]);
    }

    #[test]
    fn test_into_result() {
        assert!(Outcome::ok().into_result().is_ok());

        let err = Outcome::fail_message("x").into_result().unwrap_err();
        assert_eq!(err.errors().messages(), vec!["x"]);
        assert_eq!(Outcome::from(err), Outcome::fail_message("x"));
    }

    #[test]
    #[should_panic(expected = "outcome failed")]
    fn test_throw_if_failed() {
        Outcome::fail_message("fatal").throw_if_failed();
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::ok().to_string(), "success");
        assert_eq!(Outcome::fail_message("x").to_string(), "failure:\n1: x");
    }
}
