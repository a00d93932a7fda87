//! Shared surface of every outcome type

use crate::{Error, ErrorList};
use thiserror::Error as ThisError;

/// A failed outcome surfaced as a standard error
///
/// Returned by `into_result` on the outcome types, and rendered as the panic
/// message of [`Fallible::throw_if_failed`] and the strict value accessors.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("outcome failed: {errors}")]
pub struct OutcomeFailed {
    errors: ErrorList,
}

impl OutcomeFailed {
    /// Wrap the errors of a failure
    pub fn new(errors: ErrorList) -> Self {
        Self { errors }
    }

    /// Build from an error slice, or `None` when the slice is empty (success)
    pub fn from_errors(errors: &[Error]) -> Option<Self> {
        ErrorList::new(errors.to_vec()).map(Self::new)
    }

    /// The errors of the failed outcome
    pub fn errors(&self) -> &ErrorList {
        &self.errors
    }

    /// Consume into the error list
    pub fn into_errors(self) -> ErrorList {
        self.errors
    }
}

/// Anything that reports success or failure through an error sequence
///
/// Implemented by [`Outcome`](crate::Outcome) and
/// [`ValueOutcome`](crate::ValueOutcome), and by references to either, so
/// merges can mix outcome types through `&dyn Fallible`.
///
/// Success is derived from the error sequence alone: an implementation is
/// successful exactly when [`errors`](Fallible::errors) is empty.
pub trait Fallible {
    /// Errors reported by this outcome; empty on success
    fn errors(&self) -> &[Error];

    /// Whether no errors were reported
    fn is_success(&self) -> bool {
        self.errors().is_empty()
    }

    /// Whether at least one error was reported
    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Panic with the outcome's errors when it failed; no-op on success
    ///
    /// # Panics
    ///
    /// Panics when the outcome is a failure. Reaching this on a failure is a
    /// caller bug, not a recoverable condition.
    fn throw_if_failed(&self) {
        if let Some(failed) = OutcomeFailed::from_errors(self.errors()) {
            panic!("{failed}");
        }
    }

    /// Whether any reported error satisfies `predicate`
    fn has_error<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Error) -> bool,
        Self: Sized,
    {
        self.errors().iter().any(predicate)
    }

    /// Whether any reported error is a validation error for `T`
    fn has_validation_error_for<T: ?Sized>(&self) -> bool
    where
        Self: Sized,
    {
        self.errors().iter().any(Error::is_validation_of::<T>)
    }
}

impl<F: Fallible + ?Sized> Fallible for &F {
    fn errors(&self) -> &[Error] {
        (**self).errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe(Vec<Error>);

    impl Fallible for Probe {
        fn errors(&self) -> &[Error] {
            &self.0
        }
    }

    #[test]
    fn test_success_derived_from_errors() {
        assert!(Probe(vec![]).is_success());
        assert!(Probe(vec![Error::new("x")]).is_failure());
    }

    #[test]
    fn test_throw_if_failed_noop_on_success() {
        Probe(vec![]).throw_if_failed();
    }

    #[test]
    #[should_panic(expected = "outcome failed: 1: broken")]
    fn test_throw_if_failed_panics() {
        Probe(vec![Error::new("broken")]).throw_if_failed();
    }

    #[test]
    fn test_has_error() {
        let probe = Probe(vec![Error::new("a"), Error::validation_named("Order", "b")]);
        assert!(probe.has_error(|e| e.message() == "a"));
        assert!(!probe.has_error(|e| e.message() == "z"));
        assert!(probe.has_error(Error::is_validation));
    }

    #[test]
    fn test_outcome_failed_from_errors() {
        assert!(OutcomeFailed::from_errors(&[]).is_none());

        let failed = OutcomeFailed::from_errors(&[Error::new("x")]).unwrap();
        assert_eq!(failed.errors().messages(), vec!["x"]);
        assert_eq!(failed.to_string(), "outcome failed: 1: x");
    }
}
