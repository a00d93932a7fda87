//! Extensions for moving between `std::result::Result` and outcomes.
//!
//! - Use [`ResultExt::into_outcome`] when the error's `Display` text is a
//!   good enough message.
//! - Use [`ResultExt::into_outcome_with`] to build a richer [`Error`].
//!
//! # Examples
//!
//! ```
//! use outcome_core::{Error, ResultExt};
//!
//! let port = "8080".parse::<u16>().into_outcome();
//! assert_eq!(port.into_value(), 8080);
//!
//! let bad = "port".parse::<u16>().into_outcome_with(|e| Error::with_entry("bad port", "cause", e));
//! assert_eq!(bad.errors()[0].message(), "bad port");
//! ```

use crate::{Error, ValueOutcome};
use std::fmt;

/// Conversion of `Result<T, E>` into [`ValueOutcome<T>`]
pub trait ResultExt<T, E> {
    /// `Ok(v)` becomes a success; `Err(e)` a failure with `e`'s message
    fn into_outcome(self) -> ValueOutcome<T>;

    /// Like [`into_outcome`](ResultExt::into_outcome) with a custom conversion
    fn into_outcome_with<F>(self, convert: F) -> ValueOutcome<T>
    where
        F: FnOnce(E) -> Error;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: fmt::Display,
{
    fn into_outcome(self) -> ValueOutcome<T> {
        self.into_outcome_with(|e| Error::new(e.to_string()))
    }

    fn into_outcome_with<F>(self, convert: F) -> ValueOutcome<T>
    where
        F: FnOnce(E) -> Error,
    {
        match self {
            Ok(value) => ValueOutcome::ok(value),
            Err(error) => ValueOutcome::fail_error(convert(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_outcome() {
        let ok: Result<i32, String> = Ok(1);
        assert_eq!(ok.into_outcome(), ValueOutcome::ok(1));

        let err: Result<i32, String> = Err("broken".to_string());
        assert_eq!(err.into_outcome(), ValueOutcome::fail_message("broken"));
    }

    #[test]
    fn test_into_outcome_with() {
        let err: Result<(), &str> = Err("io");
        let outcome = err.into_outcome_with(|e| Error::with_entry("read failed", "cause", e));
        assert_eq!(outcome.errors()[0].metadata_value("cause"), Some("io"));
    }
}
