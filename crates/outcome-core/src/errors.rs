//! ErrorList module - the non-empty error sequence carried by every failure

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use thiserror::Error as ThisError;

/// Rejected attempt to build an [`ErrorList`] with no errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[error("a failure must carry at least one error")]
pub struct EmptyErrorList;

/// Ordered, non-empty sequence of [`Error`]s
///
/// A failure outcome always holds one of these, so "failed with zero
/// errors" cannot be represented. Order is insertion order and is kept by
/// every combinator.
///
/// Dereferences to `[Error]` for slice access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Error>", try_from = "Vec<Error>")]
pub struct ErrorList(Vec<Error>);

impl ErrorList {
    /// Build a list from `errors`, or `None` when it is empty
    pub fn new(errors: Vec<Error>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// A list holding exactly one error
    pub fn single(error: Error) -> Self {
        Self(vec![error])
    }

    /// A list holding only the canonical empty error
    pub fn empty_error() -> Self {
        Self::single(Error::EMPTY)
    }

    /// Collect `errors`, substituting the canonical empty error when there are none
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_core::{Error, ErrorList};
    ///
    /// let list = ErrorList::collect_or_empty(Vec::<Error>::new());
    /// assert_eq!(list.len(), 1);
    /// assert!(list.primary().is_empty());
    /// ```
    pub fn collect_or_empty<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        let errors: Vec<Error> = errors.into_iter().collect();
        Self::new(errors).unwrap_or_else(Self::empty_error)
    }

    /// The first error in the list
    pub fn primary(&self) -> &Error {
        // Non-empty by construction
        &self.0[0]
    }

    /// View the errors as a slice
    pub fn as_slice(&self) -> &[Error] {
        &self.0
    }

    /// Consume the list into its errors
    pub fn into_vec(self) -> Vec<Error> {
        self.0
    }

    /// Messages of every error, in order
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(Error::message).collect()
    }
}

impl Deref for ErrorList {
    type Target = [Error];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Error]> for ErrorList {
    fn as_ref(&self) -> &[Error] {
        &self.0
    }
}

impl From<Error> for ErrorList {
    fn from(error: Error) -> Self {
        Self::single(error)
    }
}

impl From<ErrorList> for Vec<Error> {
    fn from(list: ErrorList) -> Self {
        list.0
    }
}

impl TryFrom<Vec<Error>> for ErrorList {
    type Error = EmptyErrorList;

    fn try_from(errors: Vec<Error>) -> Result<Self, Self::Error> {
        Self::new(errors).ok_or(EmptyErrorList)
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ErrorList {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert!(ErrorList::new(Vec::new()).is_none());
        assert_eq!(ErrorList::try_from(Vec::<Error>::new()), Err(EmptyErrorList));
    }

    #[test]
    fn test_order_preserved() {
        let list = ErrorList::new(vec![Error::new("a"), Error::new("b"), Error::new("c")]).unwrap();
        assert_eq!(list.messages(), vec!["a", "b", "c"]);
        assert_eq!(list.primary().message(), "a");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_collect_or_empty() {
        let list = ErrorList::collect_or_empty(vec![Error::new("x")]);
        assert_eq!(list.messages(), vec!["x"]);

        let coerced = ErrorList::collect_or_empty(std::iter::empty());
        assert_eq!(coerced, ErrorList::empty_error());
    }

    #[test]
    fn test_display_numbers_entries() {
        let list = ErrorList::new(vec![Error::new("first"), Error::new("second")]).unwrap();
        assert_eq!(list.to_string(), "1: first\n2: second");
    }

    #[test]
    fn test_serde_is_plain_array() {
        let list = ErrorList::single(Error::new("x"));
        let json = serde_json::to_value(&list).unwrap();
        assert!(json.is_array());

        let empty: Result<ErrorList, _> = serde_json::from_str("[]");
        assert!(empty.is_err());
    }
}
