//! Error module - the immutable record describing one failure cause

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Metadata attached to an [`Error`], ordered by key
pub type Metadata = BTreeMap<String, String>;

/// Canonical empty error shared by every `fail()` call
static EMPTY_ERROR: Error = Error::EMPTY;

/// A single failure cause: a human-readable message plus string metadata
///
/// Errors are immutable once built. Every field is private and there is no
/// mutation API; build a new error instead.
///
/// A *validation error* is an `Error` that also names the type the
/// validation targeted (see [`Error::validation`]). It is substitutable
/// anywhere a plain error is expected.
///
/// # Examples
///
/// ```
/// use outcome_core::Error;
///
/// let error = Error::with_entry("row rejected", "line", 42);
/// assert_eq!(error.message(), "row rejected");
/// assert_eq!(error.metadata_value("line"), Some("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    message: String,

    #[serde(default)]
    metadata: Metadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    validated_type_name: Option<String>,
}

impl Error {
    /// The empty error: empty message, no metadata
    pub const EMPTY: Error = Error {
        message: String::new(),
        metadata: BTreeMap::new(),
        validated_type_name: None,
    };

    /// Create an error with a message and no metadata
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: Metadata::new(),
            validated_type_name: None,
        }
    }

    /// Create an error carrying a single metadata entry
    ///
    /// The value is stored in its `Display` form.
    pub fn with_entry(message: impl Into<String>, key: impl Into<String>, value: impl fmt::Display) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert(key.into(), value.to_string());

        Self {
            message: message.into(),
            metadata,
            validated_type_name: None,
        }
    }

    /// Create an error with metadata copied from `entries`
    ///
    /// Duplicate keys resolve last-wins.
    pub fn with_metadata<I, K, V>(message: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            message: message.into(),
            metadata: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            validated_type_name: None,
        }
    }

    /// Create a validation error targeting the type `T`
    ///
    /// Only the last path segment of the type name is kept, so
    /// `validation::<my_app::Order>` records `"Order"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_core::Error;
    ///
    /// struct Order;
    ///
    /// let error = Error::validation::<Order>("quantity must be positive");
    /// assert_eq!(error.validated_type_name(), Some("Order"));
    /// ```
    pub fn validation<T: ?Sized>(message: impl Into<String>) -> Self {
        Self::validation_named(short_type_name::<T>(), message)
    }

    /// Create a validation error for an explicitly named type
    pub fn validation_named(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            validated_type_name: Some(type_name.into()),
            ..Self::new(message)
        }
    }

    /// Attach the validated type name to an existing error
    pub fn for_type<T: ?Sized>(self) -> Self {
        Self {
            validated_type_name: Some(short_type_name::<T>()),
            ..self
        }
    }

    /// Shared reference to the canonical empty error
    pub fn empty() -> &'static Error {
        &EMPTY_ERROR
    }

    /// The human-readable message (may be empty)
    pub fn message(&self) -> &str {
        &self.message
    }

    /// All metadata entries, ordered by key
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Look up one metadata value
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Name of the type a validation error targeted, if any
    pub fn validated_type_name(&self) -> Option<&str> {
        self.validated_type_name.as_deref()
    }

    /// Whether this error came from validation
    pub fn is_validation(&self) -> bool {
        self.validated_type_name.is_some()
    }

    /// Whether this is a validation error for the type `T`
    pub fn is_validation_of<T: ?Sized>(&self) -> bool {
        self.validated_type_name() == Some(short_type_name::<T>().as_str())
    }

    /// Whether this error is structurally the empty error
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Render the serialized field layout as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for Error {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(type_name) = &self.validated_type_name {
            write!(f, "{}: ", type_name)?;
        }
        f.write_str(&self.message)?;

        if !self.metadata.is_empty() {
            f.write_str(" {")?;
            for (i, (key, value)) in self.metadata.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}={}", key, value)?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

/// Short form of a type name
///
/// Named types keep their last path segment with generics stripped
/// (`Vec<u8>` is `"Vec"`). Tuples, slices, arrays, references and pointers
/// keep their shape with every module path removed, so `(i32, String)` is
/// `"(i32, String)"` and `&[Order]` is `"&[Order]"`.
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();

    if full.starts_with(|c: char| c.is_alphabetic() || c == '_') {
        let base = full.split('<').next().unwrap_or(full);
        return base.rsplit("::").next().unwrap_or(base).to_string();
    }

    let mut short = String::with_capacity(full.len());
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            while short.ends_with(|c: char| c.is_alphanumeric() || c == '_') {
                short.pop();
            }
        } else {
            short.push(c);
        }
    }
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Invoice;

    #[test]
    fn test_new_has_empty_metadata() {
        let error = Error::new("boom");
        assert_eq!(error.message(), "boom");
        assert!(error.metadata().is_empty());
        assert!(!error.is_validation());
    }

    #[test]
    fn test_with_entry_stringifies_value() {
        let error = Error::with_entry("bad port", "port", 70000u32);
        assert_eq!(error.metadata_value("port"), Some("70000"));
        assert_eq!(error.metadata().len(), 1);
    }

    #[test]
    fn test_with_metadata_last_wins() {
        let error = Error::with_metadata("dup", [("k", "first"), ("k", "second")]);
        assert_eq!(error.metadata_value("k"), Some("second"));
        assert_eq!(error.metadata().len(), 1);
    }

    #[test]
    fn test_empty_error() {
        let empty = Error::empty();
        assert_eq!(empty.message(), "");
        assert!(empty.metadata().is_empty());
        assert!(empty.is_empty());
        assert_eq!(*empty, Error::default());
        assert!(!Error::new("x").is_empty());
    }

    #[test]
    fn test_validation_type_name() {
        let error = Error::validation::<Invoice>("total mismatch");
        assert_eq!(error.validated_type_name(), Some("Invoice"));
        assert!(error.is_validation_of::<Invoice>());
        assert!(!error.is_validation_of::<String>());

        let generic = Error::validation::<Vec<u8>>("too long");
        assert_eq!(generic.validated_type_name(), Some("Vec"));
    }

    #[test]
    fn test_compound_type_names() {
        let tuple = Error::validation::<(i32, String)>("bad pair");
        assert_eq!(tuple.validated_type_name(), Some("(i32, String)"));
        assert!(tuple.is_validation_of::<(i32, String)>());
        assert!(!tuple.is_validation_of::<String>());

        assert_eq!(Error::validation::<[Invoice]>("x").validated_type_name(), Some("[Invoice]"));
        assert_eq!(Error::validation::<&str>("x").validated_type_name(), Some("&str"));
        assert_eq!(Error::validation::<[u8; 4]>("x").validated_type_name(), Some("[u8; 4]"));
    }

    #[test]
    fn test_for_type_keeps_message_and_metadata() {
        let error = Error::with_entry("bad", "field", "name").for_type::<Invoice>();
        assert_eq!(error.message(), "bad");
        assert_eq!(error.metadata_value("field"), Some("name"));
        assert!(error.is_validation_of::<Invoice>());
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::new("plain").to_string(), "plain");

        let error = Error::with_metadata("bad", [("b", "2"), ("a", "1")]);
        assert_eq!(error.to_string(), "bad {a=1, b=2}");

        let validation = Error::validation_named("Order", "empty");
        assert_eq!(validation.to_string(), "Order: empty");
    }

    #[test]
    fn test_json_layout() {
        let error = Error::with_entry("bad", "code", "E1");
        let json: serde_json::Value = serde_json::from_str(&error.to_json().unwrap()).unwrap();
        assert_eq!(json["message"], "bad");
        assert_eq!(json["metadata"]["code"], "E1");
        assert!(json.get("validatedTypeName").is_none());

        let validation = Error::validation_named("Order", "empty");
        let json = serde_json::to_value(&validation).unwrap();
        assert_eq!(json["validatedTypeName"], "Order");
    }

    #[test]
    fn test_deserialize_without_metadata() {
        let error: Error = serde_json::from_str(r#"{"message":"only"}"#).unwrap();
        assert_eq!(error, Error::new("only"));
    }
}
