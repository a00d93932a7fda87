//! Boundary configuration
//!
//! Controls how faults captured by a [`Boundary`](super::Boundary) are
//! converted and logged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boundary configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse TOML
    #[error("Failed to parse boundary config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field holds an unusable value
    #[error("Invalid boundary configuration: {0}")]
    Invalid(String),
}

/// Configuration for fault capture at the outcome boundary
///
/// # Examples
///
/// ```
/// use outcome_core::BoundaryConfig;
///
/// // Default: capture panics, log faults, plain messages
/// let config = BoundaryConfig::default();
/// assert!(config.catch_panics);
///
/// // Strict: panics propagate, errors record the fault kind
/// let config = BoundaryConfig::strict();
/// assert!(!config.catch_panics);
///
/// let config = BoundaryConfig::from_toml_str("record_fault_kind = true").unwrap();
/// assert!(config.record_fault_kind);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryConfig {
    /// Convert panics raised by the unit of work into failures
    /// Default: true. When false, panics are resumed unchanged.
    #[serde(default = "default_true")]
    pub catch_panics: bool,

    /// Add a `fault` metadata entry ("raised" or "panicked") to converted errors
    /// Default: false
    #[serde(default)]
    pub record_fault_kind: bool,

    /// Emit a tracing event for every captured fault
    /// Default: true
    #[serde(default = "default_true")]
    pub log_faults: bool,

    /// Message used when a panic payload carries no text
    /// Default: "unknown fault"
    #[serde(default = "default_message")]
    pub default_message: String,
}

fn default_true() -> bool {
    true
}

fn default_message() -> String {
    "unknown fault".to_string()
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            catch_panics: true,
            record_fault_kind: false,
            log_faults: true,
            default_message: default_message(),
        }
    }
}

impl BoundaryConfig {
    /// Strict configuration: only returned errors are captured
    ///
    /// Panics cross the boundary as they would without it, and every
    /// converted error records its fault kind.
    pub fn strict() -> Self {
        Self {
            catch_panics: false,
            record_fault_kind: true,
            log_faults: true,
            default_message: default_message(),
        }
    }

    /// Lenient configuration: capture everything, log nothing
    pub fn lenient() -> Self {
        Self {
            catch_panics: true,
            record_fault_kind: false,
            log_faults: false,
            default_message: default_message(),
        }
    }

    /// Parse a configuration from TOML; missing fields take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: BoundaryConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_message.trim().is_empty() {
            return Err(ConfigError::Invalid("default_message must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoundaryConfig::default();
        assert!(config.catch_panics);
        assert!(!config.record_fault_kind);
        assert!(config.log_faults);
        assert_eq!(config.default_message, "unknown fault");
    }

    #[test]
    fn test_presets() {
        let strict = BoundaryConfig::strict();
        assert!(!strict.catch_panics);
        assert!(strict.record_fault_kind);

        let lenient = BoundaryConfig::lenient();
        assert!(lenient.catch_panics);
        assert!(!lenient.log_faults);
    }

    #[test]
    fn test_from_toml_defaults() {
        let config = BoundaryConfig::from_toml_str("").unwrap();
        assert_eq!(config, BoundaryConfig::default());
    }

    #[test]
    fn test_from_toml_fields() {
        let config = BoundaryConfig::from_toml_str(
            r#"
            catch_panics = false
            log_faults = false
            default_message = "opaque panic"
            "#,
        )
        .unwrap();

        assert!(!config.catch_panics);
        assert!(!config.log_faults);
        assert_eq!(config.default_message, "opaque panic");
    }

    #[test]
    fn test_from_toml_rejects_blank_message() {
        let err = BoundaryConfig::from_toml_str(r#"default_message = "  ""#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_toml_rejects_bad_syntax() {
        let err = BoundaryConfig::from_toml_str("catch_panics = maybe").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = BoundaryConfig::strict();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: BoundaryConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }
}
