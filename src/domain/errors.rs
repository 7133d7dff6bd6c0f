//! Domain error types
//!
//! This module defines the error hierarchy for Vitex. All errors are
//! domain-specific and don't expose third-party types.

use std::path::PathBuf;
use thiserror::Error;

/// Main Vitex error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error categories and provides context for error handling.
#[derive(Debug, Error)]
pub enum VitexError {
    /// A required filesystem resource does not exist
    #[error("The {resource} {path} does not exist")]
    NotFound {
        /// What kind of resource was expected (e.g. "checkpoint", "config file")
        resource: &'static str,

        /// The path that was checked
        path: PathBuf,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Recipe parsing or application errors
    #[error("Recipe error: {0}")]
    Recipe(String),

    /// Checkpoint format mismatch errors
    #[error("Checkpoint error: {0}")]
    Checkpoint(String),

    /// Graph export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl VitexError {
    /// Creates a "resource not found" error for a missing checkpoint
    pub fn checkpoint_not_found(path: impl Into<PathBuf>) -> Self {
        VitexError::NotFound {
            resource: "checkpoint",
            path: path.into(),
        }
    }

    /// Creates a "resource not found" error for a missing config file
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        VitexError::NotFound {
            resource: "config file",
            path: path.into(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for VitexError {
    fn from(err: std::io::Error) -> Self {
        VitexError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VitexError {
    fn from(err: serde_json::Error) -> Self {
        VitexError::Serialization(err.to_string())
    }
}

// Conversion from serde_yaml::Error
impl From<serde_yaml::Error> for VitexError {
    fn from(err: serde_yaml::Error) -> Self {
        VitexError::Serialization(format!("YAML parse error: {err}"))
    }
}

// Conversion from candle tensor errors
impl From<candle_core::Error> for VitexError {
    fn from(err: candle_core::Error) -> Self {
        VitexError::Export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = VitexError::checkpoint_not_found("/tmp/missing.safetensors");
        assert_eq!(
            err.to_string(),
            "The checkpoint /tmp/missing.safetensors does not exist"
        );
    }

    #[test]
    fn test_config_not_found_display() {
        let err = VitexError::config_not_found("/tmp/args.yaml");
        assert!(err.to_string().contains("config file"));
        assert!(err.to_string().contains("/tmp/args.yaml"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: VitexError = io_err.into();
        assert!(matches!(err, VitexError::Io(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("foo: [unclosed").unwrap_err();
        let err: VitexError = yaml_err.into();
        assert!(matches!(err, VitexError::Serialization(_)));
        assert!(err.to_string().contains("YAML parse error"));
    }

    #[test]
    fn test_vitex_error_implements_std_error() {
        let err = VitexError::Configuration("bad shape".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
