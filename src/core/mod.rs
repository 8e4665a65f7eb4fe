use std::path::Path;

use thiserror::Error;

/// Error types for the media island application.
///
/// Covers configuration loading and validation. Runtime failures of the
/// media bridge and the overlay window have their own error types and are
/// converted into this one only at the application boundary.
#[derive(Error, Debug)]
pub enum IslandError {
    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: std::path::PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Configuration store operation failed
    #[error(transparent)]
    ConfigStore(#[from] crate::config_store::ConfigError),

    /// Overlay window backend failed
    #[error(transparent)]
    Overlay(#[from] crate::overlay::OverlayError),

    /// Media bridge failed outside of the polling loop
    #[error(transparent)]
    Media(#[from] crate::services::media::MediaError),
}

/// A specialized `Result` type for media island operations.
pub type Result<T> = std::result::Result<T, IslandError>;

impl IslandError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        IslandError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates a validation error for a configuration component.
    pub fn validation(component: &str, details: impl Into<String>) -> Self {
        IslandError::ConfigValidation {
            component: component.to_string(),
            details: details.into(),
        }
    }
}
