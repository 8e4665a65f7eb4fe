use std::{path::PathBuf, time::Instant};

use toml::Value;

/// Where a configuration change originated.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeSource {
    /// The config file was edited and reloaded from disk.
    FileReload,
    /// A CLI command set the value.
    CliCommand(String),
    /// The running application changed the value in memory.
    Runtime,
}

/// Represents a configuration change with path-based identification.
///
/// This struct captures all relevant information about a configuration change,
/// including what changed, when it changed, and where the change came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigChange {
    /// Path to the changed field using dot notation (e.g., "behavior.hover_to_expand").
    pub path: String,
    /// The previous value of the field, if available.
    pub old_value: Option<Value>,
    /// The new value of the field.
    pub new_value: Value,
    /// Timestamp when the change occurred.
    pub timestamp: Instant,
    /// Origin of the change.
    pub source: ChangeSource,
}

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The specified configuration path does not exist.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// The value type does not match the expected type for the field.
    #[error("Type mismatch at {path}: Expected {expected_type}, got {actual_value:?}")]
    TypeMismatch {
        /// The path where the type mismatch occurred.
        path: String,
        /// The expected type name.
        expected_type: &'static str,
        /// The actual value that was provided.
        actual_value: Value,
    },

    /// Error occurred while persisting configuration to disk
    #[error("failed to persist config to '{path}': {details}")]
    PersistenceError {
        /// Path where persistence failed
        path: PathBuf,
        /// Error details from the persistence operation
        details: String,
    },

    /// Error occurred while serializing configuration
    #[error("failed to serialize {content_type}: {details}")]
    SerializationError {
        /// Type of content being serialized (e.g., "config")
        content_type: String,
        /// Serialization error details
        details: String,
    },

    /// The resulting configuration could not be read back or is invalid
    #[error("failed to apply config value at '{path}': {details}")]
    DeserializationError {
        /// Path that was being written
        path: String,
        /// Deserialization or validation error details
        details: String,
    },

    /// Failed to initialize file watcher
    #[error("failed to initialize file watcher: {details}")]
    FileWatcherInitError {
        /// File watcher initialization error details
        details: String,
    },

    /// Error occurred while watching a specific file
    #[error("file watcher error for '{path}': {details}")]
    FileWatchError {
        /// Path being watched when error occurred
        path: PathBuf,
        /// File watcher error details
        details: String,
    },

    /// Error occurred while acquiring locks for thread-safe access
    #[error("failed to acquire {lock_type} lock: {details}")]
    LockError {
        /// Type of lock that failed (read, write)
        lock_type: String,
        /// Lock error details
        details: String,
    },
}

impl ConfigChange {
    /// Creates a new configuration change.
    ///
    /// # Arguments
    ///
    /// * `path` - The dot-separated path to the configuration field
    /// * `old_value` - The previous value of the field (if known)
    /// * `new_value` - The new value of the field
    /// * `source` - Where the change originated
    pub fn new(
        path: String,
        old_value: Option<Value>,
        new_value: Value,
        source: ChangeSource,
    ) -> Self {
        Self {
            path,
            old_value,
            new_value,
            timestamp: Instant::now(),
            source,
        }
    }

    /// Extracts the new value as a specific type.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TypeMismatch` if the value cannot be deserialized
    /// into the requested type.
    pub fn extract<T>(&self) -> Result<T, ConfigError>
    where
        T: serde::de::DeserializeOwned,
    {
        let handle_err = |_e: toml::de::Error| -> ConfigError {
            ConfigError::TypeMismatch {
                path: self.path.clone(),
                expected_type: std::any::type_name::<T>(),
                actual_value: self.new_value.clone(),
            }
        };

        T::deserialize(self.new_value.clone()).map_err(handle_err)
    }

    /// Attempts to extract the new value as a boolean.
    ///
    /// Returns `None` if the value is not a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        self.new_value.as_bool()
    }
}
