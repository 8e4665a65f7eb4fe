use std::{
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use futures::Stream;
use tokio::sync::broadcast;
use toml::Value;
use tracing::debug;

use crate::config::{BehaviorConfig, Config, ConfigPaths, OverlayConfig, PollingConfig};

use super::{
    ChangeSource, ConfigChange, ConfigError, diff,
    path_ops::{navigate_path, path_matches, set_value_at_path},
};

const CHANGE_CHANNEL_CAPACITY: usize = 256;

/// A thread-safe configuration store that manages application settings and broadcasts changes
///
/// One store is constructed at process start and cloned into every component
/// that needs configuration; clones share the same underlying state.
#[derive(Clone)]
pub struct ConfigStore {
    config: Arc<RwLock<Config>>,
    path: Option<PathBuf>,
    change_sender: broadcast::Sender<ConfigChange>,
}

impl ConfigStore {
    /// Creates a new ConfigStore with default configuration values and no backing file
    pub fn with_defaults() -> Self {
        Self::from_config(Config::default())
    }

    /// Creates an in-memory ConfigStore around an existing configuration
    pub fn from_config(config: Config) -> Self {
        let (change_sender, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);

        Self {
            config: Arc::new(RwLock::new(config)),
            path: None,
            change_sender,
        }
    }

    /// Loads a ConfigStore from the main configuration file
    ///
    /// # Errors
    /// * `ConfigError::PersistenceError` - If the configuration file cannot be located or loaded
    pub fn load() -> Result<Self, ConfigError> {
        let path = ConfigPaths::main_config().map_err(|e| ConfigError::PersistenceError {
            path: PathBuf::from("config.toml"),
            details: e.to_string(),
        })?;
        Self::load_from(&path)
    }

    /// Loads a ConfigStore from a specific file, creating it when missing
    ///
    /// # Errors
    /// * `ConfigError::PersistenceError` - If the file cannot be read, parsed, or validated
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Config::load(path).map_err(|e| ConfigError::PersistenceError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut store = Self::from_config(config);
        store.path = Some(path.to_path_buf());
        Ok(store)
    }

    /// Path of the backing file, if the store was loaded from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns a clone of the current configuration, handling poisoned locks gracefully
    pub fn get_current(&self) -> Config {
        match self.config.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Current behavior toggles
    pub fn behavior(&self) -> BehaviorConfig {
        self.read_with(|config| config.behavior.clone())
    }

    /// Current overlay geometry
    pub fn overlay(&self) -> OverlayConfig {
        self.read_with(|config| config.overlay.clone())
    }

    /// Current polling settings
    pub fn polling(&self) -> PollingConfig {
        self.read_with(|config| config.polling.clone())
    }

    fn read_with<T>(&self, f: impl FnOnce(&Config) -> T) -> T {
        match self.config.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Retrieves a configuration value at the specified path
    ///
    /// # Arguments
    /// * `path` - Dot-separated path to the configuration field (e.g., "behavior.hover_to_expand")
    ///
    /// # Errors
    /// * `ConfigError::InvalidPath` - If the path doesn't exist
    /// * `ConfigError::SerializationError` - If the config cannot be serialized
    pub fn get_by_path(&self, path: &str) -> Result<Value, ConfigError> {
        let config_value = to_toml_value(&self.get_current())?;
        navigate_path(&config_value, path)
    }

    /// Sets a configuration value at the specified path and broadcasts the change
    ///
    /// The change is applied in memory only; call [`ConfigStore::save`] to
    /// persist it.
    ///
    /// # Errors
    /// * `ConfigError::InvalidPath` - If the path doesn't exist
    /// * `ConfigError::DeserializationError` - If the new value has the wrong type
    ///   or leaves the configuration invalid
    /// * `ConfigError::LockError` - If the write lock cannot be acquired
    pub fn set_by_path(
        &self,
        path: &str,
        value: Value,
        source: ChangeSource,
    ) -> Result<(), ConfigError> {
        let old_value = {
            let mut config = self.config.write().map_err(|e| ConfigError::LockError {
                lock_type: "write".to_string(),
                details: e.to_string(),
            })?;

            let mut config_value = to_toml_value(&config)?;
            let old_value = navigate_path(&config_value, path)?;
            set_value_at_path(&mut config_value, path, value.clone())?;

            let updated: Config =
                config_value
                    .try_into()
                    .map_err(|e: toml::de::Error| ConfigError::DeserializationError {
                        path: path.to_string(),
                        details: e.to_string(),
                    })?;

            updated
                .validate()
                .map_err(|e| ConfigError::DeserializationError {
                    path: path.to_string(),
                    details: e.to_string(),
                })?;

            *config = updated;
            old_value
        };

        if old_value != value {
            self.broadcast_change(ConfigChange::new(
                path.to_string(),
                Some(old_value),
                value,
                source,
            ));
        }

        Ok(())
    }

    /// Replaces the whole configuration and broadcasts one change per field that differs
    ///
    /// # Errors
    /// * `ConfigError::SerializationError` - If either configuration cannot be serialized
    /// * `ConfigError::LockError` - If the write lock cannot be acquired
    pub fn replace(&self, new_config: Config, source: ChangeSource) -> Result<(), ConfigError> {
        let changes = {
            let mut config = self.config.write().map_err(|e| ConfigError::LockError {
                lock_type: "write".to_string(),
                details: e.to_string(),
            })?;

            let changes = diff::diff_configs(&config, &new_config, source)?;
            *config = new_config;
            changes
        };

        for change in changes {
            self.broadcast_change(change);
        }

        Ok(())
    }

    /// Persists the current configuration to the backing file
    ///
    /// # Errors
    /// * `ConfigError::PersistenceError` - If the store has no backing file or the write fails
    pub fn save(&self) -> Result<(), ConfigError> {
        let Some(path) = self.path.as_deref() else {
            return Err(ConfigError::PersistenceError {
                path: PathBuf::new(),
                details: "store has no backing file".to_string(),
            });
        };

        self.get_current()
            .save(path)
            .map_err(|e| ConfigError::PersistenceError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })
    }

    /// Creates a stream that yields ConfigChange events matching the specified path pattern
    ///
    /// # Arguments
    /// * `pattern` - A pattern to match configuration paths (supports "*" wildcards)
    pub fn subscribe_to_path(&self, pattern: &str) -> impl Stream<Item = ConfigChange> + use<> {
        let pattern = pattern.to_string();
        let receiver = self.change_sender.subscribe();

        futures::stream::unfold(receiver, move |mut receiver| {
            let pattern = pattern.clone();
            async move {
                loop {
                    match receiver.recv().await {
                        Ok(change) => {
                            if path_matches(&change.path, &pattern) {
                                return Some((change, receiver));
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            debug!("Config subscriber lagged, skipped {skipped} changes");
                        }
                        Err(broadcast::error::RecvError::Closed) => return None,
                    }
                }
            }
        })
    }

    #[cfg(test)]
    pub(crate) fn change_sender_for_tests(&self) -> broadcast::Receiver<ConfigChange> {
        self.change_sender.subscribe()
    }

    pub(super) fn broadcast_change(&self, change: ConfigChange) {
        debug!(path = %change.path, source = ?change.source, "Config changed");
        let _ = self.change_sender.send(change);
    }
}

fn to_toml_value(config: &Config) -> Result<Value, ConfigError> {
    Value::try_from(config).map_err(|e| ConfigError::SerializationError {
        content_type: "config".to_string(),
        details: e.to_string(),
    })
}
