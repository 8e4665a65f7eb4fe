use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::config::Config;

use super::{ChangeSource, ConfigError, ConfigStore, file_watcher::FileWatcher};

const DEBOUNCE: Duration = Duration::from_millis(500);

impl ConfigStore {
    /// Starts monitoring the backing configuration file and broadcasts updates.
    ///
    /// When the file changes, the configuration is reloaded after a short
    /// debounce, diffed against the current one, and every changed field is
    /// broadcast to subscribers. A file that fails to parse or validate is
    /// logged and ignored; the previous configuration stays in effect.
    ///
    /// The watch runs until the process exits.
    ///
    /// # Errors
    /// Returns error if the store has no backing file or file watching cannot
    /// be initialized.
    #[instrument(skip(self))]
    pub fn start_file_watching(&self) -> Result<(), ConfigError> {
        let Some(path) = self.path().map(|p| p.to_path_buf()) else {
            return Err(ConfigError::FileWatcherInitError {
                details: "store has no backing file".to_string(),
            });
        };

        let (watcher, mut event_rx) =
            FileWatcher::watch(&path).map_err(|e| ConfigError::FileWatchError {
                path: path.clone(),
                details: e.to_string(),
            })?;

        info!("Watching {} for changes", watcher.target().display());

        let store = self.clone();

        tokio::spawn(async move {
            let _watcher = watcher;
            let mut pending = false;

            let debounce_sleep = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(debounce_sleep);

            loop {
                tokio::select! {
                    event = event_rx.recv() => {
                        let Some(event) = event else {
                            debug!("Config watcher channel closed");
                            break;
                        };

                        debug!(kind = ?event.kind, "Config file event");
                        pending = true;
                        debounce_sleep.as_mut().reset(tokio::time::Instant::now() + DEBOUNCE);
                    }

                    _ = &mut debounce_sleep, if pending => {
                        pending = false;
                        if let Err(e) = store.reload_from_file() {
                            warn!("Failed to reload config: {e}");
                        }
                    }
                }
            }
        });

        Ok(())
    }

    /// Re-reads the backing file and broadcasts field-level changes.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or validated.
    pub fn reload_from_file(&self) -> Result<(), ConfigError> {
        let Some(path) = self.path() else {
            return Err(ConfigError::PersistenceError {
                path: Default::default(),
                details: "store has no backing file".to_string(),
            });
        };

        let new_config = Config::load(path).map_err(|e| ConfigError::PersistenceError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        self.replace(new_config, ChangeSource::FileReload)
    }
}
