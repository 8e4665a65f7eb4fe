use std::{fs, path::Path};

use tracing::{debug, info, instrument};

use super::Config;
use crate::{IslandError, Result};

const DEFAULT_FILE_HEADER: &str = "# media-island configuration file\n";

impl Config {
    /// Loads and validates the configuration file at `path`.
    ///
    /// A missing file is created with a comment header and yields the
    /// default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read or created
    /// - The TOML content is invalid
    /// - The parsed configuration fails validation
    #[instrument]
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            create_default_config_file(path)?;
        }

        let content = fs::read_to_string(path).map_err(|e| IslandError::IoError {
            path: path.to_path_buf(),
            details: format!("Failed to read config: {e}"),
        })?;

        let config = Self::from_toml_str(&content, Some(path))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `IslandError::TomlParseError` for malformed TOML and
    /// `IslandError::ConfigValidation` for values that violate constraints.
    pub fn from_toml_str(content: &str, path: Option<&Path>) -> Result<Config> {
        let config: Config =
            toml::from_str(content).map_err(|e| IslandError::toml_parse(e, path))?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    #[instrument(skip(self))]
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let body = toml::to_string_pretty(self).map_err(|e| IslandError::toml_parse(e, Some(path)))?;
        fs::write(path, format!("{DEFAULT_FILE_HEADER}{body}")).map_err(|e| {
            IslandError::IoError {
                path: path.to_path_buf(),
                details: format!("Failed to write config: {e}"),
            }
        })?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }
}

fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| IslandError::IoError {
            path: parent.to_path_buf(),
            details: format!("Failed to create config directory: {e}"),
        })?;
    }

    fs::write(path, DEFAULT_FILE_HEADER).map_err(|e| IslandError::IoError {
        path: path.to_path_buf(),
        details: format!("Failed to create config file: {e}"),
    })?;

    info!("Created default config file at {}", path.display());
    Ok(())
}
