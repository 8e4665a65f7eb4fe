use schemars::schema_for;
use toml::Value;

use crate::cli::formatting::format_toml_value;
use crate::cli::{CliError, CommandResult};
use crate::config::Config;
use crate::config_store::{ChangeSource, ConfigStore};

/// Read a configuration value.
///
/// ```bash
/// media-island config get behavior.hover_to_expand
/// media-island config get overlay.expanded_size.width
/// ```
///
/// # Errors
/// Returns error if the path does not exist
pub fn get(store: &ConfigStore, path: &str) -> CommandResult {
    let value = store
        .get_by_path(path)
        .map_err(|e| CliError::ConfigError(e.to_string()))?;

    Ok(format!("{path}: {}", format_toml_value(&value)))
}

/// Change a configuration value and write it back to the config file.
///
/// A running island watching the file picks the change up immediately.
///
/// # Errors
/// Returns error if the path does not exist, the value has the wrong type,
/// the result fails validation, or the file cannot be written
pub fn set(store: &ConfigStore, path: &str, raw_value: &str) -> CommandResult {
    let value = parse_config_value(raw_value);

    store
        .set_by_path(path, value, ChangeSource::CliCommand(path.to_string()))
        .map_err(|e| CliError::ConfigError(e.to_string()))?;
    store
        .save()
        .map_err(|e| CliError::ConfigError(e.to_string()))?;

    Ok(format!("Set new value '{raw_value}' at path '{path}'"))
}

/// Render the JSON schema of the configuration file.
///
/// # Errors
/// Returns error if the schema cannot be serialized
pub fn schema() -> CommandResult {
    let schema = schema_for!(Config);
    serde_json::to_string_pretty(&schema).map_err(|e| CliError::Output(e.to_string()))
}

/// Interpret a command-line value as the most specific TOML type it parses as
pub fn parse_config_value(raw: &str) -> Value {
    if let Ok(b) = raw.parse::<bool>() {
        return Value::Boolean(b);
    }

    if let Ok(i) = raw.parse::<i64>() {
        return Value::Integer(i);
    }

    if let Ok(f) = raw.parse::<f64>() {
        return Value::Float(f);
    }

    Value::String(raw.to_string())
}
