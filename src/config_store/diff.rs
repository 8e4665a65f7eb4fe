use std::collections::BTreeSet;
use std::time::Instant;

use toml::Value;

use crate::config::Config;

use super::{ChangeSource, ConfigChange, ConfigError};

/// Compares two configurations and identifies specific field-level changes.
///
/// Performs a recursive comparison of configuration structures by converting them
/// to TOML and analyzing differences at the leaf level. Every field exists in
/// both sides because the schema fills defaults, so only value changes are
/// reported.
///
/// # Errors
/// Returns error if either configuration cannot be serialized to TOML format.
pub(super) fn diff_configs(
    old: &Config,
    new: &Config,
    source: ChangeSource,
) -> Result<Vec<ConfigChange>, ConfigError> {
    let serialize = |config: &Config| {
        Value::try_from(config).map_err(|e| ConfigError::SerializationError {
            content_type: "config".to_string(),
            details: e.to_string(),
        })
    };

    let old_value = serialize(old)?;
    let new_value = serialize(new)?;

    let mut changes = Vec::new();
    diff_toml_values("", &old_value, &new_value, &source, Instant::now(), &mut changes);
    Ok(changes)
}

fn diff_toml_values(
    path: &str,
    old: &Value,
    new: &Value,
    source: &ChangeSource,
    timestamp: Instant,
    changes: &mut Vec<ConfigChange>,
) {
    match (old, new) {
        (Value::Table(old_table), Value::Table(new_table)) => {
            let all_keys: BTreeSet<&String> = old_table.keys().chain(new_table.keys()).collect();

            for key in all_keys {
                let field_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };

                match (old_table.get(key), new_table.get(key)) {
                    (Some(old_val), Some(new_val)) => {
                        diff_toml_values(&field_path, old_val, new_val, source, timestamp, changes);
                    }
                    (old_val, Some(new_val)) => changes.push(ConfigChange {
                        path: field_path,
                        old_value: old_val.cloned(),
                        new_value: new_val.clone(),
                        timestamp,
                        source: source.clone(),
                    }),
                    (Some(_), None) | (None, None) => {}
                }
            }
        }
        _ => {
            if old != new {
                changes.push(ConfigChange {
                    path: path.to_string(),
                    old_value: Some(old.clone()),
                    new_value: new.clone(),
                    timestamp,
                    source: source.clone(),
                });
            }
        }
    }
}
