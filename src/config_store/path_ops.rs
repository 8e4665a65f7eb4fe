use toml::Value;

use super::ConfigError;

/// Checks if a configuration path matches a given pattern
///
/// # Arguments
/// * `path` - The actual configuration path
/// * `pattern` - The pattern to match against (supports "*" as wildcard)
///
/// # Examples
/// * `"behavior.hover_to_expand"` matches `"behavior.hover_to_expand"`
/// * `"behavior.hover_to_expand"` matches `"behavior.*"`
/// * `"behavior.hover_to_expand"` matches `"*"`
pub(super) fn path_matches(path: &str, pattern: &str) -> bool {
    const WILDCARD: &str = "*";

    if pattern == WILDCARD {
        return true;
    };

    let path_parts: Vec<&str> = path.split('.').collect();
    let pattern_parts: Vec<&str> = pattern.split('.').collect();

    if pattern_parts.len() > path_parts.len() {
        return false;
    }

    for (path_part, pattern_part) in path_parts.iter().zip(pattern_parts.iter()) {
        if pattern_part == &WILDCARD {
            continue;
        }

        if path_part != pattern_part {
            return false;
        }
    }

    true
}

/// Navigates through a TOML value structure following a dot-separated path
///
/// # Errors
/// * `ConfigError::InvalidPath` - If the path doesn't exist or is malformed
pub(super) fn navigate_path(value: &Value, path: &str) -> Result<Value, ConfigError> {
    let parts: Vec<&str> = path.split('.').collect();
    let mut current = value;

    for (i, part) in parts.iter().enumerate() {
        match current {
            Value::Table(table) => {
                current = table.get(*part).ok_or_else(|| {
                    ConfigError::InvalidPath(format!(
                        "Key '{}' not found in table at path '{}'",
                        part,
                        parts[..i].join(".")
                    ))
                })?;
            }
            _ => {
                return Err(ConfigError::InvalidPath(format!(
                    "Cannot navigate into {} at path '{}'",
                    current.type_str(),
                    parts[..i].join("."),
                )));
            }
        }
    }

    Ok(current.clone())
}

/// Replaces an existing value at the specified path
///
/// Only existing keys can be replaced; the schema is fixed, so a path that
/// is not already present is a typo rather than a new field.
///
/// # Errors
/// * `ConfigError::InvalidPath` - If the path is empty or doesn't exist
pub(super) fn set_value_at_path(
    value: &mut Value,
    path: &str,
    new_value: Value,
) -> Result<(), ConfigError> {
    let parts: Vec<&str> = path.split('.').collect();
    let Some((last_key, parents)) = parts.split_last() else {
        return Err(ConfigError::InvalidPath("Empty path".to_string()));
    };

    let mut current = value;
    for (i, part) in parents.iter().enumerate() {
        current = match current {
            Value::Table(table) => table.get_mut(*part).ok_or_else(|| {
                ConfigError::InvalidPath(format!(
                    "Key '{}' not found at path '{}'",
                    part,
                    parts[..i].join(".")
                ))
            })?,
            other => {
                return Err(ConfigError::InvalidPath(format!(
                    "Cannot navigate into {} at path '{}'",
                    other.type_str(),
                    parts[..i].join(".")
                )));
            }
        };
    }

    match current {
        Value::Table(table) if table.contains_key(*last_key) => {
            table.insert((*last_key).to_string(), new_value);
            Ok(())
        }
        Value::Table(_) => Err(ConfigError::InvalidPath(format!(
            "Key '{}' not found at path '{}'",
            last_key,
            parents.join(".")
        ))),
        other => Err(ConfigError::InvalidPath(format!(
            "Cannot insert into {} at path '{}'",
            other.type_str(),
            parents.join(".")
        ))),
    }
}
