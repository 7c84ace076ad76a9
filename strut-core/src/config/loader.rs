use std::collections::HashMap;
use std::path::Path;

use super::{ConfigError, KNOWN_KEYS};

/// Merge the YAML file at `path` into `values`. Returns `false` when the file
/// does not exist.
pub(crate) fn load_yaml_file(
    path: &Path,
    values: &mut HashMap<String, String>,
) -> Result<bool, ConfigError> {
    if !path.exists() {
        return Ok(false);
    }
    let origin = path.display().to_string();
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Load(format!("{origin}: {e}")))?;
    load_yaml_str(&content, &origin, values)?;
    tracing::debug!(path = %origin, "Loaded config file");
    Ok(true)
}

/// Merge one YAML document into `values`.
///
/// Only the `strut.*` namespace is read; keys outside it are left to whatever
/// else shares the file. Inside it every key must be one strut knows, and
/// its value must be a scalar. `~` unsets a key set by an earlier layer.
pub(crate) fn load_yaml_str(
    content: &str,
    origin: &str,
    values: &mut HashMap<String, String>,
) -> Result<(), ConfigError> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| ConfigError::Load(format!("{origin}: {e}")))?;

    let mut leaves = Vec::new();
    flatten_yaml(String::new(), &yaml, &mut leaves);

    for (key, leaf) in leaves {
        if key != "strut" && !key.starts_with("strut.") {
            continue;
        }
        if !KNOWN_KEYS.contains(&key.as_str()) {
            return Err(ConfigError::UnknownKey {
                key,
                origin: origin.to_string(),
            });
        }
        match scalar_text(leaf) {
            Some(text) => {
                values.insert(key, text);
            }
            None if leaf.is_null() => {
                values.remove(&key);
            }
            None => {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: format!("expected a string, found {} in {origin}", kind(leaf)),
                })
            }
        }
    }
    Ok(())
}

/// Collect the non-mapping values of a YAML tree under dot-separated keys.
/// Lists are leaves.
fn flatten_yaml<'v>(
    prefix: String,
    value: &'v serde_yaml::Value,
    out: &mut Vec<(String, &'v serde_yaml::Value)>,
) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                let segment = scalar_text(k).unwrap_or_else(|| format!("{k:?}"));
                let key = if prefix.is_empty() {
                    segment
                } else {
                    format!("{prefix}.{segment}")
                };
                flatten_yaml(key, v, out);
            }
        }
        leaf => {
            if !prefix.is_empty() {
                out.push((prefix, leaf));
            }
        }
    }
}

fn scalar_text(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Sequence(_) => "a list",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
        _ => "a scalar",
    }
}
