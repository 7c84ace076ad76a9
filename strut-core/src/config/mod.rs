mod loader;
mod settings;

use std::collections::HashMap;
use std::path::Path;

pub use settings::GeneratorSettings;

/// `embedded`, or the path of a matcher unit on disk.
pub const HELPERS_SOURCE: &str = "strut.helpers.source";
/// Separator between the items of a repeated query parameter.
pub const BINDINGS_SEPARATOR: &str = "strut.bindings.separator";

/// Every key strut reads. Anything else under `strut.` is rejected.
pub const KNOWN_KEYS: [&str; 2] = [HELPERS_SOURCE, BINDINGS_SEPARATOR];

/// Environment variable overriding `key`: `strut.helpers.source` is
/// `STRUT_HELPERS_SOURCE`.
pub fn env_var(key: &str) -> String {
    key.to_uppercase().replace('.', "_")
}

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// A config file could not be read or is not valid YAML.
    Load(String),
    /// A `strut.*` key strut does not read, usually a typo.
    UnknownKey { key: String, origin: String },
    /// A known key holds a value strut cannot use.
    InvalidValue { key: String, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "Config load error: {msg}"),
            ConfigError::UnknownKey { key, origin } => write!(
                f,
                "Unknown config key '{key}' in {origin} (known keys: {})",
                KNOWN_KEYS.join(", ")
            ),
            ConfigError::InvalidValue { key, reason } => {
                write!(f, "Invalid value for '{key}' (env `{}`): {reason}", env_var(key))
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Generator configuration loaded from YAML files, `.env` files and
/// environment variables.
///
/// Resolution order (lowest to highest priority):
/// 1. `strut.yaml` (base)
/// 2. `strut-{profile}.yaml` (profile override)
/// 3. `.env` then `.env.{profile}` (loaded into the process environment,
///    never overwriting variables that are already set)
/// 4. The environment variable of each known key ([`env_var`])
///
/// Profile is determined by: `STRUT_PROFILE` env var > argument.
#[derive(Debug, Clone)]
pub struct StrutConfig {
    values: HashMap<String, String>,
    profile: String,
}

impl StrutConfig {
    /// Load configuration for `profile` from the current working directory.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), profile)
    }

    /// Load configuration for `profile` from the files in `dir`.
    pub fn load_from(dir: &Path, profile: &str) -> Result<Self, ConfigError> {
        let active_profile =
            std::env::var("STRUT_PROFILE").unwrap_or_else(|_| profile.to_string());

        let mut values = HashMap::new();
        loader::load_yaml_file(&dir.join("strut.yaml"), &mut values)?;
        loader::load_yaml_file(&dir.join(format!("strut-{active_profile}.yaml")), &mut values)?;

        let _ = dotenvy::from_path(dir.join(".env"));
        let _ = dotenvy::from_path(dir.join(format!(".env.{active_profile}")));

        for key in KNOWN_KEYS {
            if let Ok(value) = std::env::var(env_var(key)) {
                values.insert(key.to_string(), value);
            }
        }

        tracing::debug!(profile = %active_profile, keys = values.len(), "Loaded generator config");
        Ok(StrutConfig {
            values,
            profile: active_profile,
        })
    }

    /// Create a config from a YAML string (useful for testing).
    pub fn from_yaml_str(yaml: &str, profile: &str) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        loader::load_yaml_str(yaml, "<inline>", &mut values)?;
        Ok(StrutConfig {
            values,
            profile: profile.to_string(),
        })
    }

    /// Value of a known key, if any layer set it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The active profile name.
    pub fn profile(&self) -> &str {
        &self.profile
    }
}
