use std::path::PathBuf;

use super::{ConfigError, StrutConfig, BINDINGS_SEPARATOR, HELPERS_SOURCE};
use crate::binding::BuildOptions;
use crate::helper::HelperSource;

/// Typed view of the generator's config keys.
///
/// | Key                        | Default    |
/// |----------------------------|------------|
/// | `strut.helpers.source`     | `embedded` |
/// | `strut.bindings.separator` | `,`        |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub helper_source: HelperSource,
    pub repeated_separator: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            helper_source: HelperSource::Embedded,
            repeated_separator: BuildOptions::default().repeated_separator,
        }
    }
}

impl GeneratorSettings {
    pub fn from_config(config: &StrutConfig) -> Result<Self, ConfigError> {
        let defaults = GeneratorSettings::default();

        let helper_source = match config.get(HELPERS_SOURCE) {
            None => defaults.helper_source,
            Some("embedded") => HelperSource::Embedded,
            Some("") => {
                return Err(ConfigError::InvalidValue {
                    key: HELPERS_SOURCE.to_string(),
                    reason: "expected `embedded` or a path, found an empty string".to_string(),
                })
            }
            Some(path) => HelperSource::Disk(PathBuf::from(path)),
        };

        let repeated_separator = match config.get(BINDINGS_SEPARATOR) {
            None => defaults.repeated_separator,
            Some("") => {
                return Err(ConfigError::InvalidValue {
                    key: BINDINGS_SEPARATOR.to_string(),
                    reason: "the separator must not be empty".to_string(),
                })
            }
            Some(separator) => separator.to_string(),
        };

        tracing::debug!(
            profile = config.profile(),
            helper_source = ?helper_source,
            separator = %repeated_separator,
            "Resolved generator settings"
        );
        Ok(GeneratorSettings {
            helper_source,
            repeated_separator,
        })
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            repeated_separator: self.repeated_separator.clone(),
        }
    }
}
