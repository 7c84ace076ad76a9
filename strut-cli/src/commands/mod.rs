//! Command implementations for the `strut` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

use std::path::Path;

use strut_core::{GeneratorSettings, ServiceDef, StrutConfig};

/// Matcher bundle: `strut helper`.
pub mod helper;

/// Binding model dump: `strut model <file>`.
pub mod model;

/// Route listing: `strut routes <file>`.
///
/// One row per binding: verb, path template, base path, method and label.
pub mod routes;

pub type CmdResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Read a service description, as JSON if the file ends in `.json` and as
/// YAML otherwise.
pub fn load_service(path: &Path) -> CmdResult<ServiceDef> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let service = if is_json {
        ServiceDef::from_json_str(&content).map_err(|e| format!("{}: {e}", path.display()))?
    } else {
        ServiceDef::from_yaml_str(&content).map_err(|e| format!("{}: {e}", path.display()))?
    };
    tracing::debug!(path = %path.display(), service = %service.name, "Loaded service description");
    Ok(service)
}

/// Generator settings for `profile`, from the working directory's config.
pub fn settings(profile: &str) -> CmdResult<GeneratorSettings> {
    let config = StrutConfig::load(profile)?;
    Ok(GeneratorSettings::from_config(&config)?)
}
