//! The bundle handed to the template renderer.

use std::path::PathBuf;

use serde::Serialize;
use strut_embed::{EmbedError, SourceUnit};

use crate::binding::{build_service, Service};
use crate::config::{GeneratorSettings, StrutConfig};
use crate::error::GenerateError;
use crate::schema::ServiceDef;

/// Where the matcher unit's text is taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelperSource {
    /// The text packaged into this build (`strut_path::SOURCE`).
    Embedded,
    /// A matcher unit on disk, e.g. a checkout of `strut-path/src/matcher.rs`.
    Disk(PathBuf),
}

fn matcher_unit(source: &HelperSource) -> Result<SourceUnit, EmbedError> {
    match source {
        HelperSource::Embedded => Ok(SourceUnit::embedded(strut_path::SOURCE_PATH, strut_path::SOURCE)),
        HelperSource::Disk(path) => SourceUnit::read(path),
    }
}

/// Source text of `path_params` and every item it needs, ready to paste
/// into a generated server.
///
/// # Errors
///
/// Fails if the unit cannot be read or parsed, or no longer declares
/// `path_params`.
pub fn path_params_builder(source: &HelperSource) -> Result<String, EmbedError> {
    let unit = matcher_unit(source)?;
    strut_embed::all_func_source!(unit, strut_path::path_params)
}

/// Everything the renderer needs for one service's HTTP transport.
#[derive(Debug, Serialize)]
pub struct HttpHelper {
    pub service: Service,
    pub path_params_builder: String,
}

impl HttpHelper {
    pub fn new(service: &ServiceDef, settings: &GeneratorSettings) -> Result<Self, GenerateError> {
        let model = build_service(service, &settings.build_options())?;
        let path_params_builder = path_params_builder(&settings.helper_source)?;
        tracing::info!(
            service = %model.name,
            methods = model.methods.len(),
            helper_bytes = path_params_builder.len(),
            "Prepared HTTP helper"
        );
        Ok(HttpHelper {
            service: model,
            path_params_builder,
        })
    }

    /// Resolve [`GeneratorSettings`] from `config`, then build as [`HttpHelper::new`].
    pub fn from_config(service: &ServiceDef, config: &StrutConfig) -> Result<Self, GenerateError> {
        let settings = GeneratorSettings::from_config(config)?;
        Self::new(service, &settings)
    }

    /// Every binding of every method, in declaration order.
    pub fn bindings(&self) -> impl Iterator<Item = &crate::binding::Binding> {
        self.service.methods.iter().flat_map(|m| m.bindings.iter())
    }
}
