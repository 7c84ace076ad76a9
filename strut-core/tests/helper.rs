use std::fs;

use strut_core::{
    path_params_builder, ConfigError, GenerateError, GeneratorSettings, HelperSource, HttpHelper,
    ServiceDef, StrutConfig,
};
use strut_embed::EmbedError;
use tempfile::TempDir;

// The bundle as generated servers receive it, compiled on its own with no
// imports. `bundle_matches_compiled_copy` keeps it in step with the generator.
#[allow(dead_code)]
mod bundled {
    include!("fixtures/path_params_bundle.rs");
}

const SUM_SVC: &str = r#"
name: SumSvc
messages:
  - name: SumRequest
    fields:
      - { name: a, type: int64 }
      - { name: b, type: int64 }
methods:
  - name: Sum
    request_type: SumRequest
    response_type: SumReply
    http:
      - get: "/sum/{a}"
"#;

#[test]
fn embedded_builder_is_self_contained() {
    let bundle = path_params_builder(&HelperSource::Embedded).unwrap();
    assert!(bundle.starts_with("pub fn path_params("));
    assert_eq!(bundle.matches("fn path_params(").count(), 1);
    assert!(bundle.contains("fn split_segments("));
    assert!(bundle.contains("#[derive(Debug, Clone, PartialEq, Eq)]\npub enum PathParamsError"));
    assert!(!bundle.contains("fn base_path("));
}

#[test]
fn bundle_matches_compiled_copy() {
    let bundle = path_params_builder(&HelperSource::Embedded).unwrap();
    assert_eq!(bundle, include_str!("fixtures/path_params_bundle.rs").trim_end());
}

#[test]
fn compiled_bundle_matches_paths() {
    let params = bundled::path_params("/v1/user/5/home", "/v1/user/{userid}/home").unwrap();
    assert_eq!(params["userid"], "5");

    let err = bundled::path_params("/way/too/many", "/{a}").unwrap_err();
    assert_eq!(
        err,
        bundled::PathParamsError::SegmentCountMismatch {
            expected: 2,
            found: 4
        }
    );
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "expected a path of 2 segments, got 4");
}

#[test]
fn disk_builder_matches_embedded() {
    let embedded = path_params_builder(&HelperSource::Embedded).unwrap();
    let disk = path_params_builder(&HelperSource::Disk(strut_path::SOURCE_PATH.into())).unwrap();
    assert_eq!(embedded, disk);
}

#[test]
fn disk_builder_reports_missing_unit() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("matcher.rs");
    let err = path_params_builder(&HelperSource::Disk(missing)).unwrap_err();
    assert!(matches!(err, EmbedError::SourceUnavailable { .. }));
}

#[test]
fn disk_builder_reports_unit_without_matcher() {
    let tmp = TempDir::new().unwrap();
    let unit = tmp.path().join("matcher.rs");
    fs::write(&unit, "pub fn something_else() {}\n").unwrap();
    let err = path_params_builder(&HelperSource::Disk(unit)).unwrap_err();
    assert!(matches!(err, EmbedError::FunctionNotFound { ref name, .. } if name == "path_params"));
}

#[test]
fn http_helper_bundles_model_and_matcher() {
    let def = ServiceDef::from_yaml_str(SUM_SVC).unwrap();
    let helper = HttpHelper::new(&def, &GeneratorSettings::default()).unwrap();

    assert_eq!(helper.service.name, "SumSvc");
    let labels: Vec<&str> = helper.bindings().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["SumZero"]);
    assert!(helper.path_params_builder.contains("fn path_params("));

    let json = serde_json::to_value(&helper).unwrap();
    assert_eq!(json["service"]["methods"][0]["bindings"][0]["base_path"], "/sum/");
    assert!(json["path_params_builder"].as_str().unwrap().contains("SegmentCountMismatch"));
}

#[test]
fn http_helper_surfaces_binding_errors_first() {
    let def = ServiceDef::from_yaml_str(&SUM_SVC.replace("{a}", "{zzz}")).unwrap();
    let err = HttpHelper::new(&def, &GeneratorSettings::default()).unwrap_err();
    assert!(matches!(err, GenerateError::Binding(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn http_helper_surfaces_embed_errors() {
    let def = ServiceDef::from_yaml_str(SUM_SVC).unwrap();
    let settings = GeneratorSettings {
        helper_source: HelperSource::Disk("/nonexistent/strut/matcher.rs".into()),
        ..GeneratorSettings::default()
    };
    let err = HttpHelper::new(&def, &settings).unwrap_err();
    assert!(matches!(err, GenerateError::Embed(EmbedError::SourceUnavailable { .. })));
}

#[test]
fn http_helper_from_config_applies_separator() {
    let def = ServiceDef::from_yaml_str(SUM_SVC).unwrap();
    let config = StrutConfig::from_yaml_str("strut:\n  bindings:\n    separator: \";\"\n", "dev").unwrap();
    let helper = HttpHelper::from_config(&def, &config).unwrap();
    assert_eq!(helper.bindings().count(), 1);
    assert!(helper.path_params_builder.contains("fn path_params("));
}

#[test]
fn http_helper_from_config_surfaces_config_errors() {
    let def = ServiceDef::from_yaml_str(SUM_SVC).unwrap();
    let config = StrutConfig::from_yaml_str("strut:\n  helpers:\n    source: \"\"\n", "dev").unwrap();
    let err = HttpHelper::from_config(&def, &config).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Config(ConfigError::InvalidValue { ref key, .. }) if key == "strut.helpers.source"
    ));
}
