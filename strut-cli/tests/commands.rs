use std::fs;
use std::path::{Path, PathBuf};

use serial_test::serial;
use strut_cli::commands::{self, helper, load_service, model, routes};
use strut_core::{build_service, BuildOptions, GeneratorSettings, HelperSource, HttpVerb};
use tempfile::TempDir;

struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    fn new(path: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        CwdGuard { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

const USERS_YAML: &str = r#"
name: UserSvc
messages:
  - name: GetUserRequest
    fields:
      - { name: user_id, type: int64 }
      - { name: verbose, type: bool }
  - name: UpdateUserRequest
    fields:
      - { name: user_id, type: int64 }
      - { name: profile, type: "message:Profile" }
methods:
  - name: GetUser
    request_type: GetUserRequest
    response_type: User
    http:
      - get: "/v1/users/{user_id}"
        additional_bindings:
          - get: "/v1/me"
  - name: UpdateUser
    request_type: UpdateUserRequest
    response_type: User
    http:
      - put: "/v1/users/{user_id}"
        body: "*"
"#;

const SUM_JSON: &str = r#"{
  "name": "SumSvc",
  "messages": [
    { "name": "SumRequest", "fields": [ { "name": "a", "type": "int64" } ] }
  ],
  "methods": [
    { "name": "Sum", "request_type": "SumRequest", "response_type": "SumReply",
      "http": [ { "post": "/sum/{a}" } ] }
  ]
}"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_yaml_and_json_by_extension() {
    let tmp = TempDir::new().unwrap();
    let yaml = write(tmp.path(), "users.yaml", USERS_YAML);
    let json = write(tmp.path(), "sum.JSON", SUM_JSON);

    assert_eq!(load_service(&yaml).unwrap().name, "UserSvc");
    assert_eq!(load_service(&json).unwrap().name, "SumSvc");
}

#[test]
fn load_reports_missing_and_malformed_files() {
    let tmp = TempDir::new().unwrap();
    let err = load_service(&tmp.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("cannot read"));

    let bad = write(tmp.path(), "bad.json", "{ not json");
    let err = load_service(&bad).unwrap_err();
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn collects_sorted_routes() {
    let tmp = TempDir::new().unwrap();
    let def = load_service(&write(tmp.path(), "users.yaml", USERS_YAML)).unwrap();
    let service = build_service(&def, &BuildOptions::default()).unwrap();

    let found: Vec<(HttpVerb, String, String, String)> = routes::collect_routes(&service)
        .into_iter()
        .map(|r| (r.verb, r.path, r.method, r.label))
        .collect();
    assert_eq!(
        found,
        vec![
            (HttpVerb::Get, "/v1/me".into(), "GetUser".into(), "GetUserOne".into()),
            (HttpVerb::Get, "/v1/users/{user_id}".into(), "GetUser".into(), "GetUserZero".into()),
            (HttpVerb::Put, "/v1/users/{user_id}".into(), "UpdateUser".into(), "UpdateUserZero".into()),
        ]
    );
    assert_eq!(routes::collect_routes(&service)[1].base_path, "/v1/users/");
}

#[test]
fn routes_run_fails_on_bad_binding() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "users.yaml", &USERS_YAML.replace("/v1/me", "/v1/{me}"));
    let err = routes::run(&file, &GeneratorSettings::default()).unwrap_err();
    assert!(err.to_string().contains("{me}"));
}

#[test]
fn model_renders_json() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "sum.json", SUM_JSON);
    let out = model::render(&file, &GeneratorSettings::default()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let binding = &json["service"]["methods"][0]["bindings"][0];
    assert_eq!(binding["label"], "SumZero");
    assert_eq!(binding["verb"], "post");
    assert_eq!(binding["fields"][0]["local_name"], "ASumZero");
    assert!(json["path_params_builder"].as_str().unwrap().contains("pub fn path_params("));
}

#[test]
fn helper_renders_embedded_bundle() {
    let out = helper::render(&GeneratorSettings::default()).unwrap();
    assert!(out.starts_with("pub fn path_params("));
    assert!(out.ends_with("}\n"));
}

#[test]
fn helper_reports_missing_disk_unit() {
    let settings = GeneratorSettings {
        helper_source: HelperSource::Disk("/nonexistent/matcher.rs".into()),
        ..GeneratorSettings::default()
    };
    let err = helper::render(&settings).unwrap_err();
    assert!(err.to_string().contains("source unavailable"));
}

#[test]
#[serial]
fn settings_read_from_working_directory() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    fs::write("strut.yaml", "strut:\n  bindings:\n    separator: \"|\"\n").unwrap();

    let settings = commands::settings("dev").unwrap();
    assert_eq!(settings.repeated_separator, "|");
    assert_eq!(settings.helper_source, HelperSource::Embedded);
}

#[test]
#[serial]
fn misspelled_config_key_stops_the_command() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    fs::write("strut.yaml", "strut:\n  bindings:\n    seperator: \"|\"\n").unwrap();

    let err = commands::settings("dev").unwrap_err();
    assert!(err.to_string().contains("Unknown config key 'strut.bindings.seperator'"));
}
