use strut_path::{base_path, is_placeholder, path_params, placeholders, PathParamsError};

// ── path_params ─────────────────────────────────────────────────────

#[test]
fn matches_single_placeholder() {
    let params = path_params("/1234", "/{a}").unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params["a"], "1234");
}

#[test]
fn matches_after_literal_prefix() {
    let params = path_params("/v1/1234", "/v1/{a}").unwrap();
    assert_eq!(params["a"], "1234");
}

#[test]
fn matches_placeholder_between_literals() {
    let params = path_params("/v1/user/5/home", "/v1/user/{userid}/home").unwrap();
    assert_eq!(params["userid"], "5");
}

#[test]
fn tolerates_single_trailing_slash() {
    let params = path_params("/blah/", "/{a}").unwrap();
    assert_eq!(params["a"], "blah");
}

#[test]
fn tolerates_trailing_slash_on_template() {
    let params = path_params("/sum/7", "/sum/{a}/").unwrap();
    assert_eq!(params["a"], "7");
}

#[test]
fn binds_every_placeholder() {
    let params = path_params("/users/42/posts/abc", "/users/{user}/posts/{post}").unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(params["user"], "42");
    assert_eq!(params["post"], "abc");
}

#[test]
fn template_without_placeholders_yields_empty_map() {
    let params = path_params("/health", "/health").unwrap();
    assert!(params.is_empty());
}

#[test]
fn root_matches_root() {
    assert!(path_params("/", "/").unwrap().is_empty());
}

#[test]
fn too_few_segments_is_count_mismatch() {
    let err = path_params("/too/few/params", "/{a}/{b}/{c}/{d}").unwrap_err();
    assert_eq!(
        err,
        PathParamsError::SegmentCountMismatch {
            expected: 5,
            found: 4
        }
    );
}

#[test]
fn too_many_segments_is_count_mismatch() {
    let err = path_params("/way/too/many/params", "/{a}").unwrap_err();
    assert!(matches!(err, PathParamsError::SegmentCountMismatch { .. }));
}

#[test]
fn only_one_trailing_slash_is_dropped() {
    let err = path_params("/blah//", "/{a}").unwrap_err();
    assert_eq!(
        err,
        PathParamsError::SegmentCountMismatch {
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn differing_literal_is_reported() {
    let err = path_params("/v2/1234", "/v1/{a}").unwrap_err();
    assert_eq!(
        err,
        PathParamsError::LiteralMismatch {
            index: 1,
            expected: "v1".into(),
            found: "v2".into(),
        }
    );
}

#[test]
fn error_messages_are_descriptive() {
    let err = path_params("/a/b", "/{a}").unwrap_err();
    assert_eq!(err.to_string(), "expected a path of 2 segments, got 3");
}

#[test]
fn empty_braces_are_literal() {
    assert!(!is_placeholder("{}"));
    assert!(path_params("/{}", "/{}").unwrap().is_empty());
}

// ── template helpers ────────────────────────────────────────────────

#[test]
fn placeholders_in_order_with_duplicates() {
    assert_eq!(placeholders("/sum/{a}"), vec!["a"]);
    assert_eq!(placeholders("/{x}/lit/{y}/{x}"), vec!["x", "y", "x"]);
    assert!(placeholders("/static/path").is_empty());
}

#[test]
fn partial_braces_are_not_placeholders() {
    assert!(placeholders("/{a}.json/x{b}").is_empty());
}

#[test]
fn base_path_stops_at_first_placeholder() {
    assert_eq!(base_path("/sum/{a}"), "/sum/");
    assert_eq!(base_path("/v1/user/{userid}/home"), "/v1/user/");
    assert_eq!(base_path("/health"), "/health");
    assert_eq!(base_path("/{a}"), "/");
}

#[test]
fn packaged_source_matches_unit_on_disk() {
    let on_disk = std::fs::read_to_string(strut_path::SOURCE_PATH).unwrap();
    assert_eq!(on_disk, strut_path::SOURCE);
}
