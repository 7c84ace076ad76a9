//! URL template matching for strut.
//!
//! A template is a `/`-delimited sequence of literal segments and
//! placeholders written `{name}`. [`path_params`] matches a concrete request
//! path against a template and returns the placeholder bindings.
//!
//! ```
//! let params = strut_path::path_params("/v1/user/5/home", "/v1/user/{userid}/home").unwrap();
//! assert_eq!(params["userid"], "5");
//! ```
//!
//! The matcher lives in its own unit (`src/matcher.rs`) with no imports so
//! that its text can be lifted into generated servers unchanged. [`SOURCE`]
//! is that text, packaged at build time.

mod matcher;

pub use matcher::{base_path, is_placeholder, path_params, placeholder_name, placeholders, PathParamsError};

/// Text of the matcher unit, packaged at build time.
pub const SOURCE: &str = include_str!("matcher.rs");

/// Location of the matcher unit in the source tree.
pub const SOURCE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/matcher.rs");
