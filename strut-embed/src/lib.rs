//! # strut-embed
//!
//! Extracts the literal source text of functions from a compilation unit so
//! the generator can emit them unchanged.
//!
//! The unit is either read from disk ([`SourceUnit::read`]) or packaged at
//! build time with `include_str!` ([`SourceUnit::embedded`]). Item extents
//! come from the parsed span line/column information, and the text between
//! them is copied byte for byte, comments and formatting included.
//!
//! ```ignore
//! let unit = SourceUnit::embedded(strut_path::SOURCE_PATH, strut_path::SOURCE);
//! let bundle = strut_embed::all_func_source!(unit, strut_path::path_params)?;
//! ```

mod error;
mod extract;
mod unit;

pub use error::EmbedError;
pub use extract::{all_func_source_code, func_source_code};
pub use unit::SourceUnit;

/// Name of a function item, derived from its compiled type identity.
///
/// `fn_name_of(strut_path::path_params)` is `"path_params"`.
pub fn fn_name_of<F>(_func: F) -> &'static str {
    let full = std::any::type_name::<F>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Source text of one function, named by path so a rename is a compile error.
#[macro_export]
macro_rules! func_source {
    ($unit:expr, $func:path) => {
        $crate::func_source_code(&$unit, $crate::fn_name_of($func))
    };
}

/// Source text of a function and everything it references in the same unit.
#[macro_export]
macro_rules! all_func_source {
    ($unit:expr, $func:path) => {
        $crate::all_func_source_code(&$unit, $crate::fn_name_of($func))
    };
}
