use std::path::PathBuf;

/// Error type for source extraction.
///
/// Every variant is fatal to generation: embedded helpers are mandatory.
#[derive(Debug)]
pub enum EmbedError {
    /// The unit's file could not be located or read.
    SourceUnavailable { path: PathBuf, reason: String },
    /// The unit's text is not valid Rust.
    Parse { path: PathBuf, message: String },
    /// No top-level function with the requested name exists in the unit.
    FunctionNotFound { path: PathBuf, name: String },
}

impl std::fmt::Display for EmbedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbedError::SourceUnavailable { path, reason } => {
                write!(f, "source unavailable: {}: {reason}", path.display())
            }
            EmbedError::Parse { path, message } => {
                write!(f, "failed to parse {}: {message}", path.display())
            }
            EmbedError::FunctionNotFound { path, name } => {
                write!(f, "function `{name}` not found in {}", path.display())
            }
        }
    }
}

impl std::error::Error for EmbedError {}
