use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::EmbedError;

/// The text of one compilation unit and where it came from.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    path: PathBuf,
    text: Cow<'static, str>,
}

impl SourceUnit {
    /// Read a unit from disk.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::SourceUnavailable`] if the file cannot be read.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, EmbedError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| EmbedError::SourceUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "Read source unit");
        Ok(SourceUnit {
            path: path.to_path_buf(),
            text: Cow::Owned(text),
        })
    }

    /// Wrap text packaged at build time (`include_str!`).
    pub fn embedded(path: &'static str, text: &'static str) -> Self {
        SourceUnit {
            path: PathBuf::from(path),
            text: Cow::Borrowed(text),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn parse(&self) -> Result<syn::File, EmbedError> {
        syn::parse_file(&self.text).map_err(|e| EmbedError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}
