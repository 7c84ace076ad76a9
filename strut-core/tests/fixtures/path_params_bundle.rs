pub fn path_params(
    path: &str,
    template: &str,
) -> Result<std::collections::HashMap<String, String>, PathParamsError> {
    let parts = split_segments(path);
    let patterns = split_segments(template);
    if parts.len() != patterns.len() {
        return Err(PathParamsError::SegmentCountMismatch {
            expected: patterns.len(),
            found: parts.len(),
        });
    }

    let mut params = std::collections::HashMap::new();
    for (index, (part, pattern)) in parts.iter().zip(patterns.iter()).enumerate() {
        match placeholder_name(pattern) {
            Some(name) => {
                params.insert(name.to_string(), part.to_string());
            }
            None if part != pattern => {
                return Err(PathParamsError::LiteralMismatch {
                    index,
                    expected: pattern.to_string(),
                    found: part.to_string(),
                });
            }
            None => {}
        }
    }
    Ok(params)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathParamsError {
    /// The path and the template split into a different number of segments.
    SegmentCountMismatch { expected: usize, found: usize },
    /// A literal template segment differs from the path segment at `index`.
    LiteralMismatch {
        index: usize,
        expected: String,
        found: String,
    },
}

impl std::fmt::Display for PathParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathParamsError::SegmentCountMismatch { expected, found } => {
                write!(f, "expected a path of {expected} segments, got {found}")
            }
            PathParamsError::LiteralMismatch {
                index,
                expected,
                found,
            } => write!(f, "segment {index}: expected '{expected}', got '{found}'"),
        }
    }
}

impl std::error::Error for PathParamsError {}

fn split_segments(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split('/').collect();
    if segments.len() > 1 && segments.last() == Some(&"") {
        segments.pop();
    }
    segments
}

pub fn placeholder_name(segment: &str) -> Option<&str> {
    if segment.len() > 2 && segment.starts_with('{') && segment.ends_with('}') {
        Some(&segment[1..segment.len() - 1])
    } else {
        None
    }
}
