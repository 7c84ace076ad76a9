use strut_embed::EmbedError;

use crate::config::ConfigError;

/// A method's HTTP annotations do not fit its request message.
///
/// Fatal to that method's generation: emitting code for it would reference
/// variables that do not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The path template names a placeholder that is not a request field.
    PlaceholderWithoutField {
        method: String,
        template: String,
        placeholder: String,
    },
    /// The path template binds a message or enum field to a path segment.
    NonScalarPathField {
        method: String,
        template: String,
        field: String,
    },
    /// The annotation's `body` names a field the request message lacks.
    BodyWithoutField {
        method: String,
        template: String,
        body: String,
    },
    /// The method's request type is not among the service's messages.
    UnknownMessage { method: String, message: String },
    /// Two request fields map to the same generated variable name.
    LocalNameCollision {
        method: String,
        template: String,
        first: String,
        second: String,
        local_name: String,
    },
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingError::PlaceholderWithoutField {
                method,
                template,
                placeholder,
            } => write!(
                f,
                "method `{method}`: path template `{template}` references `{{{placeholder}}}`, \
                 which is not a field of the request message"
            ),
            BindingError::NonScalarPathField {
                method,
                template,
                field,
            } => write!(
                f,
                "method `{method}`: path template `{template}` binds `{field}`, \
                 which is not a scalar field and can only be sent in the body"
            ),
            BindingError::BodyWithoutField {
                method,
                template,
                body,
            } => write!(
                f,
                "method `{method}`: annotation for `{template}` selects body `{body}`, \
                 which is not a field of the request message"
            ),
            BindingError::UnknownMessage { method, message } => {
                write!(f, "method `{method}`: request message `{message}` is not defined")
            }
            BindingError::LocalNameCollision {
                method,
                template,
                first,
                second,
                local_name,
            } => write!(
                f,
                "method `{method}`: on `{template}`, fields `{first}` and `{second}` \
                 both generate the variable `{local_name}`"
            ),
        }
    }
}

impl std::error::Error for BindingError {}

/// Anything that stops a service's transport code from being generated.
#[derive(Debug)]
pub enum GenerateError {
    Binding(BindingError),
    Embed(EmbedError),
    Config(ConfigError),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::Binding(e) => write!(f, "Binding error: {e}"),
            GenerateError::Embed(e) => write!(f, "Helper embedding error: {e}"),
            GenerateError::Config(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Binding(e) => Some(e),
            GenerateError::Embed(e) => Some(e),
            GenerateError::Config(e) => Some(e),
        }
    }
}

impl From<BindingError> for GenerateError {
    fn from(err: BindingError) -> Self {
        GenerateError::Binding(err)
    }
}

impl From<EmbedError> for GenerateError {
    fn from(err: EmbedError) -> Self {
        GenerateError::Embed(err)
    }
}

impl From<ConfigError> for GenerateError {
    fn from(err: ConfigError) -> Self {
        GenerateError::Config(err)
    }
}
