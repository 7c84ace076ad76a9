//! Scalar field types and the conversion fragments generated for them.

/// A base scalar type: the only kind of field that may be bound to a path
/// segment or query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

impl ScalarType {
    pub const ALL: [ScalarType; 15] = [
        ScalarType::Double,
        ScalarType::Float,
        ScalarType::Int32,
        ScalarType::Int64,
        ScalarType::Uint32,
        ScalarType::Uint64,
        ScalarType::Sint32,
        ScalarType::Sint64,
        ScalarType::Fixed32,
        ScalarType::Fixed64,
        ScalarType::Sfixed32,
        ScalarType::Sfixed64,
        ScalarType::Bool,
        ScalarType::String,
        ScalarType::Bytes,
    ];

    /// Look up a scalar by its schema spelling (`int64`, `bytes`, ...).
    pub fn from_proto_name(name: &str) -> Option<Self> {
        ScalarType::ALL.into_iter().find(|s| s.proto_name() == name)
    }

    pub fn proto_name(self) -> &'static str {
        match self {
            ScalarType::Double => "double",
            ScalarType::Float => "float",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::Uint32 => "uint32",
            ScalarType::Uint64 => "uint64",
            ScalarType::Sint32 => "sint32",
            ScalarType::Sint64 => "sint64",
            ScalarType::Fixed32 => "fixed32",
            ScalarType::Fixed64 => "fixed64",
            ScalarType::Sfixed32 => "sfixed32",
            ScalarType::Sfixed64 => "sfixed64",
            ScalarType::Bool => "bool",
            ScalarType::String => "string",
            ScalarType::Bytes => "bytes",
        }
    }

    /// The Rust type a message field of this scalar is generated as.
    pub fn rust_type(self) -> &'static str {
        match self {
            ScalarType::Double => "f64",
            ScalarType::Float => "f32",
            ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32 => "i32",
            ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64 => "i64",
            ScalarType::Uint32 | ScalarType::Fixed32 => "u32",
            ScalarType::Uint64 | ScalarType::Fixed64 => "u64",
            ScalarType::Bool => "bool",
            ScalarType::String => "String",
            ScalarType::Bytes => "Vec<u8>",
        }
    }

    /// Whether parsing a raw string into this type can fail.
    ///
    /// True for numbers and `bool`; strings and bytes accept any input.
    pub fn is_fallible(self) -> bool {
        !matches!(self, ScalarType::String | ScalarType::Bytes)
    }

    /// Expression turning the `&str` held in `raw` into this type.
    fn parse_expr(self, raw: &str) -> String {
        match self {
            ScalarType::String => format!("{raw}.to_owned()"),
            ScalarType::Bytes => format!("{raw}.as_bytes().to_vec()"),
            other => format!("{raw}.parse::<{}>()", other.rust_type()),
        }
    }

    /// Function-position form of [`parse_expr`](Self::parse_expr), for `map`.
    fn parse_fn(self) -> String {
        match self {
            ScalarType::String => "str::to_owned".to_string(),
            ScalarType::Bytes => "|s| s.as_bytes().to_vec()".to_string(),
            other => format!("str::parse::<{}>", other.rust_type()),
        }
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.proto_name())
    }
}

/// Generated code that decodes one path or query value.
///
/// `convert_func` is a `let` statement without its terminator: the renderer
/// closes it with `;` or, when `needs_error_check` is set, with its own error
/// handling (`.map_err(..)?;`). The raw value is expected in `{local}Str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub convert_func: String,
    pub needs_error_check: bool,
    pub type_conversion: String,
}

impl Conversion {
    /// Build the conversion of a `scalar` field into the variable `local_name`.
    ///
    /// Repeated fields arrive as one value joined by `separator`.
    pub fn new(scalar: ScalarType, repeated: bool, local_name: &str, separator: &str) -> Self {
        let raw = format!("{local_name}Str");
        let expr = if repeated {
            let split = split_expr(&raw, separator);
            if scalar.is_fallible() {
                format!("{split}.map({}).collect::<Result<Vec<_>, _>>()", scalar.parse_fn())
            } else {
                format!("{split}.map({}).collect::<Vec<_>>()", scalar.parse_fn())
            }
        } else {
            scalar.parse_expr(&raw)
        };
        Conversion {
            convert_func: format!("let {local_name} = {expr}"),
            needs_error_check: scalar.is_fallible(),
            type_conversion: local_name.to_string(),
        }
    }
}

fn split_expr(raw: &str, separator: &str) -> String {
    let mut chars = separator.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => format!("{raw}.split({c:?})"),
        _ => format!("{raw}.split({separator:?})"),
    }
}
