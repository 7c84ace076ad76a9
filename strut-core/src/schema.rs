//! The parsed service description the builder consumes.
//!
//! Parsing the schema language is upstream's job; these types are what it
//! hands over. They deserialize from YAML or JSON so a description can also
//! be written by hand:
//!
//! ```yaml
//! name: SumSvc
//! messages:
//!   - name: SumRequest
//!     fields:
//!       - { name: a, type: int64 }
//!       - { name: b, type: int64 }
//! methods:
//!   - name: Sum
//!     request_type: SumRequest
//!     response_type: SumReply
//!     http:
//!       - get: "/sum/{a}"
//! ```

use serde::{Deserialize, Serialize};

use crate::scalar::ScalarType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDef {
    pub name: String,
    #[serde(default)]
    pub messages: Vec<MessageDef>,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

impl ServiceDef {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn message(&self, name: &str) -> Option<&MessageDef> {
        self.messages.iter().find(|m| m.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDef {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl MessageDef {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub repeated: bool,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        FieldDef {
            name: name.into(),
            field_type,
            repeated: false,
        }
    }

    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }
}

/// Type of a message field.
///
/// Written as the scalar's schema name (`int64`), `message:Name` or
/// `enum:Name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldType {
    Scalar(ScalarType),
    Message(String),
    Enum(String),
}

impl FieldType {
    pub fn as_scalar(&self) -> Option<ScalarType> {
        match self {
            FieldType::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        self.as_scalar().is_some()
    }

    pub fn rust_type(&self) -> &str {
        match self {
            FieldType::Scalar(s) => s.rust_type(),
            FieldType::Message(name) | FieldType::Enum(name) => name,
        }
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(name) = s.strip_prefix("message:") {
            return Ok(FieldType::Message(name.to_string()));
        }
        if let Some(name) = s.strip_prefix("enum:") {
            return Ok(FieldType::Enum(name.to_string()));
        }
        ScalarType::from_proto_name(s)
            .map(FieldType::Scalar)
            .ok_or_else(|| format!("unknown field type `{s}` (expected a scalar, `message:Name` or `enum:Name`)"))
    }
}

impl TryFrom<String> for FieldType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Scalar(s) => write!(f, "{s}"),
            FieldType::Message(name) => write!(f, "message:{name}"),
            FieldType::Enum(name) => write!(f, "enum:{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDef {
    pub name: String,
    pub request_type: String,
    pub response_type: String,
    #[serde(default)]
    pub http: Vec<HttpRule>,
}

impl MethodDef {
    /// Every HTTP annotation on the method, primary rules first, each followed
    /// by its additional bindings.
    pub fn annotations(&self) -> Vec<&HttpRule> {
        let mut out = Vec::new();
        for rule in &self.http {
            rule.flatten_into(&mut out);
        }
        out
    }
}

/// Where an HTTP route is attached to an RPC method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Delete => "delete",
            HttpVerb::Patch => "patch",
        }
    }
}

impl std::fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One HTTP annotation: a verb, a path template and an optional body
/// selector (`*` for the whole message, or a field name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHttpRule", into = "RawHttpRule")]
pub struct HttpRule {
    pub verb: HttpVerb,
    pub path: String,
    pub body: Option<String>,
    pub additional_bindings: Vec<HttpRule>,
}

impl HttpRule {
    pub fn new(verb: HttpVerb, path: impl Into<String>) -> Self {
        HttpRule {
            verb,
            path: path.into(),
            body: None,
            additional_bindings: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_additional(mut self, rule: HttpRule) -> Self {
        self.additional_bindings.push(rule);
        self
    }

    fn flatten_into<'a>(&'a self, out: &mut Vec<&'a HttpRule>) {
        out.push(self);
        for extra in &self.additional_bindings {
            extra.flatten_into(out);
        }
    }
}

/// Wire form of [`HttpRule`]: the verb is the key holding the path, as in
/// `{ get: "/sum/{a}" }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHttpRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    get: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    post: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    put: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    delete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    patch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    additional_bindings: Vec<RawHttpRule>,
}

impl TryFrom<RawHttpRule> for HttpRule {
    type Error = String;

    fn try_from(raw: RawHttpRule) -> Result<Self, Self::Error> {
        let verbs = [
            (HttpVerb::Get, raw.get),
            (HttpVerb::Post, raw.post),
            (HttpVerb::Put, raw.put),
            (HttpVerb::Delete, raw.delete),
            (HttpVerb::Patch, raw.patch),
        ];
        let mut set = verbs
            .into_iter()
            .filter_map(|(verb, path)| path.map(|p| (verb, p)));
        let (verb, path) = set
            .next()
            .ok_or_else(|| "http rule needs one of get, post, put, delete, patch".to_string())?;
        if let Some((other, _)) = set.next() {
            return Err(format!("http rule sets both `{verb}` and `{other}`"));
        }
        let additional_bindings = raw
            .additional_bindings
            .into_iter()
            .map(HttpRule::try_from)
            .collect::<Result<_, _>>()?;
        Ok(HttpRule {
            verb,
            path,
            body: raw.body,
            additional_bindings,
        })
    }
}

impl From<HttpRule> for RawHttpRule {
    fn from(rule: HttpRule) -> Self {
        let mut raw = RawHttpRule {
            body: rule.body,
            additional_bindings: rule.additional_bindings.into_iter().map(Into::into).collect(),
            ..RawHttpRule::default()
        };
        let slot = match rule.verb {
            HttpVerb::Get => &mut raw.get,
            HttpVerb::Post => &mut raw.post,
            HttpVerb::Put => &mut raw.put,
            HttpVerb::Delete => &mut raw.delete,
            HttpVerb::Patch => &mut raw.patch,
        };
        *slot = Some(rule.path);
        raw
    }
}
