//! The binding model: which HTTP routes invoke each method, and where every
//! request field is read from on each route.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use serde::Serialize;
use strut_path::{base_path, placeholder_name, placeholders};

use crate::error::BindingError;
use crate::naming::{camel_case, english_number, low_camel_name, snake_case};
use crate::scalar::Conversion;
use crate::schema::{FieldDef, FieldType, HttpRule, HttpVerb, MessageDef, MethodDef, ServiceDef};

/// Where a request field is read from on one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Path,
    Query,
    Body,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Location::Path => "path",
            Location::Query => "query",
            Location::Body => "body",
        })
    }
}

/// Knobs for the builder that do not come from the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Separator between the items of a repeated query parameter.
    pub repeated_separator: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            repeated_separator: ",".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Service {
    pub name: String,
    pub methods: Vec<Arc<Method>>,
}

/// One RPC method and the HTTP routes bound to it.
#[derive(Debug, Serialize)]
pub struct Method {
    pub name: String,
    pub request_type: String,
    pub response_type: String,
    pub bindings: Vec<Binding>,
}

impl Method {
    pub fn binding(&self, label: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.label == label)
    }
}

/// One HTTP route (verb + path template) bound to a method.
#[derive(Debug, Serialize)]
pub struct Binding {
    /// `{Method}{EnglishNumber}`, unique among the method's bindings and
    /// usable inside identifiers.
    pub label: String,
    pub path_template: String,
    /// Longest placeholder-free prefix of `path_template`.
    pub base_path: String,
    pub verb: HttpVerb,
    /// Every request field, in declaration order.
    pub fields: Vec<Field>,
    #[serde(skip)]
    parent: Weak<Method>,
}

impl Binding {
    /// The method this binding belongs to.
    pub fn parent(&self) -> Option<Arc<Method>> {
        self.parent.upgrade()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn fields_at(&self, location: Location) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(move |f| f.location == location)
    }

    /// Client-side path construction: one Rust expression per template
    /// segment, to be joined with `/`.
    ///
    /// For `/sum/{a}` the sections are `""`, `"sum"` and `req.a.to_string()`.
    pub fn path_sections(&self) -> Vec<String> {
        self.path_template
            .split('/')
            .map(|segment| match placeholder_name(segment) {
                Some(name) => format!("req.{}.to_string()", snake_case(name)),
                None => format!("{segment:?}"),
            })
            .collect()
    }
}

/// One request-message field as it applies to one binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Name in the schema.
    pub name: String,
    pub query_param_name: String,
    pub camel_name: String,
    pub low_camel_name: String,
    /// Variable holding the decoded value in generated code: the camel name
    /// followed by the binding label.
    pub local_name: String,
    pub location: Location,
    pub field_type: FieldType,
    pub repeated: bool,
    pub rust_type: String,
    /// Empty for body fields.
    pub convert_func: String,
    pub convert_func_needs_error_check: bool,
    pub type_conversion: String,
    pub is_base_type: bool,
}

/// Build the binding model of every method in `service`.
///
/// # Errors
///
/// The first [`BindingError`] met, in method order.
pub fn build_service(service: &ServiceDef, options: &BuildOptions) -> Result<Service, BindingError> {
    let methods = service
        .methods
        .iter()
        .map(|method| {
            let request = service.message(&method.request_type).ok_or_else(|| {
                BindingError::UnknownMessage {
                    method: method.name.clone(),
                    message: method.request_type.clone(),
                }
            })?;
            build_method(method, request, options)
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(service = %service.name, methods = methods.len(), "Built service bindings");
    Ok(Service {
        name: service.name.clone(),
        methods,
    })
}

/// Build one method's bindings from its annotations and request message.
///
/// A method without HTTP annotations gets an empty binding list.
pub fn build_method(
    method: &MethodDef,
    request: &MessageDef,
    options: &BuildOptions,
) -> Result<Arc<Method>, BindingError> {
    let mut bindings = method
        .annotations()
        .into_iter()
        .enumerate()
        .map(|(ordinal, rule)| build_binding(method, request, rule, ordinal, options))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Arc::new_cyclic(|parent: &Weak<Method>| {
        for binding in &mut bindings {
            binding.parent = parent.clone();
        }
        Method {
            name: method.name.clone(),
            request_type: method.request_type.clone(),
            response_type: method.response_type.clone(),
            bindings,
        }
    }))
}

/// Which non-path fields an annotation's `body` claims.
enum BodySelector<'a> {
    Unset,
    All,
    Field(&'a str),
}

impl BodySelector<'_> {
    fn selects(&self, field: &str) -> bool {
        match self {
            BodySelector::Unset => false,
            BodySelector::All => true,
            BodySelector::Field(name) => *name == field,
        }
    }
}

fn build_binding(
    method: &MethodDef,
    request: &MessageDef,
    rule: &HttpRule,
    ordinal: usize,
    options: &BuildOptions,
) -> Result<Binding, BindingError> {
    let label = format!("{}{}", method.name, english_number(ordinal as u64));
    let path_params = placeholders(&rule.path);

    for placeholder in &path_params {
        match request.field(placeholder) {
            None => {
                return Err(BindingError::PlaceholderWithoutField {
                    method: method.name.clone(),
                    template: rule.path.clone(),
                    placeholder: placeholder.to_string(),
                })
            }
            Some(field) if !field.field_type.is_scalar() => {
                return Err(BindingError::NonScalarPathField {
                    method: method.name.clone(),
                    template: rule.path.clone(),
                    field: field.name.clone(),
                })
            }
            Some(_) => {}
        }
    }

    let body = match rule.body.as_deref() {
        None => BodySelector::Unset,
        Some("*") => BodySelector::All,
        Some(name) if request.field(name).is_some() => BodySelector::Field(name),
        Some(name) => {
            return Err(BindingError::BodyWithoutField {
                method: method.name.clone(),
                template: rule.path.clone(),
                body: name.to_string(),
            })
        }
    };

    let fields: Vec<Field> = request
        .fields
        .iter()
        .map(|def| {
            let location = field_location(def, &path_params, &body);
            build_field(def, &label, location, options)
        })
        .collect();

    // `user_id` and `userId` share a CamelCase form, so they would share a
    // local and a query key.
    let mut claimed: HashMap<&str, &str> = HashMap::new();
    for field in &fields {
        if let Some(first) = claimed.insert(&field.local_name, &field.name) {
            return Err(BindingError::LocalNameCollision {
                method: method.name.clone(),
                template: rule.path.clone(),
                first: first.to_string(),
                second: field.name.clone(),
                local_name: field.local_name.clone(),
            });
        }
    }

    tracing::debug!(
        method = %method.name,
        label = %label,
        verb = %rule.verb,
        template = %rule.path,
        "Built HTTP binding"
    );

    Ok(Binding {
        label,
        path_template: rule.path.clone(),
        base_path: base_path(&rule.path).to_string(),
        verb: rule.verb,
        fields,
        parent: Weak::new(),
    })
}

fn field_location(def: &FieldDef, path_params: &[&str], body: &BodySelector<'_>) -> Location {
    if path_params.contains(&def.name.as_str()) {
        Location::Path
    } else if body.selects(&def.name) {
        Location::Body
    } else if def.field_type.is_scalar() {
        Location::Query
    } else {
        Location::Body
    }
}

fn build_field(def: &FieldDef, label: &str, location: Location, options: &BuildOptions) -> Field {
    let camel_name = camel_case(&def.name);
    let local_name = format!("{camel_name}{label}");

    let scalar = def.field_type.as_scalar();
    let conversion = match (location, scalar) {
        (Location::Path | Location::Query, Some(scalar)) => Some(Conversion::new(
            scalar,
            def.repeated,
            &local_name,
            &options.repeated_separator,
        )),
        _ => None,
    };

    let rust_type = if def.repeated {
        format!("Vec<{}>", def.field_type.rust_type())
    } else {
        def.field_type.rust_type().to_string()
    };

    let (convert_func, convert_func_needs_error_check, type_conversion) = match conversion {
        Some(c) => (c.convert_func, c.needs_error_check, c.type_conversion),
        None => (String::new(), false, String::new()),
    };

    Field {
        name: def.name.clone(),
        query_param_name: snake_case(&def.name),
        camel_name,
        low_camel_name: low_camel_name(&def.name),
        local_name,
        location,
        field_type: def.field_type.clone(),
        repeated: def.repeated,
        rust_type,
        convert_func,
        convert_func_needs_error_check,
        type_conversion,
        is_base_type: scalar.is_some(),
    }
}
