//! # strut-core
//!
//! Derives the HTTP transport binding of an RPC service.
//!
//! Input is an already-parsed [`ServiceDef`]: methods, request messages, and
//! the `google.api.http`-style [`HttpRule`] annotations on each method. The
//! [`build_service`] / [`build_method`] builders turn it into a
//! [`Method`] → [`Binding`] → [`Field`] tree that says, for every route, where
//! each request field comes from (path, query or body) and which Rust
//! fragment converts its raw string into the typed value.
//!
//! [`HttpHelper`] bundles that tree with the URL matcher's source text, lifted
//! verbatim from `strut-path` so generated servers match paths exactly the way
//! the tested matcher does.

pub mod binding;
pub mod config;
pub mod error;
pub mod helper;
pub mod naming;
pub mod scalar;
pub mod schema;

pub use binding::{build_method, build_service, Binding, BuildOptions, Field, Location, Method, Service};
pub use config::{ConfigError, GeneratorSettings, StrutConfig};
pub use error::{BindingError, GenerateError};
pub use helper::{path_params_builder, HelperSource, HttpHelper};
pub use naming::{camel_case, english_number, low_camel_name, snake_case};
pub use scalar::{Conversion, ScalarType};
pub use schema::{FieldDef, FieldType, HttpRule, HttpVerb, MessageDef, MethodDef, ServiceDef};
