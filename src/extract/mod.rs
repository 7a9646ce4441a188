//! Component metadata extraction.
//!
//! The pipeline only depends on the [`MetadataExtractor`] trait. Everything in
//! [`ComponentDetails`] is opaque to pairing and aggregation and is flattened
//! into the output record as-is.

mod error;
mod prop_types;
mod react;

pub use error::ExtractError;
pub use react::{ReactExtractor, display_name_from_path};

use indexmap::IndexMap;
use serde::Serialize;

/// Extracts component metadata from one source file.
pub trait MetadataExtractor: Send {
    /// Extractor name for logging.
    fn name(&self) -> &str;

    /// Parse `code` (the contents of `path`) into component metadata.
    fn extract(&mut self, path: &str, code: &str) -> Result<ComponentMetadata, ExtractError>;
}

/// Result of a successful extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentMetadata {
    pub display_name: String,
    pub details: ComponentDetails,
}

/// Extractor-defined fields, serialized in react-docgen's shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDetails {
    pub description: String,

    pub methods: Vec<MethodDoc>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub props: IndexMap<String, PropDescriptor>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub composes: Vec<String>,
}

/// A documented class method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDoc {
    pub name: String,
    pub docblock: Option<String>,
    pub modifiers: Vec<String>,
    pub params: Vec<MethodParam>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodParam {
    pub name: String,
}

/// Everything known about one prop.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDescriptor {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub prop_type: Option<PropType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
}

/// A `PropTypes` validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropType {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<PropTypeValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl PropType {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            raw: None,
            required: None,
        }
    }

    pub fn custom(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::named("custom")
        }
    }
}

/// Argument payload of a parameterized validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropTypeValue {
    /// `instanceOf(Foo)` and unresolvable arguments.
    Raw(String),
    /// `arrayOf(...)` / `objectOf(...)`.
    Single(Box<PropType>),
    /// `oneOfType([...])`.
    Union(Vec<PropType>),
    /// `oneOf([...])`.
    Enum(Vec<LiteralValue>),
    /// `shape({...})` / `exact({...})`.
    Shape(IndexMap<String, PropType>),
}

/// A source literal with a flag for non-literal expressions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiteralValue {
    pub value: String,
    pub computed: bool,
}

/// Default value of a prop, kept as source text.
pub type DefaultValue = LiteralValue;
