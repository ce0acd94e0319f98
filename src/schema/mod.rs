//! Typed model of an object schema.
//!
//! Untyped JSON is turned into an [`ObjectSchema`] once, at the boundary
//! (see [`ObjectSchema::parse`]); the mapper only ever sees this model.
//!
//! # Example
//!
//! ```rust
//! use schema_form::{ObjectSchema, PropertySchema, SchemaType};
//!
//! let schema = ObjectSchema::new()
//!     .property("name", PropertySchema::new().schema_type(SchemaType::String).title("Name"))
//!     .property("age", PropertySchema::new().schema_type(SchemaType::Integer))
//!     .require("name");
//!
//! assert_eq!(schema.len(), 2);
//! assert!(schema.is_required("name"));
//! assert!(!schema.is_required("age"));
//! ```

mod parse;

use indexmap::{IndexMap, IndexSet};
use serde_json::{Number, Value};

/// The primitive JSON Schema type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
    Null,
}

impl SchemaType {
    /// Looks up a JSON Schema type name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "object" => Some(SchemaType::Object),
            "array" => Some(SchemaType::Array),
            "string" => Some(SchemaType::String),
            "number" => Some(SchemaType::Number),
            "integer" => Some(SchemaType::Integer),
            "boolean" => Some(SchemaType::Boolean),
            "null" => Some(SchemaType::Null),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Null => "null",
        }
    }

    /// True for `number` and `integer`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, SchemaType::Number | SchemaType::Integer)
    }
}

/// The schema of one property.
///
/// Every attribute is optional. Attributes that were present in the source
/// document with the wrong JSON type are dropped during parsing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertySchema {
    title: Option<String>,
    schema_type: Option<SchemaType>,
    format: Option<String>,
    enum_values: Option<Vec<Value>>,
    min_length: Option<u64>,
    max_length: Option<u64>,
    pattern: Option<String>,
    minimum: Option<Number>,
    maximum: Option<Number>,
}

impl PropertySchema {
    /// Creates a property schema with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn schema_type(mut self, schema_type: SchemaType) -> Self {
        self.schema_type = Some(schema_type);
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the allowed literals, in the order they should be offered.
    pub fn enum_values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn min_length(mut self, min: u64) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: u64) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn minimum(mut self, min: impl Into<Number>) -> Self {
        self.minimum = Some(min.into());
        self
    }

    pub fn maximum(mut self, max: impl Into<Number>) -> Self {
        self.maximum = Some(max.into());
        self
    }

    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn get_type(&self) -> Option<SchemaType> {
        self.schema_type
    }

    pub fn get_format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn get_enum(&self) -> Option<&[Value]> {
        self.enum_values.as_deref()
    }

    pub fn get_min_length(&self) -> Option<u64> {
        self.min_length
    }

    pub fn get_max_length(&self) -> Option<u64> {
        self.max_length
    }

    pub fn get_pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn get_minimum(&self) -> Option<&Number> {
        self.minimum.as_ref()
    }

    pub fn get_maximum(&self) -> Option<&Number> {
        self.maximum.as_ref()
    }
}

/// An object schema: named properties in declaration order plus the set
/// of required names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    properties: IndexMap<String, PropertySchema>,
    required: IndexSet<String>,
}

impl ObjectSchema {
    /// Creates an object schema with no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property. Re-adding a name replaces its schema but keeps its
    /// original position.
    pub fn property(mut self, name: impl Into<String>, schema: PropertySchema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Marks a property name as required. The name does not have to be
    /// declared under `properties`.
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.insert(name.into());
        self
    }

    /// Iterates properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertySchema)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.get(name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
