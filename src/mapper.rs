//! Schema-to-form mapping.
//!
//! [`SchemaFieldMapper`] walks an object schema's properties in declaration
//! order and emits one [`FormField`] per property. The widget is chosen by
//! an ordered rule list where the first matching rule wins:
//!
//! 1. non-empty `enum` → [`Component::Select`]
//! 2. date `format` → [`Component::DatePicker`]
//! 3. `type: string` → [`Component::TextInput`]
//! 4. `type: number | integer` → [`Component::NumericInput`]
//! 5. `type: boolean` → [`Component::Checkbox`]
//!
//! Anything else becomes [`Component::Unsupported`] and is still emitted.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{LoadError, SchemaErrors};
use crate::field::{Component, EnumOption, FormField};
use crate::schema::{ObjectSchema, PropertySchema, SchemaType};

/// The format name that selects a date picker by default.
pub const DATE_FORMAT: &str = "date";

struct Rule {
    name: &'static str,
    component: Component,
    matches: fn(&SchemaFieldMapper, &PropertySchema) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        name: "enum",
        component: Component::Select,
        matches: has_enum,
    },
    Rule {
        name: "date-format",
        component: Component::DatePicker,
        matches: has_date_format,
    },
    Rule {
        name: "string",
        component: Component::TextInput,
        matches: is_string,
    },
    Rule {
        name: "numeric",
        component: Component::NumericInput,
        matches: is_numeric,
    },
    Rule {
        name: "boolean",
        component: Component::Checkbox,
        matches: is_boolean,
    },
];

fn has_enum(_: &SchemaFieldMapper, prop: &PropertySchema) -> bool {
    prop.get_enum().is_some_and(|values| !values.is_empty())
}

fn has_date_format(mapper: &SchemaFieldMapper, prop: &PropertySchema) -> bool {
    prop.get_format().is_some_and(|f| mapper.is_date_format(f))
}

fn is_string(_: &SchemaFieldMapper, prop: &PropertySchema) -> bool {
    prop.get_type() == Some(SchemaType::String)
}

fn is_numeric(_: &SchemaFieldMapper, prop: &PropertySchema) -> bool {
    prop.get_type().is_some_and(|t| t.is_numeric())
}

fn is_boolean(_: &SchemaFieldMapper, prop: &PropertySchema) -> bool {
    prop.get_type() == Some(SchemaType::Boolean)
}

/// Maps object schemas to form fields.
///
/// The mapper holds configuration only; every call is independent and
/// returns freshly built fields.
///
/// # Example
///
/// ```rust
/// use schema_form::{Component, SchemaFieldMapper};
/// use serde_json::json;
///
/// let mapper = SchemaFieldMapper::new();
/// let fields = mapper.map(&json!({
///     "type": "object",
///     "required": ["name"],
///     "properties": {
///         "name": { "type": "string", "title": "Name" },
///         "dob": { "type": "string", "format": "date" }
///     }
/// }));
///
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields[0].label, "Name");
/// assert!(fields[0].required);
/// assert_eq!(fields[1].component, Component::DatePicker);
/// ```
#[derive(Debug, Clone)]
pub struct SchemaFieldMapper {
    date_formats: Vec<String>,
}

impl SchemaFieldMapper {
    /// Creates a mapper that treats only `format: "date"` as a date.
    pub fn new() -> Self {
        Self {
            date_formats: vec![DATE_FORMAT.to_string()],
        }
    }

    /// Treats an additional format name as a date.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_form::{Component, PropertySchema, SchemaFieldMapper};
    ///
    /// let mapper = SchemaFieldMapper::new().date_format("birthday");
    /// let prop = PropertySchema::new().format("birthday");
    /// assert_eq!(mapper.classify(&prop), Component::DatePicker);
    /// ```
    pub fn date_format(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.date_formats.contains(&name) {
            self.date_formats.push(name);
        }
        self
    }

    /// Returns true if `format` selects a date picker.
    pub fn is_date_format(&self, format: &str) -> bool {
        self.date_formats.iter().any(|f| f == format)
    }

    /// Maps an untyped schema document.
    ///
    /// A document that is not an object schema with properties is not an
    /// error for the caller: a warning is logged and no fields are returned.
    pub fn map(&self, schema: &Value) -> Vec<FormField> {
        match ObjectSchema::parse(schema) {
            Validation::Success(schema) => self.map_parsed(&schema),
            Validation::Failure(errors) => {
                warn_rejected(&errors);
                Vec::new()
            }
        }
    }

    /// Maps a schema given as JSON text. Malformed text is handled like an
    /// invalid schema.
    pub fn map_str(&self, text: &str) -> Vec<FormField> {
        match ObjectSchema::from_json_str(text) {
            Ok(schema) => self.map_parsed(&schema),
            Err(LoadError::Schema(errors)) => {
                warn_rejected(&errors);
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, "invalid schema: expected type object with properties");
                Vec::new()
            }
        }
    }

    /// Maps an already parsed schema. One field per property, in order.
    pub fn map_parsed(&self, schema: &ObjectSchema) -> Vec<FormField> {
        schema
            .properties()
            .map(|(key, prop)| self.build_field(key, prop, schema.is_required(key)))
            .collect()
    }

    /// Picks the widget for a property.
    pub fn classify(&self, prop: &PropertySchema) -> Component {
        self.matching_rule(prop)
            .map(|rule| rule.component)
            .unwrap_or(Component::Unsupported)
    }

    fn matching_rule(&self, prop: &PropertySchema) -> Option<&'static Rule> {
        RULES.iter().find(|rule| (rule.matches)(self, prop))
    }

    fn build_field(&self, key: &str, prop: &PropertySchema, required: bool) -> FormField {
        let rule = self.matching_rule(prop);
        let component = rule.map_or(Component::Unsupported, |r| r.component);
        tracing::debug!(
            field = key,
            rule = rule.map_or("fallback", |r| r.name),
            component = %component,
            "classified schema property"
        );

        let options = match (component, prop.get_enum()) {
            (Component::Select, Some(values)) => Some(
                values
                    .iter()
                    .cloned()
                    .map(EnumOption::from_literal)
                    .collect(),
            ),
            _ => None,
        };

        let label = match prop.get_title() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => key.to_string(),
        };

        FormField {
            key: key.to_string(),
            label,
            schema_type: prop.get_type(),
            component,
            required,
            format: prop.get_format().map(str::to_string),
            options,
            min_length: prop.get_min_length(),
            max_length: prop.get_max_length(),
            pattern: prop.get_pattern().map(str::to_string),
            minimum: prop.get_minimum().cloned(),
            maximum: prop.get_maximum().cloned(),
        }
    }
}

impl Default for SchemaFieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn warn_rejected(errors: &SchemaErrors) {
    tracing::warn!(
        errors = %errors,
        "invalid schema: expected type object with properties"
    );
}

/// Maps a schema document with the default mapper.
///
/// # Example
///
/// ```rust
/// use schema_form::map_schema;
/// use serde_json::json;
///
/// assert!(map_schema(&json!({ "type": "array" })).is_empty());
/// ```
pub fn map_schema(schema: &Value) -> Vec<FormField> {
    SchemaFieldMapper::new().map(schema)
}
