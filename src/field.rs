//! Form-field descriptors handed to a UI renderer.
//!
//! A [`FormField`] is plain data: it can be cloned, compared and rendered to
//! JSON, and it never carries behaviour. Value formatting for a field is
//! looked up by its `format` name (see [`crate::FormatRegistry`]).

use serde_json::{json, Map, Number, Value};

use crate::schema::SchemaType;

/// The widget a renderer should use for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    TextInput,
    NumericInput,
    Select,
    Checkbox,
    DatePicker,
    /// No widget fits; the renderer may show a placeholder or skip the field.
    Unsupported,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::TextInput => "TextInput",
            Component::NumericInput => "NumericInput",
            Component::Select => "Select",
            Component::Checkbox => "Checkbox",
            Component::DatePicker => "DatePicker",
            Component::Unsupported => "Unsupported",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One choice of a select widget.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumOption {
    /// Display text.
    pub label: String,
    /// The literal submitted when this option is chosen.
    pub value: Value,
}

impl EnumOption {
    /// Builds an option whose label is the literal's string form: strings
    /// are used as-is, floats drop a zero fraction (`1.0` becomes `"1"`),
    /// every other literal is rendered as JSON text.
    ///
    /// ```rust
    /// use schema_form::EnumOption;
    /// use serde_json::json;
    ///
    /// assert_eq!(EnumOption::from_literal(json!("admin")).label, "admin");
    /// assert_eq!(EnumOption::from_literal(json!(3)).label, "3");
    /// assert_eq!(EnumOption::from_literal(json!(1.0)).label, "1");
    /// assert_eq!(EnumOption::from_literal(json!(null)).label, "null");
    /// ```
    pub fn from_literal(value: Value) -> Self {
        let label = match &value {
            Value::String(s) => s.clone(),
            // f64's Display prints integral values without ".0"
            Value::Number(n) if n.is_f64() => match n.as_f64() {
                Some(f) => f.to_string(),
                None => n.to_string(),
            },
            other => other.to_string(),
        };
        Self { label, value }
    }
}

/// The UI-facing description of one schema property.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    /// The property name.
    pub key: String,
    /// The property's title, or the key when it has none.
    pub label: String,
    /// Present only when the schema declared a single recognized type.
    pub schema_type: Option<SchemaType>,
    pub component: Component,
    pub required: bool,
    pub format: Option<String>,
    /// Present only for [`Component::Select`] fields.
    pub options: Option<Vec<EnumOption>>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,
    pub minimum: Option<Number>,
    pub maximum: Option<Number>,
}

impl FormField {
    /// Renders the field as a JSON object with camelCase keys. Absent
    /// attributes are omitted rather than written as `null`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_form::map_schema;
    /// use serde_json::json;
    ///
    /// let fields = map_schema(&json!({
    ///     "type": "object",
    ///     "properties": { "age": { "type": "integer", "minimum": 0 } }
    /// }));
    ///
    /// assert_eq!(fields[0].to_json(), json!({
    ///     "key": "age",
    ///     "label": "age",
    ///     "type": "integer",
    ///     "component": "NumericInput",
    ///     "required": false,
    ///     "minimum": 0
    /// }));
    /// ```
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("key".to_string(), json!(self.key));
        obj.insert("label".to_string(), json!(self.label));
        if let Some(ty) = self.schema_type {
            obj.insert("type".to_string(), json!(ty.as_str()));
        }
        obj.insert("component".to_string(), json!(self.component.as_str()));
        obj.insert("required".to_string(), json!(self.required));
        if let Some(ref format) = self.format {
            obj.insert("format".to_string(), json!(format));
        }
        if let Some(ref options) = self.options {
            let options: Vec<Value> = options
                .iter()
                .map(|o| json!({ "label": o.label, "value": o.value }))
                .collect();
            obj.insert("enum".to_string(), Value::Array(options));
        }
        if let Some(min) = self.min_length {
            obj.insert("minLength".to_string(), json!(min));
        }
        if let Some(max) = self.max_length {
            obj.insert("maxLength".to_string(), json!(max));
        }
        if let Some(ref pattern) = self.pattern {
            obj.insert("pattern".to_string(), json!(pattern));
        }
        if let Some(ref min) = self.minimum {
            obj.insert("minimum".to_string(), Value::Number(min.clone()));
        }
        if let Some(ref max) = self.maximum {
            obj.insert("maximum".to_string(), Value::Number(max.clone()));
        }
        Value::Object(obj)
    }
}
