//! Conversion from untyped JSON into the schema model.
//!
//! Only the top level can fail: the document must be `"type": "object"` with
//! a `properties` object. Below that, anything that does not fit the model is
//! dropped so a single odd property never costs the caller the whole form.

use serde_json::{Map, Number, Value};
use stillwater::prelude::*;
use stillwater::Validation;

use crate::error::{LoadError, SchemaError, SchemaErrors};
use crate::path::JsonPath;
use crate::ParseResult;

use super::{ObjectSchema, PropertySchema, SchemaType};

impl ObjectSchema {
    /// Parses a JSON Schema object definition.
    ///
    /// Both top-level problems (wrong `type`, missing or non-object
    /// `properties`) are reported together.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_form::ObjectSchema;
    /// use serde_json::json;
    ///
    /// let result = ObjectSchema::parse(&json!({
    ///     "type": "object",
    ///     "properties": { "name": { "type": "string" } }
    /// }));
    /// assert!(result.is_success());
    ///
    /// let result = ObjectSchema::parse(&json!({ "type": "array" }));
    /// let errors = result.into_result().unwrap_err();
    /// assert_eq!(errors.len(), 2);
    /// ```
    pub fn parse(value: &Value) -> ParseResult<ObjectSchema> {
        let root = match value.as_object() {
            Some(obj) => obj,
            None => {
                return Validation::Failure(SchemaErrors::single(
                    SchemaError::new(JsonPath::root(), "schema must be a JSON object")
                        .with_code("invalid_type")
                        .with_expected("object")
                        .with_got(value_type_name(value)),
                ));
            }
        };

        let type_check = match root.get("type") {
            Some(Value::String(ty)) if ty == "object" => Ok(()),
            other => Err(SchemaError::new(
                JsonPath::from_field("type"),
                "schema must describe an object",
            )
            .with_code("invalid_type")
            .with_expected("\"object\"")
            .with_got(describe(other))),
        };

        let properties = match root.get("properties") {
            Some(Value::Object(props)) => Ok(props),
            other => Err(SchemaError::new(
                JsonPath::from_field("properties"),
                "schema must declare its properties as an object",
            )
            .with_code("invalid_properties")
            .with_expected("object")
            .with_got(describe(other))),
        };

        match (type_check, properties) {
            (Ok(()), Ok(props)) => Validation::Success(build_schema(props, root.get("required"))),
            (Err(e), Ok(_)) | (Ok(()), Err(e)) => Validation::Failure(SchemaErrors::single(e)),
            (Err(type_err), Err(props_err)) => Validation::Failure(
                SchemaErrors::single(type_err).combine(SchemaErrors::single(props_err)),
            ),
        }
    }

    /// Parses JSON text and then the schema it contains.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] for malformed text and
    /// [`LoadError::Schema`] when the document is not an object schema.
    pub fn from_json_str(text: &str) -> Result<ObjectSchema, LoadError> {
        let value: Value = serde_json::from_str(text)?;
        Self::parse(&value).into_result().map_err(LoadError::from)
    }
}

fn build_schema(properties: &Map<String, Value>, required: Option<&Value>) -> ObjectSchema {
    let mut schema = ObjectSchema::new();

    for (name, prop) in properties {
        schema = schema.property(name.clone(), parse_property(prop));
    }

    match required {
        Some(Value::Array(names)) => {
            for (i, entry) in names.iter().enumerate() {
                match entry.as_str() {
                    Some(name) => schema = schema.require(name),
                    None => tracing::debug!(
                        path = %JsonPath::from_field("required").push_index(i),
                        "ignoring non-string required entry"
                    ),
                }
            }
        }
        Some(other) => tracing::debug!(
            got = value_type_name(other),
            "ignoring `required` that is not an array"
        ),
        None => {}
    }

    schema
}

/// Builds a property schema, keeping only attributes of the expected JSON type.
fn parse_property(value: &Value) -> PropertySchema {
    let Some(obj) = value.as_object() else {
        return PropertySchema::new();
    };

    PropertySchema {
        title: string_attr(obj, "title"),
        schema_type: obj
            .get("type")
            .and_then(Value::as_str)
            .and_then(SchemaType::from_name),
        format: string_attr(obj, "format"),
        enum_values: obj.get("enum").and_then(Value::as_array).cloned(),
        min_length: length_attr(obj, "minLength"),
        max_length: length_attr(obj, "maxLength"),
        pattern: string_attr(obj, "pattern"),
        minimum: number_attr(obj, "minimum"),
        maximum: number_attr(obj, "maximum"),
    }
}

fn string_attr(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Reads a non-negative integer. Integral floats such as `10.0` count.
fn length_attr(obj: &Map<String, Value>, key: &str) -> Option<u64> {
    let value = obj.get(key)?;
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

fn number_attr(obj: &Map<String, Value>, key: &str) -> Option<Number> {
    match obj.get(key) {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    }
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => "nothing".to_string(),
        Some(v @ (Value::String(_) | Value::Bool(_) | Value::Number(_) | Value::Null)) => {
            v.to_string()
        }
        Some(v) => value_type_name(v).to_string(),
    }
}

/// Returns the JSON type name for a value.
fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unwrap_success<T, E: std::fmt::Debug>(v: Validation<T, E>) -> T {
        v.into_result().unwrap()
    }

    fn unwrap_failure<T: std::fmt::Debug, E>(v: Validation<T, E>) -> E {
        v.into_result().unwrap_err()
    }

    #[test]
    fn test_non_object_root() {
        let errors = unwrap_failure(ObjectSchema::parse(&json!([1, 2])));
        assert_eq!(errors.len(), 1);
        assert!(errors.first().path.is_root());
        assert_eq!(errors.first().got.as_deref(), Some("array"));
    }

    #[test]
    fn test_wrong_type_and_missing_properties_accumulate() {
        let errors = unwrap_failure(ObjectSchema::parse(&json!({ "type": "array" })));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.with_code("invalid_type").len(), 1);
        assert_eq!(errors.with_code("invalid_properties").len(), 1);
        assert_eq!(errors.first().got.as_deref(), Some("\"array\""));
    }

    #[test]
    fn test_missing_type() {
        let errors = unwrap_failure(ObjectSchema::parse(&json!({ "properties": {} })));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().path.to_string(), "type");
        assert_eq!(errors.first().got.as_deref(), Some("nothing"));
    }

    #[test]
    fn test_properties_not_object() {
        let errors = unwrap_failure(ObjectSchema::parse(&json!({
            "type": "object",
            "properties": ["name"]
        })));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().path.to_string(), "properties");
        assert_eq!(errors.first().got.as_deref(), Some("array"));
    }

    #[test]
    fn test_wrongly_typed_attributes_are_dropped() {
        let schema = unwrap_success(ObjectSchema::parse(&json!({
            "type": "object",
            "properties": {
                "x": {
                    "title": 7,
                    "type": ["string", "null"],
                    "format": false,
                    "enum": "a",
                    "minLength": -1,
                    "maxLength": "10",
                    "minimum": "0"
                }
            }
        })));

        assert_eq!(schema.get("x"), Some(&PropertySchema::new()));
    }

    #[test]
    fn test_boolean_property_schema_is_empty() {
        let schema = unwrap_success(ObjectSchema::parse(&json!({
            "type": "object",
            "properties": { "anything": true }
        })));
        assert_eq!(schema.get("anything"), Some(&PropertySchema::new()));
    }

    #[test]
    fn test_required_ignores_non_strings() {
        let schema = unwrap_success(ObjectSchema::parse(&json!({
            "type": "object",
            "properties": { "a": {}, "b": {} },
            "required": ["a", 3, null]
        })));
        assert!(schema.is_required("a"));
        assert!(!schema.is_required("b"));
    }

    #[test]
    fn test_required_not_array_is_absent() {
        let schema = unwrap_success(ObjectSchema::parse(&json!({
            "type": "object",
            "properties": { "a": {} },
            "required": "a"
        })));
        assert!(!schema.is_required("a"));
    }

    #[test]
    fn test_constraints_are_kept() {
        let schema = unwrap_success(ObjectSchema::parse(&json!({
            "type": "object",
            "properties": {
                "code": { "type": "string", "minLength": 2, "maxLength": 8, "pattern": "^[A-Z]+$" },
                "ratio": { "type": "number", "minimum": 0.5, "maximum": 10 }
            }
        })));

        let code = schema.get("code").unwrap();
        assert_eq!(code.get_min_length(), Some(2));
        assert_eq!(code.get_max_length(), Some(8));
        assert_eq!(code.get_pattern(), Some("^[A-Z]+$"));

        let ratio = schema.get("ratio").unwrap();
        assert_eq!(ratio.get_minimum().and_then(Number::as_f64), Some(0.5));
        assert_eq!(ratio.get_maximum().and_then(Number::as_u64), Some(10));
    }

    #[test]
    fn test_integral_float_lengths_are_kept() {
        let schema = unwrap_success(ObjectSchema::parse(&json!({
            "type": "object",
            "properties": {
                "x": { "type": "string", "minLength": 2.0, "maxLength": 10.0 },
                "y": { "type": "string", "minLength": 1.5, "maxLength": -3.0 }
            }
        })));

        let x = schema.get("x").unwrap();
        assert_eq!(x.get_min_length(), Some(2));
        assert_eq!(x.get_max_length(), Some(10));

        let y = schema.get("y").unwrap();
        assert_eq!(y.get_min_length(), None);
        assert_eq!(y.get_max_length(), None);
    }

    #[test]
    fn test_from_json_str_malformed() {
        let err = ObjectSchema::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_from_json_str_invalid_schema() {
        let err = ObjectSchema::from_json_str(r#"{"type": "string"}"#).unwrap_err();
        match err {
            LoadError::Schema(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
