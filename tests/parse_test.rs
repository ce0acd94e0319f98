//! Integration tests for turning schema documents into the typed model.

use schema_form::{JsonPath, LoadError, ObjectSchema, SchemaType};
use serde_json::json;

#[test]
fn test_parse_user_schema() {
    let schema = ObjectSchema::parse(&json!({
        "type": "object",
        "required": ["email"],
        "properties": {
            "email": { "type": "string", "format": "email", "title": "E-mail" },
            "plan": { "enum": ["free", "pro"] }
        }
    }))
    .into_result()
    .unwrap();

    assert_eq!(schema.len(), 2);
    assert!(schema.is_required("email"));

    let email = schema.get("email").unwrap();
    assert_eq!(email.get_type(), Some(SchemaType::String));
    assert_eq!(email.get_format(), Some("email"));
    assert_eq!(email.get_title(), Some("E-mail"));

    let plan = schema.get("plan").unwrap();
    assert_eq!(plan.get_type(), None);
    assert_eq!(plan.get_enum().map(|v| v.len()), Some(2));
}

#[test]
fn test_from_json_str_keeps_order() {
    let schema = ObjectSchema::from_json_str(
        r#"{
            "type": "object",
            "properties": {
                "street": { "type": "string" },
                "city": { "type": "string" },
                "aaa": { "type": "string" }
            }
        }"#,
    )
    .unwrap();

    let names: Vec<_> = schema.properties().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["street", "city", "aaa"]);
}

#[test]
fn test_rejection_reports_every_problem() {
    let errors = ObjectSchema::parse(&json!({ "type": 5, "properties": null }))
        .into_result()
        .unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.at_path(&JsonPath::from_field("type")).len(), 1);
    assert_eq!(errors.at_path(&JsonPath::from_field("properties")).len(), 1);

    let message = errors.to_string();
    assert!(message.contains("type: schema must describe an object"));
    assert!(message.contains("(got: 5)"));
    assert!(message.contains("(got: null)"));
}

#[test]
fn test_load_error_display() {
    let err = ObjectSchema::from_json_str(r#"{"type":"object"}"#).unwrap_err();
    assert!(matches!(err, LoadError::Schema(_)));
    assert!(err.to_string().starts_with("invalid schema: properties:"));

    let err = ObjectSchema::from_json_str("").unwrap_err();
    assert!(err.to_string().starts_with("malformed schema JSON"));
}
