//! Error types.
//!
//! [`SchemaError`] / [`SchemaErrors`] describe why a schema document was
//! rejected. [`LoadError`] wraps those together with JSON syntax errors for
//! callers that start from text.

mod schema_error;

pub use schema_error::{SchemaError, SchemaErrors};

/// Errors from loading a schema out of JSON text.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The text is not valid JSON.
    #[error("malformed schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON parsed but is not an object schema with properties.
    #[error("invalid schema: {0}")]
    Schema(SchemaErrors),
}

impl From<SchemaErrors> for LoadError {
    fn from(errors: SchemaErrors) -> Self {
        LoadError::Schema(errors)
    }
}
