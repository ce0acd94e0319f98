//! Diagnostics produced when a schema document is rejected.
//!
//! A rejected schema can be wrong in more than one way at once (a `type` of
//! `"array"` *and* no `properties`), so problems are collected into
//! [`SchemaErrors`] instead of stopping at the first one.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::JsonPath;

/// A single problem found in a schema document.
///
/// # Example
///
/// ```rust
/// use schema_form::{JsonPath, SchemaError};
///
/// let error = SchemaError::new(JsonPath::from_field("type"), "schema must describe an object")
///     .with_code("invalid_type")
///     .with_expected("\"object\"")
///     .with_got("\"array\"");
///
/// assert_eq!(error.code, "invalid_type");
/// assert_eq!(error.to_string(), "type: schema must describe an object (expected: \"object\") (got: \"array\")");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaError {
    /// Location of the offending key.
    pub path: JsonPath,
    pub message: String,
    /// What the document actually contained, rendered as JSON text.
    pub got: Option<String>,
    pub expected: Option<String>,
    /// Machine-readable code (`invalid_type`, `invalid_properties`, `invalid_json`).
    pub code: String,
}

impl SchemaError {
    /// Creates an error with the generic `invalid_schema` code.
    pub fn new(path: JsonPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            got: None,
            expected: None,
            code: "invalid_schema".to_string(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.message)?;
        } else {
            write!(f, "{}: {}", self.path, self.message)?;
        }

        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }

        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// A non-empty collection of [`SchemaError`]s.
///
/// Backed by `NonEmptyVec`, so a failed parse always explains itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaErrors(NonEmptyVec<SchemaError>);

impl SchemaErrors {
    pub fn single(error: SchemaError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Collects errors in order. Returns `None` for an empty vec.
    pub fn from_vec(errors: Vec<SchemaError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let first = Self::single(errors.next()?);
        Some(errors.fold(first, |acc, e| acc.combine(Self::single(e))))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaError> {
        self.0.iter()
    }

    pub fn first(&self) -> &SchemaError {
        self.0.head()
    }

    /// Returns all errors carrying `code`.
    pub fn with_code(&self, code: &str) -> Vec<&SchemaError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// Returns all errors reported at `path`.
    pub fn at_path(&self, path: &JsonPath) -> Vec<&SchemaError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    pub fn into_vec(self) -> Vec<SchemaError> {
        self.0.into_vec()
    }
}

impl Semigroup for SchemaErrors {
    fn combine(self, other: Self) -> Self {
        SchemaErrors(self.0.combine(other.0))
    }
}

impl Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut errors = self.iter();
        if let Some(first) = errors.next() {
            write!(f, "{}", first)?;
        }
        for error in errors {
            write!(f, "; {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

impl IntoIterator for SchemaErrors {
    type Item = SchemaError;
    type IntoIter = std::vec::IntoIter<SchemaError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaErrors>();
    assert_sync::<SchemaErrors>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_code() {
        let error = SchemaError::new(JsonPath::root(), "not an object");
        assert_eq!(error.code, "invalid_schema");
        assert!(error.got.is_none());
        assert!(error.expected.is_none());
    }

    #[test]
    fn test_display_root() {
        let error = SchemaError::new(JsonPath::root(), "expected a JSON object");
        assert_eq!(error.to_string(), "(root): expected a JSON object");
    }

    #[test]
    fn test_from_empty_vec_is_none() {
        assert!(SchemaErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_combine_and_query() {
        let type_path = JsonPath::from_field("type");
        let errors = SchemaErrors::single(
            SchemaError::new(type_path.clone(), "wrong type").with_code("invalid_type"),
        )
        .combine(SchemaErrors::single(
            SchemaError::new(JsonPath::from_field("properties"), "missing")
                .with_code("invalid_properties"),
        ));

        assert_eq!(errors.len(), 2);
        assert!(!errors.is_empty());
        assert_eq!(errors.with_code("invalid_type").len(), 1);
        assert_eq!(errors.at_path(&type_path).len(), 1);
        assert_eq!(errors.first().code, "invalid_type");
    }

    #[test]
    fn test_display_joins_errors() {
        let errors = SchemaErrors::from_vec(vec![
            SchemaError::new(JsonPath::from_field("type"), "a"),
            SchemaError::new(JsonPath::from_field("properties"), "b"),
        ])
        .unwrap();

        assert_eq!(errors.to_string(), "type: a; properties: b");
        assert_eq!(errors.into_iter().count(), 2);
    }
}
