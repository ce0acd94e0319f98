//! Paths to keys inside a schema document.
//!
//! Parse diagnostics carry a [`JsonPath`] so callers can tell which part of
//! the schema was rejected (e.g. `properties` or `type`).

use std::fmt::{self, Display};

/// A segment of a JSON path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key (e.g. `properties`, `email`)
    Field(String),
    /// An array position (e.g. `[2]` inside `required`)
    Index(usize),
}

/// A path to a key in a schema document, such as `properties.email`.
///
/// # Example
///
/// ```rust
/// use schema_form::JsonPath;
///
/// let path = JsonPath::root().push_field("required").push_index(1);
/// assert_eq!(path.to_string(), "required[1]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// The empty path, pointing at the schema document itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path with a single key.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self::root().push_field(name)
    }

    /// Returns a new path with `name` appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an array index appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i > 0 => write!(f, ".{}", name)?,
                PathSegment::Field(name) => write!(f, "{}", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
