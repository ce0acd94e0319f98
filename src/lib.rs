//! # Schema Form
//!
//! Turns a JSON Schema object definition into an ordered list of form-field
//! descriptors that a UI layer can render.
//!
//! ## Overview
//!
//! Each property of the schema becomes one [`FormField`], in declaration
//! order, tagged with the [`Component`] a renderer should use: a select
//! for enumerations, a date picker for `format: "date"`, then text, numeric
//! or checkbox inputs by `type`, and [`Component::Unsupported`] for
//! everything else. A schema that is not an object with properties yields
//! no fields and a logged warning; mapping never fails the caller.
//!
//! ## Core Types
//!
//! - [`SchemaFieldMapper`]: the mapper and its configuration
//! - [`ObjectSchema`] / [`PropertySchema`]: the typed schema model
//! - [`FormField`] / [`EnumOption`]: the output records
//! - [`FormatRegistry`]: by-name formatters for widget values (e.g. `date`)
//! - [`SchemaError`] / [`SchemaErrors`]: why a schema was rejected
//!
//! ## Example
//!
//! ```rust
//! use schema_form::{map_schema, Component};
//! use serde_json::json;
//!
//! let fields = map_schema(&json!({
//!     "type": "object",
//!     "required": ["name"],
//!     "properties": {
//!         "name": { "type": "string", "title": "Name" },
//!         "age": { "type": "integer" },
//!         "role": { "enum": ["admin", "user"] },
//!         "dob": { "type": "string", "format": "date" }
//!     }
//! }));
//!
//! let components: Vec<_> = fields.iter().map(|f| f.component).collect();
//! assert_eq!(components, vec![
//!     Component::TextInput,
//!     Component::NumericInput,
//!     Component::Select,
//!     Component::DatePicker,
//! ]);
//! ```

pub mod error;
pub mod field;
pub mod formatter;
pub mod mapper;
pub mod path;
pub mod schema;

pub use error::{LoadError, SchemaError, SchemaErrors};
pub use field::{Component, EnumOption, FormField};
pub use formatter::{format_date, FormatError, FormatRegistry, Formatter, RegistryError};
pub use mapper::{map_schema, SchemaFieldMapper, DATE_FORMAT};
pub use path::{JsonPath, PathSegment};
pub use schema::{ObjectSchema, PropertySchema, SchemaType};

/// Result of parsing a schema document, accumulating every problem found.
pub type ParseResult<T> = stillwater::Validation<T, SchemaErrors>;
