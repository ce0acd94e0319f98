//! Named value formatters.
//!
//! Widgets often hand back a value in a shape that differs from what the
//! schema expects; a date picker produces `{year, month, day}` while the
//! schema wants `"YYYY-MM-DD"`. Formatters bridge that gap. They are looked
//! up by the field's `format` name so [`FormField`] stays plain data.

use chrono::NaiveDate;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::field::FormField;
use crate::mapper::DATE_FORMAT;

/// A stateless conversion from a widget value to its submitted form.
pub type Formatter = Arc<dyn Fn(&Value) -> Result<Value, FormatError> + Send + Sync>;

type FormatterMap = Arc<RwLock<HashMap<String, Formatter>>>;

/// Why a formatter could not convert a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// A required part of a structured value is missing or not an integer.
    #[error("missing or non-integer '{0}'")]
    MissingPart(&'static str),

    /// The parts do not name a real calendar date.
    #[error("{year}-{month}-{day} is not a valid date")]
    InvalidDate { year: i64, month: i64, day: i64 },

    /// The value has a shape the formatter does not accept.
    #[error("cannot format {0}")]
    Unsupported(String),
}

/// Formats a date picker value as `YYYY-MM-DD`.
///
/// Accepts an object with integer `year`, `month` and `day`, or a string
/// that is already a `YYYY-MM-DD` date (returned unchanged).
///
/// # Example
///
/// ```rust
/// use schema_form::format_date;
/// use serde_json::json;
///
/// let formatted = format_date(&json!({ "year": 2024, "month": 3, "day": 7 })).unwrap();
/// assert_eq!(formatted, json!("2024-03-07"));
///
/// assert!(format_date(&json!({ "year": 2023, "month": 2, "day": 29 })).is_err());
/// ```
pub fn format_date(value: &Value) -> Result<Value, FormatError> {
    match value {
        Value::Object(parts) => {
            let part = |name: &'static str| {
                parts
                    .get(name)
                    .and_then(Value::as_i64)
                    .ok_or(FormatError::MissingPart(name))
            };
            let (year, month, day) = (part("year")?, part("month")?, part("day")?);

            let date = i32::try_from(year)
                .ok()
                .zip(u32::try_from(month).ok())
                .zip(u32::try_from(day).ok())
                .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d))
                .ok_or(FormatError::InvalidDate { year, month, day })?;

            Ok(Value::String(date.format("%Y-%m-%d").to_string()))
        }
        Value::String(s) if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() => {
            Ok(value.clone())
        }
        other => Err(FormatError::Unsupported(other.to_string())),
    }
}

/// A thread-safe lookup from format name to [`Formatter`].
///
/// Clones share the same underlying map.
///
/// # Example
///
/// ```rust
/// use schema_form::FormatRegistry;
/// use serde_json::json;
///
/// let registry = FormatRegistry::with_builtins();
/// registry
///     .register("upper", |v| Ok(json!(v.as_str().unwrap_or_default().to_uppercase())))
///     .unwrap();
///
/// assert_eq!(registry.apply("upper", &json!("abc")).unwrap(), json!("ABC"));
/// assert_eq!(
///     registry.apply("date", &json!({ "year": 1999, "month": 12, "day": 31 })).unwrap(),
///     json!("1999-12-31")
/// );
/// ```
pub struct FormatRegistry {
    formatters: FormatterMap,
}

impl FormatRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            formatters: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a registry holding the `date` formatter.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry
            .formatters
            .write()
            .insert(DATE_FORMAT.to_string(), Arc::new(format_date));
        registry
    }

    /// Registers a formatter under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is taken.
    pub fn register<F>(&self, name: impl Into<String>, formatter: F) -> Result<(), RegistryError>
    where
        F: Fn(&Value) -> Result<Value, FormatError> + Send + Sync + 'static,
    {
        let name = name.into();
        let mut formatters = self.formatters.write();

        if formatters.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        formatters.insert(name, Arc::new(formatter));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Formatter> {
        self.formatters.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formatters.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.formatters.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Runs the formatter registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::FormatterNotFound` for an unknown name and
    /// `RegistryError::Format` if the formatter rejects the value.
    pub fn apply(&self, name: &str, value: &Value) -> Result<Value, RegistryError> {
        // Clone the Arc so the lock is not held while user code runs.
        let formatter = self
            .get(name)
            .ok_or_else(|| RegistryError::FormatterNotFound(name.to_string()))?;

        formatter(value).map_err(|source| RegistryError::Format {
            name: name.to_string(),
            source,
        })
    }

    /// Formats a value entered into `field`.
    ///
    /// Fields without a `format`, or whose format has no formatter, get the
    /// value back unchanged.
    pub fn apply_to_field(&self, field: &FormField, value: &Value) -> Result<Value, RegistryError> {
        match field.format.as_deref() {
            Some(name) if self.contains(name) => self.apply(name, value),
            _ => Ok(value.clone()),
        }
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl Clone for FormatRegistry {
    fn clone(&self) -> Self {
        Self {
            formatters: Arc::clone(&self.formatters),
        }
    }
}

/// Errors from registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("formatter '{0}' already registered")]
    DuplicateName(String),

    #[error("formatter '{0}' not found")]
    FormatterNotFound(String),

    #[error("formatter '{name}' failed: {source}")]
    Format {
        name: String,
        #[source]
        source: FormatError,
    },
}
