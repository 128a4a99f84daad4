//! Declarative structural checks for LJSON records.
//!
//! Records arrive as generic [`serde_json::Value`]s. The helpers in this
//! module walk a value, check one constraint at a time and either produce a
//! typed Rust value or a [`SchemaError`] naming the dotted path of the
//! offending field (e.g. `s.0.g`).
//!
//! Objects are checked field by field through [`ObjectView`]: unknown fields
//! are ignored, declared fields must match exactly. An explicit JSON `null`
//! never satisfies an optional field.

use serde_json::{Map, Value};
use snafu::Snafu;

/// Largest integer that survives a round trip through an IEEE double.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// A record did not match its schema.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("At path: {} -- {message}", display_path(path)))]
pub struct SchemaError {
    /// Dotted path of the failing field, empty for the record itself.
    pub path: String,
    /// What was expected and what was received.
    pub message: String,
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}

impl SchemaError {
    pub fn new<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self { path: path.into(), message: message.into() }
    }

    fn expected(path: &str, what: &str, value: &Value) -> Self {
        Self::new(path, format!("Expected {what}, but received: {}", describe(value)))
    }
}

pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// Short rendering of a value for error messages.
fn describe(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() > 64 {
        let truncated: String = text.chars().take(61).collect();
        format!("{truncated}...")
    } else {
        text
    }
}

/// Joins a parent path and a child key or index.
pub fn child_path<K: std::fmt::Display>(parent: &str, key: K) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Read-only view of a JSON object with its path for diagnostics.
pub struct ObjectView<'a> {
    map: &'a Map<String, Value>,
    path: &'a str,
}

impl<'a> ObjectView<'a> {
    pub fn new(value: &'a Value, path: &'a str) -> SchemaResult<Self> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => Err(SchemaError::expected(path, "an object", other)),
        }
    }

    pub fn path_of(&self, key: &str) -> String {
        child_path(self.path, key)
    }

    /// Checks a field that must be present.
    pub fn required<T>(
        &self,
        key: &str,
        check: impl FnOnce(&Value, &str) -> SchemaResult<T>,
    ) -> SchemaResult<T> {
        let path = self.path_of(key);
        match self.map.get(key) {
            Some(value) => check(value, &path),
            None => Err(SchemaError::new(path, "Expected a value, but received: undefined")),
        }
    }

    /// Checks a field that may be absent. Absent gives `None`.
    pub fn optional<T>(
        &self,
        key: &str,
        check: impl FnOnce(&Value, &str) -> SchemaResult<T>,
    ) -> SchemaResult<Option<T>> {
        match self.map.get(key) {
            Some(value) => check(value, &self.path_of(key)).map(Some),
            None => Ok(None),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }
}

/// Accepts integers within the safe range, including integral floats.
pub fn safe_integer(value: &Value, path: &str) -> SchemaResult<i64> {
    let number = match value {
        Value::Number(number) => number,
        other => return Err(SchemaError::expected(path, "an integer", other)),
    };
    let integer = if let Some(i) = number.as_i64() {
        Some(i)
    } else if number.as_u64().is_some() {
        None
    } else {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER as f64)
            .map(|f| f as i64)
    };
    match integer {
        Some(i) if i.unsigned_abs() <= MAX_SAFE_INTEGER as u64 => Ok(i),
        _ => Err(SchemaError::expected(path, "a safe integer", value)),
    }
}

/// A safe integer greater than or equal to `min`.
pub fn integer_at_least(value: &Value, path: &str, min: u64) -> SchemaResult<u64> {
    let i = safe_integer(value, path)?;
    if i < 0 || (i as u64) < min {
        return Err(SchemaError::new(
            path,
            format!("Expected a number greater than or equal to {min} but received `{i}`"),
        ));
    }
    Ok(i as u64)
}

pub fn string(value: &Value, path: &str) -> SchemaResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(SchemaError::expected(path, "a string", other)),
    }
}

pub fn nonempty_string(value: &Value, path: &str) -> SchemaResult<String> {
    let s = string(value, path)?;
    if s.is_empty() {
        return Err(SchemaError::new(path, "Expected a nonempty string but received an empty one"));
    }
    Ok(s)
}

/// Only the literal `true` is accepted.
pub fn literal_true(value: &Value, path: &str) -> SchemaResult<bool> {
    match value {
        Value::Bool(true) => Ok(true),
        other => Err(SchemaError::expected(path, "the literal `true`", other)),
    }
}

pub fn array<T>(
    value: &Value,
    path: &str,
    mut item: impl FnMut(&Value, &str) -> SchemaResult<T>,
) -> SchemaResult<Vec<T>> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(SchemaError::expected(path, "an array", other)),
    };
    items
        .iter()
        .enumerate()
        .map(|(index, element)| item(element, &child_path(path, index)))
        .collect()
}

pub fn nonempty_array<T>(
    value: &Value,
    path: &str,
    item: impl FnMut(&Value, &str) -> SchemaResult<T>,
) -> SchemaResult<Vec<T>> {
    if let Value::Array(items) = value {
        if items.is_empty() {
            return Err(SchemaError::new(path, "Expected a nonempty array but received an empty one"));
        }
    }
    array(value, path, item)
}

pub fn string_array(value: &Value, path: &str) -> SchemaResult<Vec<String>> {
    array(value, path, string)
}

/// A slot that is either the `0` sentinel (no metadata) or an object.
pub fn sentinel_or<T>(
    value: &Value,
    path: &str,
    object: impl FnOnce(&Value, &str) -> SchemaResult<T>,
) -> SchemaResult<Option<T>> {
    match value {
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        Value::Object(_) => object(value, path).map(Some),
        other => Err(SchemaError::expected(path, "0 or a metadata object", other)),
    }
}
