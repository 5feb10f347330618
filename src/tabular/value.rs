//! Scalar cell values and their string rendering.

use std::borrow::Cow;
use std::fmt;

/// A single cell in a table.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value
    Null,

    /// Boolean
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// UTF-8 string
    String(String),
}

impl Value {
    /// Check if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the string rendering used for matching.
    ///
    /// Returns `None` for null: a null cell has no rendering and never
    /// matches a filter or a search term.
    pub fn render(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Null => None,
            Value::Bool(true) => Some(Cow::Borrowed("True")),
            Value::Bool(false) => Some(Cow::Borrowed("False")),
            Value::Int(v) => Some(Cow::Owned(v.to_string())),
            Value::Float(v) => Some(Cow::Owned(render_float(*v))),
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        }
    }

    /// Case-insensitive substring test against an already lowercased needle.
    #[inline]
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self.render() {
            Some(text) => text.to_lowercase().contains(needle),
            None => false,
        }
    }

    /// Case-insensitive substring test.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.contains_lowercase(&needle.to_lowercase())
    }

    /// Convert to a JSON scalar. Non-finite floats become null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(v) => serde_json::Value::Bool(*v),
            Value::Int(v) => serde_json::Value::from(*v),
            Value::Float(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

fn render_float(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else if v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Some(text) => f.write_str(&text),
            None => f.write_str("null"),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(v) => Value::Bool(*v),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(v) => Value::Int(v),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s.clone()),
            nested => Value::String(nested.to_string()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_like_a_spreadsheet_reader() {
        assert_eq!(Value::Bool(true).render().as_deref(), Some("True"));
        assert_eq!(Value::Int(-42).render().as_deref(), Some("-42"));
        assert_eq!(Value::Float(3.0).render().as_deref(), Some("3.0"));
        assert_eq!(Value::Float(2.5).render().as_deref(), Some("2.5"));
        assert_eq!(Value::Null.render(), None);
    }

    #[test]
    fn null_never_matches() {
        assert!(!Value::Null.contains_ignore_case(""));
        assert!(!Value::Null.contains_ignore_case("null"));
    }

    #[test]
    fn matching_ignores_case() {
        assert!(Value::from("Engineering").contains_ignore_case("ENG"));
        assert!(Value::Bool(false).contains_ignore_case("fal"));
        assert!(Value::Float(10.0).contains_ignore_case(".0"));
    }

    #[test]
    fn non_finite_floats_serialize_as_null() {
        assert_eq!(Value::Float(f64::NAN).to_json(), serde_json::Value::Null);
        assert_eq!(Value::Int(7).to_json(), serde_json::json!(7));
    }
}
