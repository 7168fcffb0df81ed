//! Explicit conversions from submitted JSON values to typed fields.
//!
//! Each function returns `None` when the value cannot be converted; none of
//! them substitute a fallback value.

use serde_json::{Number, Value};

/// Parse an issue number from a JSON number or a numeric string.
///
/// Numbers are kept as written but must fit a finite `f64`, so literals
/// such as `1e400` are rejected rather than stored.
pub fn parse_issue_number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).map(|_| n.clone()),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            if let Ok(n) = s.parse::<i64>() {
                return Some(Number::from(n));
            }
            s.parse::<f64>().ok().and_then(Number::from_f64)
        }
        _ => None,
    }
}

/// Render a scalar as text. Arrays, objects and null are rejected.
pub fn parse_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse a tag list; every element must be a string.
pub fn parse_tags(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

/// `null` and `""` count as "not supplied"
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
