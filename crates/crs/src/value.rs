//! Values carried by CRS search fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The value of a CRS field.
///
/// Literal fields carry the request value as text. Grouped fields (allow-list
/// entries of the form `prefix_*`) carry the ordered list of suffixes that
/// were collected under the prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value.
    #[default]
    Null,
    /// A scalar value.
    Text(String),
    /// An ordered sequence of values.
    List(Vec<String>),
}

impl FieldValue {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Converts a decoded JSON value into a field value.
    ///
    /// Numbers keep their decimal rendering, booleans become `"1"` or `""`,
    /// arrays and objects become lists of their stringified elements.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Array(items) => FieldValue::List(items.iter().map(scalar_text).collect()),
            Value::Object(map) => FieldValue::List(map.values().map(scalar_text).collect()),
            scalar => FieldValue::Text(scalar_text(scalar)),
        }
    }

    /// Returns the text when this is a [`FieldValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the items when this is a [`FieldValue::List`].
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` for null or the empty string.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Null) || self.as_text() == Some("")
    }

    /// Returns `true` for values that count as "not provided".
    ///
    /// This is broader than [`is_empty`](Self::is_empty): `"0"` and an empty
    /// list are blank as well. Derived defaults and the search flags use this
    /// check.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(text) => text.is_empty() || text == "0",
            FieldValue::List(items) => items.is_empty(),
        }
    }

    /// Coerces the value to an integer the way a loose numeric cast does.
    ///
    /// Text yields its leading integer (`"100.7"` is 100, `"abc"` is 0), a
    /// non-empty list is 1 and null is 0.
    pub fn to_int(&self) -> i64 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Text(text) => leading_int(text),
            FieldValue::List(items) => i64::from(!items.is_empty()),
        }
    }

    /// Returns the numeric reading of a text value, if it has one.
    ///
    /// Lists and null have no numeric reading.
    pub fn to_number(&self) -> Option<f64> {
        self.as_text().map(leading_number)
    }

    /// Renders the value as a single string, joining lists with `,`.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Text(text) => text.clone(),
            FieldValue::List(items) => items.join(","),
        }
    }

    /// Converts the value back to JSON.
    pub fn to_json_value(&self) -> Value {
        match self {
            FieldValue::Null => Value::Null,
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        nested => nested.to_string(),
    }
}

/// Parses the leading integer of a string, ignoring leading whitespace.
///
/// Digit runs outside the `i64` range saturate.
pub(crate) fn leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0;
    }
    match digits[..end].parse::<i64>() {
        Ok(n) => sign * n,
        Err(_) if sign < 0 => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// Parses the leading decimal number of a string, ignoring leading whitespace.
pub(crate) fn leading_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end = 1;
    }
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    text[..end].parse::<f64>().unwrap_or(0.0)
}
