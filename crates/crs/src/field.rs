//! The CRS field record.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::allow_list::AllowList;
use crate::error::{CrsError, CrsResult};
use crate::value::FieldValue;

/// One recognized CRS search parameter and its metadata.
///
/// Some parameters carry "meta data" such as a description or a translation
/// key. Records are keyed by `name`, which always comes from the allow-list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrsField {
    name: String,
    value: FieldValue,
    meta: Option<Value>,
}

impl CrsField {
    /// Creates a record for a name the caller has already checked.
    pub(crate) fn new(name: impl Into<String>, value: FieldValue) -> Self {
        Self {
            name: name.into(),
            value,
            meta: None,
        }
    }

    /// Creates a record after checking `name` against `allow_list`.
    pub fn recognized(
        allow_list: &AllowList,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> CrsResult<Self> {
        let name = name.into();
        if !allow_list.recognizes(&name) {
            return Err(CrsError::UnknownField { name });
        }
        Ok(Self::new(name, value.into()))
    }

    /// Creates a record from a `{name, value, meta}` map.
    ///
    /// A missing `value` reads as null. Blank metadata is ignored.
    pub fn with_map(map: &Map<String, Value>, allow_list: &AllowList) -> CrsResult<Self> {
        let name = map
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| CrsError::MissingField {
                field: "name".to_string(),
            })?;
        let value = map.get("value").map(FieldValue::from_json).unwrap_or_default();

        let mut field = Self::recognized(allow_list, name, value)?;
        if let Some(meta) = map.get("meta").filter(|meta| !is_blank_json(meta)) {
            field.set_meta(meta.clone());
        }
        Ok(field)
    }

    /// Creates a record from its JSON representation.
    pub fn with_json(json: &str, allow_list: &AllowList) -> CrsResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(CrsError::invalid_input)?;
        match value {
            Value::Object(map) => Self::with_map(&map, allow_list),
            other => Err(CrsError::invalid_input(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field value.
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Returns the attached metadata.
    pub fn meta(&self) -> Option<&Value> {
        self.meta.as_ref()
    }

    /// Returns `true` if the value is null or an empty string.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Attaches metadata to the record.
    pub fn set_meta(&mut self, meta: impl Into<Value>) -> &mut Self {
        self.meta = Some(meta.into());
        self
    }

    pub(crate) fn set_value(&mut self, value: FieldValue) {
        self.value = value;
    }

    /// Returns the `{name, value, meta}` map representation.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(self.name.clone()));
        map.insert("value".to_string(), self.value.to_json_value());
        map.insert(
            "meta".to_string(),
            self.meta.clone().unwrap_or(Value::Null),
        );
        map
    }

    /// Returns the JSON representation.
    pub fn to_json(&self) -> String {
        Value::Object(self.to_map()).to_string()
    }
}

impl fmt::Display for CrsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

fn is_blank_json(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
