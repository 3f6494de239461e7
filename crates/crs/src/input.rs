//! Raw search input.
//!
//! Callers declare what kind of input they hand over instead of having it
//! sniffed: an ordered list of pairs, a URL-encoded query string or a
//! serialized JSON object.

use serde_json::Value;

use crate::error::{CrsError, CrsResult};
use crate::value::FieldValue;

/// Raw search parameters in one of the accepted input kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchInput {
    /// Ordered key/value pairs.
    Pairs(Vec<(String, FieldValue)>),
    /// A URL-encoded query string such as `epc=2&fct_air=1`.
    Query(String),
    /// A serialized JSON object.
    Json(String),
}

impl SearchInput {
    /// Builds pair input from string keys and values.
    pub fn pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        SearchInput::Pairs(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Decodes the input into ordered pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CrsError::InvalidInputFormat`] when JSON input is malformed
    /// or is not an object (an empty JSON string and `null` read as empty).
    pub fn into_pairs(self) -> CrsResult<Vec<(String, FieldValue)>> {
        match self {
            SearchInput::Pairs(pairs) => Ok(pairs),
            SearchInput::Query(query) => Ok(parse_query(&query)),
            SearchInput::Json(json) => parse_json(&json),
        }
    }
}

impl From<Vec<(String, FieldValue)>> for SearchInput {
    fn from(pairs: Vec<(String, FieldValue)>) -> Self {
        SearchInput::Pairs(pairs)
    }
}

fn parse_query(query: &str) -> Vec<(String, FieldValue)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), FieldValue::Text(value.into_owned())))
        .collect()
}

fn parse_json(json: &str) -> CrsResult<Vec<(String, FieldValue)>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(json).map_err(CrsError::invalid_input)?;
    match value {
        Value::Object(map) => Ok(map
            .iter()
            .map(|(key, value)| (key.clone(), FieldValue::from_json(value)))
            .collect()),
        Value::Null => Ok(Vec::new()),
        _ => Err(CrsError::invalid_input("expected a JSON object")),
    }
}
