//! Lenient JSON helpers.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::SupportResult;

static BARE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([{,]+)(\s*)([^"]+?)\s*:"#).expect("bare key pattern is a valid regex")
});

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\}$").expect("trailing comma pattern is a valid regex"));

/// Returns `true` if `text` is valid JSON.
pub fn is_json(text: &str) -> bool {
    serde_json::from_str::<Value>(text).is_ok()
}

/// Decodes hand-written JSON.
///
/// Line breaks are removed, bare object keys are quoted and a trailing comma
/// before the final `}` is dropped before decoding.
///
/// ```
/// use ors_support::common::json_decode_nice;
/// use serde_json::json;
///
/// let value = json_decode_nice("{epc: 2,\n ka1: \"5\",}").unwrap();
/// assert_eq!(value, json!({"epc": 2, "ka1": "5"}));
/// ```
pub fn json_decode_nice(text: &str) -> SupportResult<Value> {
    let text = text.replace(['\n', '\r'], "");
    let text = BARE_KEY.replace_all(&text, r#"${1}"${3}":"#);
    let text = TRAILING_COMMA.replace(&text, "}");
    Ok(serde_json::from_str(&text)?)
}

/// Wraps `value` in a list unless it already is a non-empty list.
///
/// Lets callers iterate CRS responses that return a bare object for a
/// single result and a list for several.
pub fn pad_zero_array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) if !items.is_empty() => items,
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_json() {
        assert!(is_json(r#"{"a": 1}"#));
        assert!(is_json("[1, 2]"));
        assert!(is_json("\"text\""));
        assert!(!is_json("{a: 1}"));
        assert!(!is_json(""));
    }

    #[test]
    fn test_json_decode_nice_quoted_keys_untouched() {
        let value = json_decode_nice(r#"{"a": 1, "b": "x"}"#).unwrap();
        assert_eq!(value, json!({"a": 1, "b": "x"}));
    }

    #[test]
    fn test_json_decode_nice_bare_keys() {
        let value = json_decode_nice("{ id: 7, title : \"Hotels\" }").unwrap();
        assert_eq!(value, json!({"id": 7, "title": "Hotels"}));
    }

    #[test]
    fn test_json_decode_nice_invalid() {
        assert!(json_decode_nice("{id: }").is_err());
    }

    #[test]
    fn test_pad_zero_array() {
        assert_eq!(pad_zero_array(json!([1, 2])), vec![json!(1), json!(2)]);
        assert_eq!(pad_zero_array(json!({"id": 1})), vec![json!({"id": 1})]);
        assert_eq!(pad_zero_array(json!([])), vec![json!([])]);
        assert_eq!(pad_zero_array(json!("x")), vec![json!("x")]);
    }
}
