//! Helpers for JSON object maps.
//!
//! All functions keep the input order of the surviving entries.

use serde_json::{Map, Value};

/// Returns the entries whose key starts with `prefix`, with `prefix`
/// removed from the key.
///
/// ```
/// use ors_support::common::map_prefixed;
/// use serde_json::json;
///
/// let map = json!({"data_id": 1, "data_name": "x", "id": 2});
/// let data = map_prefixed(map.as_object().unwrap(), "data_");
/// assert_eq!(serde_json::Value::Object(data), json!({"id": 1, "name": "x"}));
/// ```
pub fn map_prefixed(map: &Map<String, Value>, prefix: &str) -> Map<String, Value> {
    map.iter()
        .filter(|(key, _)| key.starts_with(prefix))
        .map(|(key, value)| (key.replace(prefix, ""), value.clone()))
        .collect()
}

/// Replaces every `-` in the keys with `_`.
pub fn dash_to_underscore(map: &Map<String, Value>) -> Map<String, Value> {
    rename_keys(map, '-', '_')
}

/// Replaces every `_` in the keys with `-`.
pub fn underscore_to_dash(map: &Map<String, Value>) -> Map<String, Value> {
    rename_keys(map, '_', '-')
}

fn rename_keys(map: &Map<String, Value>, from: char, to: char) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.replace(from, &to.to_string()), value.clone()))
        .collect()
}

/// Returns only the entries whose key is listed in `keys`.
pub fn array_only<S: AsRef<str>>(map: &Map<String, Value>, keys: &[S]) -> Map<String, Value> {
    map.iter()
        .filter(|(key, _)| keys.iter().any(|k| k.as_ref() == key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_map_prefixed() {
        let map = object(json!({"sub_ai": "1", "sub_hb": "1", "epc": "2"}));
        let subs = map_prefixed(&map, "sub_");
        assert_eq!(Value::Object(subs), json!({"ai": "1", "hb": "1"}));
    }

    #[test]
    fn test_map_prefixed_empty_prefix() {
        let map = object(json!({"a": 1, "b": 2}));
        assert_eq!(map_prefixed(&map, ""), map);
    }

    #[test]
    fn test_dash_underscore() {
        let map = object(json!({"check-in": "05.03.2024", "room_type": "dbl"}));
        assert_eq!(
            Value::Object(dash_to_underscore(&map)),
            json!({"check_in": "05.03.2024", "room_type": "dbl"})
        );
        assert_eq!(
            Value::Object(underscore_to_dash(&map)),
            json!({"check-in": "05.03.2024", "room-type": "dbl"})
        );
    }

    #[test]
    fn test_array_only_keeps_order() {
        let map = object(json!({"epc": "2", "utm": "x", "ka1": "5"}));
        let only = array_only(&map, &["ka1", "epc"]);
        let keys: Vec<_> = only.keys().cloned().collect();
        assert_eq!(keys, vec!["epc", "ka1"]);
    }
}
