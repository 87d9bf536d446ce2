//! Stage 1: drop a single top-level attribute.

use serde_json::{Map, Value};

/// Copy of `doc` without the top-level `key`. Does not recurse.
pub fn strip_top_level(doc: &Value, key: &str) -> Value {
    match doc {
        Value::Object(map) if map.contains_key(key) => Value::Object(
            map.iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Map<String, Value>>(),
        ),
        _ => doc.clone(),
    }
}
