//! Stage 4: remove identifying attributes at every depth.

use serde_json::Value;

pub fn prune<K: AsRef<str>>(value: &Value, keys: &[K]) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(|v| prune(v, keys)).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(k, _)| !keys.iter().any(|r| r.as_ref() == k.as_str()))
                .map(|(k, v)| (k.clone(), prune(v, keys)))
                .collect(),
        ),
        _ => value.clone(),
    }
}
