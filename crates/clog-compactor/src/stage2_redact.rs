//! Stage 2: redaction. Replace sensitive string payloads with a marker.

use clog_core::RedactionConfig;
use serde_json::Value;

/// Recursively replace string values stored under `key` with `marker`.
///
/// Non-string values under `key` are left as they are and recursed into.
pub fn redact(value: &Value, key: &str, marker: &str) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(|v| redact(v, key, marker)).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| {
                    let v = if k == key && v.is_string() {
                        Value::String(marker.to_string())
                    } else {
                        redact(v, key, marker)
                    };
                    (k.clone(), v)
                })
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Redact with the default `imageUrl` / `[removed]` pair.
pub fn redact_default(value: &Value) -> Value {
    let cfg = RedactionConfig::default();
    redact(value, &cfg.key, &cfg.marker)
}
