//! Message roles and the reserved attribute names of a conversation log.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Document attribute holding the ordered message sequence.
pub const MESSAGES_KEY: &str = "messages";
pub const ROLE_KEY: &str = "role";
pub const CONTENT_KEY: &str = "content";
/// Identifier attached to the first occurrence of a deduplicated message.
pub const ID_KEY: &str = "_id";
/// Back-reference carried by a repeated message.
pub const CONTENT_REF_KEY: &str = "contentRef";

/// Roles whose content takes part in deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    Assistant,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "system" => Some(Self::System),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Assistant => "assistant",
        }
    }

    /// Prefix of the identifiers handed out for this role.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::System => "sys",
            Self::Assistant => "asst",
        }
    }

    /// Role of a message object, if it is one that deduplicates.
    pub fn of(message: &Value) -> Option<Self> {
        message.get(ROLE_KEY).and_then(Value::as_str).and_then(Self::parse)
    }
}

/// Registry key for a message's content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentKey {
    /// Non-empty string content.
    Text(String),
    /// Non-zero number or `true`, keyed by its canonical text.
    Scalar(String),
    /// Array or object content. Never matched against earlier content.
    Unique,
}

/// Key of a message's content, if it is present and truthy.
///
/// `""`, `0`, `false` and `null` count as absent.
pub fn content_of(message: &Value) -> Option<ContentKey> {
    match message.get(CONTENT_KEY)? {
        Value::String(s) if !s.is_empty() => Some(ContentKey::Text(s.clone())),
        Value::Number(n) => n
            .as_f64()
            .filter(|f| *f != 0.0)
            .map(|f| ContentKey::Scalar(f.to_string())),
        Value::Bool(true) => Some(ContentKey::Scalar("true".into())),
        Value::Array(_) | Value::Object(_) => Some(ContentKey::Unique),
        _ => None,
    }
}
