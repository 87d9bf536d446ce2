//! Stage 3: Dedup. Collapse repeated system/assistant content into references.
//!
//! The first message carrying a given content (per role) keeps its payload
//! and gains an `_id`; every later copy becomes
//! `{ "role": ..., "contentRef": <that id> }`. Array and object content is
//! never considered a repeat, so each such message gets a fresh `_id`.

use clog_core::message::{content_of, ContentKey};
use clog_core::{Role, CONTENT_REF_KEY, ID_KEY, MESSAGES_KEY, ROLE_KEY};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Content → identifier map for one role.
#[derive(Debug)]
pub struct ContentRegistry {
    prefix: &'static str,
    ids: HashMap<ContentKey, String>,
    next: usize,
}

/// Outcome of registering a content key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    First(String),
    Seen(String),
}

impl ContentRegistry {
    pub fn new(role: Role) -> Self {
        Self {
            prefix: role.id_prefix(),
            ids: HashMap::new(),
            next: 0,
        }
    }

    pub fn register(&mut self, key: ContentKey) -> Registration {
        if key == ContentKey::Unique {
            return Registration::First(self.next_id());
        }
        if let Some(id) = self.ids.get(&key) {
            return Registration::Seen(id.clone());
        }
        let id = self.next_id();
        self.ids.insert(key, id.clone());
        Registration::First(id)
    }

    fn next_id(&mut self) -> String {
        let id = format!("{}_{}", self.prefix, self.next);
        self.next += 1;
        id
    }

    /// Number of identifiers handed out so far.
    pub fn len(&self) -> usize {
        self.next
    }

    pub fn is_empty(&self) -> bool {
        self.next == 0
    }
}

/// One independent registry per deduplicating role.
#[derive(Debug)]
pub struct RoleRegistries {
    system: ContentRegistry,
    assistant: ContentRegistry,
}

impl RoleRegistries {
    pub fn new() -> Self {
        Self {
            system: ContentRegistry::new(Role::System),
            assistant: ContentRegistry::new(Role::Assistant),
        }
    }

    pub fn for_role(&mut self, role: Role) -> &mut ContentRegistry {
        match role {
            Role::System => &mut self.system,
            Role::Assistant => &mut self.assistant,
        }
    }
}

impl Default for RoleRegistries {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts from one deduplication pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DedupStats {
    pub first_occurrences: usize,
    pub references: usize,
    pub passed_through: usize,
}

/// Rewrite a single message against the registries.
pub fn dedup_message(msg: &Value, registries: &mut RoleRegistries, stats: &mut DedupStats) -> Value {
    let (Some(role), Some(content), Value::Object(fields)) = (Role::of(msg), content_of(msg), msg) else {
        stats.passed_through += 1;
        return msg.clone();
    };

    match registries.for_role(role).register(content) {
        Registration::Seen(id) => {
            stats.references += 1;
            let mut reference = Map::new();
            reference.insert(ROLE_KEY.into(), Value::String(role.as_str().into()));
            reference.insert(CONTENT_REF_KEY.into(), Value::String(id));
            Value::Object(reference)
        }
        Registration::First(id) => {
            stats.first_occurrences += 1;
            let mut first = fields.clone();
            first.insert(ID_KEY.into(), Value::String(id));
            Value::Object(first)
        }
    }
}

/// Deduplicate the `messages` array of a document.
pub fn deduplicate(doc: &Value) -> Value {
    deduplicate_with_stats(doc).0
}

/// Deduplicate and report what happened. Documents without an array-valued
/// `messages` attribute come back unchanged.
pub fn deduplicate_with_stats(doc: &Value) -> (Value, DedupStats) {
    let mut stats = DedupStats::default();
    let (Value::Object(map), Some(Value::Array(messages))) = (doc, doc.get(MESSAGES_KEY)) else {
        return (doc.clone(), stats);
    };

    let mut registries = RoleRegistries::new();
    let messages: Vec<Value> = messages
        .iter()
        .map(|m| dedup_message(m, &mut registries, &mut stats))
        .collect();

    // Replacing an existing key keeps its position.
    let mut out = map.clone();
    out.insert(MESSAGES_KEY.into(), Value::Array(messages));
    (Value::Object(out), stats)
}
