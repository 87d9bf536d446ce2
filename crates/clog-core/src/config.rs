use crate::error::{ClogError, Result};
use crate::message::{CONTENT_REF_KEY, ID_KEY};
use serde::{Deserialize, Serialize};

/// Which keys each pipeline stage acts on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Top-level attribute dropped before anything else runs.
    pub top_level_drop: Option<String>,
    pub redaction: RedactionConfig,
    /// Attribute names removed at every depth, after deduplication.
    pub prune_keys: Vec<String>,
    pub dedup: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactionConfig {
    pub key: String,
    pub marker: String,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            top_level_drop: Some("chatStart".into()),
            redaction: RedactionConfig::default(),
            prune_keys: vec!["id".into(), "sessionId".into()],
            dedup: true,
        }
    }
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            key: "imageUrl".into(),
            marker: "[removed]".into(),
        }
    }
}

impl OptimizerConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if matches!(&self.top_level_drop, Some(k) if k.is_empty()) {
            return Err(ClogError::InvalidConfig("top_level_drop is empty".into()));
        }
        if self.redaction.key.is_empty() {
            return Err(ClogError::InvalidConfig("redaction key is empty".into()));
        }
        if self.prune_keys.iter().any(|k| k.is_empty()) {
            return Err(ClogError::InvalidConfig("prune_keys contains an empty key".into()));
        }
        for reserved in [ID_KEY, CONTENT_REF_KEY] {
            if self.dedup && self.prune_keys.iter().any(|k| k == reserved) {
                tracing::warn!(key = reserved, "prune set removes a deduplication key; references will not resolve");
            }
        }
        Ok(())
    }
}
