//! Shared vocabulary for the chat-log optimizer: configuration, errors,
//! message roles and token estimation.

pub mod config;
pub mod error;
pub mod message;
pub mod tokens;

pub use config::{OptimizerConfig, RedactionConfig};
pub use error::{ClogError, Result};
pub use message::{content_of, ContentKey, Role, CONTENT_KEY, CONTENT_REF_KEY, ID_KEY, MESSAGES_KEY, ROLE_KEY};
pub use tokens::{estimate_tokens, CharRatioEstimator, TokenEstimator};
