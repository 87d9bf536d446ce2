use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClogError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClogError>;
