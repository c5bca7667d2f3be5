//! Error types for the store

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("campaign '{0}' not found")]
    CampaignNotFound(String),

    #[error("campaign '{0}' already exists")]
    CampaignExists(String),

    #[error("invalid {kind} name '{name}'")]
    InvalidName { kind: &'static str, name: String },

    #[error(transparent)]
    Generation(#[from] seedscape::core::Error),
}

impl From<seedscape::core::ConfigurationError> for Error {
    fn from(e: seedscape::core::ConfigurationError) -> Self {
        Error::Generation(e.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
