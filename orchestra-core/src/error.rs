use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by [`crate::store::ProjectStore`] and the storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failed: {0}")]
    Storage(String),
    #[error("stored project list is malformed: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode project list: {0}")]
    Encode(#[source] serde_json::Error),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Rejections from the creation form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("project name is required")]
    EmptyName,
    #[error("port '{0}' is not an integer")]
    InvalidPort(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status '{0}' (expected running, review, paused, error or done)")]
pub struct InvalidStatus(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action '{0}' (expected approve, reject, pause, resume, retry or continue)")]
pub struct InvalidAction(pub String);
