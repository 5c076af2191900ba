use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::FoodId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// A backend call failed at the transport or server level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("request to {path} failed: {reason}")]
    Transport { path: String, reason: String },

    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("failed to decode response from {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("invalid backend URL for {path}: {reason}")]
    Url { path: String, reason: String },
}

impl BackendError {
    /// The request path the failure belongs to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Transport { path, .. }
            | Self::Status { path, .. }
            | Self::Decode { path, .. }
            | Self::Url { path, .. } => path,
        }
    }
}

/// The order could not be placed. The draft it was built from is untouched
/// and can be submitted again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("order submission failed: {source}")]
pub struct SubmissionError {
    #[source]
    source: BackendError,
}

impl SubmissionError {
    #[must_use]
    pub fn new(source: BackendError) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn backend(&self) -> &BackendError {
        &self.source
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("menu item {food_id} not found")]
    NotFound { food_id: FoodId },

    #[error("backend unavailable: {0}")]
    BackendUnavailable(#[from] BackendError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
