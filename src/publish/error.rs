//! Publish failures and their HTTP statuses.

use thiserror::Error;

/// Content store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The stored version moved since it was read.
    #[error("`{path}` was changed by someone else, reload and try again")]
    Conflict { path: String },

    #[error("invalid store path `{0}`")]
    InvalidPath(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub const fn status(&self) -> u16 {
        match self {
            Self::Conflict { .. } => 409,
            Self::InvalidPath(_) => 400,
            Self::Io(_) => 502,
        }
    }
}

#[derive(Debug, Error)]
pub enum PublishError {
    /// Wrong password or locked out; carries the user-facing reason.
    #[error("{0}")]
    Unauthorized(String),

    #[error("Missing required fields")]
    MissingFields,

    #[error("{message}")]
    UpstreamStoreError { status: u16, message: String },

    #[error("Publishing is not configured: {0}")]
    ConfigurationMissing(&'static str),
}

impl PublishError {
    pub const fn status(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::MissingFields => 400,
            Self::UpstreamStoreError { status, .. } => *status,
            Self::ConfigurationMissing(_) => 500,
        }
    }
}

impl From<StoreError> for PublishError {
    fn from(err: StoreError) -> Self {
        Self::UpstreamStoreError {
            status: err.status(),
            message: err.to_string(),
        }
    }
}
