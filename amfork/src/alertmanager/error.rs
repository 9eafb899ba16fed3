//! Alertmanager error types

use std::time::Duration;
use thiserror::Error;

/// Errors reported by an Alertmanager engine
///
/// Forked Alertmanagers hand these back untouched, so callers can match on
/// the variant the authoritative engine produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertmanagerError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Alertmanager is not ready: {0}")]
    Unavailable(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AlertmanagerError {
    /// Shorthand for a missing silence
    pub fn silence_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "silence",
            id: id.into(),
        }
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, AlertmanagerError::NotFound { .. })
    }

    /// Check if retrying the same call could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            AlertmanagerError::Unavailable(_) => true,
            AlertmanagerError::Timeout(_) => true,
            AlertmanagerError::Api { status, .. } => *status >= 500 || *status == 429,
            AlertmanagerError::NotFound { .. } => false,
            AlertmanagerError::InvalidConfig(_) => false,
            AlertmanagerError::InvalidRequest(_) => false,
            AlertmanagerError::Internal(_) => false,
        }
    }
}

/// Result alias used throughout the Alertmanager contract
pub type Result<T> = std::result::Result<T, AlertmanagerError>;
