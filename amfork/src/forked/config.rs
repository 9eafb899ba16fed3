//! Forked Alertmanager configuration

use std::time::Duration;

use thiserror::Error;
use tracing::{Span, debug, info_span};

use crate::config::ForkSettings;

/// Errors raised while constructing a forked Alertmanager
#[derive(Debug, Error)]
pub enum ForkError {
    #[error("logger cannot be empty")]
    MissingLogger,
}

/// Configuration for the remote secondary forked Alertmanager
#[derive(Debug, Clone)]
pub struct RemoteSecondaryConfig {
    /// How often configuration and state are synchronized to the remote
    /// Alertmanager once it is ready. Zero syncs on every `apply_config`.
    pub sync_interval: Duration,

    /// Span every remote-side log line is emitted under. Required.
    pub logger: Option<Span>,

    /// Send the internal state to the remote Alertmanager one last time
    /// before stopping it
    pub sync_state_on_shutdown: bool,
}

impl Default for RemoteSecondaryConfig {
    fn default() -> Self {
        Self {
            sync_interval: ForkSettings::default().sync_interval(),
            logger: None,
            sync_state_on_shutdown: true,
        }
    }
}

impl RemoteSecondaryConfig {
    /// Build a config from loaded settings
    pub fn from_settings(settings: &ForkSettings, logger: Span) -> Self {
        debug!(?settings, "RemoteSecondaryConfig::from_settings: called");
        Self {
            sync_interval: settings.sync_interval(),
            logger: Some(logger),
            sync_state_on_shutdown: settings.sync_state_on_shutdown,
        }
    }

    /// Check the configuration before any traffic flows
    pub fn validate(&self) -> Result<(), ForkError> {
        if self.logger.is_none() {
            return Err(ForkError::MissingLogger);
        }
        Ok(())
    }
}

/// Span used when the caller has no logging context of its own
pub fn default_logger() -> Span {
    info_span!("forked_alertmanager", mode = "remote_secondary")
}
