//! amfork - Forked Alertmanager coordinator
//!
//! Lets a service move its alert notifications from a local Alertmanager to
//! an externally managed one without downtime. Callers talk to one
//! [`Alertmanager`]; the forked implementations decide which engine serves
//! each call and keep the remote engine in sync while it is not yet the
//! source of truth.
//!
//! # Modules
//!
//! - [`alertmanager`] - Engine traits, records and errors
//! - [`forked`] - Remote secondary and remote primary coordinators
//! - [`config`] - Settings and loading
//!
//! # Example
//!
//! ```ignore
//! use amfork::{ForkSettings, RemoteSecondaryConfig, RemoteSecondaryForkedAlertmanager, default_logger};
//!
//! let settings = ForkSettings::load(None)?;
//! let cfg = RemoteSecondaryConfig::from_settings(&settings, default_logger());
//! let forked = RemoteSecondaryForkedAlertmanager::new(cfg, internal, remote)?;
//! forked.apply_config(&stored_config).await?;
//! ```

pub mod alertmanager;
pub mod config;
pub mod forked;

// Re-export commonly used types
pub use alertmanager::{Alertmanager, AlertmanagerError, RemoteAlertmanager};
pub use config::ForkSettings;
pub use forked::{
    ForkError, RemotePrimaryForkedAlertmanager, RemoteSecondaryConfig, RemoteSecondaryForkedAlertmanager,
    default_logger,
};
