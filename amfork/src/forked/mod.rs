//! Forked Alertmanagers for migrating to a remote Alertmanager
//!
//! Both variants wrap an internal and a remote Alertmanager and expose them
//! as a single [`Alertmanager`](crate::alertmanager::Alertmanager):
//! - **Remote secondary:** internal is authoritative, remote is warmed up and
//!   synced on an interval
//! - **Remote primary:** remote is authoritative, internal keeps housekeeping

mod config;
mod primary;
mod secondary;

pub use config::{ForkError, RemoteSecondaryConfig, default_logger};
pub use primary::RemotePrimaryForkedAlertmanager;
pub use secondary::RemoteSecondaryForkedAlertmanager;
