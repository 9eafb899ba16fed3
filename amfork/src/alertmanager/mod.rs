//! Alertmanager capability contract
//!
//! The traits every alerting engine implements and the records they exchange.

pub mod client;
mod error;
mod types;

pub use client::{Alertmanager, RemoteAlertmanager};
pub use error::{AlertmanagerError, Result};
pub use types::{
    AlertConfiguration, AlertGroup, AlertGroups, AlertQuery, AlertState, AlertStatus, GettableAlert, GettableAlerts,
    GettableSilence, GettableSilences, GettableStatus, Integration, LabelSet, Matcher, PostableAlert, PostableAlerts,
    PostableSilence, PostableUserConfig, Receiver, SilenceState, TestIntegrationResult, TestReceiverResult,
    TestReceiversConfigBodyParams, TestReceiversResult, TestTemplatesConfigBodyParams, TestTemplatesErrorResult,
    TestTemplatesResult, TestTemplatesResults,
};
