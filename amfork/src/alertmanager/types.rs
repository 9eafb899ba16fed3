//! Records exchanged with Alertmanager engines

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Label set attached to alerts, silences and groups
pub type LabelSet = BTreeMap<String, String>;

/// Persisted Alertmanager configuration as stored by the internal engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertConfiguration {
    pub id: i64,
    pub org_id: i64,

    /// Raw configuration document (JSON text)
    pub alertmanager_configuration: String,

    /// Hash of `alertmanager_configuration`, used by the remote engine to
    /// decide whether an upload is needed
    pub configuration_hash: String,

    pub configuration_version: String,

    /// Unix timestamp (seconds) of when the configuration was stored
    pub created_at: i64,

    /// True if this is the default configuration generated by the engine
    #[serde(rename = "default")]
    pub is_default: bool,
}

/// Configuration document supplied by a user through the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostableUserConfig {
    #[serde(default)]
    pub template_files: HashMap<String, String>,

    #[serde(default)]
    pub alertmanager_config: Value,
}

/// Engine status as reported by `GET /status`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GettableStatus {
    /// Cluster status ("ready", "settling", "disabled")
    pub cluster: String,

    /// Running configuration
    pub config: Value,

    #[serde(default)]
    pub version_info: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matcher {
    pub name: String,
    pub value: String,
    pub is_regex: bool,
    #[serde(default = "default_is_equal")]
    pub is_equal: bool,
}

fn default_is_equal() -> bool {
    true
}

impl Matcher {
    /// Exact equality matcher (`name="value"`)
    pub fn equal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_regex: false,
            is_equal: true,
        }
    }
}

/// Silence as submitted for creation or update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostableSilence {
    /// Present when updating an existing silence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub matchers: Vec<Matcher>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_by: String,
    pub comment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SilenceState {
    Active,
    Pending,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GettableSilence {
    pub id: String,
    pub status: SilenceState,
    pub updated_at: DateTime<Utc>,
    pub matchers: Vec<Matcher>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_by: String,
    pub comment: String,
}

pub type GettableSilences = Vec<GettableSilence>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostableAlert {
    pub labels: LabelSet,
    #[serde(default)]
    pub annotations: LabelSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub generator_url: String,
}

pub type PostableAlerts = Vec<PostableAlert>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    Unprocessed,
    Active,
    Suppressed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStatus {
    pub state: AlertState,
    #[serde(default)]
    pub silenced_by: Vec<String>,
    #[serde(default)]
    pub inhibited_by: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GettableAlert {
    pub fingerprint: String,
    pub labels: LabelSet,
    pub annotations: LabelSet,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: AlertStatus,
    pub receivers: Vec<String>,
}

pub type GettableAlerts = Vec<GettableAlert>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertGroup {
    pub labels: LabelSet,
    pub receiver: String,
    pub alerts: GettableAlerts,
}

pub type AlertGroups = Vec<AlertGroup>;

/// Parameters shared by alert and alert-group queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertQuery {
    pub active: bool,
    pub silenced: bool,
    pub inhibited: bool,
    /// Matchers in `name="value"` form
    pub filter: Vec<String>,
    /// Regex restricting results to matching receivers; empty matches all
    pub receiver: String,
}

impl Default for AlertQuery {
    fn default() -> Self {
        Self {
            active: true,
            silenced: true,
            inhibited: true,
            filter: Vec::new(),
            receiver: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub name: String,
    pub send_resolved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_notify_attempt: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_notify_attempt_error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receiver {
    pub name: String,
    pub active: bool,
    pub integrations: Vec<Integration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReceiversConfigBodyParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<PostableAlert>,
    /// Receiver definitions under test, as raw API documents
    pub receivers: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestIntegrationResult {
    pub name: String,
    pub uid: String,
    pub status: String,
    #[serde(default)]
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestReceiverResult {
    pub name: String,
    pub configs: Vec<TestIntegrationResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReceiversResult {
    pub alert: PostableAlert,
    pub receivers: Vec<TestReceiverResult>,
    pub notified_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestTemplatesConfigBodyParams {
    #[serde(default)]
    pub alerts: PostableAlerts,
    pub template: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestTemplatesResult {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestTemplatesErrorResult {
    pub name: String,
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestTemplatesResults {
    pub results: Vec<TestTemplatesResult>,
    pub errors: Vec<TestTemplatesErrorResult>,
}
