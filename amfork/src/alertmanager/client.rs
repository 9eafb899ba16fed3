//! Alertmanager trait definitions

use async_trait::async_trait;

use super::error::Result;
use super::types::{
    AlertConfiguration, AlertGroups, AlertQuery, GettableAlerts, GettableSilence, GettableSilences, GettableStatus,
    PostableAlerts, PostableSilence, PostableUserConfig, Receiver, TestReceiversConfigBodyParams, TestReceiversResult,
    TestTemplatesConfigBodyParams, TestTemplatesResults,
};

/// Capabilities every alerting engine provides, local or remote
///
/// Forked Alertmanagers implement this trait as well, so callers cannot tell
/// a single engine apart from a pair being migrated. Dropping a returned
/// future cancels the call.
#[async_trait]
pub trait Alertmanager: Send + Sync {
    /// Apply a stored configuration
    async fn apply_config(&self, config: &AlertConfiguration) -> Result<()>;

    /// Persist a user-supplied configuration, then apply it
    async fn save_and_apply_config(&self, config: &PostableUserConfig) -> Result<()>;

    /// Persist and apply the engine's default configuration
    async fn save_and_apply_default_config(&self) -> Result<()>;

    fn get_status(&self) -> GettableStatus;

    /// Create (or update, if `silence.id` is set) a silence, returning its id
    async fn create_silence(&self, silence: Option<&PostableSilence>) -> Result<String>;
    async fn delete_silence(&self, id: &str) -> Result<()>;
    async fn get_silence(&self, id: &str) -> Result<GettableSilence>;
    async fn list_silences(&self, filter: &[String]) -> Result<GettableSilences>;

    async fn get_alerts(&self, query: &AlertQuery) -> Result<GettableAlerts>;
    async fn get_alert_groups(&self, query: &AlertQuery) -> Result<AlertGroups>;
    async fn put_alerts(&self, alerts: PostableAlerts) -> Result<()>;

    async fn get_receivers(&self) -> Result<Vec<Receiver>>;
    async fn test_receivers(&self, params: &TestReceiversConfigBodyParams) -> Result<Option<TestReceiversResult>>;
    async fn test_template(&self, params: &TestTemplatesConfigBodyParams) -> Result<Option<TestTemplatesResults>>;

    /// Release process-local resources (expired state files, caches)
    fn clean_up(&self);

    /// Stop the engine and wait for its background work to finish
    async fn stop_and_wait(&self);

    fn ready(&self) -> bool;
}

/// An externally managed Alertmanager that local truth is pushed to
///
/// Both operations are idempotent: the engine compares what it holds with
/// what it is given and only uploads on divergence.
#[async_trait]
pub trait RemoteAlertmanager: Alertmanager {
    /// Upload `config` if it differs from the remote configuration
    async fn compare_and_send_configuration(&self, config: &AlertConfiguration) -> Result<()>;

    /// Upload the local silences and notification log if they differ from the
    /// remote state
    async fn compare_and_send_state(&self) -> Result<()>;
}
