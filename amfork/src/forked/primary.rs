//! Remote primary mode: the remote Alertmanager is authoritative

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::alertmanager::{
    AlertConfiguration, AlertGroups, AlertQuery, Alertmanager, GettableAlerts, GettableSilence, GettableSilences,
    GettableStatus, PostableAlerts, PostableSilence, PostableUserConfig, Receiver, RemoteAlertmanager, Result,
    TestReceiversConfigBodyParams, TestReceiversResult, TestTemplatesConfigBodyParams, TestTemplatesResults,
};

/// Serves every request from the remote Alertmanager
///
/// The internal Alertmanager only keeps process-local housekeeping.
pub struct RemotePrimaryForkedAlertmanager {
    internal: Arc<dyn Alertmanager>,
    remote: Arc<dyn RemoteAlertmanager>,
}

impl RemotePrimaryForkedAlertmanager {
    pub fn new(internal: Arc<dyn Alertmanager>, remote: Arc<dyn RemoteAlertmanager>) -> Self {
        debug!("RemotePrimaryForkedAlertmanager::new: called");
        Self { internal, remote }
    }
}

#[async_trait]
impl Alertmanager for RemotePrimaryForkedAlertmanager {
    async fn apply_config(&self, config: &AlertConfiguration) -> Result<()> {
        debug!("RemotePrimaryForkedAlertmanager::apply_config: called");
        self.remote.apply_config(config).await
    }

    async fn save_and_apply_config(&self, config: &PostableUserConfig) -> Result<()> {
        debug!("RemotePrimaryForkedAlertmanager::save_and_apply_config: called");
        self.remote.save_and_apply_config(config).await
    }

    async fn save_and_apply_default_config(&self) -> Result<()> {
        debug!("RemotePrimaryForkedAlertmanager::save_and_apply_default_config: called");
        self.remote.save_and_apply_default_config().await
    }

    fn get_status(&self) -> GettableStatus {
        debug!("RemotePrimaryForkedAlertmanager::get_status: called");
        self.remote.get_status()
    }

    async fn create_silence(&self, silence: Option<&PostableSilence>) -> Result<String> {
        debug!("RemotePrimaryForkedAlertmanager::create_silence: called");
        self.remote.create_silence(silence).await
    }

    async fn delete_silence(&self, id: &str) -> Result<()> {
        debug!("RemotePrimaryForkedAlertmanager::delete_silence: called");
        self.remote.delete_silence(id).await
    }

    async fn get_silence(&self, id: &str) -> Result<GettableSilence> {
        debug!("RemotePrimaryForkedAlertmanager::get_silence: called");
        self.remote.get_silence(id).await
    }

    async fn list_silences(&self, filter: &[String]) -> Result<GettableSilences> {
        debug!("RemotePrimaryForkedAlertmanager::list_silences: called");
        self.remote.list_silences(filter).await
    }

    async fn get_alerts(&self, query: &AlertQuery) -> Result<GettableAlerts> {
        debug!("RemotePrimaryForkedAlertmanager::get_alerts: called");
        self.remote.get_alerts(query).await
    }

    async fn get_alert_groups(&self, query: &AlertQuery) -> Result<AlertGroups> {
        debug!("RemotePrimaryForkedAlertmanager::get_alert_groups: called");
        self.remote.get_alert_groups(query).await
    }

    async fn put_alerts(&self, alerts: PostableAlerts) -> Result<()> {
        debug!("RemotePrimaryForkedAlertmanager::put_alerts: called");
        self.remote.put_alerts(alerts).await
    }

    async fn get_receivers(&self) -> Result<Vec<Receiver>> {
        debug!("RemotePrimaryForkedAlertmanager::get_receivers: called");
        self.remote.get_receivers().await
    }

    async fn test_receivers(&self, params: &TestReceiversConfigBodyParams) -> Result<Option<TestReceiversResult>> {
        debug!("RemotePrimaryForkedAlertmanager::test_receivers: called");
        self.remote.test_receivers(params).await
    }

    async fn test_template(&self, params: &TestTemplatesConfigBodyParams) -> Result<Option<TestTemplatesResults>> {
        debug!("RemotePrimaryForkedAlertmanager::test_template: called");
        self.remote.test_template(params).await
    }

    fn clean_up(&self) {
        debug!("RemotePrimaryForkedAlertmanager::clean_up: called");
        // No cleanup to do in the remote Alertmanager.
        self.internal.clean_up();
    }

    async fn stop_and_wait(&self) {
        debug!("RemotePrimaryForkedAlertmanager::stop_and_wait: called");
        self.internal.stop_and_wait().await;
        self.remote.stop_and_wait().await;
    }

    fn ready(&self) -> bool {
        debug!("RemotePrimaryForkedAlertmanager::ready: called");
        // The remote Alertmanager serves traffic, the internal one still does
        // housekeeping. Both have to be up.
        self.internal.ready() && self.remote.ready()
    }
}
