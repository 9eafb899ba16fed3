//! Remote secondary mode: the internal Alertmanager is authoritative

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{Instrument, Span, debug, error, info};

use super::config::{ForkError, RemoteSecondaryConfig};
use crate::alertmanager::{
    AlertConfiguration, AlertGroups, AlertQuery, Alertmanager, GettableAlerts, GettableSilence, GettableSilences,
    GettableStatus, PostableAlerts, PostableSilence, PostableUserConfig, Receiver, RemoteAlertmanager, Result,
    TestReceiversConfigBodyParams, TestReceiversResult, TestTemplatesConfigBodyParams, TestTemplatesResults,
};

/// Serves every request from the internal Alertmanager while warming up the
/// remote one and keeping it in sync on an interval
///
/// Remote failures are logged and never returned. They only decide whether
/// the last successful sync time moves forward.
pub struct RemoteSecondaryForkedAlertmanager {
    log: Span,

    internal: Arc<dyn Alertmanager>,
    remote: Arc<dyn RemoteAlertmanager>,

    /// Completion time of the last successful sync, `None` until the first one
    last_sync: Mutex<Option<Instant>>,
    sync_interval: Duration,
    sync_state_on_shutdown: bool,
}

impl RemoteSecondaryForkedAlertmanager {
    /// Create a new forked Alertmanager, validating `cfg` first
    pub fn new(
        cfg: RemoteSecondaryConfig,
        internal: Arc<dyn Alertmanager>,
        remote: Arc<dyn RemoteAlertmanager>,
    ) -> std::result::Result<Self, ForkError> {
        debug!(sync_interval = ?cfg.sync_interval, "RemoteSecondaryForkedAlertmanager::new: called");
        cfg.validate()?;
        let log = cfg.logger.ok_or(ForkError::MissingLogger)?;

        Ok(Self {
            log,
            internal,
            remote,
            last_sync: Mutex::new(None),
            sync_interval: cfg.sync_interval,
            sync_state_on_shutdown: cfg.sync_state_on_shutdown,
        })
    }

    /// When configuration and state were last synced to the remote Alertmanager
    pub async fn last_sync(&self) -> Option<Instant> {
        *self.last_sync.lock().await
    }

    fn sync_due(&self, last_sync: Option<Instant>) -> bool {
        match last_sync {
            Some(at) => at.elapsed() >= self.sync_interval,
            None => true,
        }
    }

    /// Bring the remote Alertmanager closer to the internal one
    async fn sync_remote(&self, config: &AlertConfiguration) {
        // A remote Alertmanager that is not ready yet gets the configuration
        // directly. Applying it runs the readiness check and the first sync.
        if !self.remote.ready() {
            if let Err(e) = self.remote.apply_config(config).await {
                error!(error = %e, "Error applying config to the remote Alertmanager");
                return;
            }
            *self.last_sync.lock().await = Some(Instant::now());
            return;
        }

        let last_sync = *self.last_sync.lock().await;
        if !self.sync_due(last_sync) {
            debug!(?last_sync, "Sync interval has not elapsed, skipping remote sync");
            return;
        }

        debug!(?last_sync, "Syncing configuration and state with the remote Alertmanager");
        let cfg_result = self.remote.compare_and_send_configuration(config).await;
        if let Err(e) = &cfg_result {
            error!(error = %e, "Unable to upload the configuration to the remote Alertmanager");
        }

        let state_result = self.remote.compare_and_send_state().await;
        if let Err(e) = &state_result {
            error!(error = %e, "Unable to upload the state to the remote Alertmanager");
        }
        debug!("Finished syncing configuration and state with the remote Alertmanager");

        if cfg_result.is_ok() && state_result.is_ok() {
            *self.last_sync.lock().await = Some(Instant::now());
        }
    }

    /// Push the final internal state before the remote Alertmanager stops
    async fn flush_state(&self) {
        if !self.remote.ready() {
            debug!("Remote Alertmanager not ready, skipping state upload on shutdown");
            return;
        }

        match self.remote.compare_and_send_state().await {
            Ok(()) => info!("Uploaded final state to the remote Alertmanager"),
            Err(e) => error!(error = %e, "Unable to upload the state to the remote Alertmanager on shutdown"),
        }
    }
}

#[async_trait]
impl Alertmanager for RemoteSecondaryForkedAlertmanager {
    /// Apply `config` on the internal Alertmanager while syncing the remote
    /// one alongside it. Only the internal result is returned.
    async fn apply_config(&self, config: &AlertConfiguration) -> Result<()> {
        debug!("RemoteSecondaryForkedAlertmanager::apply_config: called");
        let sync = self.sync_remote(config).instrument(self.log.clone());
        let (result, ()) = tokio::join!(self.internal.apply_config(config), sync);
        result
    }

    // The remote Alertmanager picks up saved configuration on the next timed sync.
    async fn save_and_apply_config(&self, config: &PostableUserConfig) -> Result<()> {
        debug!("RemoteSecondaryForkedAlertmanager::save_and_apply_config: called");
        self.internal.save_and_apply_config(config).await
    }

    async fn save_and_apply_default_config(&self) -> Result<()> {
        debug!("RemoteSecondaryForkedAlertmanager::save_and_apply_default_config: called");
        self.internal.save_and_apply_default_config().await
    }

    fn get_status(&self) -> GettableStatus {
        debug!("RemoteSecondaryForkedAlertmanager::get_status: called");
        self.internal.get_status()
    }

    async fn create_silence(&self, silence: Option<&PostableSilence>) -> Result<String> {
        debug!("RemoteSecondaryForkedAlertmanager::create_silence: called");
        self.internal.create_silence(silence).await
    }

    async fn delete_silence(&self, id: &str) -> Result<()> {
        debug!("RemoteSecondaryForkedAlertmanager::delete_silence: called");
        self.internal.delete_silence(id).await
    }

    async fn get_silence(&self, id: &str) -> Result<GettableSilence> {
        debug!("RemoteSecondaryForkedAlertmanager::get_silence: called");
        self.internal.get_silence(id).await
    }

    async fn list_silences(&self, filter: &[String]) -> Result<GettableSilences> {
        debug!("RemoteSecondaryForkedAlertmanager::list_silences: called");
        self.internal.list_silences(filter).await
    }

    async fn get_alerts(&self, query: &AlertQuery) -> Result<GettableAlerts> {
        debug!("RemoteSecondaryForkedAlertmanager::get_alerts: called");
        self.internal.get_alerts(query).await
    }

    async fn get_alert_groups(&self, query: &AlertQuery) -> Result<AlertGroups> {
        debug!("RemoteSecondaryForkedAlertmanager::get_alert_groups: called");
        self.internal.get_alert_groups(query).await
    }

    async fn put_alerts(&self, alerts: PostableAlerts) -> Result<()> {
        debug!("RemoteSecondaryForkedAlertmanager::put_alerts: called");
        self.internal.put_alerts(alerts).await
    }

    async fn get_receivers(&self) -> Result<Vec<Receiver>> {
        debug!("RemoteSecondaryForkedAlertmanager::get_receivers: called");
        self.internal.get_receivers().await
    }

    async fn test_receivers(&self, params: &TestReceiversConfigBodyParams) -> Result<Option<TestReceiversResult>> {
        debug!("RemoteSecondaryForkedAlertmanager::test_receivers: called");
        self.internal.test_receivers(params).await
    }

    async fn test_template(&self, params: &TestTemplatesConfigBodyParams) -> Result<Option<TestTemplatesResults>> {
        debug!("RemoteSecondaryForkedAlertmanager::test_template: called");
        self.internal.test_template(params).await
    }

    fn clean_up(&self) {
        debug!("RemoteSecondaryForkedAlertmanager::clean_up: called");
        // No cleanup to do in the remote Alertmanager.
        self.internal.clean_up();
    }

    async fn stop_and_wait(&self) {
        debug!("RemoteSecondaryForkedAlertmanager::stop_and_wait: called");
        self.internal.stop_and_wait().await;
        if self.sync_state_on_shutdown {
            self.flush_state().instrument(self.log.clone()).await;
        }
        self.remote.stop_and_wait().await;
    }

    fn ready(&self) -> bool {
        debug!("RemoteSecondaryForkedAlertmanager::ready: called");
        // Only the internal Alertmanager serves traffic in this mode.
        self.internal.ready()
    }
}
