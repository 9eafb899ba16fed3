//! Forked Alertmanager settings and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

const SETTINGS_FILE: &str = "amfork.yml";

/// Settings for running the internal and remote Alertmanagers side by side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForkSettings {
    /// Seconds between configuration/state syncs to the remote Alertmanager
    #[serde(rename = "sync-interval-secs")]
    pub sync_interval_secs: u64,

    /// Push the internal state to the remote Alertmanager on shutdown
    #[serde(rename = "sync-state-on-shutdown")]
    pub sync_state_on_shutdown: bool,
}

impl Default for ForkSettings {
    fn default() -> Self {
        Self {
            sync_interval_secs: 300,
            sync_state_on_shutdown: true,
        }
    }
}

impl ForkSettings {
    /// Sync interval as a Duration
    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync_interval_secs)
    }

    /// Whether the secondary coordinator syncs on every `apply_config`
    pub fn syncs_every_apply(&self) -> bool {
        self.sync_interval_secs == 0
    }

    /// Files searched when no explicit path is given, in order
    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(SETTINGS_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("amfork").join(SETTINGS_FILE));
        }
        paths
    }

    /// Load settings from `config_path`, else the first readable candidate,
    /// else defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load settings from {}", path.display()));
        }

        for path in Self::candidate_paths().into_iter().filter(|p| p.exists()) {
            match Self::load_from_file(&path) {
                Ok(settings) => return Ok(settings),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable settings file"),
            }
        }

        // No settings file found, use defaults
        debug!("ForkSettings::load: no settings file, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).context("Failed to read settings file")?;
        let settings: Self = serde_yaml::from_str(&content).context("Failed to parse settings file")?;

        if settings.syncs_every_apply() {
            warn!(path = %path.display(), "sync-interval-secs is 0, the remote Alertmanager is synced on every apply");
        }
        info!(path = %path.display(), sync_interval_secs = settings.sync_interval_secs, "Loaded fork settings");
        Ok(settings)
    }
}
