//! Shared config handle with reload and snapshot swap

use crate::config::store::ConfigStore;
use crate::config::Config;
use crate::error::{HitScoreError, Result};
use crate::judge::ScoreJudge;
use log::{debug, error, info, warn};
use parking_lot::RwLock;
use std::sync::Arc;

/// Result of a reload attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The stored document was valid and is now current
    Loaded,
    /// The document was absent or broken while the in-memory config was
    /// still default; the built-in default was installed and written back
    RecoveredDefault,
    /// The document was broken; judging is disabled until the next reload
    Invalid,
}

struct HandleState {
    current: Option<Arc<Config>>,
    /// In-memory config still at default values
    is_default: bool,
}

/// Current config shared by every judged event
///
/// Readers take an `Arc` snapshot and judge without holding the lock; a
/// reload builds the new config completely before swapping it in.
pub struct ConfigHandle {
    state: RwLock<HandleState>,
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigHandle {
    /// Empty handle: nothing loaded, judging disabled
    pub fn new() -> Self {
        Self {
            state: RwLock::new(HandleState {
                current: None,
                is_default: true,
            }),
        }
    }

    pub fn with_config(config: Config) -> Self {
        let handle = Self::new();
        handle.install(config);
        handle
    }

    /// Snapshot of the current config, `None` while invalid
    pub fn snapshot(&self) -> Option<Arc<Config>> {
        self.state.read().current.clone()
    }

    pub fn is_valid(&self) -> bool {
        self.state.read().current.is_some()
    }

    pub fn is_default(&self) -> bool {
        self.state.read().is_default
    }

    /// Swap in a fully built config
    pub fn install(&self, config: Config) {
        let is_default = config.is_default();
        let mut state = self.state.write();
        state.current = Some(Arc::new(config));
        state.is_default = is_default;
    }

    /// Disable judging until the next successful load
    pub fn invalidate(&self) {
        self.state.write().current = None;
    }

    /// Parse and install a document directly
    pub fn load_str(&self, document: &str) -> Result<()> {
        let config = Config::from_json(document)?;
        self.install(config);
        Ok(())
    }

    /// Reload from storage, recovering to the built-in default when the
    /// in-memory config is still default
    pub fn load_from(&self, store: &dyn ConfigStore) -> LoadOutcome {
        info!("Loading configuration from {}...", store.describe());

        match read_config(store) {
            Ok(config) => {
                self.install(config);
                info!("Loaded configuration!");
                LoadOutcome::Loaded
            }
            Err(err) => {
                error!("Config failed to load properly: {}", err);

                if !self.is_default() {
                    self.invalidate();
                    info!("Configuration is invalid! Please ensure the config is the correct format!");
                    return LoadOutcome::Invalid;
                }

                debug!("Setting to default because config failed to load, even though it was default config");
                let config = Config::default();
                if let Err(write_err) = config.to_json().and_then(|doc| store.write(&doc)) {
                    warn!("Failed to write default config to {}: {}", store.describe(), write_err);
                }
                self.install(config);
                LoadOutcome::RecoveredDefault
            }
        }
    }

    /// Judge bound to the current snapshot
    pub fn scorer(&self) -> ScoreJudge {
        ScoreJudge::new(self.snapshot())
    }
}

fn read_config(store: &dyn ConfigStore) -> Result<Config> {
    let document = store
        .read()?
        .ok_or_else(|| HitScoreError::ConfigMissing(store.describe()))?;
    Config::from_json(&document)
}
