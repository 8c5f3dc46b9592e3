//! Pipeline configuration, loadable from TOML.

pub mod defaults;

mod cancel_config;
mod report_config;

pub use cancel_config::{CancelMode, CancelPolicy, HandledPolicy, StaffCancelPolicy};
pub use report_config::{DuplicateConfig, EscalationAction, EscalationConfig, EscalationWindow};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::EMPTY_FIELD;
use crate::errors::{WardenError, WardenResult};

/// Top-level configuration for the report pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WardenConfig {
    /// Notification channel endpoint (single JSON POST endpoint).
    pub endpoint_url: String,
    /// Server context attached to every payload. Empty values normalize to
    /// a placeholder at load time.
    pub server_name: String,
    pub server_ip: String,
    /// Per-actor command cooldown in seconds. `<= 0` disables the gate.
    pub cooldown_secs: i64,
    pub duplicate: DuplicateConfig,
    pub escalation: EscalationConfig,
    pub cancel_by_author: CancelPolicy,
    pub cancel_by_staff: StaffCancelPolicy,
    pub handled: HandledPolicy,
}

impl Default for WardenConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::new(),
            server_name: EMPTY_FIELD.to_string(),
            server_ip: EMPTY_FIELD.to_string(),
            cooldown_secs: defaults::DEFAULT_COOLDOWN_SECS,
            duplicate: DuplicateConfig::default(),
            escalation: EscalationConfig::default(),
            cancel_by_author: CancelPolicy::default(),
            cancel_by_staff: StaffCancelPolicy::default(),
            handled: HandledPolicy::default(),
        }
    }
}

impl WardenConfig {
    /// Parse a config from TOML text and normalize it.
    pub fn from_toml_str(raw: &str) -> WardenResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| WardenError::ConfigError {
            reason: e.to_string(),
        })?;
        Ok(config.normalized())
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> WardenResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| WardenError::ConfigError {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml_str(&raw)
    }

    /// Fill placeholder values the host left unset.
    fn normalized(mut self) -> Self {
        if self.server_name.trim().is_empty() {
            self.server_name = EMPTY_FIELD.to_string();
        }
        if self.server_ip.trim().is_empty() {
            self.server_ip = EMPTY_FIELD.to_string();
        }
        self
    }
}
