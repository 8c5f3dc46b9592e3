use serde::{Deserialize, Serialize};

use super::defaults;

/// Duplicate-detection policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DuplicateConfig {
    /// When false the coordinator skips the detector entirely.
    pub enabled: bool,
    /// Policy window in minutes.
    pub window_minutes: i64,
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_minutes: defaults::DEFAULT_DUPLICATE_WINDOW_MINUTES,
        }
    }
}

/// Action to take when a target crosses the report threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationAction {
    /// Record the firing, do nothing to the target.
    None,
    /// Remove the target from the session.
    Remove,
    /// Suspend the target for `suspend_minutes`.
    Suspend,
}

/// Counting window for the escalator, normalized from the raw config integer
/// (-1 disabled, 0 unbounded, n = minutes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationWindow {
    Disabled,
    Unbounded,
    Minutes(i64),
}

impl EscalationWindow {
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            n if n < 0 => Self::Disabled,
            0 => Self::Unbounded,
            n => Self::Minutes(n),
        }
    }
}

/// Threshold-escalation policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationConfig {
    /// Raw window: -1 disabled, 0 unbounded, n = minutes.
    pub window_mode: i64,
    /// Post-increment count at which escalation fires.
    pub threshold: u32,
    pub action: EscalationAction,
    /// Only used when `action` is `Suspend`.
    pub suspend_minutes: i64,
    pub remove_reason: String,
    pub suspend_reason: String,
}

impl EscalationConfig {
    pub fn window(&self) -> EscalationWindow {
        EscalationWindow::from_raw(self.window_mode)
    }
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            window_mode: defaults::DEFAULT_ESCALATION_WINDOW_MODE,
            threshold: defaults::DEFAULT_ESCALATION_THRESHOLD,
            action: EscalationAction::None,
            suspend_minutes: defaults::DEFAULT_SUSPEND_MINUTES,
            remove_reason: "Removed after repeated reports".to_string(),
            suspend_reason: "Suspended after repeated reports".to_string(),
        }
    }
}
