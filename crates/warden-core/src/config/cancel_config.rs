use serde::{Deserialize, Serialize};

use super::defaults;

/// How a cancellation reaches the external channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelMode {
    /// Delete the external record by correlation id.
    Delete,
    /// Send a cancellation event reusing the original report's fields.
    Notify,
}

/// Cancellation policy shared by the author and staff flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelPolicy {
    pub enabled: bool,
    /// Reports older than this are invisible to cancellation lookups.
    pub max_age_minutes: i64,
    pub mode: CancelMode,
}

impl Default for CancelPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            max_age_minutes: defaults::DEFAULT_CANCEL_MAX_AGE_MINUTES,
            mode: CancelMode::Notify,
        }
    }
}

/// Staff cancellation: the shared policy plus a capability gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffCancelPolicy {
    #[serde(flatten)]
    pub policy: CancelPolicy,
    /// Required capability. Empty means no gate.
    pub permission: String,
}

impl Default for StaffCancelPolicy {
    fn default() -> Self {
        Self {
            policy: CancelPolicy::default(),
            permission: defaults::DEFAULT_STAFF_PERMISSION.to_string(),
        }
    }
}

/// Staff mark-handled policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HandledPolicy {
    pub enabled: bool,
    /// Required capability. Empty means no gate.
    pub permission: String,
}

impl Default for HandledPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            permission: defaults::DEFAULT_STAFF_PERMISSION.to_string(),
        }
    }
}
