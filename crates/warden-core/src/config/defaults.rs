//! Default values for `WardenConfig`.

/// Per-actor command cooldown in seconds. `<= 0` disables the gate.
pub const DEFAULT_COOLDOWN_SECS: i64 = 60;

/// How far back the duplicate detector looks, in minutes.
pub const DEFAULT_DUPLICATE_WINDOW_MINUTES: i64 = 30;

/// Open reports a target can accumulate before escalation fires.
pub const DEFAULT_ESCALATION_THRESHOLD: u32 = 5;

/// Raw escalation window: -1 disabled, 0 unbounded, n = minutes.
pub const DEFAULT_ESCALATION_WINDOW_MODE: i64 = -1;

/// Suspension length when the escalation action is `Suspend`.
pub const DEFAULT_SUSPEND_MINUTES: i64 = 30;

/// How fresh a report must be to remain visible to cancellation lookups.
pub const DEFAULT_CANCEL_MAX_AGE_MINUTES: i64 = 5;

/// Capability required for staff operations.
pub const DEFAULT_STAFF_PERMISSION: &str = "@warden/staff";
