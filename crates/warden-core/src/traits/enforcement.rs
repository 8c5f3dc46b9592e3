use crate::models::Actor;

/// The host's command/permission framework, treated as an authorization
/// oracle. All methods that mutate game state are only ever invoked from the
/// host's single-threaded frame context (the pipeline schedules them onto
/// the frame queue, never calls them from a worker).
pub trait IEnforcement: Send + Sync {
    /// Capability-set check against the actor.
    fn has_permission(&self, actor: &Actor, permission: &str) -> bool;

    /// Remove the target from the session.
    fn remove_player(&self, target: &Actor, reason: &str);

    /// Suspend the target for `minutes`.
    fn suspend_player(&self, target: &Actor, minutes: i64, reason: &str);
}
