//! CooldownGate — per-actor rate limiter over a `DashMap`.

use chrono::{DateTime, Duration, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Gates how often an actor may invoke a command. Entries are created on
/// first use, refreshed on every allowed use, and never explicitly deleted
/// (bounded by the actor population).
#[derive(Debug, Default)]
pub struct CooldownGate {
    next_allowed: DashMap<String, DateTime<Utc>>,
}

impl CooldownGate {
    pub fn new() -> Self {
        Self {
            next_allowed: DashMap::new(),
        }
    }

    /// Try to pass the gate. A non-positive cooldown always succeeds.
    pub fn try_acquire(&self, actor_id: &str, cooldown_secs: i64) -> bool {
        self.try_acquire_at(actor_id, cooldown_secs, Utc::now())
    }

    /// Clock-injected variant. The entry API holds the shard lock across
    /// the check-and-refresh, so concurrent calls for one actor cannot both
    /// succeed inside a window.
    pub fn try_acquire_at(&self, actor_id: &str, cooldown_secs: i64, now: DateTime<Utc>) -> bool {
        if cooldown_secs <= 0 {
            return true;
        }
        match self.next_allowed.entry(actor_id.to_string()) {
            Entry::Occupied(mut entry) => {
                if now >= *entry.get() {
                    entry.insert(now + Duration::seconds(cooldown_secs));
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(now + Duration::seconds(cooldown_secs));
                true
            }
        }
    }

    /// Number of actors with an entry.
    pub fn tracked_actors(&self) -> usize {
        self.next_allowed.len()
    }
}
