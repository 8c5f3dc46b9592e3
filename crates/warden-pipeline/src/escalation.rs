//! ThresholdEscalator — per-target open-report counters with a windowed
//! threshold. Fires at most once per window; firing clears the counter so
//! the next report starts fresh.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use warden_core::config::EscalationWindow;

/// Whether the post-increment count crossed the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationDecision {
    None,
    Fire,
}

#[derive(Debug, Clone, Copy)]
struct TargetCounter {
    count: u32,
    window_started_at: DateTime<Utc>,
}

/// Tracks cumulative open-report counts per target.
#[derive(Debug, Default)]
pub struct ThresholdEscalator {
    counters: DashMap<String, TargetCounter>,
}

impl ThresholdEscalator {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    /// Record a report against `target_id` and decide whether to escalate.
    pub fn record_and_check(
        &self,
        target_id: &str,
        limit: u32,
        window: EscalationWindow,
    ) -> EscalationDecision {
        self.record_and_check_at(target_id, limit, window, Utc::now())
    }

    /// Clock-injected variant.
    pub fn record_and_check_at(
        &self,
        target_id: &str,
        limit: u32,
        window: EscalationWindow,
        now: DateTime<Utc>,
    ) -> EscalationDecision {
        if window == EscalationWindow::Disabled || limit == 0 {
            return EscalationDecision::None;
        }

        let mut entry = self
            .counters
            .entry(target_id.to_string())
            .or_insert(TargetCounter {
                count: 0,
                window_started_at: now,
            });

        // An expired window restarts the count before comparing.
        if let EscalationWindow::Minutes(minutes) = window {
            if now > entry.window_started_at + Duration::minutes(minutes) {
                entry.count = 0;
                entry.window_started_at = now;
            }
        }

        entry.count += 1;
        let fire = entry.count >= limit;
        drop(entry);

        if fire {
            self.counters.remove(target_id);
            EscalationDecision::Fire
        } else {
            EscalationDecision::None
        }
    }

    /// Number of targets with an open window.
    pub fn tracked_targets(&self) -> usize {
        self.counters.len()
    }
}
