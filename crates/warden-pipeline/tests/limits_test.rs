use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use warden_core::config::EscalationWindow;
use warden_pipeline::{CooldownGate, EscalationDecision, ThresholdEscalator};

fn t0() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

// ── Cooldown gate ─────────────────────────────────────────────────────────

#[test]
fn first_acquire_succeeds_and_opens_a_window() {
    let gate = CooldownGate::new();
    assert!(gate.try_acquire_at("a", 30, t0()));
    assert!(!gate.try_acquire_at("a", 30, t0() + Duration::seconds(29)));
    assert!(gate.try_acquire_at("a", 30, t0() + Duration::seconds(30)));
}

#[test]
fn exactly_one_success_per_window() {
    let gate = CooldownGate::new();
    let mut successes = 0;
    for sec in 0..30 {
        if gate.try_acquire_at("a", 30, t0() + Duration::seconds(sec)) {
            successes += 1;
        }
    }
    assert_eq!(successes, 1);
}

#[test]
fn rejected_attempts_do_not_extend_the_window() {
    let gate = CooldownGate::new();
    assert!(gate.try_acquire_at("a", 30, t0()));
    for sec in 1..30 {
        assert!(!gate.try_acquire_at("a", 30, t0() + Duration::seconds(sec)));
    }
    assert!(gate.try_acquire_at("a", 30, t0() + Duration::seconds(30)));
}

#[test]
fn late_acquire_refreshes_from_now_not_from_the_stale_deadline() {
    let gate = CooldownGate::new();
    assert!(gate.try_acquire_at("a", 10, t0()));
    // Window expired at t0+10; actor comes back at t0+25.
    assert!(gate.try_acquire_at("a", 10, t0() + Duration::seconds(25)));
    // The new window runs to t0+35, not t0+20.
    assert!(!gate.try_acquire_at("a", 10, t0() + Duration::seconds(30)));
    assert!(gate.try_acquire_at("a", 10, t0() + Duration::seconds(35)));
}

#[test]
fn non_positive_cooldown_never_gates() {
    let gate = CooldownGate::new();
    for _ in 0..5 {
        assert!(gate.try_acquire_at("a", 0, t0()));
        assert!(gate.try_acquire_at("a", -1, t0()));
    }
    assert_eq!(gate.tracked_actors(), 0);
}

#[test]
fn actors_are_gated_independently() {
    let gate = CooldownGate::new();
    assert!(gate.try_acquire_at("a", 30, t0()));
    assert!(gate.try_acquire_at("b", 30, t0()));
    assert!(!gate.try_acquire_at("a", 30, t0() + Duration::seconds(1)));
    assert_eq!(gate.tracked_actors(), 2);
}

proptest! {
    #[test]
    fn within_window_attempts_always_fail(cooldown in 1i64..3600, delta in 0i64..3600) {
        prop_assume!(delta < cooldown);
        let gate = CooldownGate::new();
        prop_assert!(gate.try_acquire_at("a", cooldown, t0()));
        prop_assert!(!gate.try_acquire_at("a", cooldown, t0() + Duration::seconds(delta)));
        prop_assert!(gate.try_acquire_at("a", cooldown, t0() + Duration::seconds(cooldown)));
    }
}

// ── Threshold escalator ───────────────────────────────────────────────────

#[test]
fn fires_exactly_once_at_the_limit() {
    let escalator = ThresholdEscalator::new();
    let w = EscalationWindow::Unbounded;

    assert_eq!(
        escalator.record_and_check_at("t", 3, w, t0()),
        EscalationDecision::None
    );
    assert_eq!(
        escalator.record_and_check_at("t", 3, w, t0()),
        EscalationDecision::None
    );
    assert_eq!(
        escalator.record_and_check_at("t", 3, w, t0()),
        EscalationDecision::Fire
    );
    // Firing cleared the counter: the next report starts a fresh count.
    assert_eq!(escalator.tracked_targets(), 0);
    assert_eq!(
        escalator.record_and_check_at("t", 3, w, t0()),
        EscalationDecision::None
    );
    assert_eq!(
        escalator.record_and_check_at("t", 3, w, t0()),
        EscalationDecision::None
    );
    assert_eq!(
        escalator.record_and_check_at("t", 3, w, t0()),
        EscalationDecision::Fire
    );
}

#[test]
fn expired_window_resets_the_count() {
    let escalator = ThresholdEscalator::new();
    let w = EscalationWindow::Minutes(10);

    escalator.record_and_check_at("t", 3, w, t0());
    escalator.record_and_check_at("t", 3, w, t0() + Duration::minutes(1));
    // Eleven minutes after the window opened: count restarts at 1 instead
    // of reaching 3.
    assert_eq!(
        escalator.record_and_check_at("t", 3, w, t0() + Duration::minutes(11)),
        EscalationDecision::None
    );
    // Two quick follow-ups inside the fresh window reach the limit.
    assert_eq!(
        escalator.record_and_check_at("t", 3, w, t0() + Duration::minutes(12)),
        EscalationDecision::None
    );
    assert_eq!(
        escalator.record_and_check_at("t", 3, w, t0() + Duration::minutes(13)),
        EscalationDecision::Fire
    );
}

#[test]
fn reports_inside_the_window_accumulate() {
    let escalator = ThresholdEscalator::new();
    let w = EscalationWindow::Minutes(10);

    escalator.record_and_check_at("t", 3, w, t0());
    escalator.record_and_check_at("t", 3, w, t0() + Duration::minutes(4));
    assert_eq!(
        escalator.record_and_check_at("t", 3, w, t0() + Duration::minutes(9)),
        EscalationDecision::Fire
    );
}

#[test]
fn disabled_window_touches_no_state() {
    let escalator = ThresholdEscalator::new();
    for _ in 0..10 {
        assert_eq!(
            escalator.record_and_check_at("t", 1, EscalationWindow::Disabled, t0()),
            EscalationDecision::None
        );
    }
    assert_eq!(escalator.tracked_targets(), 0);
}

#[test]
fn limit_of_one_fires_immediately() {
    let escalator = ThresholdEscalator::new();
    assert_eq!(
        escalator.record_and_check_at("t", 1, EscalationWindow::Unbounded, t0()),
        EscalationDecision::Fire
    );
}

#[test]
fn targets_are_counted_independently() {
    let escalator = ThresholdEscalator::new();
    let w = EscalationWindow::Unbounded;

    escalator.record_and_check_at("t1", 2, w, t0());
    assert_eq!(
        escalator.record_and_check_at("t2", 2, w, t0()),
        EscalationDecision::None
    );
    assert_eq!(
        escalator.record_and_check_at("t1", 2, w, t0()),
        EscalationDecision::Fire
    );
    // t2's counter is untouched by t1's firing.
    assert_eq!(escalator.tracked_targets(), 1);
}
