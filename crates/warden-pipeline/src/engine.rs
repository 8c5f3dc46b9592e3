//! ReportEngine — orchestrates the submit and cancellation flows and owns
//! every cross-component invariant. Flows run on the host's worker pool;
//! within one flow the steps are strictly sequential (dedup → dispatch →
//! persist → escalate), and only enforcement actions touch the frame queue.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

use warden_core::config::{CancelMode, EscalationAction, WardenConfig};
use warden_core::constants::{IDENTIFIER_ALPHABET, IDENTIFIER_LEN};
use warden_core::errors::WardenResult;
use warden_core::models::{Actor, CancelOutcome, HandledOutcome, Report, SubmitOutcome};
use warden_core::traits::{IEnforcement, IReportStore};
use warden_dispatch::protocol::ReportEvent;
use warden_dispatch::INotifier;

use crate::cooldown::CooldownGate;
use crate::duplicate::{find_open_report, DuplicateOutcome};
use crate::escalation::{EscalationDecision, ThresholdEscalator};
use crate::frame::FrameQueue;

/// A resolved submission, built by the command layer from live players.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub author: Actor,
    pub target: Actor,
    pub reason: String,
    pub map_name: String,
}

/// The report lifecycle coordinator.
pub struct ReportEngine {
    config: WardenConfig,
    store: Arc<dyn IReportStore>,
    notifier: Arc<dyn INotifier>,
    enforcement: Arc<dyn IEnforcement>,
    cooldowns: CooldownGate,
    escalator: ThresholdEscalator,
    frame: FrameQueue,
}

impl ReportEngine {
    pub fn new(
        config: WardenConfig,
        store: Arc<dyn IReportStore>,
        notifier: Arc<dyn INotifier>,
        enforcement: Arc<dyn IEnforcement>,
        frame: FrameQueue,
    ) -> Self {
        Self {
            config,
            store,
            notifier,
            enforcement,
            cooldowns: CooldownGate::new(),
            escalator: ThresholdEscalator::new(),
            frame,
        }
    }

    /// The shared per-actor gate. The command layer checks it before
    /// entering the submit flow.
    pub fn cooldowns(&self) -> &CooldownGate {
        &self.cooldowns
    }

    pub fn config(&self) -> &WardenConfig {
        &self.config
    }

    /// Submit flow. The cooldown has already been checked by the command
    /// layer; everything from duplicate detection onward happens here.
    pub async fn submit(&self, request: SubmitRequest) -> SubmitOutcome {
        if self.config.duplicate.enabled {
            let found = find_open_report(
                self.store.as_ref(),
                Some(&request.author.steam_id),
                &request.target.steam_id,
                self.config.duplicate.window_minutes,
            );
            match found {
                Ok(DuplicateOutcome::None) => {}
                Ok(DuplicateOutcome::SameAuthor) => return SubmitOutcome::DuplicateBySelf,
                Ok(DuplicateOutcome::DifferentAuthor) => return SubmitOutcome::DuplicateByOther,
                Err(e) => {
                    tracing::warn!(error = %e, "duplicate lookup failed");
                    return SubmitOutcome::InternalError;
                }
            }
        }

        let identifier = new_identifier();
        let event = ReportEvent::submission(
            &request.author,
            &request.target,
            &request.reason,
            &self.config.server_name,
            &self.config.server_ip,
            &request.map_name,
            &identifier,
        );

        let message_id = match self.notifier.submit(&event).await {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(identifier = %identifier, error = %e, "report dispatch failed");
                return SubmitOutcome::WebhookError;
            }
        };

        // The actor-visible outcome is already decided: the notification was
        // delivered. A persist failure is logged server-side only.
        let report = Report {
            identifier: identifier.clone(),
            message_id,
            author_name: request.author.name.clone(),
            author_steamid: request.author.steam_id.clone(),
            target_name: request.target.name.clone(),
            target_steamid: request.target.steam_id.clone(),
            reason: request.reason.clone(),
            server_name: self.config.server_name.clone(),
            server_ip: self.config.server_ip.clone(),
            map_name: request.map_name.clone(),
            created_at: Utc::now(),
            cancelled: false,
            cancelled_by: None,
            cancelled_by_steamid: None,
            cancelled_by_staff: false,
        };
        if let Err(e) = self.store.insert(&report) {
            tracing::error!(identifier = %report.identifier, error = %e, "failed to persist report");
        }

        self.escalate(&request.target);
        SubmitOutcome::Sent
    }

    /// Cancel the calling actor's most recent open report.
    pub async fn cancel_by_author(&self, actor: &Actor, map_name: &str) -> CancelOutcome {
        let policy = &self.config.cancel_by_author;
        let report = match self
            .store
            .find_open_by_author(&actor.steam_id, policy.max_age_minutes)
        {
            Ok(Some(report)) => report,
            Ok(None) => return CancelOutcome::NotFound,
            Err(e) => {
                tracing::warn!(error = %e, "cancellation lookup failed");
                return CancelOutcome::NotFound;
            }
        };

        self.finish_cancellation(report, actor, map_name, policy.mode, false)
            .await
    }

    /// Staff cancellation of a report by identifier. Gated by the
    /// authorization oracle and the shared cooldown.
    pub async fn cancel_by_staff(
        &self,
        actor: &Actor,
        identifier: &str,
        map_name: &str,
    ) -> CancelOutcome {
        let policy = &self.config.cancel_by_staff;
        if !self.staff_allowed(actor, &policy.permission) {
            return CancelOutcome::Unauthorized;
        }
        if !self
            .cooldowns
            .try_acquire(&actor.steam_id, self.config.cooldown_secs)
        {
            return CancelOutcome::RateLimited {
                cooldown_secs: self.config.cooldown_secs,
            };
        }

        let report = match self.lookup_open(identifier, policy.policy.max_age_minutes) {
            Some(report) => report,
            None => return CancelOutcome::NotFound,
        };

        self.finish_cancellation(report, actor, map_name, policy.policy.mode, true)
            .await
    }

    /// Staff marks a report handled in the external channel. The local
    /// record is left untouched.
    pub async fn mark_handled(&self, actor: &Actor, identifier: &str) -> HandledOutcome {
        let policy = &self.config.handled;
        if !self.staff_allowed(actor, &policy.permission) {
            return HandledOutcome::Unauthorized;
        }
        if !self
            .cooldowns
            .try_acquire(&actor.steam_id, self.config.cooldown_secs)
        {
            return HandledOutcome::RateLimited {
                cooldown_secs: self.config.cooldown_secs,
            };
        }

        let report = match self.lookup_open(identifier, 0) {
            Some(report) => report,
            None => return HandledOutcome::NotFound,
        };

        match self.notifier.mark_handled(&report.message_id, actor).await {
            Ok(()) => HandledOutcome::Handled,
            Err(e) => {
                tracing::error!(identifier = %report.identifier, error = %e, "mark-handled dispatch failed");
                HandledOutcome::WebhookError
            }
        }
    }

    /// Deliver the cancellation to the channel, then mark the local record.
    async fn finish_cancellation(
        &self,
        report: Report,
        actor: &Actor,
        map_name: &str,
        mode: CancelMode,
        by_staff: bool,
    ) -> CancelOutcome {
        if let Err(e) = self
            .dispatch_cancellation(&report, map_name, by_staff.then_some(actor), mode)
            .await
        {
            tracing::error!(identifier = %report.identifier, error = %e, "cancellation dispatch failed");
            return CancelOutcome::WebhookError;
        }

        match self
            .store
            .mark_cancelled(&report.identifier, &actor.name, &actor.steam_id, by_staff)
        {
            Ok(true) => CancelOutcome::Cancelled,
            Ok(false) => {
                // Lost a race with a concurrent cancel, or the row vanished.
                tracing::warn!(identifier = %report.identifier, "cancellation not recorded locally");
                CancelOutcome::CancelledButNotRecorded
            }
            Err(e) => {
                tracing::error!(identifier = %report.identifier, error = %e, "failed to record cancellation");
                CancelOutcome::CancelledButNotRecorded
            }
        }
    }

    async fn dispatch_cancellation(
        &self,
        report: &Report,
        map_name: &str,
        admin: Option<&Actor>,
        mode: CancelMode,
    ) -> WardenResult<()> {
        match mode {
            CancelMode::Delete => self.notifier.cancel(&report.message_id).await,
            CancelMode::Notify => {
                let event = ReportEvent::cancellation(report, map_name, admin);
                self.notifier.submit(&event).await.map(|_| ())
            }
        }
    }

    /// Identifier lookup honoring open-only visibility and the freshness
    /// window; a stale report is not-found, not an error.
    fn lookup_open(&self, identifier: &str, max_age_minutes: i64) -> Option<Report> {
        match self.store.get(identifier) {
            Ok(Some(report))
                if report.is_open() && report.is_within_window(max_age_minutes, Utc::now()) =>
            {
                Some(report)
            }
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(identifier = %identifier, error = %e, "report lookup failed");
                None
            }
        }
    }

    fn staff_allowed(&self, actor: &Actor, permission: &str) -> bool {
        permission.is_empty() || self.enforcement.has_permission(actor, permission)
    }

    /// Count the report and, when the threshold fires, schedule the
    /// configured action onto the frame queue.
    fn escalate(&self, target: &Actor) {
        let cfg = &self.config.escalation;
        let decision =
            self.escalator
                .record_and_check(&target.steam_id, cfg.threshold, cfg.window());
        if decision != EscalationDecision::Fire {
            return;
        }

        tracing::info!(target_id = %target.steam_id, threshold = cfg.threshold, "report threshold reached");
        match cfg.action {
            EscalationAction::None => {}
            EscalationAction::Remove => {
                let oracle = Arc::clone(&self.enforcement);
                let target = target.clone();
                let reason = cfg.remove_reason.clone();
                self.frame
                    .schedule(move || oracle.remove_player(&target, &reason));
            }
            EscalationAction::Suspend => {
                let oracle = Arc::clone(&self.enforcement);
                let target = target.clone();
                let minutes = cfg.suspend_minutes;
                let reason = cfg.suspend_reason.clone();
                self.frame
                    .schedule(move || oracle.suspend_player(&target, minutes, &reason));
            }
        }
    }
}

/// A fresh report identifier: 15 characters of uppercase alphanumerics,
/// collision-unlikely at the volumes a session produces.
fn new_identifier() -> String {
    let mut rng = rand::thread_rng();
    (0..IDENTIFIER_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..IDENTIFIER_ALPHABET.len());
            IDENTIFIER_ALPHABET[idx] as char
        })
        .collect()
}
