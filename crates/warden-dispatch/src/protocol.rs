//! Wire payloads — a fixed, explicit schema for the channel's single JSON
//! endpoint. Optional fields are omitted, not sent as null.

use serde::{Deserialize, Serialize};

use warden_core::models::{Actor, Report};

/// Actions the channel understands beyond a plain submission.
pub const ACTION_CANCEL: &str = "cancel";
pub const ACTION_HANDLED: &str = "handled";

/// A report submission or a full cancellation event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEvent {
    pub author_name: String,
    pub author_steamid: String,
    pub target_name: String,
    pub target_steamid: String,
    pub reason: String,
    pub server_name: String,
    pub server_ip: String,
    pub map_name: String,
    /// Locally generated correlation key.
    pub identifier: String,
    /// Absent on plain submissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_steamid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled_by_author: Option<bool>,
}

impl ReportEvent {
    /// A fresh submission.
    #[allow(clippy::too_many_arguments)]
    pub fn submission(
        author: &Actor,
        target: &Actor,
        reason: &str,
        server_name: &str,
        server_ip: &str,
        map_name: &str,
        identifier: &str,
    ) -> Self {
        Self {
            author_name: author.name.clone(),
            author_steamid: author.steam_id.clone(),
            target_name: target.name.clone(),
            target_steamid: target.steam_id.clone(),
            reason: reason.to_string(),
            server_name: server_name.to_string(),
            server_ip: server_ip.to_string(),
            map_name: map_name.to_string(),
            identifier: identifier.to_string(),
            action: None,
            admin_name: None,
            admin_steamid: None,
            canceled_by_author: None,
        }
    }

    /// A cancellation event reusing the stored report's fields. `admin` is
    /// the staff identity for staff cancellations; `None` marks a
    /// self-cancel by the author. The map name is the current one, not the
    /// one the report was filed on.
    pub fn cancellation(report: &Report, map_name: &str, admin: Option<&Actor>) -> Self {
        Self {
            author_name: report.author_name.clone(),
            author_steamid: report.author_steamid.clone(),
            target_name: report.target_name.clone(),
            target_steamid: report.target_steamid.clone(),
            reason: report.reason.clone(),
            server_name: report.server_name.clone(),
            server_ip: report.server_ip.clone(),
            map_name: map_name.to_string(),
            identifier: report.identifier.clone(),
            action: Some(ACTION_CANCEL.to_string()),
            admin_name: admin.map(|a| a.name.clone()),
            admin_steamid: admin.map(|a| a.steam_id.clone()),
            canceled_by_author: Some(admin.is_none()),
        }
    }
}

/// Cancellation addressed by the channel's own correlation id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelInstruction {
    pub message_id: String,
    pub action: String,
}

impl CancelInstruction {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            action: ACTION_CANCEL.to_string(),
        }
    }
}

/// Mark an external record handled by a staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandledInstruction {
    pub message_id: String,
    pub admin_name: String,
    pub admin_steamid: String,
    pub action: String,
}

impl HandledInstruction {
    pub fn new(message_id: impl Into<String>, admin: &Actor) -> Self {
        Self {
            message_id: message_id.into(),
            admin_name: admin.name.clone(),
            admin_steamid: admin.steam_id.clone(),
            action: ACTION_HANDLED.to_string(),
        }
    }
}

/// Acknowledgment body. Any 2xx is success; the `identifier` echo is
/// optional and used as the correlation id when present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookAck {
    #[serde(default)]
    pub identifier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(name: &str, id: &str) -> Actor {
        Actor::new(name, id)
    }

    fn stored_report() -> Report {
        Report {
            identifier: "ABC123DEF456GHI".to_string(),
            message_id: "m-1".to_string(),
            author_name: "p1".to_string(),
            author_steamid: "1".to_string(),
            target_name: "p2".to_string(),
            target_steamid: "2".to_string(),
            reason: "cheating".to_string(),
            server_name: "srv".to_string(),
            server_ip: "10.0.0.1:27015".to_string(),
            map_name: "de_inferno".to_string(),
            created_at: chrono::Utc::now(),
            cancelled: false,
            cancelled_by: None,
            cancelled_by_steamid: None,
            cancelled_by_staff: false,
        }
    }

    #[test]
    fn submission_omits_optional_fields() {
        let event = ReportEvent::submission(
            &actor("p1", "1"),
            &actor("p2", "2"),
            "cheating",
            "srv",
            "10.0.0.1:27015",
            "de_dust2",
            "ABC123DEF456GHI",
        );
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["author_steamid"], "1");
        assert_eq!(json["identifier"], "ABC123DEF456GHI");
        assert!(json.get("action").is_none());
        assert!(json.get("admin_name").is_none());
        assert!(json.get("canceled_by_author").is_none());
    }

    #[test]
    fn author_cancellation_is_flagged() {
        let event = ReportEvent::cancellation(&stored_report(), "de_mirage", None);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["action"], "cancel");
        assert_eq!(json["canceled_by_author"], true);
        // The current map, not the one the report was filed on.
        assert_eq!(json["map_name"], "de_mirage");
        assert!(json.get("admin_name").is_none());
    }

    #[test]
    fn staff_cancellation_carries_admin_identity() {
        let staff = actor("mod", "9");
        let event = ReportEvent::cancellation(&stored_report(), "de_mirage", Some(&staff));
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["canceled_by_author"], false);
        assert_eq!(json["admin_name"], "mod");
        assert_eq!(json["admin_steamid"], "9");
    }

    #[test]
    fn cancel_instruction_shape() {
        let json = serde_json::to_value(CancelInstruction::new("m-1")).unwrap();
        assert_eq!(json["message_id"], "m-1");
        assert_eq!(json["action"], "cancel");
    }

    #[test]
    fn handled_instruction_shape() {
        let json =
            serde_json::to_value(HandledInstruction::new("m-1", &actor("mod", "9"))).unwrap();
        assert_eq!(json["action"], "handled");
        assert_eq!(json["admin_steamid"], "9");
    }

    #[test]
    fn ack_parses_with_and_without_identifier() {
        let ack: WebhookAck = serde_json::from_str(r#"{"identifier":"abc123"}"#).unwrap();
        assert_eq!(ack.identifier.as_deref(), Some("abc123"));

        let ack: WebhookAck = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(ack.identifier.is_none());
    }
}
