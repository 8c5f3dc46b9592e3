//! WebhookClient — bounded-timeout JSON POST to the channel's single
//! endpoint. No retries: a failed request is terminal for that attempt.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use warden_core::constants::DISPATCH_TIMEOUT_SECS;
use warden_core::errors::{DispatchError, WardenResult};
use warden_core::models::Actor;

use crate::notifier::INotifier;
use crate::protocol::{CancelInstruction, HandledInstruction, ReportEvent, WebhookAck};

/// HTTP implementation of `INotifier`.
pub struct WebhookClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WebhookClient {
    /// Build a client for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> WardenResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DISPATCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| DispatchError::NetworkError {
                reason: e.to_string(),
            })?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// POST a payload and return the response body on any 2xx.
    async fn post<T: Serialize + ?Sized>(&self, payload: &T) -> WardenResult<String> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| DispatchError::NetworkError {
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body = %body, "channel response");

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), body = %body, "channel rejected request");
            return Err(DispatchError::RejectedStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }
        Ok(body)
    }
}

#[async_trait]
impl INotifier for WebhookClient {
    async fn submit(&self, event: &ReportEvent) -> WardenResult<String> {
        let body = self.post(event).await?;

        // Prefer the channel's echo, fall back to the local identifier, and
        // as a last resort synthesize one so the record stays addressable.
        let ack: WebhookAck = serde_json::from_str(&body).unwrap_or_default();
        let correlation = ack
            .identifier
            .filter(|id| !id.is_empty())
            .or_else(|| {
                (!event.identifier.is_empty()).then(|| event.identifier.clone())
            })
            .unwrap_or_else(|| {
                let fallback = format!("report-{}", &uuid::Uuid::new_v4().simple().to_string()[..8]);
                tracing::warn!(fallback = %fallback, "no identifier in request or ack");
                fallback
            });
        Ok(correlation)
    }

    async fn cancel(&self, message_id: &str) -> WardenResult<()> {
        self.post(&CancelInstruction::new(message_id)).await?;
        Ok(())
    }

    async fn mark_handled(&self, message_id: &str, admin: &Actor) -> WardenResult<()> {
        self.post(&HandledInstruction::new(message_id, admin)).await?;
        Ok(())
    }
}
