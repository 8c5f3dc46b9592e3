//! # warden-dispatch
//!
//! The notification channel boundary: fixed wire payloads and the
//! `WebhookClient` that delivers them over a bounded-timeout HTTP POST.

pub mod client;
pub mod notifier;
pub mod protocol;

pub use client::WebhookClient;
pub use notifier::INotifier;
pub use protocol::{CancelInstruction, HandledInstruction, ReportEvent};
