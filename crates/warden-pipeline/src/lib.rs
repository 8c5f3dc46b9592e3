//! # warden-pipeline
//!
//! The report lifecycle coordinator and its in-memory collaborators: the
//! per-actor cooldown gate, duplicate detection, the per-target threshold
//! escalator, and the frame queue that marshals enforcement actions back
//! onto the host's single-threaded context.

pub mod cooldown;
pub mod duplicate;
pub mod engine;
pub mod escalation;
pub mod frame;

pub use cooldown::CooldownGate;
pub use duplicate::{find_open_report, DuplicateOutcome};
pub use engine::{ReportEngine, SubmitRequest};
pub use escalation::{EscalationDecision, ThresholdEscalator};
pub use frame::{frame_queue, FrameDrain, FrameQueue};
