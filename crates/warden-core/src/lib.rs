//! # warden-core
//!
//! Foundation crate for the Warden report pipeline.
//! Defines the report model, config, errors, constants, and the traits the
//! host implements. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::WardenConfig;
pub use errors::{WardenError, WardenResult};
pub use models::{Actor, CancelOutcome, HandledOutcome, Report, SubmitOutcome};
