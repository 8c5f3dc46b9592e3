//! Error taxonomy. Per-domain enums composed into the top-level `WardenError`.
//!
//! Nothing in this crate family is fatal to the host process: every error is
//! caught at a flow boundary and resolved into a log record and/or an
//! actor-visible outcome.

mod dispatch_error;
mod storage_error;

pub use dispatch_error::DispatchError;
pub use storage_error::StorageError;

/// Convenience alias used across the workspace.
pub type WardenResult<T> = Result<T, WardenError>;

/// Top-level error for the report pipeline.
#[derive(Debug, thiserror::Error)]
pub enum WardenError {
    #[error("storage: {0}")]
    StorageError(#[from] StorageError),

    #[error("dispatch: {0}")]
    DispatchError(#[from] DispatchError),

    #[error("config: {reason}")]
    ConfigError { reason: String },
}
