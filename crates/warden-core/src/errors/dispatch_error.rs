/// Notification-channel errors.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("network error: {reason}")]
    NetworkError { reason: String },

    #[error("channel rejected request: status {status}, body {body:?}")]
    RejectedStatus { status: u16, body: String },
}
