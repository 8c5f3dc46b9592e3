/// Warden system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Length of a report identifier.
pub const IDENTIFIER_LEN: usize = 15;

/// Alphabet a report identifier is drawn from.
pub const IDENTIFIER_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Hard timeout for a single notification-channel request.
pub const DISPATCH_TIMEOUT_SECS: u64 = 10;

/// Placeholder for server context fields the host left unset.
pub const EMPTY_FIELD: &str = "Empty";
