use serde::{Deserialize, Serialize};

/// A resolved in-game actor: a player who reports, is reported, or acts as
/// staff. The session registry resolves live players into this shape before
/// the pipeline ever sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Display name at the time of the command.
    pub name: String,
    /// Stable per-actor identifier.
    pub steam_id: String,
}

impl Actor {
    pub fn new(name: impl Into<String>, steam_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steam_id: steam_id.into(),
        }
    }
}
