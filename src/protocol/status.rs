//! Status record
//!
//! The decoded summary of a server. Serializes with the field names the
//! HTTP endpoint has always used: `Online`, `Version`, `Motd`,
//! `CurrentPlayers`, `MaxPlayers`.

use serde::Serialize;

use crate::error::Result;

/// Status of a Minecraft server
///
/// Only the decoder creates a `Status`, so `online` is `true` for every
/// value a caller can observe. Player counts stay text, as sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Status {
    online: bool,
    version: String,
    motd: String,
    current_players: String,
    max_players: String,
}

impl Status {
    pub(crate) fn new(
        version: String,
        motd: String,
        current_players: String,
        max_players: String,
    ) -> Self {
        Self {
            online: true,
            version,
            motd,
            current_players,
            max_players,
        }
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Server version, e.g. `1.6.4`
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Message of the day
    pub fn motd(&self) -> &str {
        &self.motd
    }

    pub fn current_players(&self) -> &str {
        &self.current_players
    }

    pub fn max_players(&self) -> &str {
        &self.max_players
    }

    /// Encode as a JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
