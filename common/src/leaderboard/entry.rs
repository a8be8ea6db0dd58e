use chrono::Local;
use serde::{Deserialize, Serialize};

/// Local date-time without offset, e.g. `2025-03-14T15:09:26.535897`.
pub fn current_timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.f")
        .to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub score: u32,
    #[serde(default = "current_timestamp")]
    pub timestamp: String,
}

impl LeaderboardEntry {
    pub fn new(player_name: impl Into<String>, score: u32) -> Self {
        Self::with_timestamp(player_name, score, current_timestamp())
    }

    pub fn with_timestamp(
        player_name: impl Into<String>,
        score: u32,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            score,
            timestamp: timestamp.into(),
        }
    }
}
