use serde::{Deserialize, Serialize};

use super::entry::LeaderboardEntry;

pub const MAX_ENTRIES: usize = 10;

/// Top scores, best first, at most [`MAX_ENTRIES`] long.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    #[serde(default)]
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// While the table has room every score qualifies; once full a score must
    /// beat the lowest entry outright.
    pub fn is_top_score(&self, score: u32) -> bool {
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        self.entries
            .iter()
            .map(|entry| entry.score)
            .min()
            .is_none_or(|lowest| score > lowest)
    }

    /// Returns a new table with `entry` ranked in. Among equal scores the
    /// earlier entry stays ahead.
    pub fn add_entry(&self, entry: LeaderboardEntry) -> Leaderboard {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend(self.entries.iter().cloned());
        entries.push(entry);
        Self::ranked(entries)
    }

    /// Re-establishes ordering and length on a table read from outside.
    pub fn normalized(self) -> Leaderboard {
        Self::ranked(self.entries)
    }

    fn ranked(mut entries: Vec<LeaderboardEntry>) -> Leaderboard {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_ENTRIES);
        Leaderboard { entries }
    }
}
