use std::path::{Path, PathBuf};

use crate::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, JsonConfigSerializer,
    MemoryContentProvider, app_data_dir,
};
use crate::{log, log_error};
use super::board::Leaderboard;
use super::entry::LeaderboardEntry;

pub const LEADERBOARD_FILE_NAME: &str = "leaderboard.json";
pub const ANONYMOUS_PLAYER: &str = "Anonymous";

#[derive(Debug, PartialEq, Eq)]
pub enum LeaderboardError {
    Read(String),
    Decode(String),
    Encode(String),
    Write(String),
}

impl std::fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaderboardError::Read(e) => write!(f, "Read error: {}", e),
            LeaderboardError::Decode(e) => write!(f, "Decode error: {}", e),
            LeaderboardError::Encode(e) => write!(f, "Encode error: {}", e),
            LeaderboardError::Write(e) => write!(f, "Write error: {}", e),
        }
    }
}

impl std::error::Error for LeaderboardError {}

/// Persists the leaderboard through a content provider.
///
/// Persistence is best effort: [`load`](Self::load) falls back to an empty
/// table and [`save`](Self::save) drops the write, both after logging the
/// failure. Callers never see an error.
pub struct LeaderboardStore<TContentProvider, TSerializer = JsonConfigSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<Leaderboard>,
{
    content_provider: TContentProvider,
    serializer: TSerializer,
}

impl LeaderboardStore<FileContentConfigProvider, JsonConfigSerializer> {
    pub fn from_json_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            JsonConfigSerializer::new(),
        )
    }

    pub fn default_path() -> PathBuf {
        app_data_dir().join(LEADERBOARD_FILE_NAME)
    }

    pub fn file_path(&self) -> &Path {
        self.content_provider.file_path()
    }
}

impl LeaderboardStore<MemoryContentProvider, JsonConfigSerializer> {
    pub fn in_memory() -> Self {
        Self::new(MemoryContentProvider::new(), JsonConfigSerializer::new())
    }
}

impl<TContentProvider, TSerializer> LeaderboardStore<TContentProvider, TSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<Leaderboard>,
{
    pub fn new(content_provider: TContentProvider, serializer: TSerializer) -> Self {
        Self {
            content_provider,
            serializer,
        }
    }

    pub fn load(&self) -> Leaderboard {
        match self.try_load() {
            Ok(leaderboard) => leaderboard,
            Err(e) => {
                log_error!("Error loading leaderboard: {}", e);
                Leaderboard::new()
            }
        }
    }

    pub fn save(&self, leaderboard: &Leaderboard) {
        if let Err(e) = self.try_save(leaderboard) {
            log_error!("Error saving leaderboard: {}", e);
        }
    }

    pub fn is_top_score(&self, score: u32) -> bool {
        self.load().is_top_score(score)
    }

    /// Loads the stored table, ranks a freshly stamped entry into it, saves
    /// and returns the result.
    pub fn add_score(&self, player_name: &str, score: u32) -> Leaderboard {
        let name = match player_name.trim() {
            "" => ANONYMOUS_PLAYER,
            trimmed => trimmed,
        };

        let leaderboard = self.load().add_entry(LeaderboardEntry::new(name, score));
        self.save(&leaderboard);
        log!("Recorded score {} for {}", score, name);
        leaderboard
    }

    fn try_load(&self) -> Result<Leaderboard, LeaderboardError> {
        let content = self
            .content_provider
            .get_config_content()
            .map_err(LeaderboardError::Read)?;

        match content {
            Some(content) => {
                let leaderboard = self
                    .serializer
                    .deserialize(&content)
                    .map_err(LeaderboardError::Decode)?;
                Ok(leaderboard.normalized())
            }
            None => Ok(Leaderboard::new()),
        }
    }

    fn try_save(&self, leaderboard: &Leaderboard) -> Result<(), LeaderboardError> {
        let content = self
            .serializer
            .serialize(leaderboard)
            .map_err(LeaderboardError::Encode)?;
        self.content_provider
            .set_config_content(&content)
            .map_err(LeaderboardError::Write)
    }
}
