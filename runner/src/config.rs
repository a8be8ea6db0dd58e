use std::path::PathBuf;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::config::app_data_dir;
use common::games::snake::SnakeEngineSettings;
use common::leaderboard::LeaderboardStore;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "bitcoin_snake_config.yaml";
const MAX_RESPAWN_DELAY_MS: u32 = 10_000;
const MAX_PLAYER_NAME_LENGTH: usize = 32;

pub fn default_config_path() -> PathBuf {
    app_data_dir().join(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub engine: SnakeEngineSettings,
    pub session: SessionConfig,
    pub leaderboard: LeaderboardConfig,
    pub player_name: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.engine.validate()?;
        self.session.validate()?;
        if let Some(name) = &self.player_name
            && name.chars().count() > MAX_PLAYER_NAME_LENGTH
        {
            return Err(format!(
                "player_name must not exceed {} characters",
                MAX_PLAYER_NAME_LENGTH
            ));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SessionConfig {
    pub respawn_delay_ms: u32,
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.respawn_delay_ms > MAX_RESPAWN_DELAY_MS {
            return Err(format!(
                "respawn_delay_ms must not exceed {}",
                MAX_RESPAWN_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LeaderboardConfig {
    pub path: Option<PathBuf>,
}

impl LeaderboardConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(LeaderboardStore::default_path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: SnakeEngineSettings::default(),
            session: SessionConfig {
                respawn_delay_ms: 1000,
            },
            leaderboard: LeaderboardConfig::default(),
            player_name: None,
        }
    }
}
