use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeConfig {
    pub initial_lives: u32,
    pub initial_pauses: u32,
    pub allow_pause_toggle: bool,
    pub records_scores: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Paid run: one pause, no extra life, eligible for the leaderboard.
    Glory,
    /// Free run: one extra life, no pauses, never recorded.
    Practice,
}

impl GameMode {
    pub fn config(&self) -> ModeConfig {
        match self {
            GameMode::Glory => ModeConfig {
                initial_lives: 0,
                initial_pauses: 1,
                allow_pause_toggle: true,
                records_scores: true,
            },
            GameMode::Practice => ModeConfig {
                initial_lives: 1,
                initial_pauses: 0,
                allow_pause_toggle: false,
                records_scores: false,
            },
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Glory => write!(f, "glory"),
            GameMode::Practice => write!(f, "practice"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "glory" => Ok(GameMode::Glory),
            "practice" => Ok(GameMode::Practice),
            other => Err(format!("Unknown game mode '{}', expected glory or practice", other)),
        }
    }
}
