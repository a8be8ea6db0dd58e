mod bot_controller;
mod engine;
mod food;
mod game_state;
mod mode;
mod outcome;
mod settings;
mod speed;
mod types;

pub mod snake;

pub use bot_controller::BotController;
pub use engine::SnakeEngine;
pub use food::place_food;
pub use game_state::SnakeGameState;
pub use mode::{GameMode, ModeConfig};
pub use outcome::TickOutcome;
pub use settings::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE, SnakeEngineSettings};
pub use speed::Speed;
pub use types::{DeathMarker, DeathReason, Direction, Point, WallCollisionMode};
