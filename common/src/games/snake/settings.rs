use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::WallCollisionMode;

pub const DEFAULT_GRID_SIZE: i32 = 24;
pub const MIN_GRID_SIZE: i32 = 10;
pub const MAX_GRID_SIZE: i32 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeEngineSettings {
    pub grid_size: i32,
    pub wall_collision_mode: WallCollisionMode,
}

impl Default for SnakeEngineSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            wall_collision_mode: WallCollisionMode::Death,
        }
    }
}

impl Validate for SnakeEngineSettings {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size < MIN_GRID_SIZE || self.grid_size > MAX_GRID_SIZE {
            return Err(format!(
                "Grid size must be between {} and {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE
            ));
        }
        Ok(())
    }
}
