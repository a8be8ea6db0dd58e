use super::outcome::TickOutcome;
use super::snake;
use super::types::{DeathMarker, Direction, Point};

/// One frame of a session. Transitions never mutate a state; the engine
/// builds the next value from the previous one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeGameState {
    pub snake: Vec<Point>,
    pub food: Point,
    pub direction: Direction,
    pub is_game_over: bool,
    pub score: u32,
    pub pauses: u32,
    pub lives: u32,
    pub death: Option<DeathMarker>,
}

impl SnakeGameState {
    pub fn head(&self) -> Point {
        snake::head(&self.snake)
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn death_position(&self) -> Option<Point> {
        self.death.map(|marker| marker.at)
    }

    /// A life was lost and the driver has not respawned the snake yet.
    pub fn is_awaiting_respawn(&self) -> bool {
        !self.is_game_over && self.death.is_some()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.snake.contains(&point)
    }

    /// Status of this state as a tick outcome. A state that is neither dead
    /// nor over reports `Continuing`.
    pub fn outcome(&self) -> TickOutcome {
        match (self.is_game_over, self.death) {
            (true, Some(DeathMarker { at, reason })) => TickOutcome::GameOver { at, reason },
            (true, None) => TickOutcome::BoardFilled,
            (false, Some(DeathMarker { at, reason })) => TickOutcome::LifeLost { at, reason },
            (false, None) => TickOutcome::Continuing,
        }
    }
}
