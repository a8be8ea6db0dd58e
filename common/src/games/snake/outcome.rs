use super::types::{DeathReason, Point};

/// Result of advancing the game by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continuing,
    AteFood,
    /// A life remains: the state is frozen until the snake is respawned.
    LifeLost { at: Point, reason: DeathReason },
    GameOver { at: Point, reason: DeathReason },
    /// The snake covers every cell, so no food can be placed. The state
    /// keeps the eaten food position, which is now the head cell; there is
    /// no food left to draw.
    BoardFilled,
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TickOutcome::GameOver { .. } | TickOutcome::BoardFilled)
    }

    pub fn death_position(&self) -> Option<Point> {
        match self {
            TickOutcome::LifeLost { at, .. } | TickOutcome::GameOver { at, .. } => Some(*at),
            _ => None,
        }
    }
}
