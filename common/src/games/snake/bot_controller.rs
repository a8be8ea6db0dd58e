use super::game_state::SnakeGameState;
use super::settings::SnakeEngineSettings;
use super::types::{Direction, Point, WallCollisionMode};

/// Greedy autopilot: heads for the food along the shortest Manhattan route
/// without ever reversing or stepping onto its own body.
pub struct BotController;

impl BotController {
    pub fn calculate_move(state: &SnakeGameState, settings: &SnakeEngineSettings) -> Direction {
        let head = state.head();
        let current_direction = state.direction;

        let mut best_dir = None;
        let mut best_distance = i32::MAX;

        for dir in Self::get_valid_directions(current_direction) {
            if let Some(next_pos) = Self::calculate_next_position(head, dir, settings)
                && Self::is_safe_position(next_pos, state)
            {
                let distance = Self::manhattan_distance(next_pos, state.food, settings);
                if distance < best_distance {
                    best_distance = distance;
                    best_dir = Some(dir);
                }
            }
        }

        best_dir.unwrap_or(current_direction)
    }

    fn get_valid_directions(current: Direction) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |d| !d.is_opposite(&current))
    }

    fn manhattan_distance(a: Point, b: Point, settings: &SnakeEngineSettings) -> i32 {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();

        match settings.wall_collision_mode {
            WallCollisionMode::Death => dx + dy,
            WallCollisionMode::WrapAround => {
                let size = settings.grid_size;
                dx.min(size - dx) + dy.min(size - dy)
            }
        }
    }

    fn calculate_next_position(
        from: Point,
        direction: Direction,
        settings: &SnakeEngineSettings,
    ) -> Option<Point> {
        let next = from.step(direction);
        match settings.wall_collision_mode {
            WallCollisionMode::Death => next.is_within(settings.grid_size).then_some(next),
            WallCollisionMode::WrapAround => Some(next.wrapped(settings.grid_size)),
        }
    }

    // The tail still counts: the engine checks collisions before the tail moves.
    fn is_safe_position(pos: Point, state: &SnakeGameState) -> bool {
        !state.occupies(pos)
    }
}
