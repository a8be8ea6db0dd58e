use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use super::food::place_food;
use super::game_state::SnakeGameState;
use super::mode::GameMode;
use super::outcome::TickOutcome;
use super::settings::SnakeEngineSettings;
use super::snake::{self, INITIAL_DIRECTION};
use super::types::{DeathMarker, DeathReason, Direction, Point, WallCollisionMode};

/// Single-player snake rules on a square grid.
///
/// The engine holds only its settings. Every operation takes the previous
/// state by reference and returns the next one; randomness comes from the
/// caller's [`SessionRng`].
#[derive(Clone, Debug)]
pub struct SnakeEngine {
    settings: SnakeEngineSettings,
}

impl SnakeEngine {
    pub fn new(settings: SnakeEngineSettings) -> Result<Self, String> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &SnakeEngineSettings {
        &self.settings
    }

    pub fn grid_size(&self) -> i32 {
        self.settings.grid_size
    }

    pub fn create_initial_state(&self, pauses: u32, lives: u32) -> SnakeGameState {
        let grid_size = self.grid_size();
        SnakeGameState {
            snake: snake::initial_body(grid_size),
            food: snake::initial_food(grid_size),
            direction: INITIAL_DIRECTION,
            is_game_over: false,
            score: 0,
            pauses,
            lives,
            death: None,
        }
    }

    pub fn create_initial_state_for_mode(&self, mode: GameMode) -> SnakeGameState {
        let config = mode.config();
        self.create_initial_state(config.initial_pauses, config.initial_lives)
    }

    /// Advances one tick and returns only the next state.
    pub fn update_game(
        &self,
        state: &SnakeGameState,
        requested_direction: Direction,
        rng: &mut SessionRng,
    ) -> SnakeGameState {
        self.tick(state, requested_direction, rng).0
    }

    /// Advances one tick.
    ///
    /// Requesting the exact opposite of the current heading is fatal, as is
    /// leaving the grid (in [`WallCollisionMode::Death`]) or stepping onto any
    /// current segment, tail included. A fatal move with lives left only marks
    /// the death cell; the state then stays frozen until
    /// [`respawn_snake`](Self::respawn_snake). Terminal states are returned
    /// unchanged.
    pub fn tick(
        &self,
        state: &SnakeGameState,
        requested_direction: Direction,
        rng: &mut SessionRng,
    ) -> (SnakeGameState, TickOutcome) {
        if state.is_game_over || state.death.is_some() {
            return (state.clone(), state.outcome());
        }

        let head = state.head();

        if requested_direction.is_opposite(&state.direction) {
            let at = match self.settings.wall_collision_mode {
                WallCollisionMode::Death => head.step(requested_direction),
                WallCollisionMode::WrapAround => {
                    head.step(requested_direction).wrapped(self.grid_size())
                }
            };
            return Self::lose_life(state, at, DeathReason::Reversal);
        }

        let new_head = match self.next_head(head, requested_direction) {
            Ok(point) => point,
            Err(at) => return Self::lose_life(state, at, DeathReason::WallCollision),
        };

        if state.occupies(new_head) {
            return Self::lose_life(state, new_head, DeathReason::SelfCollision);
        }

        if new_head == state.food {
            return self.grow(state, new_head, requested_direction, rng);
        }

        let mut body = Vec::with_capacity(state.snake.len());
        body.push(new_head);
        body.extend_from_slice(&state.snake[..state.snake.len() - 1]);

        let next = SnakeGameState {
            snake: body,
            food: state.food,
            direction: requested_direction,
            is_game_over: false,
            score: state.score,
            pauses: state.pauses,
            lives: state.lives,
            death: None,
        };
        (next, TickOutcome::Continuing)
    }

    /// Resolves a pending death: fresh starting snake heading right, new food,
    /// one life fewer. Score and pauses carry over. States without a pending
    /// death, and terminal states, are returned unchanged.
    pub fn respawn_snake(&self, state: &SnakeGameState, rng: &mut SessionRng) -> SnakeGameState {
        if !state.is_awaiting_respawn() {
            return state.clone();
        }

        let grid_size = self.grid_size();
        let body = snake::initial_body(grid_size);
        let food = place_food(&body, grid_size, rng)
            .unwrap_or_else(|| snake::initial_food(grid_size));
        let lives = state.lives.saturating_sub(1);

        log!("Snake respawned, {} extra lives left", lives);

        SnakeGameState {
            snake: body,
            food,
            direction: INITIAL_DIRECTION,
            is_game_over: false,
            score: state.score,
            pauses: state.pauses,
            lives,
            death: None,
        }
    }

    /// Spends one pause. `None` when the mode forbids pausing, no pauses are
    /// left, or the snake is not in play.
    pub fn use_pause(&self, state: &SnakeGameState, mode: GameMode) -> Option<SnakeGameState> {
        if !mode.config().allow_pause_toggle
            || state.pauses == 0
            || state.is_game_over
            || state.death.is_some()
        {
            return None;
        }

        Some(SnakeGameState {
            pauses: state.pauses - 1,
            ..state.clone()
        })
    }

    fn next_head(&self, head: Point, direction: Direction) -> Result<Point, Point> {
        let stepped = head.step(direction);
        match self.settings.wall_collision_mode {
            WallCollisionMode::Death if stepped.is_within(self.grid_size()) => Ok(stepped),
            WallCollisionMode::Death => Err(stepped),
            WallCollisionMode::WrapAround => Ok(stepped.wrapped(self.grid_size())),
        }
    }

    fn grow(
        &self,
        state: &SnakeGameState,
        new_head: Point,
        direction: Direction,
        rng: &mut SessionRng,
    ) -> (SnakeGameState, TickOutcome) {
        let mut body = Vec::with_capacity(state.snake.len() + 1);
        body.push(new_head);
        body.extend_from_slice(&state.snake);
        let score = state.score + 1;

        log!("Ate food at ({}, {}). Score: {}", new_head.x, new_head.y, score);

        match place_food(&body, self.grid_size(), rng) {
            Some(food) => {
                let next = SnakeGameState {
                    snake: body,
                    food,
                    direction,
                    is_game_over: false,
                    score,
                    pauses: state.pauses,
                    lives: state.lives,
                    death: None,
                };
                (next, TickOutcome::AteFood)
            }
            None => {
                log!("Board filled with score {}", score);
                let next = SnakeGameState {
                    snake: body,
                    food: state.food,
                    direction,
                    is_game_over: true,
                    score,
                    pauses: state.pauses,
                    lives: state.lives,
                    death: None,
                };
                (next, TickOutcome::BoardFilled)
            }
        }
    }

    fn lose_life(
        state: &SnakeGameState,
        at: Point,
        reason: DeathReason,
    ) -> (SnakeGameState, TickOutcome) {
        let death = Some(DeathMarker { at, reason });

        if state.lives > 0 {
            log!("Life lost at ({}, {}): {:?}", at.x, at.y, reason);
            let next = SnakeGameState {
                death,
                ..state.clone()
            };
            return (next, TickOutcome::LifeLost { at, reason });
        }

        log!("Game over at ({}, {}): {:?}. Score: {}", at.x, at.y, reason, state.score);
        let next = SnakeGameState {
            is_game_over: true,
            death,
            ..state.clone()
        };
        (next, TickOutcome::GameOver { at, reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_engine() -> SnakeEngine {
        SnakeEngine::new(SnakeEngineSettings::default()).unwrap()
    }

    fn create_wrap_engine() -> SnakeEngine {
        SnakeEngine::new(SnakeEngineSettings {
            grid_size: 24,
            wall_collision_mode: WallCollisionMode::WrapAround,
        })
        .unwrap()
    }

    fn state_with(snake: Vec<Point>, direction: Direction, lives: u32) -> SnakeGameState {
        SnakeGameState {
            snake,
            food: Point::new(0, 0),
            direction,
            is_game_over: false,
            score: 0,
            pauses: 0,
            lives,
            death: None,
        }
    }

    /// Five segments bent into a hook: turning down from the head runs into
    /// the body.
    fn hooked_snake() -> Vec<Point> {
        vec![
            Point::new(5, 5),
            Point::new(6, 5),
            Point::new(6, 6),
            Point::new(5, 6),
            Point::new(4, 6),
        ]
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let result = SnakeEngine::new(SnakeEngineSettings {
            grid_size: 5,
            wall_collision_mode: WallCollisionMode::Death,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_initial_state() {
        let engine = create_engine();
        let state = engine.create_initial_state(1, 0);
        assert_eq!(
            state.snake,
            vec![Point::new(8, 12), Point::new(7, 12), Point::new(6, 12)]
        );
        assert_eq!(state.food, Point::new(16, 12));
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.pauses, 1);
        assert_eq!(state.lives, 0);
        assert!(!state.is_game_over);
        assert_eq!(state.death_position(), None);
    }

    #[test]
    fn test_initial_state_for_mode() {
        let engine = create_engine();
        let practice = engine.create_initial_state_for_mode(GameMode::Practice);
        assert_eq!((practice.pauses, practice.lives), (0, 1));
        let glory = engine.create_initial_state_for_mode(GameMode::Glory);
        assert_eq!((glory.pauses, glory.lives), (1, 0));
    }

    #[test]
    fn test_moves_forward() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let state = engine.create_initial_state(1, 0);
        let (next, outcome) = engine.tick(&state, Direction::Right, &mut rng);
        assert_eq!(outcome, TickOutcome::Continuing);
        assert_eq!(
            next.snake,
            vec![Point::new(9, 12), Point::new(8, 12), Point::new(7, 12)]
        );
        assert_eq!(next.food, state.food);
        assert_eq!(next.score, 0);
    }

    #[test]
    fn test_turn_changes_direction() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let state = engine.create_initial_state(1, 0);
        let next = engine.update_game(&state, Direction::Up, &mut rng);
        assert_eq!(next.direction, Direction::Up);
        assert_eq!(next.head(), Point::new(8, 11));
        assert_eq!(next.len(), 3);
    }

    #[test]
    fn test_reversal_without_lives_is_game_over() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let state = engine.create_initial_state(1, 0);
        let (next, outcome) = engine.tick(&state, Direction::Left, &mut rng);
        assert_eq!(
            outcome,
            TickOutcome::GameOver { at: Point::new(7, 12), reason: DeathReason::Reversal }
        );
        assert!(next.is_game_over);
        assert_eq!(next.death_position(), Some(Point::new(7, 12)));
        assert_eq!(next.snake, state.snake);
        assert_eq!(next.direction, Direction::Right);
    }

    #[test]
    fn test_reversal_with_life_marks_pending_death() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let state = engine.create_initial_state(0, 1);
        let (next, outcome) = engine.tick(&state, Direction::Left, &mut rng);
        assert!(matches!(outcome, TickOutcome::LifeLost { reason: DeathReason::Reversal, .. }));
        assert!(!next.is_game_over);
        assert!(next.is_awaiting_respawn());
        assert_eq!(next.snake, state.snake);
        assert_eq!(next.food, state.food);
        assert_eq!(next.score, state.score);
        assert_eq!(next.direction, state.direction);
        assert_eq!(next.lives, 1);
    }

    #[test]
    fn test_reversal_is_fatal_for_every_heading() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        for direction in Direction::ALL {
            let state = state_with(
                vec![Point::new(12, 12), Point::new(12, 12).step(direction.opposite())],
                direction,
                0,
            );
            let (next, outcome) = engine.tick(&state, direction.opposite(), &mut rng);
            assert!(next.is_game_over);
            assert_eq!(
                outcome.death_position(),
                Some(Point::new(12, 12).step(direction.opposite()))
            );
        }
    }

    #[test]
    fn test_wall_collision() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let state = state_with(
            vec![Point::new(23, 4), Point::new(22, 4), Point::new(21, 4)],
            Direction::Right,
            0,
        );
        let (next, outcome) = engine.tick(&state, Direction::Right, &mut rng);
        assert_eq!(
            outcome,
            TickOutcome::GameOver { at: Point::new(24, 4), reason: DeathReason::WallCollision }
        );
        assert_eq!(next.death_position(), Some(Point::new(24, 4)));
    }

    #[test]
    fn test_wall_collision_at_top_edge_with_life() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let state = state_with(
            vec![Point::new(3, 0), Point::new(3, 1), Point::new(3, 2)],
            Direction::Up,
            2,
        );
        let (next, outcome) = engine.tick(&state, Direction::Up, &mut rng);
        assert_eq!(
            outcome,
            TickOutcome::LifeLost { at: Point::new(3, -1), reason: DeathReason::WallCollision }
        );
        assert_eq!(next.lives, 2);
        assert!(!next.is_game_over);
    }

    #[test]
    fn test_wrap_around_crosses_edge() {
        let engine = create_wrap_engine();
        let mut rng = SessionRng::new(42);
        let state = state_with(
            vec![Point::new(23, 4), Point::new(22, 4), Point::new(21, 4)],
            Direction::Right,
            0,
        );
        let (next, outcome) = engine.tick(&state, Direction::Right, &mut rng);
        assert_eq!(outcome, TickOutcome::Continuing);
        assert_eq!(next.head(), Point::new(0, 4));
    }

    #[test]
    fn test_wrap_around_reversal_marker_is_wrapped() {
        let engine = create_wrap_engine();
        let mut rng = SessionRng::new(42);
        let state = state_with(
            vec![Point::new(0, 4), Point::new(23, 4), Point::new(22, 4)],
            Direction::Right,
            0,
        );
        let (_, outcome) = engine.tick(&state, Direction::Left, &mut rng);
        assert_eq!(outcome.death_position(), Some(Point::new(23, 4)));
    }

    #[test]
    fn test_self_collision_keeps_length() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let state = state_with(hooked_snake(), Direction::Left, 0);
        let (next, outcome) = engine.tick(&state, Direction::Down, &mut rng);
        assert_eq!(
            outcome,
            TickOutcome::GameOver { at: Point::new(5, 6), reason: DeathReason::SelfCollision }
        );
        assert_eq!(next.len(), 5);
        assert_eq!(next.snake, state.snake);
    }

    #[test]
    fn test_tail_cell_is_fatal() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let state = state_with(
            vec![Point::new(5, 5), Point::new(6, 5), Point::new(6, 6), Point::new(5, 6)],
            Direction::Left,
            0,
        );
        let (_, outcome) = engine.tick(&state, Direction::Down, &mut rng);
        assert_eq!(
            outcome,
            TickOutcome::GameOver { at: Point::new(5, 6), reason: DeathReason::SelfCollision }
        );
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let mut state = engine.create_initial_state(1, 0);
        state.food = Point::new(9, 12);

        let (next, outcome) = engine.tick(&state, Direction::Right, &mut rng);
        assert_eq!(outcome, TickOutcome::AteFood);
        assert_eq!(next.score, 1);
        assert_eq!(next.len(), 4);
        assert_eq!(next.head(), Point::new(9, 12));
        assert_eq!(&next.snake[1..], &state.snake[..]);
        assert!(!next.occupies(next.food));
        assert!(next.food.is_within(24));
    }

    #[test]
    fn test_game_over_is_fixed_point() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let state = engine.create_initial_state(1, 0);
        let over = engine.update_game(&state, Direction::Left, &mut rng);
        assert!(over.is_game_over);
        for direction in Direction::ALL {
            let (again, outcome) = engine.tick(&over, direction, &mut rng);
            assert_eq!(again, over);
            assert!(outcome.is_terminal());
        }
    }

    #[test]
    fn test_pending_death_is_frozen() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let state = engine.create_initial_state(0, 1);
        let pending = engine.update_game(&state, Direction::Left, &mut rng);
        let again = engine.update_game(&pending, Direction::Up, &mut rng);
        assert_eq!(again, pending);
    }

    #[test]
    fn test_respawn_resets_snake_and_spends_life() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let mut state = engine.create_initial_state(0, 1);
        state.score = 7;
        let moved = engine.update_game(&state, Direction::Up, &mut rng);
        let pending = engine.update_game(&moved, Direction::Down, &mut rng);
        assert!(pending.is_awaiting_respawn());

        let respawned = engine.respawn_snake(&pending, &mut rng);
        assert_eq!(respawned.snake, snake::initial_body(24));
        assert_eq!(respawned.direction, Direction::Right);
        assert_eq!(respawned.lives, 0);
        assert_eq!(respawned.score, 7);
        assert_eq!(respawned.pauses, 0);
        assert_eq!(respawned.death, None);
        assert!(!respawned.occupies(respawned.food));
        assert_eq!(respawned.outcome(), TickOutcome::Continuing);
    }

    #[test]
    fn test_respawn_without_pending_death_is_noop() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let state = engine.create_initial_state(0, 1);
        assert_eq!(engine.respawn_snake(&state, &mut rng), state);

        let over = engine.update_game(&engine.create_initial_state(1, 0), Direction::Left, &mut rng);
        assert_eq!(engine.respawn_snake(&over, &mut rng), over);
    }

    #[test]
    fn test_second_death_after_respawn_is_final() {
        let engine = create_engine();
        let mut rng = SessionRng::new(42);
        let state = engine.create_initial_state_for_mode(GameMode::Practice);
        let pending = engine.update_game(&state, Direction::Left, &mut rng);
        let respawned = engine.respawn_snake(&pending, &mut rng);
        let (over, outcome) = engine.tick(&respawned, Direction::Left, &mut rng);
        assert!(matches!(outcome, TickOutcome::GameOver { .. }));
        assert!(over.is_game_over);
    }

    #[test]
    fn test_use_pause_in_glory() {
        let engine = create_engine();
        let state = engine.create_initial_state_for_mode(GameMode::Glory);
        let paused = engine.use_pause(&state, GameMode::Glory).unwrap();
        assert_eq!(paused.pauses, 0);
        assert_eq!(paused.snake, state.snake);
        assert!(engine.use_pause(&paused, GameMode::Glory).is_none());
    }

    #[test]
    fn test_use_pause_refused_in_practice() {
        let engine = create_engine();
        let mut state = engine.create_initial_state_for_mode(GameMode::Practice);
        state.pauses = 3;
        assert!(engine.use_pause(&state, GameMode::Practice).is_none());
    }

    #[test]
    fn test_board_filled_ends_game() {
        let engine = SnakeEngine::new(SnakeEngineSettings {
            grid_size: 10,
            wall_collision_mode: WallCollisionMode::Death,
        })
        .unwrap();
        let mut rng = SessionRng::new(42);

        // Boustrophedon path over all cells except (0, 0), head at (1, 0).
        let mut body = Vec::new();
        for y in (0..10).rev() {
            let row: Vec<i32> = if y % 2 == 1 { (0..10).collect() } else { (0..10).rev().collect() };
            for x in row {
                body.push(Point::new(x, y));
            }
        }
        body.retain(|p| *p != Point::new(0, 0));
        body.reverse();
        assert_eq!(body[0], Point::new(1, 0));

        let state = SnakeGameState {
            snake: body,
            food: Point::new(0, 0),
            direction: Direction::Left,
            is_game_over: false,
            score: 96,
            pauses: 0,
            lives: 0,
            death: None,
        };
        let (next, outcome) = engine.tick(&state, Direction::Left, &mut rng);
        assert_eq!(outcome, TickOutcome::BoardFilled);
        assert!(next.is_game_over);
        assert_eq!(next.len(), 100);
        assert_eq!(next.score, 97);
        assert_eq!(next.outcome(), TickOutcome::BoardFilled);
        assert_eq!(next.food, next.head());
        assert_eq!(next.death_position(), None);
    }
}
