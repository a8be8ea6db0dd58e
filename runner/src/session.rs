use std::time::Duration;

use common::config::{ConfigContentProvider, ConfigSerializer};
use common::games::SessionRng;
use common::games::snake::{
    BotController, DeathReason, Direction, GameMode, Point, SnakeEngine, SnakeEngineSettings,
    SnakeGameState, Speed, TickOutcome,
};
use common::leaderboard::{Leaderboard, LeaderboardStore};
use common::log;

pub struct SessionOptions {
    pub mode: GameMode,
    pub seed: Option<u64>,
    pub realtime: bool,
    pub max_ticks: Option<u64>,
    pub respawn_delay: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver { at: Point, reason: DeathReason },
    BoardFilled,
    TickLimit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub mode: GameMode,
    pub seed: u64,
    pub score: u32,
    pub ticks: u64,
    pub lives_used: u32,
    pub final_speed: Speed,
    pub end: SessionEnd,
}

/// Drives one session to its end with the autopilot at the wheel.
///
/// The direction is sampled once per tick. With `realtime` set, ticks are
/// paced by the speed band of the current score and a lost life pauses for
/// the respawn delay before the snake comes back.
pub async fn run_session(engine: &SnakeEngine, options: &SessionOptions) -> SessionSummary {
    run_session_with(engine, options, BotController::calculate_move).await
}

/// Same loop as [`run_session`] with the direction supplied by `steer`.
pub async fn run_session_with<F>(
    engine: &SnakeEngine,
    options: &SessionOptions,
    mut steer: F,
) -> SessionSummary
where
    F: FnMut(&SnakeGameState, &SnakeEngineSettings) -> Direction,
{
    let mut rng = match options.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut state = engine.create_initial_state_for_mode(options.mode);
    let mut ticks: u64 = 0;
    let mut lives_used: u32 = 0;

    log!(
        "Starting {} session on a {}x{} grid, seed {}",
        options.mode,
        engine.grid_size(),
        engine.grid_size(),
        rng.seed()
    );

    let end = loop {
        if options.max_ticks.is_some_and(|max| ticks >= max) {
            break SessionEnd::TickLimit;
        }

        if options.realtime {
            tokio::time::sleep(Speed::for_score(state.score).delay()).await;
        }

        let direction = steer(&state, engine.settings());
        let (next, outcome) = engine.tick(&state, direction, &mut rng);
        ticks += 1;

        match outcome {
            TickOutcome::Continuing | TickOutcome::AteFood => state = next,
            TickOutcome::LifeLost { .. } => {
                lives_used += 1;
                if options.realtime {
                    tokio::time::sleep(options.respawn_delay).await;
                }
                state = engine.respawn_snake(&next, &mut rng);
            }
            TickOutcome::GameOver { at, reason } => {
                state = next;
                break SessionEnd::GameOver { at, reason };
            }
            TickOutcome::BoardFilled => {
                state = next;
                break SessionEnd::BoardFilled;
            }
        }
    };

    summarize(options.mode, rng.seed(), &state, ticks, lives_used, end)
}

/// Adds the score to the leaderboard when the mode records scores and the
/// score makes the table. Returns the updated table in that case.
pub fn record_score<TContentProvider, TSerializer>(
    store: &LeaderboardStore<TContentProvider, TSerializer>,
    mode: GameMode,
    player_name: &str,
    score: u32,
) -> Option<Leaderboard>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<Leaderboard>,
{
    if !mode.config().records_scores {
        log!("{} mode scores are not recorded", mode);
        return None;
    }

    if !store.is_top_score(score) {
        log!("Score {} did not make the leaderboard", score);
        return None;
    }

    Some(store.add_score(player_name, score))
}

fn summarize(
    mode: GameMode,
    seed: u64,
    state: &SnakeGameState,
    ticks: u64,
    lives_used: u32,
    end: SessionEnd,
) -> SessionSummary {
    log!(
        "Session ended after {} ticks with score {}: {:?}",
        ticks,
        state.score,
        end
    );

    SessionSummary {
        mode,
        seed,
        score: state.score,
        ticks,
        lives_used,
        final_speed: Speed::for_score(state.score),
        end,
    }
}
