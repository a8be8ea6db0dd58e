mod config;
mod leaderboard_view;
mod session;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use common::games::snake::{GameMode, SnakeEngine};
use common::leaderboard::LeaderboardStore;
use common::name_generator::generate_player_name;
use common::version::VERSION;
use common::{log, logger};

use leaderboard_view::format_leaderboard;
use session::{SessionOptions, record_score, run_session};

#[derive(Parser)]
#[command(name = "bitcoin_snake", version = VERSION)]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Settings file (YAML). Defaults to the per-user application directory.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one session with the autopilot.
    Play {
        #[arg(long, default_value = "glory")]
        mode: GameMode,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        seed: Option<u64>,

        /// Pace ticks against the wall clock.
        #[arg(long)]
        realtime: bool,

        #[arg(long, default_value_t = 100_000)]
        max_ticks: u64,
    },
    /// Print the stored leaderboard.
    Leaderboard,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::get_config_manager(args.config).get_config()?;
    let store = LeaderboardStore::from_json_file(config.leaderboard.resolved_path());

    match args.command {
        Command::Play {
            mode,
            name,
            seed,
            realtime,
            max_ticks,
        } => {
            let engine = SnakeEngine::new(config.engine.clone())?;
            let options = SessionOptions {
                mode,
                seed,
                realtime,
                max_ticks: Some(max_ticks),
                respawn_delay: Duration::from_millis(config.session.respawn_delay_ms as u64),
            };

            let summary = run_session(&engine, &options).await;
            println!(
                "{} session over: score {}, {} ticks, {} lives used, {:?}",
                summary.mode, summary.score, summary.ticks, summary.lives_used, summary.end
            );

            let player_name = name
                .or(config.player_name)
                .unwrap_or_else(generate_player_name);

            if let Some(leaderboard) = record_score(&store, mode, &player_name, summary.score) {
                log!("Leaderboard saved to {}", store.file_path().display());
                println!("{}", format_leaderboard(&leaderboard));
            }
        }
        Command::Leaderboard => {
            println!("{}", format_leaderboard(&store.load()));
        }
    }

    Ok(())
}
