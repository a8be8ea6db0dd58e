mod board;
mod entry;
mod store;

pub use board::{Leaderboard, MAX_ENTRIES};
pub use entry::{LeaderboardEntry, current_timestamp};
pub use store::{ANONYMOUS_PLAYER, LEADERBOARD_FILE_NAME, LeaderboardError, LeaderboardStore};
