use std::path::PathBuf;

pub const APP_DIR_NAME: &str = ".bitcoin-snake";

/// Per-user directory holding the leaderboard and runner settings.
///
/// Resolves to `$HOME/.bitcoin-snake` (`%USERPROFILE%` on Windows) and falls
/// back to a relative `.bitcoin-snake` when no home directory is known.
pub fn app_data_dir() -> PathBuf {
    let home = std::env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .or_else(|| std::env::var_os("USERPROFILE").filter(|value| !value.is_empty()));

    match home {
        Some(home) => PathBuf::from(home).join(APP_DIR_NAME),
        None => PathBuf::from(APP_DIR_NAME),
    }
}
