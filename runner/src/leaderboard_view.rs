use common::leaderboard::Leaderboard;

const NAME_WIDTH: usize = 24;

pub fn format_leaderboard(leaderboard: &Leaderboard) -> String {
    if leaderboard.is_empty() {
        return "No scores yet.".to_string();
    }

    let mut lines = Vec::with_capacity(leaderboard.len() + 1);
    lines.push(format!(
        "{:>4}  {:<width$}  {:>6}  {}",
        "#",
        "Player",
        "Score",
        "When",
        width = NAME_WIDTH
    ));

    for (rank, entry) in leaderboard.entries.iter().enumerate() {
        let name: String = entry.player_name.chars().take(NAME_WIDTH).collect();
        // Seconds precision is enough for a table.
        let when = entry.timestamp.get(..19).unwrap_or(&entry.timestamp);
        lines.push(format!(
            "{:>4}  {:<width$}  {:>6}  {}",
            rank + 1,
            name,
            entry.score,
            when,
            width = NAME_WIDTH
        ));
    }

    lines.join("\n")
}
