use crate::api::models::LeagueEntryDto;

/// Wins and losses summed over every queue the player is placed in.
pub fn rank_totals(entries: &[LeagueEntryDto]) -> (u64, u64) {
    entries
        .iter()
        .fold((0, 0), |(wins, losses), entry| {
            (wins + entry.wins, losses + entry.losses)
        })
}

/// Whole-number win rate, rounded down. `None` when no games were played.
pub fn win_rate_percent(wins: u64, losses: u64) -> Option<u32> {
    let total = wins + losses;
    if total == 0 {
        return None;
    }
    Some((wins * 100 / total) as u32)
}
