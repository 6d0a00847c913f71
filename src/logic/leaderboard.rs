//! League leaderboard from team totals.

use crate::models::{LeaderboardEntry, TeamTotal};

/// Rank teams by total, highest first. Equal totals share a rank and the next
/// rank skips (1, 2, 2, 4). Ties are listed by team id; `-0.0` ties with `0.0`.
pub fn rank_teams(totals: &[TeamTotal]) -> Vec<LeaderboardEntry> {
    let mut sorted: Vec<TeamTotal> = totals
        .iter()
        .map(|t| TeamTotal {
            total: t.total + 0.0,
            ..*t
        })
        .collect();
    sorted.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.team_id.cmp(&b.team_id))
    });

    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(sorted.len());
    for (i, t) in sorted.iter().enumerate() {
        let rank = match entries.last() {
            Some(prev) if prev.total == t.total => prev.rank,
            _ => i as u32 + 1,
        };
        entries.push(LeaderboardEntry {
            rank,
            team_id: t.team_id,
            total: t.total,
        });
    }
    entries
}
