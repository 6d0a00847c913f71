//! Team-level aggregates: game week totals and leaderboard rows.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Unique identifier for a fantasy team.
pub type TeamId = Uuid;

/// Points of one roster for one game week.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameWeekScore {
    pub player_points: BTreeMap<PlayerId, f64>,
    pub total: f64,
}

/// A team's accumulated points, as fed to the leaderboard.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamTotal {
    pub team_id: TeamId,
    pub total: f64,
}

/// One leaderboard row. Tied totals share a rank.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub team_id: TeamId,
    pub total: f64,
}
