//! Fixture outcomes and the roster entries scored against them.

use crate::models::player::{PlayerId, PlayerScore};
use serde::{Deserialize, Serialize};

/// How the player's real-world fixture ended, from their team's side.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureOutcome {
    Win,
    Draw,
    Loss,
    /// Fixture not played this game week; the player scores nothing.
    Postponed,
}

/// A selected player in a fantasy team for one game week.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: PlayerId,
    /// Points are derived from `score.pgs`; the category bonus is recomputed
    /// from it rather than trusted from `score.category`.
    pub score: PlayerScore,
    #[serde(default)]
    pub minutes_played: f64,
    pub outcome: FixtureOutcome,
    /// Output of `calculate_fatigue` for this player going into the fixture.
    #[serde(default)]
    pub fatigue: f64,
    #[serde(default)]
    pub captain: bool,
}
