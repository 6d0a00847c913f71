//! Player statistics, appearances, and derived scores.

use crate::models::error::ScoringError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use uuid::Uuid;

/// Unique identifier for a player.
pub type PlayerId = Uuid;

/// One player's statistical line for a single match.
///
/// Every stat defaults to zero when missing from the source record, whether the
/// column is absent or the cell is empty. Counts are `f64` so that feeds
/// reporting fractional or garbage values still parse; the engine sanitises
/// them before use.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerMatchStats {
    pub player_id: PlayerId,
    #[serde(deserialize_with = "zero_if_empty")]
    pub minutes_played: f64,
    #[serde(deserialize_with = "zero_if_empty")]
    pub goals: f64,
    #[serde(deserialize_with = "zero_if_empty")]
    pub assists: f64,
    #[serde(deserialize_with = "zero_if_empty")]
    pub shots_on_target: f64,
    #[serde(deserialize_with = "zero_if_empty")]
    pub key_passes: f64,
    #[serde(deserialize_with = "zero_if_empty")]
    pub tackles: f64,
    #[serde(deserialize_with = "zero_if_empty")]
    pub saves: f64,
    #[serde(deserialize_with = "false_if_empty")]
    pub clean_sheet: bool,
    #[serde(deserialize_with = "zero_if_empty")]
    pub goals_conceded: f64,
    #[serde(deserialize_with = "zero_if_empty")]
    pub yellow_cards: f64,
    #[serde(deserialize_with = "zero_if_empty")]
    pub red_cards: f64,
    #[serde(deserialize_with = "zero_if_empty")]
    pub own_goals: f64,
    #[serde(deserialize_with = "zero_if_empty")]
    pub penalties_saved: f64,
    #[serde(deserialize_with = "zero_if_empty")]
    pub penalties_missed: f64,
}

impl PlayerMatchStats {
    /// Empty stat line (did not play) for the given player.
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }

    /// Parse a stat line from JSON. A document of the wrong shape is `InvalidInput`.
    pub fn from_json_str(s: &str) -> Result<Self, ScoringError> {
        serde_json::from_str(s).map_err(|e| ScoringError::InvalidInput(e.to_string()))
    }

    /// Read stat lines from CSV with a header row, one result per data row.
    /// A row that cannot be parsed is `InvalidInput` naming its line; the
    /// remaining rows are still read.
    pub fn from_csv_reader<R: Read>(reader: R) -> Vec<Result<Self, ScoringError>> {
        csv::Reader::from_reader(reader)
            .deserialize::<Self>()
            .enumerate()
            .map(|(i, row)| {
                // Header is line 1.
                row.map_err(|e| ScoringError::InvalidInput(format!("line {}: {}", i + 2, e)))
            })
            .collect()
    }
}

/// Null / empty cell reads as zero.
fn zero_if_empty<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

fn false_if_empty<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// A past match used for the fatigue window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub date: NaiveDate,
    pub minutes_played: f64,
}

impl Appearance {
    pub fn new(date: NaiveDate, minutes_played: f64) -> Self {
        Self {
            date,
            minutes_played,
        }
    }
}

/// Ordered performance band derived from a PGS. `Poor < Average < Good < Star`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerCategory {
    Poor,
    Average,
    Good,
    Star,
}

/// PGS together with its category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub pgs: f64,
    pub category: PlayerCategory,
}
