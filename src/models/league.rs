//! Private league configuration and the result of validating it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Competition format of a private league.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Round-robin over all matchdays.
    Championship,
    /// Round-robin group stage followed by semi-finals and a final.
    ChampionshipKnockout,
    /// Pure single-elimination bracket.
    Knockout,
}

impl TournamentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentFormat::Championship => "championship",
            TournamentFormat::ChampionshipKnockout => "championship_knockout",
            TournamentFormat::Knockout => "knockout",
        }
    }
}

impl FromStr for TournamentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "championship" => Ok(TournamentFormat::Championship),
            "championship_knockout" => Ok(TournamentFormat::ChampionshipKnockout),
            "knockout" => Ok(TournamentFormat::Knockout),
            other => Err(format!("Invalid format: {other}")),
        }
    }
}

impl std::fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Knockout ties: one match, or two legs (home and away).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnockoutType {
    #[default]
    Single,
    Double,
}

impl KnockoutType {
    /// Matchdays consumed by one knockout round.
    pub fn days_per_round(&self) -> u32 {
        match self {
            KnockoutType::Single => 1,
            KnockoutType::Double => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KnockoutType::Single => "single",
            KnockoutType::Double => "double",
        }
    }
}

impl FromStr for KnockoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(KnockoutType::Single),
            "double" => Ok(KnockoutType::Double),
            other => Err(format!("Invalid knockout type: {other}")),
        }
    }
}

/// Parameters chosen in the league-creation wizard.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub format: TournamentFormat,
    pub player_count: u32,
    pub matchday_count: u32,
    /// Absent means single-leg ties.
    #[serde(default)]
    pub knockout_type: Option<KnockoutType>,
}

impl TournamentConfig {
    pub fn new(
        format: TournamentFormat,
        player_count: u32,
        matchday_count: u32,
        knockout_type: Option<KnockoutType>,
    ) -> Self {
        Self {
            format,
            player_count,
            matchday_count,
            knockout_type,
        }
    }

    /// Check this configuration. Never fails; see [`ValidationResult::valid`].
    pub fn validate(&self) -> ValidationResult {
        crate::logic::validate_tournament_config(self)
    }
}

/// Verdict on a [`TournamentConfig`], plus schedule metadata on success.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Set only when `valid` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Matchdays reserved for semi-finals and final (championship + knockout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_days: Option<u32>,
    /// Odd player count: one player rests each round-robin matchday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_week: Option<bool>,
    /// Minimum matchdays to play the full bracket (knockout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_days: Option<u32>,
}

impl ValidationResult {
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn ok() -> Self {
        Self {
            valid: true,
            ..Self::default()
        }
    }
}
