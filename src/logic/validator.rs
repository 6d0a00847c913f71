//! Private league format validation: bracket, playoff and rest-week arithmetic.

use crate::models::{KnockoutType, TournamentConfig, TournamentFormat, ValidationResult};

/// Minimum players for a round-robin championship.
pub const CHAMPIONSHIP_MIN_PLAYERS: u32 = 3;
/// Minimum players for championship + knockout (enough for two semi-finals).
pub const CHAMPIONSHIP_KNOCKOUT_MIN_PLAYERS: u32 = 4;
/// Minimum players for a knockout bracket.
pub const KNOCKOUT_MIN_PLAYERS: u32 = 2;
/// Knockout rounds played after the championship stage: semi-finals and final.
const PLAYOFF_ROUNDS: u32 = 2;

/// Validate a league configuration whose format arrives as its wire name.
///
/// Unknown format names are rejected with an "invalid format" error. Never panics.
pub fn validate_private_league_config(
    format: &str,
    players: u32,
    matchdays: u32,
    knockout_type: Option<KnockoutType>,
) -> ValidationResult {
    match format.parse::<TournamentFormat>() {
        Ok(format) => validate_tournament_config(&TournamentConfig::new(
            format,
            players,
            matchdays,
            knockout_type,
        )),
        Err(error) => {
            log::debug!("rejected league config: {}", error);
            ValidationResult::invalid(error)
        }
    }
}

/// Validate a typed league configuration.
pub fn validate_tournament_config(config: &TournamentConfig) -> ValidationResult {
    let result = match config.format {
        TournamentFormat::Championship => validate_championship(config.player_count),
        TournamentFormat::ChampionshipKnockout => validate_championship_knockout(
            config.player_count,
            config.matchday_count,
            config.knockout_type.unwrap_or_default(),
        ),
        TournamentFormat::Knockout => validate_knockout(
            config.player_count,
            config.matchday_count,
            config.knockout_type.unwrap_or_default(),
        ),
    };
    if let Some(error) = &result.error {
        log::debug!("rejected {} league config: {}", config.format, error);
    }
    result
}

fn validate_championship(players: u32) -> ValidationResult {
    if players < CHAMPIONSHIP_MIN_PLAYERS {
        return ValidationResult::invalid(format!(
            "Championship format requires at least {} players",
            CHAMPIONSHIP_MIN_PLAYERS
        ));
    }
    ValidationResult {
        rest_week: Some(needs_rest_week(players)),
        ..ValidationResult::ok()
    }
}

fn validate_championship_knockout(
    players: u32,
    matchdays: u32,
    knockout_type: KnockoutType,
) -> ValidationResult {
    if players < CHAMPIONSHIP_KNOCKOUT_MIN_PLAYERS {
        return ValidationResult::invalid(format!(
            "Championship + knockout format requires at least {} players",
            CHAMPIONSHIP_KNOCKOUT_MIN_PLAYERS
        ));
    }
    let playoff_days = PLAYOFF_ROUNDS * knockout_type.days_per_round();
    // At least one group-stage matchday must precede the playoffs.
    if matchdays <= playoff_days {
        return ValidationResult::invalid(format!(
            "Championship + {} knockout requires more than {} matchdays (got {})",
            knockout_type.as_str(),
            playoff_days,
            matchdays
        ));
    }
    ValidationResult {
        playoff_days: Some(playoff_days),
        rest_week: Some(needs_rest_week(players)),
        ..ValidationResult::ok()
    }
}

fn validate_knockout(players: u32, matchdays: u32, knockout_type: KnockoutType) -> ValidationResult {
    if !is_power_of_two(players) {
        return ValidationResult::invalid(format!(
            "Knockout format requires a power-of-two number of players (e.g. 4, 8, 16), got {}",
            players
        ));
    }
    let required_days = knockout_rounds(players) * knockout_type.days_per_round();
    if matchdays < required_days {
        return ValidationResult::invalid(format!(
            "Knockout with {} players ({}) requires at least {} matchdays (got {})",
            players,
            knockout_type.as_str(),
            required_days,
            matchdays
        ));
    }
    ValidationResult {
        required_days: Some(required_days),
        ..ValidationResult::ok()
    }
}

/// Odd player counts leave one player without an opponent each round-robin matchday.
fn needs_rest_week(players: u32) -> bool {
    players % 2 == 1
}

/// Exact bitwise power-of-two test. Counts below 2 are rejected up front since
/// `0 & (0 - 1)` would underflow and a single player is no bracket.
pub fn is_power_of_two(players: u32) -> bool {
    if players < KNOCKOUT_MIN_PLAYERS {
        return false;
    }
    players & (players - 1) == 0
}

/// log2 of a power-of-two player count: number of bracket rounds.
fn knockout_rounds(players: u32) -> u32 {
    players.trailing_zeros()
}
