//! Fantasy football core: private league format validation and the scoring engine.

pub mod config;
pub mod logic;
pub mod models;

pub use config::{CategoryThresholds, FantasyConfig, FatigueConfig, PgsWeights, PointsConfig};
pub use logic::{
    calculate_fatigue, compute_pgs, compute_player_points, compute_team_total,
    get_player_category_from_pgs, rank_teams, score_game_week, score_player,
    validate_private_league_config, validate_tournament_config,
};
pub use models::{
    Appearance, FixtureOutcome, GameWeekScore, KnockoutType, LeaderboardEntry, PlayerCategory,
    PlayerId, PlayerMatchStats, PlayerScore, RosterEntry, ScoringError, TeamId, TeamTotal,
    TournamentConfig, TournamentFormat, ValidationResult,
};
