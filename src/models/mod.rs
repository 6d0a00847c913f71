//! Data structures: league configuration, player stats and scores, rosters, teams.

mod error;
mod fixture;
mod league;
mod player;
mod team;

pub use error::ScoringError;
pub use fixture::{FixtureOutcome, RosterEntry};
pub use league::{KnockoutType, TournamentConfig, TournamentFormat, ValidationResult};
pub use player::{Appearance, PlayerCategory, PlayerId, PlayerMatchStats, PlayerScore};
pub use team::{GameWeekScore, LeaderboardEntry, TeamId, TeamTotal};
