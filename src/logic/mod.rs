//! Pure computations: league format validation and fantasy scoring.

mod fatigue;
mod leaderboard;
mod pgs;
mod points;
mod validator;

pub use fatigue::calculate_fatigue;
pub use leaderboard::rank_teams;
pub use pgs::{compute_pgs, get_player_category_from_pgs, score_player};
pub use points::{compute_player_points, compute_team_total, score_game_week};
pub use validator::{
    is_power_of_two, validate_private_league_config, validate_tournament_config,
    CHAMPIONSHIP_KNOCKOUT_MIN_PLAYERS, CHAMPIONSHIP_MIN_PLAYERS, KNOCKOUT_MIN_PLAYERS,
};
