//! Player Game Score and category derivation.

use crate::config::{CategoryThresholds, FantasyConfig, PgsWeights};
use crate::models::{PlayerCategory, PlayerMatchStats, PlayerScore};

/// Compute the PGS of one stat line, bounded to `[weights.floor, weights.ceiling]`.
///
/// A player with no minutes scores the floor. Negative or non-finite stats count
/// as zero; minutes above `max_minutes` are capped.
pub fn compute_pgs(stats: &PlayerMatchStats, weights: &PgsWeights) -> f64 {
    let minutes = sanitize(stats.minutes_played, "minutes_played").min(weights.max_minutes);
    if minutes <= 0.0 {
        return weights.floor;
    }

    let mut raw = weights.base + minutes * weights.per_minute;
    raw += sanitize(stats.goals, "goals") * weights.goal;
    raw += sanitize(stats.assists, "assists") * weights.assist;
    raw += sanitize(stats.shots_on_target, "shots_on_target") * weights.shot_on_target;
    raw += sanitize(stats.key_passes, "key_passes") * weights.key_pass;
    raw += sanitize(stats.tackles, "tackles") * weights.tackle;
    raw += sanitize(stats.saves, "saves") * weights.save;
    raw += sanitize(stats.goals_conceded, "goals_conceded") * weights.goal_conceded;
    raw += sanitize(stats.yellow_cards, "yellow_cards") * weights.yellow_card;
    raw += sanitize(stats.red_cards, "red_cards") * weights.red_card;
    raw += sanitize(stats.own_goals, "own_goals") * weights.own_goal;
    raw += sanitize(stats.penalties_saved, "penalties_saved") * weights.penalty_saved;
    raw += sanitize(stats.penalties_missed, "penalties_missed") * weights.penalty_missed;
    if stats.clean_sheet {
        raw += weights.clean_sheet;
    }

    let pgs = raw.max(weights.floor).min(weights.ceiling);
    log::debug!("pgs for player {}: {:.3} (raw {:.3})", stats.player_id, pgs, raw);
    pgs
}

/// Map a PGS to its category. Step function over the configured thresholds;
/// NaN falls into `Poor`.
pub fn get_player_category_from_pgs(pgs: f64, thresholds: &CategoryThresholds) -> PlayerCategory {
    if pgs >= thresholds.star {
        PlayerCategory::Star
    } else if pgs >= thresholds.good {
        PlayerCategory::Good
    } else if pgs >= thresholds.average {
        PlayerCategory::Average
    } else {
        PlayerCategory::Poor
    }
}

/// PGS and category in one pass.
pub fn score_player(stats: &PlayerMatchStats, config: &FantasyConfig) -> PlayerScore {
    let pgs = compute_pgs(stats, &config.pgs);
    PlayerScore {
        pgs,
        category: get_player_category_from_pgs(pgs, &config.categories),
    }
}

/// Zero for negative or non-finite stat values.
fn sanitize(value: f64, field: &str) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("ignoring out-of-range {} value {}", field, value);
        0.0
    }
}
