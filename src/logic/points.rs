//! Fantasy points: per player, per team, per game week.

use crate::config::{FantasyConfig, PointsConfig};
use crate::logic::pgs::get_player_category_from_pgs;
use crate::models::{FixtureOutcome, GameWeekScore, PlayerCategory, RosterEntry, ScoringError};

/// Points a selected player earns for one fixture.
///
/// `(appearance + full appearance + pgs * multiplier + category bonus + result)`,
/// reduced by fatigue and doubled (by default) for the captain. The category
/// bonus follows `score.pgs` under `config.categories`; `score.category` is not
/// consulted. Players who did not play, or whose fixture was postponed, earn
/// zero. A non-finite PGS is `InvalidInput`.
pub fn compute_player_points(entry: &RosterEntry, config: &FantasyConfig) -> Result<f64, ScoringError> {
    if !entry.score.pgs.is_finite() {
        return Err(ScoringError::InvalidInput(format!(
            "non-finite pgs {} for player {}",
            entry.score.pgs, entry.player_id
        )));
    }
    let p = &config.points;
    let result_points = match entry.outcome {
        FixtureOutcome::Win => p.win,
        FixtureOutcome::Draw => p.draw,
        FixtureOutcome::Loss => p.loss,
        FixtureOutcome::Postponed => return Ok(0.0),
    };
    let minutes = if entry.minutes_played.is_finite() {
        entry.minutes_played
    } else {
        0.0
    };
    if minutes <= 0.0 {
        return Ok(0.0);
    }

    let mut points = p.appearance;
    if minutes >= p.full_appearance_minutes {
        points += p.full_appearance;
    }
    points += entry.score.pgs * p.pgs_multiplier;
    let category = get_player_category_from_pgs(entry.score.pgs, &config.categories);
    points += category_bonus(category, p);
    points += result_points;

    points *= fatigue_factor(entry.fatigue, config);
    if entry.captain {
        points *= p.captain_multiplier;
    }
    Ok(points)
}

/// Sum of [`compute_player_points`] over the roster.
pub fn compute_team_total(players: &[RosterEntry], config: &FantasyConfig) -> Result<f64, ScoringError> {
    players
        .iter()
        .map(|entry| compute_player_points(entry, config))
        .sum()
}

/// Per-player points and team total for one game week.
/// A player listed twice accumulates both entries.
pub fn score_game_week(roster: &[RosterEntry], config: &FantasyConfig) -> Result<GameWeekScore, ScoringError> {
    let mut score = GameWeekScore::default();
    for entry in roster {
        let points = compute_player_points(entry, config)?;
        *score.player_points.entry(entry.player_id).or_insert(0.0) += points;
        score.total += points;
    }
    log::debug!(
        "game week total {:.2} for {} player(s)",
        score.total,
        score.player_points.len()
    );
    Ok(score)
}

fn category_bonus(category: PlayerCategory, p: &PointsConfig) -> f64 {
    match category {
        PlayerCategory::Star => p.star_bonus,
        PlayerCategory::Good => p.good_bonus,
        PlayerCategory::Average => p.average_bonus,
        PlayerCategory::Poor => p.poor_bonus,
    }
}

/// `1` when fresh, `1 - fatigue_penalty` at maximum fatigue.
fn fatigue_factor(fatigue: f64, config: &FantasyConfig) -> f64 {
    let max = config.fatigue.max_fatigue;
    if !fatigue.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let ratio = (fatigue / max).clamp(0.0, 1.0);
    1.0 - config.points.fatigue_penalty * ratio
}
