//! Tunable coefficients of the scoring engine (`FANTASY_CONFIG`).
//!
//! Every field has a default and `#[serde(default)]`, so a JSON document only
//! needs to name the values it overrides.

use crate::models::ScoringError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Weights turning a stat line into a Player Game Score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PgsWeights {
    /// Rating granted for stepping on the pitch.
    pub base: f64,
    /// Lowest PGS; also the score of a player who did not play.
    pub floor: f64,
    pub ceiling: f64,
    /// Minutes above this are ignored.
    pub max_minutes: f64,
    pub per_minute: f64,
    pub goal: f64,
    pub assist: f64,
    pub shot_on_target: f64,
    pub key_pass: f64,
    pub tackle: f64,
    pub save: f64,
    pub clean_sheet: f64,
    pub goal_conceded: f64,
    pub yellow_card: f64,
    pub red_card: f64,
    pub own_goal: f64,
    pub penalty_saved: f64,
    pub penalty_missed: f64,
}

impl Default for PgsWeights {
    fn default() -> Self {
        Self {
            base: 6.0,
            floor: 0.0,
            ceiling: 10.0,
            max_minutes: 120.0,
            per_minute: 0.005,
            goal: 1.0,
            assist: 0.7,
            shot_on_target: 0.15,
            key_pass: 0.1,
            tackle: 0.05,
            save: 0.15,
            clean_sheet: 0.5,
            goal_conceded: -0.2,
            yellow_card: -0.3,
            red_card: -1.5,
            own_goal: -1.0,
            penalty_saved: 1.0,
            penalty_missed: -0.8,
        }
    }
}

/// Lower bounds (inclusive) of each category. Must be `star >= good >= average`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryThresholds {
    pub star: f64,
    pub good: f64,
    pub average: f64,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            star: 8.0,
            good: 7.0,
            average: 6.0,
        }
    }
}

/// Sliding-window workload model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueConfig {
    /// Most recent appearances considered.
    pub window_size: usize,
    /// Fraction of a match's load that fades per day since it was played.
    pub decay_rate: f64,
    pub max_fatigue: f64,
    /// Minutes per appearance above this are ignored.
    pub max_minutes: f64,
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self {
            window_size: 5,
            decay_rate: 0.1,
            max_fatigue: 100.0,
            max_minutes: 120.0,
        }
    }
}

/// Fantasy point awards and multipliers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    /// Awarded for any minutes played.
    pub appearance: f64,
    /// Extra award once `full_appearance_minutes` is reached.
    pub full_appearance: f64,
    pub full_appearance_minutes: f64,
    pub pgs_multiplier: f64,
    pub star_bonus: f64,
    pub good_bonus: f64,
    pub average_bonus: f64,
    pub poor_bonus: f64,
    pub win: f64,
    pub draw: f64,
    pub loss: f64,
    pub captain_multiplier: f64,
    /// Fraction of points lost at maximum fatigue, scaled linearly below it.
    pub fatigue_penalty: f64,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            appearance: 1.0,
            full_appearance: 1.0,
            full_appearance_minutes: 60.0,
            pgs_multiplier: 1.0,
            star_bonus: 3.0,
            good_bonus: 2.0,
            average_bonus: 1.0,
            poor_bonus: 0.0,
            win: 2.0,
            draw: 1.0,
            loss: 0.0,
            captain_multiplier: 2.0,
            fatigue_penalty: 0.2,
        }
    }
}

/// Full engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FantasyConfig {
    pub pgs: PgsWeights,
    pub categories: CategoryThresholds,
    pub fatigue: FatigueConfig,
    pub points: PointsConfig,
}

impl FantasyConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ScoringError> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| ScoringError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScoringError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ScoringError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ScoringError> {
        let pgs = &self.pgs;
        let pgs_values = [
            pgs.base,
            pgs.floor,
            pgs.ceiling,
            pgs.max_minutes,
            pgs.per_minute,
            pgs.goal,
            pgs.assist,
            pgs.shot_on_target,
            pgs.key_pass,
            pgs.tackle,
            pgs.save,
            pgs.clean_sheet,
            pgs.goal_conceded,
            pgs.yellow_card,
            pgs.red_card,
            pgs.own_goal,
            pgs.penalty_saved,
            pgs.penalty_missed,
        ];
        if pgs_values.iter().any(|v| !v.is_finite()) {
            return Err(invalid("pgs weights must be finite"));
        }
        if pgs.floor >= pgs.ceiling {
            return Err(invalid("pgs.floor must be below pgs.ceiling"));
        }
        if pgs.max_minutes <= 0.0 {
            return Err(invalid("pgs.max_minutes must be positive"));
        }

        let c = &self.categories;
        if ![c.star, c.good, c.average].iter().all(|v| v.is_finite()) {
            return Err(invalid("category thresholds must be finite"));
        }
        if !(c.star >= c.good && c.good >= c.average) {
            return Err(invalid("category thresholds must satisfy star >= good >= average"));
        }

        let fatigue = &self.fatigue;
        if fatigue.window_size == 0 {
            return Err(invalid("fatigue.window_size must be at least 1"));
        }
        if !(0.0..1.0).contains(&fatigue.decay_rate) {
            return Err(invalid("fatigue.decay_rate must be in [0, 1)"));
        }
        if !(fatigue.max_fatigue.is_finite() && fatigue.max_fatigue > 0.0) {
            return Err(invalid("fatigue.max_fatigue must be positive"));
        }
        if !(fatigue.max_minutes.is_finite() && fatigue.max_minutes > 0.0) {
            return Err(invalid("fatigue.max_minutes must be positive"));
        }

        let p = &self.points;
        let points_values = [
            p.appearance,
            p.full_appearance,
            p.full_appearance_minutes,
            p.pgs_multiplier,
            p.star_bonus,
            p.good_bonus,
            p.average_bonus,
            p.poor_bonus,
            p.win,
            p.draw,
            p.loss,
            p.captain_multiplier,
            p.fatigue_penalty,
        ];
        if points_values.iter().any(|v| !v.is_finite()) {
            return Err(invalid("point values must be finite"));
        }
        if !(0.0..=1.0).contains(&p.fatigue_penalty) {
            return Err(invalid("points.fatigue_penalty must be in [0, 1]"));
        }
        if p.captain_multiplier < 0.0 {
            return Err(invalid("points.captain_multiplier must not be negative"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> ScoringError {
    ScoringError::InvalidConfig(msg.to_string())
}
