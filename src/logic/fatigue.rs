//! Fatigue from recent workload.

use crate::config::FatigueConfig;
use crate::models::Appearance;
use chrono::NaiveDate;

/// Fatigue going into a fixture on `as_of`, in `[0, config.max_fatigue]`.
///
/// 1. Drop appearances dated after `as_of`.
/// 2. Keep the `window_size` most recent.
/// 3. Weight each one's minutes (capped at `max_minutes`, garbage as zero) by
///    `(1 - decay_rate)^days_since`.
/// 4. Scale the load against a full window of maximal matches played on `as_of`.
///
/// Non-decreasing in the minutes of every appearance.
pub fn calculate_fatigue(appearances: &[Appearance], as_of: NaiveDate, config: &FatigueConfig) -> f64 {
    let mut recent: Vec<&Appearance> = appearances.iter().filter(|a| a.date <= as_of).collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(config.window_size);

    let retention = 1.0 - config.decay_rate;
    let load: f64 = recent
        .iter()
        .map(|a| {
            let days = (as_of - a.date).num_days() as f64;
            capped_minutes(a.minutes_played, config.max_minutes) * retention.powf(days)
        })
        .sum();

    let capacity = config.window_size as f64 * config.max_minutes;
    if capacity <= 0.0 {
        return 0.0;
    }
    let fatigue = (load / capacity * config.max_fatigue).min(config.max_fatigue).max(0.0);
    log::debug!(
        "fatigue as of {}: {:.2} over {} appearance(s)",
        as_of,
        fatigue,
        recent.len()
    );
    fatigue
}

fn capped_minutes(minutes: f64, max_minutes: f64) -> f64 {
    if minutes.is_finite() && minutes > 0.0 {
        minutes.min(max_minutes)
    } else {
        0.0
    }
}
