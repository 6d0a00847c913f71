//! Integration tests for player points, team totals, game weeks, and the leaderboard.

use fantasy_core::{
    compute_player_points, compute_team_total, rank_teams, score_game_week, FantasyConfig,
    FixtureOutcome, PlayerCategory, PlayerScore, RosterEntry, ScoringError, TeamTotal,
};
use rand::seq::SliceRandom;
use uuid::Uuid;

const EPS: f64 = 1e-9;

fn entry(pgs: f64, category: PlayerCategory, minutes: f64, outcome: FixtureOutcome) -> RosterEntry {
    RosterEntry {
        player_id: Uuid::new_v4(),
        score: PlayerScore { pgs, category },
        minutes_played: minutes,
        outcome,
        fatigue: 0.0,
        captain: false,
    }
}

fn star_win() -> RosterEntry {
    entry(8.15, PlayerCategory::Star, 90.0, FixtureOutcome::Win)
}

#[test]
fn full_match_win_points() {
    let points = compute_player_points(&star_win(), &FantasyConfig::default()).unwrap();
    // appearance 1 + full 1 + pgs 8.15 + star 3 + win 2
    assert!((points - 15.15).abs() < EPS, "got {points}");
}

#[test]
fn partial_match_draw_points() {
    let e = entry(6.2, PlayerCategory::Average, 45.0, FixtureOutcome::Draw);
    let points = compute_player_points(&e, &FantasyConfig::default()).unwrap();
    assert!((points - 9.2).abs() < EPS, "got {points}");
}

#[test]
fn captain_doubles_points() {
    let e = RosterEntry {
        captain: true,
        ..star_win()
    };
    let points = compute_player_points(&e, &FantasyConfig::default()).unwrap();
    assert!((points - 30.3).abs() < EPS, "got {points}");
}

#[test]
fn fatigue_reduces_points() {
    let config = FantasyConfig::default();
    let tired = RosterEntry {
        fatigue: config.fatigue.max_fatigue,
        ..star_win()
    };
    let points = compute_player_points(&tired, &config).unwrap();
    assert!((points - 15.15 * 0.8).abs() < EPS, "got {points}");

    let half = RosterEntry {
        fatigue: config.fatigue.max_fatigue / 2.0,
        ..star_win()
    };
    let points = compute_player_points(&half, &config).unwrap();
    assert!((points - 15.15 * 0.9).abs() < EPS, "got {points}");
}

#[test]
fn no_minutes_or_postponed_scores_zero() {
    let config = FantasyConfig::default();
    let benched = entry(0.0, PlayerCategory::Poor, 0.0, FixtureOutcome::Win);
    assert_eq!(compute_player_points(&benched, &config).unwrap(), 0.0);
    let postponed = RosterEntry {
        outcome: FixtureOutcome::Postponed,
        ..star_win()
    };
    assert_eq!(compute_player_points(&postponed, &config).unwrap(), 0.0);
}

#[test]
fn non_finite_pgs_is_invalid_input() {
    let e = entry(f64::NAN, PlayerCategory::Good, 90.0, FixtureOutcome::Win);
    assert!(matches!(
        compute_player_points(&e, &FantasyConfig::default()),
        Err(ScoringError::InvalidInput(_))
    ));
}

#[test]
fn injected_multipliers_are_honoured() {
    let mut config = FantasyConfig::default();
    config.points.win = 5.0;
    config.points.pgs_multiplier = 2.0;
    let points = compute_player_points(&star_win(), &config).unwrap();
    // 1 + 1 + 16.3 + 3 + 5
    assert!((points - 26.3).abs() < EPS, "got {points}");
}

fn sample_roster() -> Vec<RosterEntry> {
    vec![
        star_win(),
        entry(7.3, PlayerCategory::Good, 90.0, FixtureOutcome::Loss),
        entry(6.1, PlayerCategory::Average, 30.0, FixtureOutcome::Draw),
        entry(4.2, PlayerCategory::Poor, 75.0, FixtureOutcome::Loss),
        RosterEntry {
            captain: true,
            fatigue: 37.5,
            ..entry(9.6, PlayerCategory::Star, 88.0, FixtureOutcome::Win)
        },
        entry(0.0, PlayerCategory::Poor, 0.0, FixtureOutcome::Draw),
        entry(6.9, PlayerCategory::Average, 90.0, FixtureOutcome::Postponed),
    ]
}

#[test]
fn team_total_is_sum_of_player_points() {
    let config = FantasyConfig::default();
    let roster = sample_roster();
    let expected: f64 = roster
        .iter()
        .map(|e| compute_player_points(e, &config).unwrap())
        .sum();
    let total = compute_team_total(&roster, &config).unwrap();
    assert!((total - expected).abs() < EPS);
}

#[test]
fn team_total_is_order_independent() {
    let config = FantasyConfig::default();
    let mut roster = sample_roster();
    let reference = compute_team_total(&roster, &config).unwrap();
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        roster.shuffle(&mut rng);
        let total = compute_team_total(&roster, &config).unwrap();
        assert!((total - reference).abs() < EPS);
    }
}

#[test]
fn empty_roster_totals_zero() {
    assert_eq!(compute_team_total(&[], &FantasyConfig::default()).unwrap(), 0.0);
}

#[test]
fn team_total_propagates_invalid_input() {
    let mut roster = sample_roster();
    roster.push(entry(f64::INFINITY, PlayerCategory::Star, 90.0, FixtureOutcome::Win));
    assert!(compute_team_total(&roster, &FantasyConfig::default()).is_err());
}

#[test]
fn game_week_lists_points_per_player() {
    let config = FantasyConfig::default();
    let roster = sample_roster();
    let week = score_game_week(&roster, &config).unwrap();
    assert_eq!(week.player_points.len(), roster.len());
    let total = compute_team_total(&roster, &config).unwrap();
    assert!((week.total - total).abs() < EPS);
    let first = &roster[0];
    assert!((week.player_points[&first.player_id] - 15.15).abs() < EPS);
}

#[test]
fn game_week_accumulates_repeated_player() {
    let config = FantasyConfig::default();
    let e = star_win();
    let week = score_game_week(&[e.clone(), e.clone()], &config).unwrap();
    assert_eq!(week.player_points.len(), 1);
    assert!((week.player_points[&e.player_id] - 30.3).abs() < EPS);
    assert!((week.total - 30.3).abs() < EPS);
}

#[test]
fn leaderboard_shares_rank_on_ties() {
    let ids: Vec<Uuid> = (1..=4).map(Uuid::from_u128).collect();
    let totals = [
        TeamTotal { team_id: ids[0], total: 10.0 },
        TeamTotal { team_id: ids[2], total: 20.0 },
        TeamTotal { team_id: ids[1], total: 20.0 },
        TeamTotal { team_id: ids[3], total: 5.0 },
    ];
    let board = rank_teams(&totals);
    let rows: Vec<(u32, Uuid)> = board.iter().map(|e| (e.rank, e.team_id)).collect();
    assert_eq!(
        rows,
        vec![(1, ids[1]), (1, ids[2]), (3, ids[0]), (4, ids[3])]
    );
}

#[test]
fn leaderboard_of_nothing_is_empty() {
    assert!(rank_teams(&[]).is_empty());
}

#[test]
fn category_bonus_follows_pgs_not_supplied_category() {
    let config = FantasyConfig::default();
    let mislabelled = RosterEntry {
        score: PlayerScore {
            pgs: 6.2,
            category: PlayerCategory::Star,
        },
        ..entry(6.2, PlayerCategory::Average, 45.0, FixtureOutcome::Draw)
    };
    let points = compute_player_points(&mislabelled, &config).unwrap();
    assert!((points - 9.2).abs() < EPS, "got {points}");
}

#[test]
fn leaderboard_treats_negative_zero_as_zero() {
    let ids: Vec<Uuid> = (1..=2).map(Uuid::from_u128).collect();
    let totals = [
        TeamTotal { team_id: ids[0], total: -0.0 },
        TeamTotal { team_id: ids[1], total: 0.0 },
    ];
    let rows: Vec<(u32, Uuid)> = rank_teams(&totals).iter().map(|e| (e.rank, e.team_id)).collect();
    assert_eq!(rows, vec![(1, ids[0]), (1, ids[1])]);
}
