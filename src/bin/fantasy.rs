//! Command-line front end for the league validator and the scoring engine.
//!
//! Usage:
//!   fantasy validate <format> <players> <matchdays> [single|double]
//!   fantasy score <stats.csv>
//!
//! Scoring coefficients are read from the JSON file named by FANTASY_CONFIG
//! (defaults when unset). Log level via RUST_LOG (default: info).

use fantasy_core::{
    score_player, validate_private_league_config, FantasyConfig, KnockoutType, PlayerMatchStats,
    ScoringError,
};
use std::process::ExitCode;

const USAGE: &str = "usage:\n  fantasy validate <format> <players> <matchdays> [single|double]\n  fantasy score <stats.csv>";

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("validate") => run_validate(&args[1..]),
        Some("score") => run_score(&args[1..]),
        _ => usage(),
    }
}

fn usage() -> ExitCode {
    eprintln!("{}", USAGE);
    ExitCode::from(2)
}

fn run_validate(args: &[String]) -> ExitCode {
    if args.len() < 3 || args.len() > 4 {
        return usage();
    }
    let (Ok(players), Ok(matchdays)) = (args[1].parse::<u32>(), args[2].parse::<u32>()) else {
        eprintln!("players and matchdays must be non-negative integers");
        return usage();
    };
    let knockout_type = match args.get(3).map(|s| s.parse::<KnockoutType>()) {
        None => None,
        Some(Ok(k)) => Some(k),
        Some(Err(e)) => {
            eprintln!("{}", e);
            return usage();
        }
    };

    let result = validate_private_league_config(&args[0], players, matchdays, knockout_type);
    match serde_json::to_string_pretty(&result) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("failed to serialize result: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_score(args: &[String]) -> ExitCode {
    let [path] = args else {
        return usage();
    };
    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            log::error!("cannot open {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut scored = 0usize;
    let mut skipped = 0usize;
    for row in PlayerMatchStats::from_csv_reader(file) {
        let stats = match row {
            Ok(s) => s,
            Err(e) => {
                log::warn!("skipping row: {}", e);
                skipped += 1;
                continue;
            }
        };
        let score = score_player(&stats, &config);
        println!(
            "{}",
            serde_json::json!({
                "player_id": stats.player_id,
                "pgs": score.pgs,
                "category": score.category,
            })
        );
        scored += 1;
    }
    log::info!("Scored {} player(s), skipped {} row(s)", scored, skipped);
    if skipped > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn load_config() -> Result<FantasyConfig, ScoringError> {
    match std::env::var("FANTASY_CONFIG") {
        Ok(path) => {
            log::info!("Loading scoring config from {}", path);
            FantasyConfig::from_json_file(path)
        }
        Err(_) => Ok(FantasyConfig::default()),
    }
}
