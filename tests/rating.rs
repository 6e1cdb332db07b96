use std::fs;
use std::process::Command;

use elo_dist::io::{load_games, load_team_records, write_json};
use elo_dist::rating::game::Game;
use elo_dist::rating::BayesianElo;
use elo_dist::{DistributionRenderer, RenderConfig};

fn game(date: &str, home: (&str, &str), away: (&str, &str), home_score: u32, away_score: u32) -> Game {
    Game {
        date: date.to_string(),
        home_team_id: home.0.to_string(),
        home_team: home.1.to_string(),
        away_team_id: away.0.to_string(),
        away_team: away.1.to_string(),
        home_score,
        away_score,
        neutral_site: false,
        completed: true
    }
}

fn season() -> Vec<Game> {
    let auburn = ("2", "Auburn Tigers");
    let duke = ("150", "Duke Blue Devils");
    let houston = ("248", "Houston Cougars");
    let florida = ("57", "Florida Gators");
    vec!(
        game("2025-11-04", auburn, houston, 74, 69),
        game("2025-11-04", duke, florida, 80, 72),
        game("2025-11-11", auburn, duke, 84, 78),
        game("2025-11-11", houston, florida, 70, 61),
        game("2025-11-18", florida, auburn, 66, 81),
        game("2025-11-18", duke, houston, 71, 64),
    )
}

#[test]
fn test_season_to_chart_records() {
    let dir = tempfile::tempdir().unwrap();
    let games_path = dir.path().join("games.json");
    write_json(&season(), &games_path).unwrap();

    let mut elo = BayesianElo::new();
    elo.process_games(&load_games(&games_path).unwrap());
    assert_eq!(elo.game_log.len(), 6);

    let records = elo.top_records(20);
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].team_name, "Auburn Tigers");
    assert_eq!(records[3].team_name, "Florida Gators");
    assert!(records.windows(2).all(|w| w[0].mean_elo >= w[1].mean_elo));
    assert!(records.iter().enumerate().all(|(i, r)| r.rank == i as u32 + 1));

    let renderer = DistributionRenderer::new(RenderConfig::default()).unwrap();
    let figure = renderer.build_figure(&records).unwrap();
    assert_eq!(figure.curves()[0].label, "1. Auburn");
    assert_eq!(figure.shaded_count(), 3);
}

#[test]
fn test_ratings_binary_writes_chart_input() {
    let dir = tempfile::tempdir().unwrap();
    write_json(&season(), &dir.path().join("games.json")).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_elo_ratings")).current_dir(dir.path()).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rank"));
    assert!(stdout.contains("Auburn Tigers"));
    assert!(stdout.contains("Output written to top20.json"));
    assert!(stdout.contains("Auburn Tigers (ID: 2)"));
    assert!(stdout.contains("Output written to rankings.csv"));

    let csv = fs::read_to_string(dir.path().join("rankings.csv")).unwrap();
    let rows = csv.lines().collect::<Vec<&str>>();
    assert_eq!(rows.len(), 5);
    assert!(rows[0].starts_with("rank,team_id,team_name"));
    assert!(rows[1].starts_with("1,2,\"Auburn Tigers\","));

    let records = load_team_records(&dir.path().join("top20.json")).unwrap();
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.team_id.is_some() && r.percentiles.is_some()));
    let raw = fs::read_to_string(dir.path().join("top20.json")).unwrap();
    assert!(raw.contains("\"percentile_95\""));
}
