extern crate color_eyre;

use std::fs;
use std::path::Path;
use color_eyre::eyre::Result;

use elo_dist::io::{load_games, write_json};
use elo_dist::logging::{init_logging, DEFAULT_FILTER};
use elo_dist::rating::bayesian_elo::OPTIMAL_K_FACTOR;
use elo_dist::rating::report::{format_csv, format_table, format_team_distribution};
use elo_dist::rating::BayesianElo;
use elo_dist::{GAMES_FILE, INPUT_FILE};

const TABLE_COUNT: usize = 25;
const CHART_COUNT: usize = 20;
const CSV_FILE: &str = "rankings.csv";

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging(DEFAULT_FILTER);

    let games = load_games(Path::new(GAMES_FILE))?;
    let completed = games.iter().filter(|g| g.completed).count();
    tracing::info!("loaded {} games, {} completed, k factor {:.2}", games.len(), completed, OPTIMAL_K_FACTOR);

    let mut elo = BayesianElo::new();
    elo.process_games(&games);

    if elo.teams.is_empty() {
        println!("No completed games found in {}", GAMES_FILE);
        return Ok(());
    }

    let table_records = elo.top_records(TABLE_COUNT);
    print!("{}", format_table("NCAA Men's Basketball Bayesian ELO Rankings", &table_records));
    if let Some(leader) = elo.rankings().first() {
        print!("{}", format_team_distribution(leader));
    }

    fs::write(CSV_FILE, format_csv(&table_records))?;
    println!("Output written to {}", CSV_FILE);

    let chart_records = elo.top_records(CHART_COUNT);
    write_json(&chart_records, Path::new(INPUT_FILE))?;
    println!("Output written to {}", INPUT_FILE);
    Ok(())
}
