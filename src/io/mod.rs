use std::fs;
use std::path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::rating::game::Game;

pub mod team_record;

use self::team_record::TeamRecord;

fn load_json_list<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let contents = fs::read_to_string(file_path).map_err(|source| Error::InputNotFound { path: file_path.to_path_buf(), source })?;
    serde_json::from_str(&contents).map_err(|source| Error::MalformedInput { path: file_path.to_path_buf(), source })
}

/// Loads the ranked records in file order. Ranks are taken as given.
pub fn load_team_records(file_path: &Path) -> Result<Vec<TeamRecord>> {
    let records: Vec<TeamRecord> = load_json_list(file_path)?;
    tracing::debug!("loaded {} records from {}", records.len(), file_path.display());
    Ok(records)
}

pub fn load_games(file_path: &Path) -> Result<Vec<Game>> {
    let games: Vec<Game> = load_json_list(file_path)?;
    tracing::debug!("loaded {} games from {}", games.len(), file_path.display());
    Ok(games)
}

pub fn write_json<T: Serialize + ?Sized>(value: &T, file_path: &Path) -> Result<()> {
    let serialized = serde_json::to_string_pretty(value)?;
    fs::write(file_path, serialized)?;
    Ok(())
}
