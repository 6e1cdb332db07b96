//! Error types shared by the renderer and the rating engine.

use std::path::PathBuf;
use thiserror::Error;

use crate::Float;

#[derive(Error, Debug)]
pub enum Error {
    /// The input file is missing or unreadable
    #[error("could not read input file {}: {source}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input parsed badly or lacks a required field
    #[error("malformed input in {}: {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("input contains no records, cannot establish the axis scale")]
    EmptyInput,

    /// A record whose spread makes the density undefined
    #[error("record {rank} ({name}) has invalid spread {spread}, expected a positive value")]
    InvalidParameter {
        rank: u32,
        name: String,
        spread: Float,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error("team {0} not found")]
    UnknownTeam(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Config(err.to_string())
    }
}
