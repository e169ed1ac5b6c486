//! Error types for the NBA game-log export CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("No NBA team matches the name: {name}")]
    TeamNotFound { name: String },

    #[error("Team name matches {count} teams, refusing to pick one: {name}")]
    AmbiguousTeam { name: String, count: usize },

    #[error("Stats response is missing result set: {name}")]
    MissingResultSet { name: String },

    #[error("Result set {result_set} is missing column: {column}")]
    MissingColumn {
        result_set: String,
        column: String,
    },

    #[error("Unusable value in {result_set} column {column}")]
    InvalidCell {
        result_set: String,
        column: String,
    },

    #[error("Invalid season: {value} (expected YYYY-YY, e.g. 2024-25)")]
    InvalidSeason { value: String },

    #[error("Invalid season type: {value}")]
    InvalidSeasonType { value: String },

    #[error("No teams to process: pass --team or --teams-file")]
    NoTeams,
}
