//! Error types.
//!
//! Play itself never fails. Errors come from storage and word lists, plus
//! handing off a round that is still running.

use thiserror::Error;

use crate::core::Team;

/// Failure of a key-value storage backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("There was a problem reading or writing the store file")]
    Io(#[from] std::io::Error),
    #[error("The store file is not a JSON object of strings")]
    Json(#[from] serde_json::Error),
    #[error("No storage is available in this environment")]
    Unavailable,
    #[error("The storage backend rejected the operation: {0}")]
    Backend(String),
}

/// Top-level error for game operations.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Unknown team `{0}`, expected `orange` or `purple`")]
    UnknownTeam(String),
    #[error("Unknown action `{0}`, expected e, h, f or s")]
    UnknownAction(String),
    #[error("The {0} word pool is empty")]
    EmptyWordPool(Team),
    #[error("Could not parse word list")]
    WordList(#[from] serde_json::Error),
    #[error("Could not read word list directory")]
    WordListIo(#[from] std::io::Error),
    #[error("The round is still running, handoff is only possible once it has expired")]
    RoundNotExpired,
    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, GameError>;
