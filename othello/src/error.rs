use std::path::PathBuf;

use othello_rules::{Player, RuleError};

/// Errors from the turn protocol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("{player} attempted {notation}, illegal move")]
    IllegalMove { player: Player, notation: String },

    #[error("square ({col}, {row}) is off the board")]
    OutOfBounds { col: usize, row: usize },

    #[error("the game is already over")]
    GameOver,

    #[error("{0} has no legal move")]
    NoLegalMove(Player),

    #[error("no moves to undo")]
    NothingToUndo,

    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Errors from parsing coordinates like `D3`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("input must contain a letter and a number")]
    TooShort,

    #[error("column must be a letter from A to H, got '{0}'")]
    BadColumn(char),

    #[error("row must be a number between 1 and 8, got '{0}'")]
    BadRow(String),
}

/// Errors from saving or loading a game.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("no save file found at {0}")]
    NotFound(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
