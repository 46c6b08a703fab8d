//! Save and load a [`GameState`] as JSON.

use std::path::Path;

use tracing::info;

use othello_rules::Player;

use crate::error::PersistError;
use crate::game::GameState;

pub const DEFAULT_SAVE_FILE: &str = "savegame.json";

pub fn save(state: &GameState, path: &Path) -> Result<(), PersistError> {
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), moves = state.history().len(), "game saved");
    Ok(())
}

/// Load a saved game. The finished flag and any forced pass are recomputed
/// from the stored position rather than trusted.
pub fn load(path: &Path) -> Result<GameState, PersistError> {
    load_with_pass(path).map(|(state, _)| state)
}

/// Like [`load`], but also returns the player who had to pass because the
/// saved side to move has no legal move.
pub fn load_with_pass(path: &Path) -> Result<(GameState, Option<Player>), PersistError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            PersistError::NotFound(path.to_path_buf())
        } else {
            PersistError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut state: GameState = serde_json::from_str(&content)?;
    let passed = state.refresh();
    info!(path = %path.display(), moves = state.history().len(), "game loaded");
    Ok((state, passed))
}
