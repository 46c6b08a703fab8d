//! Othello game shell
//!
//! Wraps the pure rules (`othello_rules`) and the heuristic engine
//! (`othello_engines`) with everything a front end needs: the turn protocol
//! and history in [`GameState`], `D3`-style notation, JSON save files, a
//! console board view and, behind the `python` feature, PyO3 bindings.

pub mod error;
pub mod game;
pub mod notation;
pub mod persist;
pub mod render;

// PyO3 bindings module
#[cfg(feature = "python")]
pub mod bindings;

pub use error::{GameError, NotationError, PersistError};
pub use game::{pass_message, GameState, MoveRecord, MoveReport};
pub use notation::{format_square, parse_square};
pub use render::BoardDisplay;

pub use othello_engines::HeuristicConfig;
pub use othello_rules::{Board, Cell, Move, Outcome, Player, Square};
