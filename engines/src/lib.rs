//! Othello Engines
//!
//! Automated move selection on top of `othello_rules`:
//! - `heuristic`: single-ply evaluation combining captures, square roles and
//!   mobility, tuned by [`HeuristicConfig`]
//! - `config`: the tunable weights and their TOML loader
//!
//! [`HeuristicConfig::greedy`] reduces the engine to pure capture maximisation.

pub mod config;
pub mod heuristic;

pub use config::{ConfigError, HeuristicConfig};
pub use heuristic::{
    classify, compute_move, compute_move_scores, score_move, select_move, SquareRole,
};
