//! Heuristic Engine - Single-ply positional AI
//!
//! Algorithm Strategy:
//! - Evaluates every legal move by simulating it on a copy of the board
//! - No lookahead: each candidate is judged on the position it produces
//!
//! Score of a candidate:
//! - Base: number of discs the move flips
//! - Positional: `+corner_bonus` on a corner, `-danger_penalty` next to an
//!   unclaimed corner, `+edge_bonus` on any other border square
//! - Mobility: `mobility_weight * (own moves after - opponent moves after)`
//!
//! Candidates are visited in row-major order (row outer, col inner) and a
//! later candidate replaces the best only with a strictly higher score, so the
//! first of several equal candidates wins and the choice is reproducible.

use std::cmp::Ordering;

use othello_rules::{Board, Cell, Move, Player, RuleError, Square, BOARD_SIZE, NUM_SQUARES};
use tracing::{debug, trace};

use crate::config::HeuristicConfig;

/// Positional category of a square, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareRole {
    Corner,
    /// Touching a corner that is still empty
    Danger,
    /// Border square that is neither a corner nor dangerous
    Edge,
    Interior,
}

/// The corner `square` touches, if any. Corners themselves return `None`.
fn adjacent_corner(square: Square) -> Option<Square> {
    Square::CORNERS.into_iter().find(|corner| {
        *corner != square
            && corner.col.abs_diff(square.col) <= 1
            && corner.row.abs_diff(square.row) <= 1
    })
}

/// Classify `square` against the corners as they stand on `board`.
pub fn classify(board: &Board, square: Square) -> SquareRole {
    if square.is_corner() {
        return SquareRole::Corner;
    }

    if let Some(corner) = adjacent_corner(square) {
        if board.get(corner.col, corner.row) == Some(Cell::Empty) {
            return SquareRole::Danger;
        }
    }

    if square.is_edge() {
        SquareRole::Edge
    } else {
        SquareRole::Interior
    }
}

fn positional_adjustment(role: SquareRole, config: &HeuristicConfig) -> f64 {
    match role {
        SquareRole::Corner => config.corner_bonus,
        SquareRole::Danger => -config.danger_penalty,
        SquareRole::Edge => config.edge_bonus,
        SquareRole::Interior => 0.0,
    }
}

/// Score `player` playing at `(col, row)`, or `None` if the move is illegal.
pub fn score_move(
    board: &Board,
    col: usize,
    row: usize,
    player: Player,
    config: &HeuristicConfig,
) -> Option<f64> {
    let (after, flipped) = board.with_move(col, row, player).ok()?;

    let mut score = flipped as f64;
    score += positional_adjustment(classify(&after, Square::new(col, row)), config);

    let mine = after.mobility(player) as f64;
    let theirs = after.mobility(player.opponent()) as f64;
    score += config.mobility_weight * (mine - theirs);

    Some(score)
}

/// Scores for every square, indexed `row * 8 + col`; `None` marks illegal squares.
pub fn compute_move_scores(
    board: &Board,
    player: Player,
    config: &HeuristicConfig,
) -> [Option<f64>; NUM_SQUARES] {
    let mut scores = [None; NUM_SQUARES];
    for square in Board::squares() {
        scores[square.index()] = score_move(board, square.col, square.row, player, config);
    }
    scores
}

/// Pick the best-scoring legal move for `player`, or `None` when it must pass.
///
/// The board is only read; callers apply the returned move themselves.
pub fn select_move(board: &Board, player: Player, config: &HeuristicConfig) -> Option<Move> {
    let mut best: Option<(Square, f64)> = None;

    for square in board.legal_moves(player) {
        let Some(score) = score_move(board, square.col, square.row, player, config) else {
            continue;
        };
        trace!(col = square.col, row = square.row, score, "scored candidate");

        // Replace only on a strict improvement; a NaN score never compares
        // greater, so the earliest candidate survives.
        let improves = match best {
            Some((_, best_score)) => score.partial_cmp(&best_score) == Some(Ordering::Greater),
            None => true,
        };
        if improves {
            best = Some((square, score));
        }
    }

    match best {
        Some((square, score)) => {
            debug!(%player, col = square.col, row = square.row, score, "selected move");
            Some(Move { square, player })
        }
        None => {
            debug!(%player, "no legal move");
            None
        }
    }
}

/// Flat-board entry point
///
/// # Arguments
/// * `state` - Board as [u8; 64] where 0=Empty, 1=Black, 2=White, index `row * 8 + col`
/// * `player` - Player to move (1 = Black, 2 = White)
///
/// # Returns
/// Action index (0-63) of the selected move, or u8::MAX if the player must pass
pub fn compute_move(
    state: &[u8; NUM_SQUARES],
    player: u8,
    config: &HeuristicConfig,
) -> Result<u8, RuleError> {
    let player = Player::try_from(player)?;
    let board = Board::from_state(state)?;

    Ok(select_move(&board, player, config)
        .map(|mv| (mv.row() * BOARD_SIZE + mv.col()) as u8)
        .unwrap_or(u8::MAX))
}
