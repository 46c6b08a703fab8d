use crate::error::GameError;
use crate::game::GameState;
use ndarray::Array2;
use numpy::{PyArray1, PyArray2};
use othello_engines::{compute_move, select_move, HeuristicConfig};
use othello_rules::{Outcome, Player, Square, BOARD_SIZE, NUM_SQUARES};
use pyo3::exceptions::PyValueError;
/// PyO3 bindings for the Othello game shell
/// Exposes GameState and the heuristic engine to Python
use pyo3::prelude::*;

/// Python wrapper for an Othello game
///
/// Tracks the board, the player to move and the move history. Passing is
/// automatic: after each move the turn goes to whoever can play next.
#[pyclass]
pub struct OthelloGame {
    game: GameState,
    config: HeuristicConfig,
}

impl OthelloGame {
    fn action_to_square(action: usize) -> PyResult<Square> {
        Square::from_index(action).ok_or_else(|| {
            PyValueError::new_err(format!(
                "Action {} is out of range. Must be between 0 and 63 (inclusive).",
                action
            ))
        })
    }

    fn report_step(&self, result: Result<usize, GameError>) -> PyResult<(bool, usize, bool)> {
        match result {
            Ok(flipped) => Ok((true, flipped, self.game.is_finished())),
            // Rejected moves are reported, not raised, so callers can retry
            Err(GameError::IllegalMove { .. }) | Err(GameError::GameOver) => {
                Ok((false, 0, self.game.is_finished()))
            }
            Err(err) => Err(PyValueError::new_err(err.to_string())),
        }
    }
}

#[pymethods]
impl OthelloGame {
    /// Create a new Othello game with the standard initial setup
    ///
    /// Returns:
    ///     OthelloGame: A new game instance with 4 pieces in the center
    #[new]
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            config: HeuristicConfig::default(),
        }
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) {
        self.game = GameState::new();
    }

    /// Apply a move for the current player
    ///
    /// Args:
    ///     action (int): Position on the board (0-63), where action = row * 8 + col
    ///
    /// Returns:
    ///     tuple: (valid, pieces_flipped, game_over)
    ///
    /// Raises:
    ///     ValueError: If action is out of range [0, 63]
    pub fn step(&mut self, action: usize) -> PyResult<(bool, usize, bool)> {
        let square = Self::action_to_square(action)?;
        let result = self
            .game
            .play(square.col, square.row)
            .map(|report| report.flipped);
        self.report_step(result)
    }

    /// Let the heuristic engine play the current player's move
    ///
    /// Returns:
    ///     tuple: (valid, pieces_flipped, game_over)
    pub fn step_ai(&mut self) -> PyResult<(bool, usize, bool)> {
        let result = self.game.play_ai(&self.config).map(|report| report.flipped);
        self.report_step(result)
    }

    /// Take back the last move
    ///
    /// Returns:
    ///     bool: False if there was nothing to undo
    pub fn undo(&mut self) -> bool {
        self.game.undo().is_ok()
    }

    /// Get the current board state as a 2D numpy array
    ///
    /// Returns:
    ///     np.ndarray: Shape (8, 8) with dtype uint8, indexed [row, col]
    ///         - 0 = Empty cell
    ///         - 1 = Black piece
    ///         - 2 = White piece
    pub fn get_board<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray2<u8>> {
        let state = self.game.board().to_state();
        let array = Array2::from_shape_fn((BOARD_SIZE, BOARD_SIZE), |(row, col)| {
            state[row * BOARD_SIZE + col]
        });

        Ok(PyArray2::from_owned_array(py, array))
    }

    /// Get valid moves for the current player
    ///
    /// Returns:
    ///     np.ndarray: Shape (64,) with dtype bool, index = row * 8 + col
    pub fn get_valid_moves<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<bool>> {
        let moves = if self.game.is_finished() {
            [false; NUM_SQUARES]
        } else {
            self.game.board().valid_moves_mask(self.game.current_player())
        };
        Ok(PyArray1::from_slice(py, &moves))
    }

    /// Get the current player
    ///
    /// Returns:
    ///     int: 0 for Black, 1 for White
    pub fn get_current_player(&self) -> u8 {
        match self.game.current_player() {
            Player::Black => 0,
            Player::White => 1,
        }
    }

    /// Get piece counts for both players
    ///
    /// Returns:
    ///     tuple: (black_count, white_count)
    pub fn get_piece_counts(&self) -> (u8, u8) {
        self.game.score()
    }

    /// Get the winner of the game
    ///
    /// Returns:
    ///     int:
    ///         - 0 = Black wins
    ///         - 1 = White wins
    ///         - 2 = Draw
    ///         - 3 = Game not finished
    pub fn get_winner(&self) -> u8 {
        match self.game.outcome() {
            Some(Outcome::Winner(Player::Black)) => 0,
            Some(Outcome::Winner(Player::White)) => 1,
            Some(Outcome::Draw) => 2,
            None => 3,
        }
    }

    /// Moves played so far in notation form, e.g. ["D3", "C3"]
    pub fn get_move_history(&self) -> Vec<String> {
        self.game.move_list()
    }

    /// Replace the heuristic weights used by `select_move` and `step_ai`
    ///
    /// Raises:
    ///     ValueError: If a weight is not finite or a bonus/penalty is negative
    pub fn set_weights(
        &mut self,
        corner_bonus: f64,
        danger_penalty: f64,
        edge_bonus: f64,
        mobility_weight: f64,
    ) -> PyResult<()> {
        let config = HeuristicConfig {
            corner_bonus,
            danger_penalty,
            edge_bonus,
            mobility_weight,
        };
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        self.config = config;
        Ok(())
    }

    /// Ask the heuristic engine for the current player's move without playing it
    ///
    /// Returns:
    ///     int: Move index (0-63) or 255 if there is no move
    pub fn select_move(&self) -> u8 {
        if self.game.is_finished() {
            return u8::MAX;
        }
        select_move(self.game.board(), self.game.current_player(), &self.config)
            .map(|mv| mv.square.index() as u8)
            .unwrap_or(u8::MAX)
    }
}

/// Compute a move with the default heuristic weights
///
/// Args:
///     board (list): Flat board state as 64 elements (0=Empty, 1=Black, 2=White)
///     player (int): Current player (1=Black, 2=White)
///
/// Returns:
///     int: Move index (0-63) or 255 if no valid moves
#[pyfunction]
fn compute_move_heuristic_py(board: Vec<u8>, player: u8) -> PyResult<u8> {
    if board.len() != NUM_SQUARES {
        return Err(PyValueError::new_err(format!(
            "Board must have exactly 64 elements, got {}",
            board.len()
        )));
    }

    let mut board_array: [u8; NUM_SQUARES] = [0; NUM_SQUARES];
    board_array.copy_from_slice(&board);

    compute_move(&board_array, player, &HeuristicConfig::default())
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Python module definition
///
/// This module can be imported in Python as `othello`
#[pymodule]
fn othello(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<OthelloGame>()?;
    m.add_function(wrap_pyfunction!(compute_move_heuristic_py, m)?)?;
    Ok(())
}
