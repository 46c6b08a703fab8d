//! Turn protocol around the pure rules.
//!
//! [`GameState`] owns the board, the player to move, the finished flag and the
//! move history. Every request from a front end goes through it; the rules
//! crate itself never holds on to a board.

use othello_engines::{select_move, HeuristicConfig};
use othello_rules::{Board, Outcome, Player, Square, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::GameError;
use crate::notation::format_square;

/// One applied move, with the position it was played from so it can be undone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub square: Square,
    pub notation: String,
    pub flipped: usize,
    /// The opponent had no reply, so `player` moved again
    pub opponent_passed: bool,
    pub board_before: Board,
}

/// What happened when a move was accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveReport {
    pub player: Player,
    pub square: Square,
    pub notation: String,
    pub flipped: usize,
    pub next_player: Player,
    pub passed: bool,
    /// Set when this move ended the game
    pub outcome: Option<Outcome>,
}

impl MoveReport {
    pub fn message(&self) -> String {
        let disc_word = if self.flipped == 1 { "disc" } else { "discs" };
        let mut message = format!(
            "{} played {}, {} {} flipped.",
            self.player, self.notation, self.flipped, disc_word
        );
        if self.passed {
            message.push_str(&format!(
                " {} has no legal moves, so {} plays again.",
                self.player.opponent(),
                self.player
            ));
        }
        message
    }
}

/// Announcement for a turn skipped because `passed` had no legal move.
pub fn pass_message(passed: Player) -> String {
    format!("{} has no legal moves, so {} plays.", passed, passed.opponent())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current: Player,
    finished: bool,
    history: Vec<MoveRecord>,
}

impl GameState {
    /// Fresh game: starting board, Black to move
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current: Player::Black,
            finished: false,
            history: Vec::new(),
        }
    }

    /// Resume from an arbitrary position with `current` to move.
    pub fn from_position(board: Board, current: Player) -> Self {
        let mut state = GameState {
            board,
            current,
            finished: false,
            history: Vec::new(),
        };
        state.refresh();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Moves played so far, e.g. `["D3", "C5"]`
    pub fn move_list(&self) -> Vec<String> {
        self.history.iter().map(|record| record.notation.clone()).collect()
    }

    /// (black_count, white_count)
    pub fn score(&self) -> (u8, u8) {
        self.board.count_pieces()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.finished {
            self.board.outcome()
        } else {
            None
        }
    }

    /// Final score line once the game is over
    pub fn summary(&self) -> Option<String> {
        let outcome = self.outcome()?;
        let (black, white) = self.score();
        let verdict = match outcome {
            Outcome::Winner(player) => format!("{player} wins!"),
            Outcome::Draw => "It's a draw!".to_string(),
        };
        Some(format!(
            "Game over! Final score: Black {black}, White {white}. {verdict}"
        ))
    }

    /// Re-derive the finished flag from the position and pass the turn if the
    /// player to move is stuck. Returns the player who passed, if any.
    pub fn refresh(&mut self) -> Option<Player> {
        self.finished = self.board.is_terminal();
        if self.finished || self.board.any_legal_move(self.current) {
            return None;
        }

        let passed = self.current;
        self.current = passed.opponent();
        info!(%passed, "no legal moves, passing");
        Some(passed)
    }

    /// Play the current player's disc at `(col, row)`.
    ///
    /// Illegal moves are rejected and leave the state untouched.
    pub fn play(&mut self, col: usize, row: usize) -> Result<MoveReport, GameError> {
        if self.finished {
            return Err(GameError::GameOver);
        }
        if col >= BOARD_SIZE || row >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { col, row });
        }

        let player = self.current;
        let square = Square::new(col, row);
        let notation = format_square(square);

        if !self.board.is_legal_move(col, row, player) {
            debug!(%player, %notation, "rejected illegal move");
            return Err(GameError::IllegalMove { player, notation });
        }

        let board_before = self.board;
        let flipped = self.board.apply_move(col, row, player)?;

        let opponent = player.opponent();
        let (next_player, passed) = if self.board.any_legal_move(opponent) {
            (opponent, false)
        } else if self.board.any_legal_move(player) {
            (player, true)
        } else {
            (opponent, false)
        };

        self.current = next_player;
        self.finished = self.board.is_terminal();
        let outcome = self.outcome();

        self.history.push(MoveRecord {
            player,
            square,
            notation: notation.clone(),
            flipped,
            opponent_passed: passed,
            board_before,
        });

        info!(%player, %notation, flipped, "move applied");
        if passed {
            info!(passed = %opponent, "no legal moves, passing");
        }
        if let Some(outcome) = outcome {
            let (black, white) = self.score();
            info!(?outcome, black, white, "game over");
        }

        Ok(MoveReport {
            player,
            square,
            notation,
            flipped,
            next_player,
            passed,
            outcome,
        })
    }

    /// Let the heuristic engine choose and play the current player's move.
    pub fn play_ai(&mut self, config: &HeuristicConfig) -> Result<MoveReport, GameError> {
        if self.finished {
            return Err(GameError::GameOver);
        }

        let mv = select_move(&self.board, self.current, config)
            .ok_or(GameError::NoLegalMove(self.current))?;
        self.play(mv.col(), mv.row())
    }

    /// Take back the last move.
    pub fn undo(&mut self) -> Result<MoveRecord, GameError> {
        let record = self.history.pop().ok_or(GameError::NothingToUndo)?;

        self.board = record.board_before;
        self.current = record.player;
        self.finished = false;

        info!(notation = %record.notation, "move taken back");
        Ok(record)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
