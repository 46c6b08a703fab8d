//! Core types and rules for Othello (Reversi)
//!
//! Squares are addressed as `(col, row)` with both coordinates in `0..8`.
//! Every operation is a pure computation over a [`Board`] value: nothing here
//! keeps state between calls or performs I/O. Turn order, passing and history
//! belong to the caller.

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// The eight scan vectors as `(dx, dy)`, in the order lines are reported.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("square ({col}, {row}) is off the board")]
    OutOfBounds { col: usize, row: usize },

    #[error("{player} cannot play at ({col}, {row})")]
    IllegalMove {
        col: usize,
        row: usize,
        player: Player,
    },

    #[error("invalid colour value {0} (expected 1 = Black or 2 = White)")]
    InvalidColor(u8),

    #[error("invalid cell value {0} (expected 0 = Empty, 1 = Black or 2 = White)")]
    InvalidCell(u8),

    #[error("board state must have 64 cells, got {0}")]
    InvalidLength(usize),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert player to cell representation
    pub fn to_cell(&self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Flat-state code: 1 = Black, 2 = White
    pub fn code(&self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = RuleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::Black),
            2 => Ok(Player::White),
            other => Err(RuleError::InvalidColor(other)),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }

    pub fn from_code(code: u8) -> Result<Cell, RuleError> {
        match code {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Black),
            2 => Ok(Cell::White),
            other => Err(RuleError::InvalidCell(other)),
        }
    }
}

/// A board coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Square {
    pub col: usize,
    pub row: usize,
}

impl Square {
    pub const CORNERS: [Square; 4] = [
        Square::new(0, 0),
        Square::new(BOARD_SIZE - 1, 0),
        Square::new(0, BOARD_SIZE - 1),
        Square::new(BOARD_SIZE - 1, BOARD_SIZE - 1),
    ];

    pub const fn new(col: usize, row: usize) -> Self {
        Square { col, row }
    }

    pub fn is_on_board(&self) -> bool {
        self.col < BOARD_SIZE && self.row < BOARD_SIZE
    }

    /// Flat index: `row * 8 + col`
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn from_index(index: usize) -> Option<Square> {
        if index >= NUM_SQUARES {
            return None;
        }
        Some(Square::new(index % BOARD_SIZE, index / BOARD_SIZE))
    }

    pub fn is_corner(&self) -> bool {
        Square::CORNERS.contains(self)
    }

    /// True for every square on the outer ring, corners included
    pub fn is_edge(&self) -> bool {
        self.is_on_board()
            && (self.col == 0
                || self.row == 0
                || self.col == BOARD_SIZE - 1
                || self.row == BOARD_SIZE - 1)
    }

    /// The neighbouring square one step along `(dx, dy)`, if still on the board
    pub fn step(&self, dx: i8, dy: i8) -> Option<Square> {
        let col = self.col as i64 + dx as i64;
        let row = self.row as i64 + dy as i64;
        let size = BOARD_SIZE as i64;
        if (0..size).contains(&col) && (0..size).contains(&row) {
            Some(Square::new(col as usize, row as usize))
        } else {
            None
        }
    }
}

/// Opponent discs that flip together along one direction.
pub type CaptureLine = Vec<Square>;

/// A proposed placement of `player`'s disc at `square`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    pub square: Square,
    pub player: Player,
}

impl Move {
    pub fn new(col: usize, row: usize, player: Player) -> Self {
        Move {
            square: Square::new(col, row),
            player,
        }
    }

    pub fn col(&self) -> usize {
        self.square.col
    }

    pub fn row(&self) -> usize {
        self.square.row
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// 8x8 grid of cells, stored row by row (`cells[row][col]`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// Canonical starting board. Same as [`Board::new`].
pub fn initialise() -> Board {
    Board::new()
}

impl Board {
    /// Create a new board with initial Othello setup
    /// Initial setup has 4 pieces in the center, as `(col, row)`:
    /// - (3,3) and (4,4) are White
    /// - (4,3) and (3,4) are Black
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];

        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;

        Board { cells }
    }

    /// A board with all 64 cells empty. Handy for composing test positions.
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= BOARD_SIZE || row >= BOARD_SIZE {
            return None;
        }
        Some(self.cells[row][col])
    }

    pub fn set(&mut self, col: usize, row: usize, cell: Cell) -> Result<(), RuleError> {
        if col >= BOARD_SIZE || row >= BOARD_SIZE {
            return Err(RuleError::OutOfBounds { col, row });
        }
        self.cells[row][col] = cell;
        Ok(())
    }

    /// All 64 squares in row-major order (row outer, col inner).
    /// This is the enumeration order every scan on the board follows.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(col, row)))
    }

    /// Every capture line that placing `player` at `(col, row)` would produce.
    ///
    /// Returns an empty set when the square is off the board, already
    /// occupied, or brackets nothing. Each direction is walked over
    /// consecutive opponent discs; the run counts only when it is closed by
    /// one of the mover's own discs.
    pub fn capture_lines(&self, col: usize, row: usize, player: Player) -> Vec<CaptureLine> {
        let mut lines = Vec::new();

        if col >= BOARD_SIZE || row >= BOARD_SIZE {
            return lines;
        }
        if self.cells[row][col] != Cell::Empty {
            return lines;
        }

        let own = player.to_cell();
        let opponent = player.opponent().to_cell();
        let origin = Square::new(col, row);

        for (dx, dy) in DIRECTIONS {
            let mut line = CaptureLine::new();
            let mut next = origin.step(dx, dy);

            while let Some(square) = next {
                let cell = self.cells[square.row][square.col];
                if cell == opponent {
                    line.push(square);
                    next = square.step(dx, dy);
                } else {
                    if cell == own && !line.is_empty() {
                        lines.push(line);
                    }
                    break;
                }
            }
        }

        lines
    }

    /// A move is legal iff it produces at least one capture line.
    pub fn is_legal_move(&self, col: usize, row: usize, player: Player) -> bool {
        !self.capture_lines(col, row, player).is_empty()
    }

    /// Place `player` at `(col, row)` and flip every captured disc.
    /// Returns the number of discs flipped.
    ///
    /// An illegal move is rejected and the board is left untouched.
    pub fn apply_move(&mut self, col: usize, row: usize, player: Player) -> Result<usize, RuleError> {
        if col >= BOARD_SIZE || row >= BOARD_SIZE {
            return Err(RuleError::OutOfBounds { col, row });
        }

        let lines = self.capture_lines(col, row, player);
        if lines.is_empty() {
            return Err(RuleError::IllegalMove { col, row, player });
        }

        let cell = player.to_cell();
        self.cells[row][col] = cell;

        let mut flipped = 0;
        for square in lines.iter().flatten() {
            self.cells[square.row][square.col] = cell;
            flipped += 1;
        }

        Ok(flipped)
    }

    /// Value-returning form of [`Board::apply_move`]: `(new_board, flipped)`.
    pub fn with_move(&self, col: usize, row: usize, player: Player) -> Result<(Board, usize), RuleError> {
        let mut next = *self;
        let flipped = next.apply_move(col, row, player)?;
        Ok((next, flipped))
    }

    /// Legal squares for `player` in row-major order
    pub fn legal_moves(&self, player: Player) -> Vec<Square> {
        Board::squares()
            .filter(|square| self.is_legal_move(square.col, square.row, player))
            .collect()
    }

    /// Get all valid moves for `player` as a 64-element bool array
    /// Array is indexed as: index = row * 8 + col
    pub fn valid_moves_mask(&self, player: Player) -> [bool; NUM_SQUARES] {
        let mut mask = [false; NUM_SQUARES];
        for square in Board::squares() {
            mask[square.index()] = self.is_legal_move(square.col, square.row, player);
        }
        mask
    }

    /// Number of legal moves available to `player`
    pub fn mobility(&self, player: Player) -> usize {
        Board::squares()
            .filter(|square| self.is_legal_move(square.col, square.row, player))
            .count()
    }

    pub fn any_legal_move(&self, player: Player) -> bool {
        Board::squares().any(|square| self.is_legal_move(square.col, square.row, player))
    }

    /// Get piece counts (black_count, white_count)
    pub fn count_pieces(&self) -> (u8, u8) {
        let mut black = 0;
        let mut white = 0;

        for row in self.cells.iter() {
            for cell in row.iter() {
                match cell {
                    Cell::Black => black += 1,
                    Cell::White => white += 1,
                    Cell::Empty => {}
                }
            }
        }

        (black, white)
    }

    pub fn empty_count(&self) -> u8 {
        let (black, white) = self.count_pieces();
        NUM_SQUARES as u8 - black - white
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// The game is over when neither player has a legal move.
    pub fn is_terminal(&self) -> bool {
        !self.any_legal_move(Player::Black) && !self.any_legal_move(Player::White)
    }

    /// Result of a finished game; `None` while either side can still move.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_terminal() {
            return None;
        }

        let (black, white) = self.count_pieces();
        Some(if black > white {
            Outcome::Winner(Player::Black)
        } else if white > black {
            Outcome::Winner(Player::White)
        } else {
            Outcome::Draw
        })
    }

    /// Get current board state as flat array [0=empty, 1=black, 2=white]
    /// Array is indexed as: index = row * 8 + col
    pub fn to_state(&self) -> [u8; NUM_SQUARES] {
        let mut state = [0u8; NUM_SQUARES];
        for square in Board::squares() {
            state[square.index()] = self.cells[square.row][square.col].code();
        }
        state
    }

    /// Rebuild a board from the flat layout produced by [`Board::to_state`].
    pub fn from_state(state: &[u8]) -> Result<Board, RuleError> {
        if state.len() != NUM_SQUARES {
            return Err(RuleError::InvalidLength(state.len()));
        }

        let mut board = Board::empty();
        for square in Board::squares() {
            board.cells[square.row][square.col] = Cell::from_code(state[square.index()])?;
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPENING_MOVES: [(usize, usize); 4] = [(3, 2), (2, 3), (5, 4), (4, 5)];

    #[test]
    fn test_board_new_initial_setup() {
        let board = Board::new();

        assert_eq!(board.get(3, 3), Some(Cell::White));
        assert_eq!(board.get(4, 4), Some(Cell::White));
        assert_eq!(board.get(4, 3), Some(Cell::Black));
        assert_eq!(board.get(3, 4), Some(Cell::Black));

        for square in Board::squares() {
            if ![(3, 3), (3, 4), (4, 3), (4, 4)].contains(&(square.col, square.row)) {
                assert_eq!(board.get(square.col, square.row), Some(Cell::Empty));
            }
        }

        assert_eq!(board.count_pieces(), (2, 2));
        assert_eq!(initialise(), board);
    }

    #[test]
    fn test_same_colours_are_diagonal_at_start() {
        let board = Board::new();
        assert_eq!(board.get(3, 3), board.get(4, 4));
        assert_eq!(board.get(4, 3), board.get(3, 4));
        assert_ne!(board.get(3, 3), board.get(4, 3));
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent().opponent(), Player::Black);
    }

    #[test]
    fn test_player_to_cell() {
        assert_eq!(Player::Black.to_cell(), Cell::Black);
        assert_eq!(Player::White.to_cell(), Cell::White);
        assert_eq!(Cell::Black.player(), Some(Player::Black));
        assert_eq!(Cell::Empty.player(), None);
    }

    #[test]
    fn test_player_try_from_code() {
        assert_eq!(Player::try_from(1), Ok(Player::Black));
        assert_eq!(Player::try_from(2), Ok(Player::White));
        assert_eq!(Player::try_from(0), Err(RuleError::InvalidColor(0)));
        assert_eq!(Player::try_from(7), Err(RuleError::InvalidColor(7)));
    }

    #[test]
    fn test_is_legal_move_initial_board() {
        let board = Board::new();

        for (col, row) in OPENING_MOVES {
            assert!(board.is_legal_move(col, row, Player::Black), "({col}, {row})");
        }

        // Occupied
        assert!(!board.is_legal_move(3, 3, Player::Black));
        assert!(!board.is_legal_move(4, 3, Player::Black));

        // Empty but brackets nothing
        assert!(!board.is_legal_move(0, 0, Player::Black));
        assert!(!board.is_legal_move(7, 7, Player::Black));
        assert!(!board.is_legal_move(2, 2, Player::Black));
    }

    #[test]
    fn test_legal_moves_initial_board() {
        let board = Board::new();

        assert_eq!(
            board.legal_moves(Player::Black),
            vec![Square::new(3, 2), Square::new(2, 3), Square::new(5, 4), Square::new(4, 5)]
        );
        assert_eq!(
            board.legal_moves(Player::White),
            vec![Square::new(4, 2), Square::new(5, 3), Square::new(2, 4), Square::new(3, 5)]
        );

        let mask = board.valid_moves_mask(Player::Black);
        assert_eq!(mask.iter().filter(|&&v| v).count(), 4);
        assert!(mask[2 * 8 + 3]);
        assert!(mask[3 * 8 + 2]);
        assert_eq!(board.mobility(Player::Black), 4);
    }

    #[test]
    fn test_is_legal_move_out_of_bounds() {
        let board = Board::new();
        assert!(!board.is_legal_move(8, 0, Player::Black));
        assert!(!board.is_legal_move(0, 8, Player::Black));
        assert!(!board.is_legal_move(10, 10, Player::White));
        assert!(board.capture_lines(8, 3, Player::Black).is_empty());
    }

    #[test]
    fn test_capture_lines_opening() {
        let board = Board::new();
        let lines = board.capture_lines(2, 3, Player::Black);
        assert_eq!(lines, vec![vec![Square::new(3, 3)]]);
    }

    #[test]
    fn test_capture_lines_multiple_directions() {
        // Black at (2,2) can capture both along the row and down the column
        let mut board = Board::empty();
        board.set(0, 0, Cell::Black).unwrap();
        board.set(1, 1, Cell::White).unwrap();
        board.set(3, 2, Cell::White).unwrap();
        board.set(4, 2, Cell::White).unwrap();
        board.set(5, 2, Cell::Black).unwrap();
        board.set(2, 3, Cell::White).unwrap();
        board.set(2, 4, Cell::Black).unwrap();

        let lines = board.capture_lines(2, 2, Player::Black);
        assert_eq!(
            lines,
            vec![
                vec![Square::new(1, 1)],
                vec![Square::new(3, 2), Square::new(4, 2)],
                vec![Square::new(2, 3)],
            ]
        );
    }

    #[test]
    fn test_capture_line_needs_closing_disc() {
        // White run reaches the edge without a black disc behind it
        let mut board = Board::empty();
        board.set(1, 0, Cell::White).unwrap();
        board.set(2, 0, Cell::White).unwrap();
        assert!(board.capture_lines(0, 0, Player::Black).is_empty());

        // Run interrupted by an empty cell
        board.set(4, 0, Cell::Black).unwrap();
        assert!(board.capture_lines(0, 0, Player::Black).is_empty());

        // Own disc directly adjacent captures nothing
        let mut board = Board::empty();
        board.set(1, 0, Cell::Black).unwrap();
        assert!(board.capture_lines(0, 0, Player::Black).is_empty());
    }

    #[test]
    fn test_apply_move_valid() {
        let mut board = Board::new();

        let flipped = board.apply_move(2, 3, Player::Black).unwrap();
        assert_eq!(flipped, 1);

        assert_eq!(board.get(2, 3), Some(Cell::Black));
        assert_eq!(board.get(3, 3), Some(Cell::Black));
        assert_eq!(board.count_pieces(), (4, 1));
    }

    #[test]
    fn test_every_opening_move_flips_one() {
        for player in [Player::Black, Player::White] {
            let board = Board::new();
            for square in board.legal_moves(player) {
                let (next, flipped) = board.with_move(square.col, square.row, player).unwrap();
                assert_eq!(flipped, 1);
                let (black, white) = next.count_pieces();
                match player {
                    Player::Black => assert_eq!((black, white), (4, 1)),
                    Player::White => assert_eq!((black, white), (1, 4)),
                }
            }
        }
    }

    #[test]
    fn test_apply_move_invalid() {
        let mut board = Board::new();

        let result = board.apply_move(0, 0, Player::Black);
        assert_eq!(
            result,
            Err(RuleError::IllegalMove {
                col: 0,
                row: 0,
                player: Player::Black
            })
        );
        assert_eq!(board, Board::new());

        let result = board.apply_move(9, 0, Player::Black);
        assert_eq!(result, Err(RuleError::OutOfBounds { col: 9, row: 0 }));
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let board = Board::new();
        let (next, _) = board.with_move(5, 4, Player::Black).unwrap();
        assert_eq!(board, Board::new());
        assert_ne!(next, board);
    }

    #[test]
    fn test_apply_move_flips_all_lines() {
        let mut board = Board::empty();
        board.set(0, 0, Cell::Black).unwrap();
        board.set(1, 1, Cell::White).unwrap();
        board.set(3, 2, Cell::White).unwrap();
        board.set(4, 2, Cell::White).unwrap();
        board.set(5, 2, Cell::Black).unwrap();
        board.set(2, 3, Cell::White).unwrap();
        board.set(2, 4, Cell::Black).unwrap();

        let flipped = board.apply_move(2, 2, Player::Black).unwrap();
        assert_eq!(flipped, 4);
        assert_eq!(board.count_pieces(), (8, 0));
    }

    #[test]
    fn test_full_board_is_terminal() {
        let mut board = Board::empty();
        for square in Board::squares() {
            let cell = if square.row < 4 { Cell::Black } else { Cell::White };
            board.set(square.col, square.row, cell).unwrap();
        }
        assert!(board.is_full());
        assert!(board.is_terminal());
        assert_eq!(board.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_terminal_with_empty_cells() {
        // Only black discs left: nobody can bracket anything
        let mut board = Board::empty();
        board.set(3, 3, Cell::Black).unwrap();
        board.set(4, 4, Cell::Black).unwrap();
        assert!(!board.is_full());
        assert!(board.is_terminal());
        assert_eq!(board.outcome(), Some(Outcome::Winner(Player::Black)));
    }

    #[test]
    fn test_outcome_not_over() {
        assert_eq!(Board::new().outcome(), None);
        assert!(!Board::new().is_terminal());
    }

    #[test]
    fn test_one_side_can_move() {
        // White can play (2,0) but Black has nothing
        let mut board = Board::empty();
        board.set(0, 0, Cell::White).unwrap();
        board.set(1, 0, Cell::Black).unwrap();

        assert!(!board.any_legal_move(Player::Black));
        assert!(board.any_legal_move(Player::White));
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_state_roundtrip() {
        let mut board = Board::new();
        board.apply_move(2, 3, Player::Black).unwrap();

        let state = board.to_state();
        assert_eq!(state[3 * 8 + 2], 1);
        assert_eq!(state[3 * 8 + 3], 1);
        assert_eq!(state[4 * 8 + 4], 2);
        assert_eq!(state[0], 0);

        assert_eq!(Board::from_state(&state), Ok(board));
    }

    #[test]
    fn test_from_state_rejects_bad_input() {
        assert_eq!(Board::from_state(&[0; 10]), Err(RuleError::InvalidLength(10)));

        let mut state = [0u8; 64];
        state[5] = 3;
        assert_eq!(Board::from_state(&state), Err(RuleError::InvalidCell(3)));
    }

    #[test]
    fn test_square_helpers() {
        assert!(Square::new(0, 7).is_corner());
        assert!(!Square::new(1, 0).is_corner());
        assert!(Square::new(1, 0).is_edge());
        assert!(Square::new(7, 7).is_edge());
        assert!(!Square::new(3, 3).is_edge());
        assert_eq!(Square::from_index(19), Some(Square::new(3, 2)));
        assert_eq!(Square::from_index(64), None);
        assert_eq!(Square::new(0, 0).step(-1, 0), None);
        assert_eq!(Square::new(0, 0).step(1, 1), Some(Square::new(1, 1)));
    }

    #[test]
    fn test_board_serde_roundtrip() {
        let board = Board::new();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_error_display() {
        let err = RuleError::IllegalMove {
            col: 0,
            row: 0,
            player: Player::White,
        };
        assert_eq!(err.to_string(), "White cannot play at (0, 0)");
    }
}
