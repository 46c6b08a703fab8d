use std::fmt;

use othello_rules::{Board, Cell, BOARD_SIZE};

/// Console view of a board: numbered rows, `.`/`B`/`W` cells, lettered columns.
pub struct BoardDisplay<'a>(pub &'a Board);

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let cells: Vec<&str> = (0..BOARD_SIZE)
                .map(|col| match self.0.get(col, row) {
                    Some(Cell::Black) => "B",
                    Some(Cell::White) => "W",
                    _ => ".",
                })
                .collect();
            writeln!(f, "{:>2} | {}", row + 1, cells.join("  "))?;
        }

        writeln!(f, "   +{}", "-".repeat(BOARD_SIZE * 3))?;

        let letters: Vec<String> = (0..BOARD_SIZE)
            .map(|col| ((b'A' + col as u8) as char).to_string())
            .collect();
        write!(f, "     {}", letters.join("  "))
    }
}
