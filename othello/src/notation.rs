//! Display coordinates: column letter `A`-`H` followed by row number `1`-`8`.
//!
//! `D3` is `(col 3, row 2)`.

use othello_rules::{Square, BOARD_SIZE};

use crate::error::NotationError;

pub fn format_square(square: Square) -> String {
    let letter = (b'A' + square.col as u8) as char;
    format!("{}{}", letter, square.row + 1)
}

/// Parse moves like `A 3`, `d 6`, `H8`, `c4`. Spaces and commas are ignored.
pub fn parse_square(raw: &str) -> Result<Square, NotationError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();

    let mut chars = cleaned.chars();
    let letter = match chars.next() {
        Some(letter) if cleaned.len() >= 2 => letter,
        _ => return Err(NotationError::TooShort),
    };

    let last_letter = (b'A' + BOARD_SIZE as u8 - 1) as char;
    if !('A'..=last_letter).contains(&letter) {
        return Err(NotationError::BadColumn(letter));
    }
    let col = letter as usize - 'A' as usize;

    let digits = chars.as_str();
    let row: usize = digits
        .parse()
        .map_err(|_| NotationError::BadRow(digits.to_string()))?;
    if !(1..=BOARD_SIZE).contains(&row) {
        return Err(NotationError::BadRow(digits.to_string()));
    }

    Ok(Square::new(col, row - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_square() {
        assert_eq!(format_square(Square::new(0, 0)), "A1");
        assert_eq!(format_square(Square::new(3, 2)), "D3");
        assert_eq!(format_square(Square::new(7, 7)), "H8");
    }

    #[test]
    fn test_parse_accepts_loose_input() {
        assert_eq!(parse_square("A 3"), Ok(Square::new(0, 2)));
        assert_eq!(parse_square("d 6"), Ok(Square::new(3, 5)));
        assert_eq!(parse_square("H8"), Ok(Square::new(7, 7)));
        assert_eq!(parse_square("  c4 "), Ok(Square::new(2, 3)));
        assert_eq!(parse_square("e,5"), Ok(Square::new(4, 4)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse_square(""), Err(NotationError::TooShort));
        assert_eq!(parse_square("a"), Err(NotationError::TooShort));
        assert_eq!(parse_square("I3"), Err(NotationError::BadColumn('I')));
        assert_eq!(parse_square("33"), Err(NotationError::BadColumn('3')));
        assert_eq!(parse_square("A9"), Err(NotationError::BadRow("9".to_string())));
        assert_eq!(parse_square("A0"), Err(NotationError::BadRow("0".to_string())));
        assert_eq!(parse_square("Ax"), Err(NotationError::BadRow("X".to_string())));
    }

    #[test]
    fn test_parse_inverts_format() {
        for index in 0..64 {
            let square = Square::from_index(index).unwrap();
            assert_eq!(parse_square(&format_square(square)), Ok(square));
        }
    }
}
