//! Board coordinates as used in trace files: a column letter (skipping "I")
//! followed by a 1-based row number, e.g. `F1` or `Q16`.

use crate::{Result, TraceSgfError};

/// Column letters 'A' to 'Z' with 'I' removed, as on a Go board.
pub const BOARD_LETTERS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// A zero-based board position: `row` counts up from the bottom edge,
/// `col` counts across from the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// Parses a textual coordinate like `"F1"` into a [`Coord`].
///
/// `"F1"` becomes `(row 0, col 5)`; `"J1"` becomes `(row 0, col 8)` because
/// the column alphabet skips "I". The literal `"pass"` is not a coordinate
/// and must be handled by the caller.
pub fn text_to_coord(text: &str) -> Result<Coord> {
    let mut chars = text.chars();
    let letter = chars
        .next()
        .ok_or_else(|| TraceSgfError::InvalidCoordinate("empty coordinate".to_string()))?;
    let col = BOARD_LETTERS
        .find(letter)
        .ok_or_else(|| TraceSgfError::InvalidCoordinate(format!("bad column letter in {text:?}")))?;
    let number: usize = chars
        .as_str()
        .parse()
        .map_err(|_| TraceSgfError::InvalidCoordinate(format!("bad row number in {text:?}")))?;
    if number == 0 {
        return Err(TraceSgfError::InvalidCoordinate(format!(
            "row number must be positive in {text:?}"
        )));
    }
    Ok(Coord {
        row: number - 1,
        col,
    })
}

/// Renders a [`Coord`] back to its textual form, e.g. `(0, 5)` -> `"F1"`.
pub fn coord_to_text(coord: Coord) -> String {
    let letter = BOARD_LETTERS
        .as_bytes()
        .get(coord.col)
        .copied()
        .unwrap_or(b'?') as char;
    format!("{}{}", letter, coord.row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_decodes_basic_coordinates() {
        assert_eq!(text_to_coord("A1").unwrap(), Coord { row: 0, col: 0 });
        assert_eq!(text_to_coord("F1").unwrap(), Coord { row: 0, col: 5 });
        assert_eq!(text_to_coord("Q16").unwrap(), Coord { row: 15, col: 15 });
    }

    #[test]
    fn test_column_alphabet_skips_i() {
        // "J" is the 9th usable letter, so zero-indexed column 8
        assert_eq!(text_to_coord("J1").unwrap(), Coord { row: 0, col: 8 });
        assert_matches!(text_to_coord("I1"), Err(TraceSgfError::InvalidCoordinate(_)));
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert_matches!(text_to_coord(""), Err(TraceSgfError::InvalidCoordinate(_)));
        assert_matches!(text_to_coord("F"), Err(TraceSgfError::InvalidCoordinate(_)));
        assert_matches!(text_to_coord("F0"), Err(TraceSgfError::InvalidCoordinate(_)));
        assert_matches!(text_to_coord("7F"), Err(TraceSgfError::InvalidCoordinate(_)));
        assert_matches!(text_to_coord("Fx"), Err(TraceSgfError::InvalidCoordinate(_)));
    }

    #[test]
    fn test_renders_back_to_text() {
        assert_eq!(coord_to_text(Coord { row: 0, col: 5 }), "F1");
        assert_eq!(coord_to_text(Coord { row: 15, col: 15 }), "Q16");
        assert_eq!(coord_to_text(Coord { row: 0, col: 8 }), "J1");
    }
}
