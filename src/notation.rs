//! Square notation: files `a`..`h` are columns, ranks `8`..`1` are rows 0..7.
//! A turn is written as its visited squares, `-` after a slide and `:` between
//! capture legs: `c3-d4`, `c3:e5:g7`.

use crate::board::Cell;
use crate::error::ParseError;
use crate::movegen::Move;

pub fn parse_cell(s: &str) -> Result<Cell, ParseError> {
    let b = s.trim().as_bytes();
    if b.len() != 2 { return Err(ParseError::Square(s.to_string())); }
    let (f, r) = (b[0].to_ascii_lowercase(), b[1]);
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) { return Err(ParseError::Square(s.to_string())); }
    Ok(Cell::new(b'8' - r, f - b'a'))
}

/// Visited squares of a turn; accepts `-`, `:` or `x` as separators.
pub fn parse_squares(text: &str) -> Result<Vec<Cell>, ParseError> {
    let parts: Vec<&str> = text.trim().split(|c: char| c == '-' || c == ':' || c == 'x').collect();
    if parts.len() < 2 { return Err(ParseError::MoveText(text.to_string())); }
    parts.into_iter().map(parse_cell).collect()
}

pub fn format_turn(turn: &[Move]) -> String {
    let Some(first) = turn.first() else { return String::from("(none)") };
    let mut s = first.from.to_string();
    for mv in turn {
        s.push(if mv.is_capture() { ':' } else { '-' });
        s.push_str(&mv.to.to_string());
    }
    s
}

/// The turn among `turns` visiting exactly `squares` in order.
pub fn find_turn(turns: &[Vec<Move>], squares: &[Cell]) -> Option<Vec<Move>> {
    turns
        .iter()
        .find(|t| {
            t.len() + 1 == squares.len()
                && t[0].from == squares[0]
                && t.iter().zip(&squares[1..]).all(|(mv, &sq)| mv.to == sq)
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners() {
        assert_eq!(parse_cell("a8").unwrap(), Cell::new(0, 0));
        assert_eq!(parse_cell("h1").unwrap(), Cell::new(7, 7));
        assert_eq!(Cell::new(5, 2).to_string(), "c3");
        assert!(parse_cell("i1").is_err());
        assert!(parse_cell("a9").is_err());
    }

    #[test]
    fn capture_chain_formats_with_colons() {
        let a = Move::capture(Cell::new(5, 2), Cell::new(3, 4), Cell::new(4, 3));
        let b = Move::capture(Cell::new(3, 4), Cell::new(1, 6), Cell::new(2, 5));
        assert_eq!(format_turn(&[a, b]), "c3:e5:g7");
        assert_eq!(parse_squares("c3:e5:g7").unwrap(), vec![Cell::new(5, 2), Cell::new(3, 4), Cell::new(1, 6)]);
    }
}
