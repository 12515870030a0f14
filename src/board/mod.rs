pub mod cell;
pub mod position;
pub mod zobrist;

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use cell::{Cell, DIAGONALS};
use crate::error::ParseError;
use crate::movegen::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row on which a man of this color is crowned.
    pub fn promotion_row(self) -> u8 {
        match self { Color::White => 0, Color::Black => 7 }
    }

    /// Row direction a man of this color slides in.
    pub fn forward(self) -> i8 {
        match self { Color::White => -1, Color::Black => 1 }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Color::White => "white", Color::Black => "black" })
    }
}

/// Piece codes: odd is white, even is black, above 2 is a king.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    WhiteMan = 1,
    BlackMan = 2,
    WhiteKing = 3,
    BlackKing = 4,
}

impl Piece {
    pub fn code(self) -> u8 { self as u8 }

    /// `0` is an empty cell; anything above 4 is not a piece code.
    pub fn from_code(code: u8) -> Option<Piece> {
        match code {
            1 => Some(Piece::WhiteMan),
            2 => Some(Piece::BlackMan),
            3 => Some(Piece::WhiteKing),
            4 => Some(Piece::BlackKing),
            _ => None,
        }
    }

    pub fn man(color: Color) -> Piece {
        match color { Color::White => Piece::WhiteMan, Color::Black => Piece::BlackMan }
    }

    pub fn king(color: Color) -> Piece {
        match color { Color::White => Piece::WhiteKing, Color::Black => Piece::BlackKing }
    }

    pub fn color(self) -> Color {
        if self.code() % 2 == 1 { Color::White } else { Color::Black }
    }

    pub fn is_king(self) -> bool { self.code() > 2 }

    pub fn crowned(self) -> Piece { Piece::king(self.color()) }

    fn symbol(self) -> char {
        match self {
            Piece::WhiteMan => 'w',
            Piece::BlackMan => 'b',
            Piece::WhiteKing => 'W',
            Piece::BlackKing => 'B',
        }
    }

    fn from_symbol(c: char) -> Option<Option<Piece>> {
        match c {
            '.' => Some(None),
            'w' => Some(Some(Piece::WhiteMan)),
            'b' => Some(Some(Piece::BlackMan)),
            'W' => Some(Some(Piece::WhiteKing)),
            'B' => Some(Some(Piece::BlackKing)),
            _ => None,
        }
    }
}

/// The 8x8 grid, row-major. Pure data: rules live in `movegen`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self { Self::start() }
}

impl Board {
    pub fn empty() -> Self { Self { grid: [[None; 8]; 8] } }

    /// Standard opening: black on rows 0..3, white on rows 5..8, dark squares only.
    pub fn start() -> Self {
        let mut b = Self::empty();
        for cell in Cell::all().filter(|c| c.is_dark()) {
            if cell.row < 3 { b.set(cell, Some(Piece::BlackMan)); }
            if cell.row > 4 { b.set(cell, Some(Piece::WhiteMan)); }
        }
        b
    }

    /// Build from raw piece codes (`0` empty). Panics on a code above 4.
    pub fn from_codes(codes: [[u8; 8]; 8]) -> Self {
        let mut b = Self::empty();
        for cell in Cell::all() {
            let code = codes[cell.row as usize][cell.col as usize];
            let piece = Piece::from_code(code);
            assert!(code == 0 || piece.is_some(), "invalid piece code {code} at {cell}");
            b.set(cell, piece);
        }
        b
    }

    pub fn to_codes(&self) -> [[u8; 8]; 8] {
        let mut out = [[0u8; 8]; 8];
        for cell in Cell::all() {
            out[cell.row as usize][cell.col as usize] = self[cell].map_or(0, Piece::code);
        }
        out
    }

    pub fn get(&self, cell: Cell) -> Option<Piece> { self.grid[cell.row as usize][cell.col as usize] }

    pub fn set(&mut self, cell: Cell, piece: Option<Piece>) {
        self.grid[cell.row as usize][cell.col as usize] = piece;
    }

    pub fn is_empty_at(&self, cell: Cell) -> bool { self.get(cell).is_none() }

    /// Occupied cells holding pieces of `color`, row-major.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all().filter_map(move |c| self.get(c).filter(|p| p.color() == color).map(|p| (c, p)))
    }

    pub fn count(&self, piece: Piece) -> usize {
        Cell::all().filter(|&c| self.get(c) == Some(piece)).count()
    }

    /// Apply one leg and return the successor grid. Clears the origin and the
    /// captured cell, crowns a man that lands on its promotion row. The move
    /// is trusted to come from the move generator.
    pub fn apply(&self, mv: Move) -> Board {
        let piece = match self.get(mv.from) {
            Some(p) => p,
            None => panic!("apply_move: no piece on {}", mv.from),
        };
        let mut next = *self;
        if let Some(cap) = mv.captured { next.set(cap, None); }
        next.set(mv.from, None);
        let landed = if !piece.is_king() && mv.to.row == piece.color().promotion_row() { piece.crowned() } else { piece };
        next.set(mv.to, Some(landed));
        next
    }

    /// Apply every leg of a turn in order.
    pub fn apply_turn(&self, turn: &[Move]) -> Board {
        turn.iter().fold(*self, |b, &mv| b.apply(mv))
    }
}

/// Free-function form of [`Board::apply`].
pub fn apply_move(board: &Board, mv: Move) -> Board { board.apply(mv) }

impl Index<Cell> for Board {
    type Output = Option<Piece>;
    fn index(&self, cell: Cell) -> &Option<Piece> { &self.grid[cell.row as usize][cell.col as usize] }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Eight lines of eight symbols (`.`, `w`, `b`, `W`, `B`); blank lines and
    /// spaces are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != 8 { return Err(ParseError::RowCount(rows.len())); }
        let mut b = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != 8 { return Err(ParseError::RowWidth { row: r, width: row.len() }); }
            for (c, &ch) in row.iter().enumerate() {
                let piece = Piece::from_symbol(ch).ok_or(ParseError::Symbol { row: r, col: c, symbol: ch })?;
                b.set(Cell::new(r as u8, c as u8), piece);
            }
        }
        Ok(b)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let ch = self.get(Cell::new(row, col)).map_or('.', Piece::symbol);
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_has_twelve_men_each() {
        let b = Board::start();
        assert_eq!(b.count(Piece::WhiteMan), 12);
        assert_eq!(b.count(Piece::BlackMan), 12);
        assert!(b.pieces(Color::White).all(|(c, _)| c.row >= 5 && c.is_dark()));
    }

    #[test]
    fn codes_round_trip_through_grid() {
        let b = Board::start();
        assert_eq!(Board::from_codes(b.to_codes()), b);
        assert_eq!(b.to_codes()[0][1], 2);
        assert_eq!(b.to_codes()[7][0], 1);
    }

    #[test]
    fn piece_code_invariants() {
        for code in 1..=4u8 {
            let p = Piece::from_code(code).unwrap();
            assert_eq!(p.color() == Color::White, code % 2 == 1);
            assert_eq!(p.is_king(), code > 2);
        }
        assert_eq!(Piece::from_code(0), None);
    }
}
