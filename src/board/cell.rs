use std::fmt;

/// A square of the 8x8 grid. `row` 0 is black's back rank, `row` 7 is white's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

/// The four diagonal directions as (row step, col step).
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Cell {
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "cell ({row}, {col}) is outside the 8x8 grid");
        Self { row, col }
    }

    /// Neighbour `steps` squares away along `(dr, dc)`, or `None` past the edge.
    pub fn offset(self, dr: i8, dc: i8, steps: i8) -> Option<Cell> {
        let r = self.row as i8 + dr * steps;
        let c = self.col as i8 + dc * steps;
        if (0..8).contains(&r) && (0..8).contains(&c) { Some(Cell { row: r as u8, col: c as u8 }) } else { None }
    }

    /// Iterator over the squares along a diagonal ray, nearest first.
    pub fn ray(self, dr: i8, dc: i8) -> impl Iterator<Item = Cell> {
        (1..8).map_while(move |k| self.offset(dr, dc, k))
    }

    /// Linear index 0..64, row-major.
    pub fn index(self) -> usize { self.row as usize * 8 + self.col as usize }

    pub fn is_dark(self) -> bool { (self.row + self.col) % 2 == 1 }

    pub fn all() -> impl Iterator<Item = Cell> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Cell { row, col }))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}
