//! Grid positions.

use core::fmt;

/// A cell position as (row, column), 0-indexed.
///
/// Components are signed so that targets lying off the board (for example a
/// user typing `0`) can be represented and rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by `(dr, dc)`, saturating at the `i32` range.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }

    /// Unsigned `(row, col)` if the coordinate lies inside a `side`×`side` grid.
    pub fn to_index(self, side: usize) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < side && col < side).then_some((row, col))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as i32, col as i32)
    }
}

/// Prints the 1-indexed form the player types in.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
