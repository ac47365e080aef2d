//! Straight-line ships and their hit tracking.

use core::fmt;

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells advance along the column axis.
    Horizontal,
    /// Cells advance along the row axis.
    Vertical,
}

/// Offsets of a cell and its eight neighbours.
const NEIGHBOURHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A ship anchored at its bow, `size` cells long.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    size: usize,
    orientation: Orientation,
    lives: usize,
}

impl Ship {
    /// Create an undamaged ship. Whether it fits is decided by the board.
    pub fn new(bow: Coord, size: usize, orientation: Orientation) -> Self {
        Ship {
            bow,
            size,
            orientation,
            lives: size,
        }
    }

    /// Cells occupied by the ship, starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size)
            .map_while(|i| i32::try_from(i).ok())
            .map(move |i| match self.orientation {
                Orientation::Horizontal => self.bow.offset(0, i),
                Orientation::Vertical => self.bow.offset(i, 0),
            })
    }

    /// The ship's cells together with every 8-adjacent coordinate.
    /// Coordinates may lie off the board and may repeat.
    pub fn neighbourhood(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells().flat_map(|cell| {
            NEIGHBOURHOOD
                .iter()
                .map(move |&(dr, dc)| cell.offset(dr, dc))
        })
    }

    /// Returns `true` if `coord` is one of the ship's cells.
    pub fn occupies(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Register a hit at `coord`.
    /// Returns `true` if the coordinate belongs to this ship and records it.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        if self.occupies(coord) {
            self.lives = self.lives.saturating_sub(1);
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk (no intact cells left).
    pub fn is_sunk(&self) -> bool {
        self.lives == 0
    }

    /// Number of intact cells.
    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), size: {}, orientation: {:?}, lives: {} }}",
            self.bow.row, self.bow.col, self.size, self.orientation, self.lives,
        )
    }
}
