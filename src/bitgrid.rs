//! A square bit grid packed into a single unsigned integer.
//!
//! The side length is chosen at runtime, the storage integer `T` at compile
//! time. A grid fits as long as `side * side <= T::BITS`. Boards use it to
//! track which cells are already consumed.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};
use thiserror::Error;

/// Errors returned by bit grid operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitGridError {
    /// Requested side*side exceeds the capacity of `T`.
    #[error("SizeTooLarge: {side}x{side} exceeds {capacity} bits")]
    SizeTooLarge { side: usize, capacity: usize },
    /// Row or column index is out of bounds [0..side).
    #[error("IndexOutOfBounds: row={row}, col={col}")]
    IndexOutOfBounds { row: usize, col: usize },
}

/// A `side`×`side` bit grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    side: usize,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of bits available in `T`.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Fallible constructor: `SizeTooLarge` if the grid does not fit in `T`.
    pub fn try_new(side: usize) -> Result<Self, BitGridError> {
        if side.saturating_mul(side) > Self::CAPACITY {
            Err(BitGridError::SizeTooLarge {
                side,
                capacity: Self::CAPACITY,
            })
        } else {
            Ok(BitGrid {
                bits: T::zero(),
                side,
            })
        }
    }

    /// Largest side that still fits in `T`.
    pub fn max_side() -> usize {
        let mut side = 0;
        while (side + 1) * (side + 1) <= Self::CAPACITY {
            side += 1;
        }
        side
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        let idx = self.index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BitGridError> {
        if row >= self.side || col >= self.side {
            Err(BitGridError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.side + col)
        }
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}x{}>:", self.side, self.side)?;
        for r in 0..self.side {
            for c in 0..self.side {
                let bit = if self.get(r, c).unwrap_or(false) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
