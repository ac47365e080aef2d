//! Common types for Sea Battle: board errors and shot outcomes.

use thiserror::Error;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot destroyed the last intact cell of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Hits and sinks grant the shooter another shot.
    pub fn keeps_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by `Board::place_ship`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some cell of the ship lies outside the grid.
    #[error("Ship placement is out of bounds")]
    OutOfBounds,
    /// Ship touches another ship's body or its exclusion zone.
    #[error("Ship placement overlaps or touches another ship")]
    Overlap,
    /// Ship has no cells.
    #[error("Ship has zero length")]
    EmptyShip,
    /// Shot tracking has started; the fleet can no longer change.
    #[error("Board is frozen, ships can no longer be placed")]
    BoardFrozen,
}

/// Errors returned by `Board::receive_shot`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the grid.
    #[error("You are shooting off the board")]
    OutOfBounds,
    /// Target was already shot (or revealed around a sunk ship).
    #[error("You have already shot at this cell")]
    AlreadyShot,
    /// The board is still in the placement phase.
    #[error("Board is not ready for shots yet")]
    NotInCombat,
}

/// Errors returned by the turn engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The target was rejected; the same side must pick another one.
    #[error(transparent)]
    Shot(#[from] ShotError),
    /// The game already ended, no new shots are accepted.
    #[error("Game is over, no more shots are accepted")]
    GameOver,
}
