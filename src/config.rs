use alloc::vec::Vec;
use thiserror::Error;

use crate::board::Board;
use crate::game::Side;

pub const DEFAULT_BOARD_SIZE: usize = 6;
/// Largest side the board's `u128` busy set can hold.
pub const MAX_BOARD_SIZE: usize = 11;
pub const DEFAULT_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
/// Ship attempts per board before the whole board is thrown away.
pub const SHIP_PLACEMENT_ATTEMPTS: usize = 2000;

/// Invalid game configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size must be between 1 and {max}, got {size}")]
    BoardSize { size: usize, max: usize },
    #[error("fleet must contain at least one ship")]
    EmptyFleet,
    #[error("ship lengths must be at least 1")]
    ZeroLengthShip,
    #[error("ship of length {length} does not fit on a {size}x{size} board")]
    ShipTooLong { length: usize, size: usize },
    #[error("placement attempt budget must be at least 1")]
    NoPlacementAttempts,
}

/// Rules and tunables for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    /// Side of the square board.
    pub board_size: usize,
    /// Lengths of the ships every side places.
    pub fleet: Vec<usize>,
    /// Ship attempts per board before restarting the board.
    pub placement_attempts: usize,
    /// Upper bound on whole-board restarts. `None` retries forever.
    pub max_board_attempts: Option<usize>,
    /// Side that shoots first.
    pub first_side: Side,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
            placement_attempts: SHIP_PLACEMENT_ATTEMPTS,
            max_board_attempts: None,
            first_side: Side::A,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = MAX_BOARD_SIZE.min(Board::max_size());
        if self.board_size == 0 || self.board_size > max {
            return Err(ConfigError::BoardSize {
                size: self.board_size,
                max,
            });
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if self.fleet.contains(&0) {
            return Err(ConfigError::ZeroLengthShip);
        }
        if let Some(&length) = self.fleet.iter().find(|&&len| len > self.board_size) {
            return Err(ConfigError::ShipTooLong {
                length,
                size: self.board_size,
            });
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }
        Ok(())
    }

    /// Number of ships in a full fleet.
    pub fn fleet_len(&self) -> usize {
        self.fleet.len()
    }

    /// Total number of ship cells in a full fleet.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}
