//! Random fleet placement.
//!
//! A board attempt places every ship of the fleet at random, retrying single
//! ships until a shared attempt budget runs out. A board that runs out is
//! discarded and placement starts over on an empty one.

use rand::Rng;
use thiserror::Error;

use crate::bitgrid::BitGridError;
use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot allocate board: {0}")]
    Grid(#[from] BitGridError),
    /// The configured bound on whole-board restarts was reached.
    #[error("no legal fleet found after {0} board attempts")]
    Exhausted(usize),
}

/// A ship of `size` with a uniformly random orientation and a bow drawn
/// from `[0, board_size]` on both axes. The range is one wider than the
/// board, so some candidates stick out and get rejected.
pub fn random_ship<R: Rng + ?Sized>(rng: &mut R, board_size: usize, size: usize) -> Ship {
    let max = board_size as i32;
    let bow = Coord::new(rng.random_range(0..=max), rng.random_range(0..=max));
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(bow, size, orientation)
}

/// One board attempt. `Ok(None)` means the attempt budget ran out and the
/// caller should start over.
pub fn try_board<R: Rng + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<Option<Board>, FleetError> {
    let mut board = Board::new(config.board_size)?;
    let mut attempts = 0;
    for &size in config.fleet.iter() {
        loop {
            attempts += 1;
            if attempts > config.placement_attempts {
                return Ok(None);
            }
            let ship = random_ship(rng, config.board_size, size);
            if board.place_ship(ship).is_ok() {
                break;
            }
        }
    }
    board.reset_shot_tracking();
    Ok(Some(board))
}

/// Keep trying boards until a full fleet fits, or until
/// `config.max_board_attempts` is reached.
pub fn random_board<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Board, FleetError> {
    config.validate()?;
    let mut boards = 0;
    loop {
        if let Some(limit) = config.max_board_attempts {
            if boards >= limit {
                return Err(FleetError::Exhausted(boards));
            }
        }
        boards += 1;
        if let Some(board) = try_board(config, rng)? {
            log::debug!("fleet placed after {} board attempt(s)", boards);
            return Ok(board);
        }
        log::debug!("board attempt {} abandoned, starting over", boards);
    }
}
