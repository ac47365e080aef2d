//! Commonly used types for ease of import.

pub use crate::{
    random_board, AiPlayer, Board, Coord, GameConfig, GameEngine, GameStatus, Orientation,
    Player, Ship, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{ui::render_board, CliPlayer};
