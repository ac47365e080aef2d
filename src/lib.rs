#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitgrid;
mod board;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use bitgrid::{BitGrid, BitGridError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::Coord;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
