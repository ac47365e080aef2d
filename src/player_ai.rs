use alloc::string::String;
use rand::Rng;

use crate::{
    common::ShotError,
    coord::Coord,
    player::{Player, TurnView},
};

/// Computer player shooting uniformly at random over the enemy grid.
///
/// It keeps no memory of earlier shots, so repeated targets are possible and
/// simply get rejected by the board.
pub struct AiPlayer<R> {
    name: String,
    rng: R,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self::with_name("Computer", rng)
    }

    pub fn with_name(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Player for AiPlayer<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn ask_for_target(&mut self, view: &TurnView<'_>) -> anyhow::Result<Coord> {
        let side = view.enemy.size() as i32;
        anyhow::ensure!(side > 0, "enemy board has no cells");
        let target = Coord::new(
            self.rng.random_range(0..side),
            self.rng.random_range(0..side),
        );
        log::info!("{} (side {:?}) fires at {}", self.name, view.side, target);
        Ok(target)
    }

    fn handle_rejected_shot(&mut self, target: Coord, error: ShotError) {
        log::trace!("{} retries after {}: {}", self.name, target, error);
    }
}
