use crate::{board::Board, common::ShotError, coord::Coord, game::{ShotRecord, Side}};

/// What a side may look at when choosing its next target.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// Side about to shoot.
    pub side: Side,
    /// The side's own board.
    pub own: &'a Board,
    /// The board being attacked.
    pub enemy: &'a Board,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Name used in messages and logs.
    fn name(&self) -> &str;

    /// Choose the next target on `view.enemy`. Called again with the same
    /// view when the previous target was rejected.
    fn ask_for_target(&mut self, view: &TurnView<'_>) -> anyhow::Result<Coord>;

    /// Inform the player of the result of its accepted shot.
    fn handle_shot_result(&mut self, _shot: &ShotRecord) {}

    /// Inform the player that `target` was rejected.
    fn handle_rejected_shot(&mut self, _target: Coord, _error: ShotError) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _shot: &ShotRecord) {}
}
