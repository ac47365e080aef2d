//! Turn sequencing between two sides shooting at each other's boards.

use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::Board,
    common::{GameError, ShotOutcome},
    config::GameConfig,
    coord::Coord,
    fleet::{random_board, FleetError},
    player::{Player, TurnView},
};

/// One of the two turn-taking participants. `A` is the human in the
/// default setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the given side to shoot.
    Awaiting(Side),
    /// The winner destroyed the other side's fleet.
    Over { winner: Side },
}

/// An accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub side: Side,
    pub target: Coord,
    pub outcome: ShotOutcome,
}

/// Core game logic holding both boards and the shot history.
pub struct GameEngine {
    boards: [Board; 2],
    status: GameStatus,
    history: Vec<ShotRecord>,
}

impl GameEngine {
    /// Start a game on two already populated boards. Boards still in the
    /// placement phase are switched to shot tracking.
    pub fn new(mut board_a: Board, mut board_b: Board, first: Side) -> Self {
        board_a.reset_shot_tracking();
        board_b.reset_shot_tracking();
        Self {
            boards: [board_a, board_b],
            status: GameStatus::Awaiting(first),
            history: Vec::new(),
        }
    }

    /// Place random fleets for both sides. Side B's board is hidden.
    pub fn setup<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, FleetError> {
        let board_a = random_board(config, rng)?;
        let mut board_b = random_board(config, rng)?;
        board_b.set_hidden(true);
        Ok(Self::new(board_a, board_b, config.first_side))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side that shoots next, `None` once the game is over.
    pub fn side_to_move(&self) -> Option<Side> {
        match self.status {
            GameStatus::Awaiting(side) => Some(side),
            GameStatus::Over { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Over { winner } => Some(winner),
            GameStatus::Awaiting(_) => None,
        }
    }

    /// Board defended by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// What `side` gets to see when choosing a target.
    pub fn view(&self, side: Side) -> TurnView<'_> {
        TurnView {
            side,
            own: self.board(side),
            enemy: self.board(side.other()),
        }
    }

    /// Every accepted shot in order.
    pub fn history(&self) -> &[ShotRecord] {
        &self.history
    }

    /// Number of accepted shots fired by `side`.
    pub fn shots_by(&self, side: Side) -> usize {
        self.history.iter().filter(|s| s.side == side).count()
    }

    /// The side to move shoots at `target` on the opponent's board.
    ///
    /// A rejected target leaves the game untouched. A miss passes the turn,
    /// a hit or sink keeps it, and destroying the last ship ends the game.
    pub fn fire(&mut self, target: Coord) -> Result<ShotOutcome, GameError> {
        let side = self.side_to_move().ok_or(GameError::GameOver)?;
        let enemy = &mut self.boards[side.other().index()];
        let outcome = enemy.receive_shot(target)?;
        let destroyed = enemy.is_fleet_destroyed();
        self.history.push(ShotRecord {
            side,
            target,
            outcome,
        });

        if destroyed {
            log::info!("side {:?} destroyed the enemy fleet", side);
            self.status = GameStatus::Over { winner: side };
        } else if !outcome.keeps_turn() {
            log::debug!("turn passes to side {:?}", side.other());
            self.status = GameStatus::Awaiting(side.other());
        }
        Ok(outcome)
    }

    /// Ask `player` for targets until one is accepted.
    pub fn take_turn(&mut self, player: &mut dyn Player) -> anyhow::Result<ShotRecord> {
        let side = self.side_to_move().ok_or(GameError::GameOver)?;
        loop {
            let target = player.ask_for_target(&self.view(side))?;
            match self.fire(target) {
                Ok(outcome) => {
                    let shot = ShotRecord {
                        side,
                        target,
                        outcome,
                    };
                    player.handle_shot_result(&shot);
                    return Ok(shot);
                }
                Err(GameError::Shot(err)) => player.handle_rejected_shot(target, err),
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Run turns until one side wins. `a` plays side A, `b` plays side B.
    pub fn play(&mut self, a: &mut dyn Player, b: &mut dyn Player) -> anyhow::Result<Side> {
        loop {
            let side = match self.status {
                GameStatus::Over { winner } => return Ok(winner),
                GameStatus::Awaiting(side) => side,
            };
            match side {
                Side::A => {
                    let shot = self.take_turn(a)?;
                    b.handle_opponent_shot(&shot);
                }
                Side::B => {
                    let shot = self.take_turn(b)?;
                    a.handle_opponent_shot(&shot);
                }
            }
        }
    }
}
