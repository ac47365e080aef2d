use std::collections::VecDeque;

use sea_battle::{
    Board, Coord, GameEngine, GameError, GameStatus, Orientation, Player, Ship, ShotError,
    ShotOutcome, ShotRecord, Side, TurnView,
};

/// Player that fires a fixed list of targets and remembers what it was told.
struct Scripted {
    targets: VecDeque<Coord>,
    results: Vec<ShotRecord>,
    rejected: Vec<(Coord, ShotError)>,
    incoming: Vec<ShotRecord>,
}

impl Scripted {
    fn new(targets: &[(i32, i32)]) -> Self {
        Self {
            targets: targets.iter().map(|&(r, c)| Coord::new(r, c)).collect(),
            results: Vec::new(),
            rejected: Vec::new(),
            incoming: Vec::new(),
        }
    }
}

impl Player for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn ask_for_target(&mut self, _view: &TurnView<'_>) -> anyhow::Result<Coord> {
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn handle_shot_result(&mut self, shot: &ShotRecord) {
        self.results.push(*shot);
    }

    fn handle_rejected_shot(&mut self, target: Coord, error: ShotError) {
        self.rejected.push((target, error));
    }

    fn handle_opponent_shot(&mut self, shot: &ShotRecord) {
        self.incoming.push(*shot);
    }
}

/// Side A owns a single cell ship at (5,0); side B a 3-long ship at (0,0).
fn engine(first: Side) -> GameEngine {
    let mut a = Board::new(6).unwrap();
    a.place_ship(Ship::new(Coord::new(5, 0), 1, Orientation::Horizontal))
        .unwrap();
    a.reset_shot_tracking();
    let mut b = Board::new(6).unwrap();
    b.place_ship(Ship::new(Coord::new(0, 0), 3, Orientation::Horizontal))
        .unwrap();
    b.reset_shot_tracking();
    b.set_hidden(true);
    GameEngine::new(a, b, first)
}

#[test]
fn test_miss_passes_turn() {
    let mut game = engine(Side::A);
    assert_eq!(game.status(), GameStatus::Awaiting(Side::A));
    assert_eq!(game.fire(Coord::new(5, 5)), Ok(ShotOutcome::Miss));
    assert_eq!(game.status(), GameStatus::Awaiting(Side::B));
    assert_eq!(game.side_to_move(), Some(Side::B));
}

#[test]
fn test_hit_keeps_turn_and_sink_wins() {
    let mut game = engine(Side::A);
    assert_eq!(game.fire(Coord::new(0, 0)), Ok(ShotOutcome::Hit));
    assert_eq!(game.status(), GameStatus::Awaiting(Side::A));
    assert_eq!(game.fire(Coord::new(0, 1)), Ok(ShotOutcome::Hit));
    assert_eq!(game.status(), GameStatus::Awaiting(Side::A));
    assert_eq!(game.fire(Coord::new(0, 2)), Ok(ShotOutcome::Sunk));
    assert_eq!(game.status(), GameStatus::Over { winner: Side::A });
    assert_eq!(game.winner(), Some(Side::A));
    assert!(game.board(Side::B).is_fleet_destroyed());
    assert_eq!(game.fire(Coord::new(4, 4)), Err(GameError::GameOver));
    assert_eq!(game.shots_by(Side::A), 3);
}

#[test]
fn test_rejected_shot_does_not_advance() {
    let mut game = engine(Side::B);
    assert_eq!(
        game.fire(Coord::new(6, 6)),
        Err(GameError::Shot(ShotError::OutOfBounds))
    );
    assert_eq!(game.status(), GameStatus::Awaiting(Side::B));
    assert_eq!(game.fire(Coord::new(0, 0)), Ok(ShotOutcome::Miss));
    assert_eq!(game.status(), GameStatus::Awaiting(Side::A));
    assert_eq!(game.fire(Coord::new(3, 3)), Ok(ShotOutcome::Miss));
    assert_eq!(
        game.fire(Coord::new(0, 0)),
        Err(GameError::Shot(ShotError::AlreadyShot))
    );
    assert_eq!(game.status(), GameStatus::Awaiting(Side::B));
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_take_turn_reasks_after_rejection() {
    let mut game = engine(Side::A);
    let mut player = Scripted::new(&[(9, 9), (-1, 0), (2, 2)]);
    let shot = game.take_turn(&mut player).unwrap();
    assert_eq!(shot.target, Coord::new(2, 2));
    assert_eq!(shot.outcome, ShotOutcome::Miss);
    assert_eq!(
        player.rejected,
        vec![
            (Coord::new(9, 9), ShotError::OutOfBounds),
            (Coord::new(-1, 0), ShotError::OutOfBounds),
        ]
    );
    assert_eq!(player.results, vec![shot]);
}

#[test]
fn test_play_full_game() {
    let mut game = engine(Side::A);
    // A misses, B misses, A sinks the three cell ship in one streak
    let mut a = Scripted::new(&[(5, 5), (0, 0), (0, 1), (0, 2)]);
    let mut b = Scripted::new(&[(0, 0)]);

    let winner = game.play(&mut a, &mut b).unwrap();
    assert_eq!(winner, Side::A);
    assert_eq!(
        a.results.iter().map(|s| s.outcome).collect::<Vec<_>>(),
        vec![
            ShotOutcome::Miss,
            ShotOutcome::Hit,
            ShotOutcome::Hit,
            ShotOutcome::Sunk
        ]
    );
    assert_eq!(b.incoming.len(), 4);
    assert_eq!(a.incoming.len(), 1);
    assert_eq!(game.history().len(), 5);
    assert!(a.targets.is_empty());
}

#[test]
fn test_defender_can_win() {
    let mut game = engine(Side::A);
    let mut a = Scripted::new(&[(4, 4)]);
    let mut b = Scripted::new(&[(5, 0)]);
    assert_eq!(game.play(&mut a, &mut b).unwrap(), Side::B);
    assert!(game.board(Side::A).is_fleet_destroyed());
    assert!(!game.board(Side::B).is_fleet_destroyed());
}

#[test]
fn test_player_error_stops_play() {
    let mut game = engine(Side::A);
    let mut a = Scripted::new(&[]);
    let mut b = Scripted::new(&[]);
    assert!(game.play(&mut a, &mut b).is_err());
    assert_eq!(game.status(), GameStatus::Awaiting(Side::A));
}

#[test]
fn test_new_switches_boards_to_shot_tracking() {
    let mut a = Board::new(6).unwrap();
    a.place_ship(Ship::new(Coord::new(5, 0), 1, Orientation::Horizontal))
        .unwrap();
    let mut b = Board::new(6).unwrap();
    b.place_ship(Ship::new(Coord::new(0, 0), 2, Orientation::Horizontal))
        .unwrap();
    let mut game = GameEngine::new(a, b, Side::A);
    assert!(game.board(Side::A).is_frozen());
    assert!(game.board(Side::B).is_frozen());

    assert_eq!(game.fire(Coord::new(0, 0)), Ok(ShotOutcome::Hit));
    assert_eq!(game.fire(Coord::new(0, 1)), Ok(ShotOutcome::Sunk));
    assert_eq!(game.winner(), Some(Side::A));
}
