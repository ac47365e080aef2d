use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::prelude::*;

#[test]
fn test_ai_vs_ai_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let config = GameConfig::default();
    let mut game = GameEngine::setup(&config, &mut rng).unwrap();
    assert!(!game.board(Side::A).is_hidden());
    assert!(game.board(Side::B).is_hidden());

    let mut p1 = AiPlayer::with_name("one", SmallRng::seed_from_u64(1));
    let mut p2 = AiPlayer::with_name("two", SmallRng::seed_from_u64(2));
    let winner = game.play(&mut p1, &mut p2).unwrap();

    assert_eq!(game.winner(), Some(winner));
    assert!(game.board(winner.other()).is_fleet_destroyed());
    assert!(!game.board(winner).is_fleet_destroyed());
    // each side shoots every cell at most once
    assert!(game.shots_by(Side::A) <= 36);
    assert!(game.shots_by(Side::B) <= 36);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let run = |seed: u64| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = GameEngine::setup(&GameConfig::default(), &mut rng).unwrap();
        let mut p1 = AiPlayer::new(SmallRng::seed_from_u64(seed + 1));
        let mut p2 = AiPlayer::new(SmallRng::seed_from_u64(seed + 2));
        let winner = game.play(&mut p1, &mut p2).unwrap();
        (winner, game.history().to_vec())
    };
    assert_eq!(run(5), run(5));
}

#[test]
fn test_ai_targets_stay_on_board() {
    let board = Board::new(4).unwrap();
    let mut ai = AiPlayer::new(SmallRng::seed_from_u64(9));
    let view = sea_battle::TurnView {
        side: Side::B,
        own: &board,
        enemy: &board,
    };
    for _ in 0..200 {
        let target = ai.ask_for_target(&view).unwrap();
        assert!(board.contains(target));
    }
    assert_eq!(ai.name(), "Computer");
}
