#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use sea_battle::{
    init_logging,
    ui::{greeting, render_board},
    AiPlayer, CliPlayer, GameConfig, GameEngine, Side,
};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Debug, Default)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, help = "Load the game configuration from a JSON file")]
    config: Option<PathBuf>,
    #[arg(long, help = "Side of the square board")]
    size: Option<usize>,
    #[arg(long, value_delimiter = ',', help = "Ship lengths, e.g. --fleet 3,2,2,1,1,1,1")]
    fleet: Option<Vec<usize>>,
    #[arg(long, help = "Ship attempts per board before starting the board over")]
    placement_attempts: Option<usize>,
    #[arg(long, help = "Give up after this many whole-board attempts")]
    max_board_attempts: Option<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer on this terminal (the default).
    Play {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, help = "Let the computer shoot first")]
        computer_first: bool,
    },
    /// Let two computer players fight and print a JSON summary.
    Sim {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, help = "Include every shot in the summary")]
        history: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        game: GameArgs::default(),
        computer_first: false,
    }) {
        Commands::Play {
            game,
            computer_first,
        } => {
            let mut config = load_config(&game)?;
            if computer_first {
                config.first_side = Side::B;
            }
            play(&config, game.seed)
        }
        Commands::Sim { game, history } => {
            let config = load_config(&game)?;
            simulate(&config, game.seed, history)
        }
    }
}

#[cfg(feature = "std")]
fn load_config(args: &GameArgs) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(fleet) = &args.fleet {
        config.fleet = fleet.clone();
    }
    if let Some(attempts) = args.placement_attempts {
        config.placement_attempts = attempts;
    }
    if args.max_board_attempts.is_some() {
        config.max_board_attempts = args.max_board_attempts;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(feature = "std")]
fn play(config: &GameConfig, seed: Option<u64>) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = seeded_rng(seed);
    let mut engine = GameEngine::setup(config, &mut rng)?;
    let mut human = CliPlayer::stdio();
    let mut computer = AiPlayer::new(SmallRng::from_rng(&mut rng));

    println!("{}", greeting());
    let winner = engine.play(&mut human, &mut computer)?;

    println!("{}", "*".repeat(29));
    println!("Your board:\n{}", render_board(engine.board(Side::A)));
    println!("Computer board:\n{}", render_board(engine.board(Side::B)));
    match winner {
        Side::A => println!("You win!"),
        Side::B => println!("The computer wins!"),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn simulate(config: &GameConfig, seed: Option<u64>, history: bool) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);
    let mut engine = GameEngine::setup(config, &mut rng)?;
    let mut a = AiPlayer::with_name("Computer A", SmallRng::from_rng(&mut rng));
    let mut b = AiPlayer::with_name("Computer B", SmallRng::from_rng(&mut rng));

    let winner = engine.play(&mut a, &mut b)?;

    let mut report = json!({
        "winner": winner,
        "shots": {
            "A": engine.shots_by(Side::A),
            "B": engine.shots_by(Side::B),
        },
        "sunk": {
            "A": engine.board(Side::B).sunk_count(),
            "B": engine.board(Side::A).sunk_count(),
        },
        "seed": seed,
        "config": config,
    });
    if history {
        report["history"] = serde_json::to_value(engine.history())?;
    }
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
