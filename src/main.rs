#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::{cell::RefCell, rc::Rc};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use grid_battleship::{
    console::{render_board, render_player_view, BoardEcho, ConsoleInput},
    init_logging, Board, GameConfig, InteractivePlacement, InteractiveTargeting,
    MatchController, Player, PlayerSlot, Step, DEFAULT_BOARD_SIZE,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    /// Width and height of each board.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE as i64, allow_negative_numbers = true)]
    size: i64,
    /// Ships per kind, e.g. "submarine=4,destroyer=3,cruiser=2,carrier=1".
    #[arg(long, default_value = "submarine=4,destroyer=3,cruiser=2,carrier=1")]
    fleet: String,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer on the console.
    Play {
        #[command(flatten)]
        game: GameArgs,
        /// Show the computer's ships.
        #[arg(long)]
        reveal: bool,
    },
    /// Watch two computer players fight it out.
    Auto {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn load_config(args: &GameArgs) -> anyhow::Result<GameConfig> {
    let config = GameConfig::from_raw(args.size, &args.fleet)?;
    config.validate()?;
    println!("{}", config.describe());
    Ok(config)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game, reveal } => play(&game, reveal),
        Commands::Auto { game } => auto(&game),
    }
}

#[cfg(feature = "std")]
fn play(args: &GameArgs, reveal: bool) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let rng = make_rng(args.seed);

    let mut own = Board::with_fleet(config.board_size, config.build_fleet())?;
    own.set_hidden(false);
    let mut enemy = Board::with_fleet(config.board_size, config.build_fleet())?;
    enemy.set_hidden(!reveal);

    let console = Rc::new(RefCell::new(ConsoleInput::stdio()));
    let human = Player::new(
        "You",
        own,
        Box::new(BoardEcho::new(
            InteractivePlacement::new(console.clone()),
            console.clone(),
        )),
        Box::new(InteractiveTargeting::new(console)),
    );
    let computer = Player::computer("Computer", enemy);
    let mut game = MatchController::new(human, computer, rng);

    println!("\nPlace your ships: x is the column, y the row, orientation H or V.");
    let first = game.setup()?;
    println!(
        "\n{} fire{} first.",
        game.player(first).name(),
        if first == PlayerSlot::One { "" } else { "s" }
    );

    loop {
        let attacker = game.attacker().unwrap_or(PlayerSlot::One);
        if attacker == PlayerSlot::One {
            println!(
                "\n{}",
                render_player_view(
                    game.player(PlayerSlot::One).board(),
                    game.player(PlayerSlot::Two).board()
                )
            );
            println!("Your shot:");
        }
        match game.advance_one_attack()? {
            Step::TurnContinues(outcome) if attacker == PlayerSlot::Two => {
                println!("Computer: {:?}, shoots again", outcome)
            }
            Step::TurnContinues(_) => {}
            Step::TurnSwapped => println!("{} missed.", game.player(attacker).name()),
            Step::MatchEnded(winner) => {
                println!(
                    "\n{}",
                    render_player_view(
                        game.player(PlayerSlot::One).board(),
                        game.player(PlayerSlot::Two).board()
                    )
                );
                if winner == PlayerSlot::One {
                    println!("VICTORY! You have sunk all enemy ships!");
                } else {
                    println!("DEFEAT. All your ships have been destroyed.");
                }
                break;
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn auto(args: &GameArgs) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let rng = make_rng(args.seed);

    let mut boards = Vec::with_capacity(2);
    for _ in 0..2 {
        let mut board = Board::with_fleet(config.board_size, config.build_fleet())?;
        board.set_hidden(false);
        boards.push(board);
    }
    let second = boards.pop().ok_or_else(|| anyhow::anyhow!("missing board"))?;
    let first = boards.pop().ok_or_else(|| anyhow::anyhow!("missing board"))?;
    let mut game = MatchController::new(
        Player::computer("Computer 1", first),
        Player::computer("Computer 2", second),
        rng,
    );
    let opener = game.setup()?;
    println!("{} opens.", game.player(opener).name());

    let result = loop {
        let attacker = game.attacker().unwrap_or(PlayerSlot::One);
        let step = game.advance_one_attack()?;
        let defender = game.player(attacker.opponent());
        println!("{} -> {:?}", game.player(attacker).name(), step);
        println!("{}", render_board(defender.board()));
        if let Some(result) = game.result() {
            break result;
        }
    };
    println!(
        "{} wins after {} turns ({} vs {} shots).",
        game.player(result.winner).name(),
        result.turns,
        result.shots[0],
        result.shots[1]
    );
    Ok(())
}
