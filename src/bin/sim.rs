use grid_battleship::{Board, GameConfig, MatchController, MatchResult, Player, PlayerSlot};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn play_one(config: &GameConfig, seed: u64) -> anyhow::Result<MatchResult> {
    let p1 = Player::computer(
        "player1",
        Board::with_fleet(config.board_size, config.build_fleet())?,
    );
    let p2 = Player::computer(
        "player2",
        Board::with_fleet(config.board_size, config.build_fleet())?,
    );
    let mut game = MatchController::new(p1, p2, SmallRng::seed_from_u64(seed));
    Ok(game.run()?)
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let config = GameConfig::default();
    config.validate()?;

    let mut results = Vec::new();
    for i in 0..games {
        results.push(play_one(&config, seed.wrapping_add(i))?);
    }
    let wins = |slot: PlayerSlot| results.iter().filter(|r| r.winner == slot).count();

    let summary = json!({
        "seed": seed,
        "config": config,
        "games": results,
        "wins": {"player1": wins(PlayerSlot::One), "player2": wins(PlayerSlot::Two)},
        "winner": results.last().map(|r| r.winner),
    });

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
