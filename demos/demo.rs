//! Scripted play-through of one session.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=principle_match=debug` to see every transition logged.
//!
//! 1. Highlights an outcome with nothing armed (no scoring).
//! 2. Makes one wrong pairing from a score of zero (stays at zero).
//! 3. Matches all six principles, printing the board after each step.
//! 4. Resets and prints the JSON snapshot a web front end would receive.

use principle_match::{
    to_render_json, GameConfig, MatchGame, SelectionStatus, PRINCIPLES,
};
use tracing_subscriber::EnvFilter;

fn mark(status: SelectionStatus) -> &'static str {
    match status {
        SelectionStatus::Matched  => "✓",
        SelectionStatus::Selected => ">",
        SelectionStatus::Idle     => " ",
    }
}

fn print_board(game: &MatchGame) {
    println!("  Score: {}  (revision {})", game.score(), game.revision());
    for (p, o) in game.principle_views().iter().zip(game.outcome_views()) {
        println!("  [{}] {:<12} [{}] {}", mark(p.status), p.name, mark(o.status), o.text);
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut game = MatchGame::with_config(GameConfig::seeded(2024));
    println!("══ Fresh session ══");
    print_board(&game);

    let first = game.shuffled_outcomes()[0];
    println!("Outcome first: {:?}", game.select_outcome(first)?);
    print_board(&game);

    game.select_principle("Headline")?;
    let wrong = PRINCIPLES[5].outcome;
    println!("Wrong pair: {:?}", game.select_outcome(wrong)?);
    print_board(&game);

    for p in &PRINCIPLES {
        game.select_principle(p.name)?;
        println!("{:?}", game.select_outcome(p.outcome)?);
    }
    print_board(&game);

    if let Err(err) = game.select_principle("Unknown") {
        println!("Rejected: {err}");
    }

    println!("══ Reset ══");
    game.reset();
    println!("{}", serde_json::to_string_pretty(&to_render_json(&game))?);
    Ok(())
}
