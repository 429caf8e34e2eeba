//! Terminal front end: plays one game of blackjack against the dealer.
//!
//! The engine never touches the terminal itself; this binary supplies the
//! player's choices from stdin and renders every game event to stdout.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use log::debug;

use twentyone::{Choice, DecisionSource, EventSink, Game, GameEvent, GameOptions, Outcome};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Play one round of blackjack in the terminal")]
struct Args {
    /// Seed for the shuffle; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    debug!("shuffling with seed {seed}");

    let mut game = Game::new(GameOptions::default(), seed);
    game.play(&mut Prompt, &mut Screen)?;

    Ok(())
}

/// Reads player choices from stdin, re-prompting until the input is valid.
struct Prompt;

impl DecisionSource for Prompt {
    fn next_choice(&mut self) -> Choice {
        loop {
            println!("Player's turn:");
            println!("1. Hit");
            println!("2. Stand");

            // End of input stands the player rather than spinning forever.
            let Some(input) = prompt_line("Enter your choice: ") else {
                return Choice::Stand;
            };

            match input.as_str() {
                "1" | "h" | "hit" => return Choice::Hit,
                "2" | "s" | "stand" => return Choice::Stand,
                _ => println!("Please enter 1 or 2."),
            }
        }
    }
}

/// Prints a prompt and reads one trimmed, lower-cased line.
///
/// Returns `None` on end of input or a read error.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

/// Renders game events as plain text lines.
struct Screen;

impl EventSink for Screen {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::Started => println!("Welcome to Blackjack!"),
            GameEvent::Dealt { player, dealer } => {
                println!("Player's hand: {player}");
                println!("Dealer's hand: {dealer}");
            }
            GameEvent::PlayerDrew { hand, .. } => println!("Player's hand: {hand}"),
            GameEvent::PlayerBusted { .. } => println!("Player busts! You lose."),
            GameEvent::DealerShows { hand } => {
                println!("Dealer's turn:");
                println!("Dealer's hand: {hand}");
            }
            GameEvent::DealerDrew { hand, .. } => {
                println!("Dealer hits. Dealer's hand: {hand}");
            }
            GameEvent::DealerBusted { .. } => println!("Dealer busts! You win."),
            GameEvent::Resolved(result) => {
                println!("Player's hand value: {}", result.player_value);
                println!("Dealer's hand value: {}", result.dealer_value);

                match result.outcome {
                    Outcome::Win => println!("You win!"),
                    Outcome::Lose => println!("You lose!"),
                    Outcome::Tie => println!("It's a tie!"),
                }
            }
        }
    }
}
