//! A single-player blackjack game engine.
//!
//! The crate provides a [`Game`] type that walks one round against an
//! automated dealer through dealing, the player's turn, the dealer's turn,
//! and the final resolution. Player decisions come from an injected
//! [`DecisionSource`] and display output goes to an injected [`EventSink`],
//! so a complete game can be driven from tests as easily as from a terminal.
//!
//! # Example
//!
//! ```
//! use twentyone::{Choice, DecisionSource, EventSink, Game, GameEvent, GameOptions};
//!
//! /// Stands immediately.
//! struct AlwaysStand;
//!
//! impl DecisionSource for AlwaysStand {
//!     fn next_choice(&mut self) -> Choice {
//!         Choice::Stand
//!     }
//! }
//!
//! /// Ignores all display output.
//! struct Quiet;
//!
//! impl EventSink for Quiet {
//!     fn emit(&mut self, _event: GameEvent) {}
//! }
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.play(&mut AlwaysStand, &mut Quiet).expect("a fresh game runs to completion");
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod io;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, GameError, ShowdownError};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use io::{Choice, DecisionSource, EventSink, GameEvent};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
