//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, GameError};
use crate::hand::Hand;
use crate::io::{Choice, DecisionSource, EventSink, GameEvent};
use crate::options::GameOptions;

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// A blackjack game engine for one player against an automated dealer.
///
/// The game owns the deck and both hands for its whole lifetime and walks
/// them through dealing, the player's turn, the dealer's turn, and the final
/// resolution. Decisions come from a [`DecisionSource`] and display output
/// goes to an [`EventSink`], so nothing in the engine touches a terminal.
pub struct Game {
    /// Cards left to deal.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
}

impl Game {
    /// Creates a new game with a freshly shuffled deck.
    ///
    /// The seed fixes the shuffle, so equal seeds give equal games.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_deck(options, Deck::new(&mut rng))
    }

    /// Creates a new game over a prescribed deck.
    ///
    /// Combined with [`Deck::from_cards`] this fixes the exact deal order,
    /// which stacked-deck tests and scripted games rely on.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            deck,
            options,
            state: GameState::Dealing,
            player: Hand::new(),
            dealer: Hand::new(),
        }
    }

    /// Deals the opening hands, alternating player, dealer, player, dealer.
    ///
    /// Advances the game to the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already left the dealing phase or
    /// the deck holds fewer than four cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            if let Some(card) = self.draw() {
                self.player.add_card(card);
            }
            if let Some(card) = self.draw() {
                self.dealer.add_card(card);
            }
        }

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.deal_card()
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Plays one complete game.
    ///
    /// Drives the deal, the player's turn, the dealer's turn, and the final
    /// resolution, pulling decisions from `choices` and emitting a
    /// [`GameEvent`] at every display point. A player bust ends the game on
    /// the spot: the loss is emitted and the dealer never acts.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not freshly constructed or the deck
    /// runs out of cards.
    pub fn play(
        &mut self,
        choices: &mut dyn DecisionSource,
        sink: &mut dyn EventSink,
    ) -> Result<(), GameError> {
        sink.emit(GameEvent::Started);

        self.deal()?;
        sink.emit(GameEvent::Dealt {
            player: self.player.clone(),
            dealer: self.dealer.clone(),
        });

        while self.state == GameState::PlayerTurn {
            match choices.next_choice() {
                Choice::Hit => {
                    let card = self.hit()?;
                    sink.emit(GameEvent::PlayerDrew {
                        card,
                        hand: self.player.clone(),
                    });

                    if self.state == GameState::Done {
                        sink.emit(GameEvent::PlayerBusted {
                            value: self.player.value(),
                        });
                        return Ok(());
                    }
                }
                Choice::Stand => self.stand()?,
            }
        }

        self.dealer_play(sink)?;

        let result = self.resolve()?;
        sink.emit(GameEvent::Resolved(result));

        Ok(())
    }
}
