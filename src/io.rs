//! The engine's boundary with the player-facing front end.
//!
//! The engine pulls decisions from a [`DecisionSource`] and pushes
//! [`GameEvent`]s to an [`EventSink`]; it never reads input or prints on its
//! own, which keeps a full game drivable from tests as well as a terminal.

use crate::card::Card;
use crate::hand::Hand;
use crate::result::RoundResult;

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Draw one more card.
    Hit,
    /// End the turn and pass play to the dealer.
    Stand,
}

/// Supplies the player's decisions.
///
/// Implementations block until a choice is available and are responsible
/// for validating raw input; the engine never sees an invalid value.
pub trait DecisionSource {
    /// Returns the player's next choice.
    fn next_choice(&mut self) -> Choice;
}

/// Receives display events as a game progresses.
pub trait EventSink {
    /// Handles one game event.
    fn emit(&mut self, event: GameEvent);
}

/// A display point in the life of a game.
///
/// Events carry snapshots of the hands involved so that sinks can render
/// them without reaching back into the engine.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A new game has started.
    Started,
    /// The opening hands have been dealt.
    Dealt {
        /// The player's two starting cards.
        player: Hand,
        /// The dealer's two starting cards.
        dealer: Hand,
    },
    /// The player drew a card.
    PlayerDrew {
        /// The card just drawn.
        card: Card,
        /// The player's hand after the draw.
        hand: Hand,
    },
    /// The player's hand went over 21; the game is lost and over.
    PlayerBusted {
        /// The busted hand's value.
        value: u8,
    },
    /// The dealer's turn is starting with this hand.
    DealerShows {
        /// The dealer's hand at the start of their turn.
        hand: Hand,
    },
    /// The dealer drew a card.
    DealerDrew {
        /// The card just drawn.
        card: Card,
        /// The dealer's hand after the draw.
        hand: Hand,
    },
    /// The dealer's hand went over 21; the comparison still follows.
    DealerBusted {
        /// The busted hand's value.
        value: u8,
    },
    /// Final values have been compared.
    Resolved(RoundResult),
}
