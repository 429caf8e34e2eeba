//! Deck construction, shuffling, and dealing.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered deck of playing cards.
///
/// A fresh deck holds exactly one card per rank and suit combination. Cards
/// are dealt from the end of the sequence and never return, so the deck only
/// shrinks after creation.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards left to deal, dealt from the end.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck and shuffles it with the given generator.
    ///
    /// The 52 combinations are laid out in a fixed order before the shuffle,
    /// so the generator alone decides the deal sequence.
    #[must_use]
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ranks() {
            for suit in Suit::suits() {
                cards.push(Card::new(rank, suit));
            }
        }

        let mut deck = Self { cards };
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck with a prescribed order.
    ///
    /// The last card in `cards` is the first one dealt. Useful for stacked
    /// decks in tests and scripted games.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards in place.
    ///
    /// Re-permutes whatever cards are currently left; it does not restore
    /// dealt cards.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the card at the end of the deck.
    ///
    /// Returns `None` once the deck is exhausted; callers branch on this
    /// rather than assuming a card is always available.
    pub fn deal_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards left to deal, in deal order from the end.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
