//! Hand representation and scoring.

use std::fmt;

use crate::card::{Card, Rank};

/// Scores a set of cards.
///
/// Each rank contributes its base value. If the cards include at least one
/// ace and the raw total exceeds 21, exactly 10 is subtracted once, counting
/// one ace as 1 instead of 11. The adjustment never applies more than once
/// per call regardless of how many aces are present.
fn evaluate_cards(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        if card.rank == Rank::Ace {
            has_ace = true;
        }
        value = value.saturating_add(card.rank.base_value());
    }

    if has_ace && value > 21 {
        value -= 10;
    }

    value
}

/// A participant's hand.
///
/// Cards stay in the order they were received; the order matters for display
/// and not for scoring. The hand enforces no upper bound on its size, bust
/// detection belongs to the game engine.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Calculates the value of the hand.
    ///
    /// Recomputed from the current contents on every call, never cached.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}
