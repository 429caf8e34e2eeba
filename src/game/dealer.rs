use std::cmp::Ordering;

use crate::error::ShowdownError;
use crate::io::{EventSink, GameEvent};
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// The dealer plays out their hand.
    ///
    /// Shows the dealer's hand, then draws one card at a time while its
    /// value is strictly below the stand threshold, emitting an event after
    /// every draw. A bust is announced through the sink, but the game still
    /// advances to resolution; the final comparison is never skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer turn state or the
    /// deck runs out while the dealer must draw.
    pub fn dealer_play(&mut self, sink: &mut dyn EventSink) -> Result<(), ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        sink.emit(GameEvent::DealerShows {
            hand: self.dealer.clone(),
        });

        while self.dealer.value() < self.options.dealer_stand {
            let card = self.draw().ok_or(ShowdownError::NoCards)?;
            self.dealer.add_card(card);

            sink.emit(GameEvent::DealerDrew {
                card,
                hand: self.dealer.clone(),
            });
        }

        if self.dealer.is_bust() {
            sink.emit(GameEvent::DealerBusted {
                value: self.dealer.value(),
            });
        }

        self.state = GameState::Resolution;
        Ok(())
    }

    /// Compares the final hand values and finishes the game.
    ///
    /// The comparison uses the raw values: the higher value wins and equal
    /// values tie, even when the dealer busted on their turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not reached the resolution state.
    pub fn resolve(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Resolution {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        let outcome = match player_value.cmp(&dealer_value) {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Lose,
            Ordering::Equal => Outcome::Tie,
        };

        self.state = GameState::Done;

        Ok(RoundResult {
            player_value,
            dealer_value,
            dealer_bust: dealer_value > 21,
            outcome,
        })
    }
}
