use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == GameState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns the drawn card. If the draw takes the player over 21 the
    /// game is over: the state moves directly to [`GameState::Done`] and
    /// the dealer never plays.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the player turn state or the
    /// deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.state = GameState::Done;
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// Passes play to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.state = GameState::DealerTurn;
        Ok(())
    }
}
