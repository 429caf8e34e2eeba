//! Game state types.

/// Game state.
///
/// A game moves through these states in order. The one exception is a
/// player bust, which jumps from `PlayerTurn` straight to `Done` without
/// ever reaching `Resolution`; a dealer bust does not skip anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Dealing the opening hands.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// The dealer plays out their hand.
    DealerTurn,
    /// Final values are compared.
    Resolution,
    /// The game is over.
    Done,
}
