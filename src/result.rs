//! Round result types for the final resolution.

/// Outcome of a completed round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player finished with the higher value.
    Win,
    /// The dealer finished with the higher value.
    Lose,
    /// Both finished with the same value.
    Tie,
}

/// Result of a round after the final value comparison.
///
/// The outcome is a raw comparison of the two final values; `dealer_bust`
/// reports whether the dealer went over 21 on the way but does not
/// short-circuit the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted during their turn.
    pub dealer_bust: bool,
    /// The comparison outcome.
    pub outcome: Outcome,
}
