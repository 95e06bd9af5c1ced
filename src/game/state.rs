//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Dealing initial cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Both hands stood and the totals were compared.
    Settled,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
}

impl RoundState {
    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Settled | Self::PlayerBust | Self::DealerBust)
    }
}
