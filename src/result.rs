//! Round result types.

use core::fmt;

/// Final result of a round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player's total beats the dealer's.
    PlayerWins,
    /// Dealer's total beats the player's.
    DealerWins,
    /// Totals are equal.
    Push,
    /// Player went over 21; the dealer never played.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
}

impl Outcome {
    /// Returns the line shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerWins => "You win!",
            Self::DealerWins => "You lose!",
            Self::Push => "Push!",
            Self::PlayerBust => "You bust: game over!",
            Self::DealerBust => "Dealer bust: you win!",
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::PlayerWins | Self::DealerBust)
    }

    /// Compares two settled totals.
    #[must_use]
    pub const fn compare(player_total: u8, dealer_total: u8) -> Self {
        if player_total > dealer_total {
            Self::PlayerWins
        } else if dealer_total > player_total {
            Self::DealerWins
        } else {
            Self::Push
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
