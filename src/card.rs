//! Card types and deck utilities.

use core::fmt;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits, in deck generation order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the suit symbol used when rendering a card.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
        }
    }
}

/// A playing card.
///
/// Ranks run from 0 to 12: 0 is the Ace, 1 through 9 are the numeral cards
/// "2" through "10", and 10, 11, 12 are Jack, Queen and King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Rank of the Ace.
    pub const ACE: u8 = 0;
    /// Rank of the Jack.
    pub const JACK: u8 = 10;
    /// Rank of the Queen.
    pub const QUEEN: u8 = 11;
    /// Rank of the King.
    pub const KING: u8 = 12;

    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `0..=12`.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank > Self::KING {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Builds a card whose rank the caller has already bounded.
    pub(crate) const fn from_parts(suit: Suit, rank: u8) -> Self {
        debug_assert!(rank <= Self::KING);
        Self { suit, rank }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == Self::ACE
    }

    /// Returns the rank as printed on the card.
    #[must_use]
    pub const fn rank_display(&self) -> &'static str {
        match self.rank {
            0 => "A",
            1 => "2",
            2 => "3",
            3 => "4",
            4 => "5",
            5 => "6",
            6 => "7",
            7 => "8",
            8 => "9",
            9 => "10",
            10 => "J",
            11 => "Q",
            _ => "K",
        }
    }

    /// Returns the numeric value of the card.
    ///
    /// An Ace is worth 11 when `ace_high` is set and 1 otherwise. Face cards
    /// are worth 10 and numeral ranks are worth `rank + 2`.
    #[must_use]
    pub const fn rank_value(&self, ace_high: bool) -> u8 {
        match self.rank {
            0 if ace_high => 11,
            0 => 1,
            1..=9 => self.rank + 2,
            _ => 10,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank_display())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS: u8 = 13;
