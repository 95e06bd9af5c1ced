//! Player and dealer hand representations.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Sums card values with every Ace counted as 11.
#[must_use]
pub fn high_sum(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |sum, card| sum.saturating_add(card.rank_value(true)))
}

/// Sums card values with every Ace counted as 1.
#[must_use]
pub fn low_sum(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |sum, card| sum.saturating_add(card.rank_value(false)))
}

/// Evaluates a set of cards.
///
/// All Aces are flipped together: the total is the smaller of the all-high
/// and all-low sums. Aces are not resolved one at a time.
#[must_use]
pub fn total(cards: &[Card]) -> u8 {
    high_sum(cards).min(low_sum(cards))
}

/// Returns whether a set of cards totals more than 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    total(cards) > BLACKJACK
}

/// Who a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Hand status after a card is added or an action is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is under 22 and can keep drawing.
    Active,
    /// Player has stood.
    Stand,
    /// Hand has busted (over 21).
    Bust,
}

/// A hand of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    owner: Owner,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(owner: Owner) -> Self {
        Self {
            owner,
            cards: Vec::new(),
        }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn with_cards(owner: Owner, cards: &[Card]) -> Self {
        Self {
            owner,
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand and reports whether it busted.
    pub fn add_card(&mut self, card: Card) -> HandStatus {
        self.cards.push(card);
        if self.is_bust() {
            HandStatus::Bust
        } else {
            HandStatus::Active
        }
    }

    /// Returns who holds the hand.
    #[must_use]
    pub const fn owner(&self) -> Owner {
        self.owner
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Sum with all Aces counted as 11.
    #[must_use]
    pub fn high_sum(&self) -> u8 {
        high_sum(&self.cards)
    }

    /// Sum with all Aces counted as 1.
    #[must_use]
    pub fn low_sum(&self) -> u8 {
        low_sum(&self.cards)
    }

    /// Calculates the value of the hand.
    ///
    /// See [`total`] for how Aces are counted.
    #[must_use]
    pub fn total(&self) -> u8 {
        total(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns whether the hand holds at least one Ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.cards.iter().any(Card::is_ace)
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

/// Renders as a bracketed list, e.g. `[♠A, ♥10]`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
