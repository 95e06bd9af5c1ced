use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus, Owner};
use crate::options::GameOptions;
use crate::result::Outcome;

use super::{Round, RoundState};

/// Total at which the dealer stops drawing.
const DEALER_STANDS_AT: u8 = 17;

/// What the dealer does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerDecision {
    /// Draw another card.
    Hit,
    /// Stop drawing.
    Stand,
}

/// The dealer's drawing rule.
///
/// The decision only looks at the sum with every Ace counted as 11. A 17 that
/// holds an Ace is soft; a 17 without one is hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealerPolicy {
    /// Whether the dealer hits on soft 17.
    pub hit_soft_17: bool,
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self { hit_soft_17: true }
    }
}

impl DealerPolicy {
    /// Builds the policy configured in `options`.
    #[must_use]
    pub const fn from_options(options: &GameOptions) -> Self {
        Self {
            hit_soft_17: options.hit_soft_17,
        }
    }

    /// Decides whether the dealer draws on `hand`.
    #[must_use]
    pub fn decide(&self, hand: &Hand) -> DealerDecision {
        let value = hand.high_sum();

        if value > DEALER_STANDS_AT {
            DealerDecision::Stand
        } else if value == DEALER_STANDS_AT {
            if hand.has_ace() && self.hit_soft_17 {
                DealerDecision::Hit
            } else {
                DealerDecision::Stand
            }
        } else {
            DealerDecision::Hit
        }
    }

    /// Returns whether the dealer draws on `hand`.
    #[must_use]
    pub fn should_hit(&self, hand: &Hand) -> bool {
        self.decide(hand) == DealerDecision::Hit
    }
}

impl<S: CardSource> Round<S> {
    /// Takes one step of the dealer's turn.
    ///
    /// Returns the card drawn, or `None` once the dealer stands and the round
    /// is settled. A card that takes the dealer over 21 ends the round in
    /// [`RoundState::DealerBust`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        if self.policy.decide(&self.dealer) == DealerDecision::Stand {
            self.settle();
            return Ok(None);
        }

        let (card, status) = self.draw_to(Owner::Dealer);
        if status == HandStatus::Bust {
            self.finish(RoundState::DealerBust, Outcome::DealerBust);
        }

        Ok(Some(card))
    }

    /// Dealer plays their hand according to the policy.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        let mut drawn_cards = Vec::new();
        while let Some(card) = self.dealer_step()? {
            drawn_cards.push(card);
            if self.state != RoundState::DealerTurn {
                break;
            }
        }
        Ok(drawn_cards)
    }

    /// Compares the two totals once the dealer stands.
    fn settle(&mut self) {
        let outcome = Outcome::compare(self.player.total(), self.dealer.total());
        self.finish(RoundState::Settled, outcome);
    }
}
