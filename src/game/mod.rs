//! Round engine and state management.

use crate::card::Card;
use crate::deck::{CardSource, Deck};
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus, Owner};
use crate::options::GameOptions;
use crate::result::Outcome;

mod actions;
mod dealer;
pub mod state;

pub use actions::{Action, apply_action};
pub use dealer::{DealerDecision, DealerPolicy};
pub use state::RoundState;

/// A single round of blackjack between one player and the dealer.
///
/// The round owns its card source and both hands. It moves through
/// [`RoundState::Dealing`], [`RoundState::PlayerTurn`] and
/// [`RoundState::DealerTurn`] and ends in one of the terminal states.
#[derive(Debug, Clone)]
pub struct Round<S = Deck> {
    source: S,
    player: Hand,
    dealer: Hand,
    policy: DealerPolicy,
    state: RoundState,
    hole_revealed: bool,
    outcome: Option<Outcome>,
}

impl Round<Deck> {
    /// Creates a new round on a fresh deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{GameOptions, Round, RoundState};
    ///
    /// let mut round = Round::new(GameOptions::default(), 42);
    /// round.deal().unwrap();
    /// assert_eq!(round.player().len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_source(Deck::new(&options, seed), DealerPolicy::from_options(&options))
    }
}

impl<S: CardSource> Round<S> {
    /// Creates a new round that draws from `source`.
    #[must_use]
    pub const fn with_source(source: S, policy: DealerPolicy) -> Self {
        Self {
            source,
            player: Hand::new(Owner::Player),
            dealer: Hand::new(Owner::Dealer),
            policy,
            state: RoundState::Dealing,
            hole_revealed: false,
            outcome: None,
        }
    }

    /// Draws a card into the given hand.
    fn draw_to(&mut self, owner: Owner) -> (Card, HandStatus) {
        let card = self.source.draw();
        let hand = match owner {
            Owner::Player => &mut self.player,
            Owner::Dealer => &mut self.dealer,
        };
        let status = hand.add_card(card);
        log::debug!("{:?} draws {card} ({status:?})", hand.owner());
        (card, status)
    }

    /// Moves the round into a terminal state.
    fn finish(&mut self, state: RoundState, outcome: Outcome) {
        debug_assert!(state.is_terminal());
        self.state = state;
        self.outcome = Some(outcome);
        log::info!(
            "round over: {outcome:?} (player {}, dealer {})",
            self.player.total(),
            self.dealer.total()
        );
    }

    /// Deals two cards each, alternating player and dealer.
    ///
    /// The deal never ends the round: busts are only checked on hits and
    /// dealer draws, so the round always moves to [`RoundState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have already been dealt.
    pub fn deal(&mut self) -> Result<RoundState, ActionError> {
        if self.state != RoundState::Dealing {
            return Err(ActionError::InvalidState);
        }

        for owner in [Owner::Player, Owner::Dealer, Owner::Player, Owner::Dealer] {
            self.draw_to(owner);
        }
        self.state = RoundState::PlayerTurn;

        Ok(self.state)
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns whether the dealer's second card has been turned over.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Returns the outcome once the round is over.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Plays the dealer's turn and returns the outcome.
    ///
    /// Convenience for front ends: call after the player has stood.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn.
    pub fn finish_dealer_turn(&mut self) -> Result<Outcome, ActionError> {
        self.dealer_play()?;
        self.outcome.ok_or(ActionError::InvalidState)
    }
}
