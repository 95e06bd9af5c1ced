use core::mem;
use core::str::FromStr;

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::{ActionError, InputError};
use crate::hand::{Hand, HandStatus, Owner};
use crate::result::Outcome;

use super::{Round, RoundState};

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl FromStr for Action {
    type Err = InputError;

    /// Accepts `H` or `S` in either case, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "H" | "h" => Ok(Self::Hit),
            "S" | "s" => Ok(Self::Stand),
            _ => Err(InputError::Unrecognized),
        }
    }
}

/// Applies a player action to a hand without touching any round.
///
/// `draw` is only called for [`Action::Hit`]. Returns the new hand and its
/// status: [`HandStatus::Stand`] after a stand, otherwise whether the drawn
/// card busted the hand.
#[must_use]
pub fn apply_action(
    mut hand: Hand,
    action: Action,
    draw: impl FnOnce() -> Card,
) -> (Hand, HandStatus) {
    let status = match action {
        Action::Hit => hand.add_card(draw()),
        Action::Stand => HandStatus::Stand,
    };
    (hand, status)
}

impl<S: CardSource> Round<S> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A card that takes the player over 21 ends the round in
    /// [`RoundState::PlayerBust`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.act(Action::Hit)?;
        self.player
            .cards()
            .last()
            .copied()
            .ok_or(ActionError::InvalidState)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Turns over the dealer's hole card and hands play to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.act(Action::Stand).map(|_| ())
    }

    /// Applies an [`Action`] and returns the resulting state.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn.
    pub fn act(&mut self, action: Action) -> Result<RoundState, ActionError> {
        self.ensure_player_turn()?;

        let hand = mem::replace(&mut self.player, Hand::new(Owner::Player));
        let source = &mut self.source;
        let (hand, status) = apply_action(hand, action, || source.draw());
        self.player = hand;

        match status {
            HandStatus::Active => {
                if let Some(card) = self.player.cards().last() {
                    log::debug!("Player draws {card} (total {})", self.player.total());
                }
            }
            HandStatus::Bust => self.finish(RoundState::PlayerBust, Outcome::PlayerBust),
            HandStatus::Stand => {
                log::debug!("player stands on {}", self.player.total());
                self.state = RoundState::DealerTurn;
                self.hole_revealed = true;
            }
        }

        Ok(self.state)
    }
}
