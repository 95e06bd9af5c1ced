//! The 52-card deck and the card source seam used by a round.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};
use crate::options::GameOptions;

/// Something a round can draw cards from.
pub trait CardSource {
    /// Draws the next card.
    fn draw(&mut self) -> Card;
}

/// A single 52-card deck.
///
/// Drawing samples uniformly from all 52 cards and puts the card straight
/// back, so the deck never runs out and the same card can show up more than
/// once in a round.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a new deck with the given seed.
    ///
    /// When [`GameOptions::debug`] is set the full card listing is logged.
    #[must_use]
    pub fn new(options: &GameOptions, seed: u64) -> Self {
        let cards = Self::create_cards();

        if options.debug {
            log::info!("deck: [{}]", DeckListing(&cards));
        }

        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn create_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 0..RANKS {
                cards.push(Card::from_parts(suit, rank));
            }
        }
        cards
    }

    /// Returns every card in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl CardSource for Deck {
    fn draw(&mut self) -> Card {
        let index = self.rng.random_range(0..self.cards.len());
        self.cards[index]
    }
}

struct DeckListing<'a>(&'a [Card]);

impl core::fmt::Display for DeckListing<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, card) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
