//! A single-deck blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that runs one round between a player
//! and an automated dealer: the initial deal, the player's draws, the
//! dealer's draws and the final comparison. The [`console`] module (with the
//! `std` feature) wraps the engine in a line-oriented terminal session.
//!
//! # Example
//!
//! ```
//! use bjsolo::{GameOptions, Round, RoundState};
//!
//! let mut round = Round::new(GameOptions::default(), 42);
//! round.deal().unwrap();
//! if round.state() == RoundState::PlayerTurn {
//!     round.stand().unwrap();
//!     round.dealer_play().unwrap();
//! }
//! assert!(round.outcome().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
#[cfg(feature = "std")]
pub use error::ConsoleError;
pub use deck::{CardSource, Deck};
pub use error::{ActionError, CardError, InputError};
pub use game::{Action, DealerDecision, DealerPolicy, Round, RoundState, apply_action};
pub use hand::{Hand, HandStatus, Owner};
pub use options::GameOptions;
pub use result::Outcome;
