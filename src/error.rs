//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `0..=12`.
    #[error("rank expected to be between 0-12, got {0}")]
    InvalidRank(u8),
}

/// Errors that can occur when driving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
}

/// Errors that can occur when parsing a line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The line is not one of the accepted answers.
    #[error("invalid input")]
    Unrecognized,
}

/// Errors that can occur while running a console session.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading from or writing to the terminal failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// Input ended in the middle of a round.
    #[error("input closed before the round finished")]
    InputClosed,
    /// The engine rejected an operation.
    #[error(transparent)]
    Action(#[from] ActionError),
}
