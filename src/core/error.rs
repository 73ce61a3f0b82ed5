//! Error types for deck construction.
//!
//! Taps and resolutions never fail; the only hard failure is starting a
//! session with a deck that cannot satisfy the pairing invariant.

use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors that can occur while building a deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("card count must be even, got {count}")]
    OddCardCount { count: usize },

    #[error("card count must be at least 2, got {count}")]
    TooFewCards { count: usize },

    #[error("theme {theme:?} has {available} distinct assets, {needed} needed")]
    NotEnoughAssets {
        theme: String,
        needed: usize,
        available: usize,
    },

    #[error("token {token:?} appears {copies} times, every token must appear exactly twice")]
    UnpairedToken { token: String, copies: usize },

    #[error("only one card of pair {token:?} is matched")]
    SplitPair { token: String },
}
