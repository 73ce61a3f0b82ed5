//! The match engine.
//!
//! One `MatchEngine` per game session. The presentation layer forwards taps
//! with `tap`, the host timer delivers scheduled work with `fire`, and the
//! engine reports back through its `MatchObserver`.
//!
//! ## States
//!
//! - `Idle`: nothing selected, accepting taps
//! - `OneSelected`: one card face up, waiting for the second
//! - `Resolving`: two cards face up, waiting for `resolve`; taps are ignored
//! - `Won`: every card matched, terminal
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::cards::{CardIndex, Deck, Theme};
//! use memory_match::core::EngineConfig;
//! use memory_match::engine::{MatchEngine, Phase};
//! use memory_match::hooks::{ManualTimer, NullObserver};
//!
//! let theme = Theme::new("letters", ["A", "B"]);
//! let deck = Deck::from_tokens(["A", "B", "A", "B"]).unwrap();
//! let mut engine = MatchEngine::from_deck(
//!     theme, deck, EngineConfig::default(), NullObserver, ManualTimer::new(),
//! );
//!
//! engine.tap(CardIndex(0));
//! engine.tap(CardIndex(2));
//! assert_eq!(engine.phase(), Phase::Resolving);
//!
//! // The resolve delay elapses
//! engine.advance(Duration::from_secs(1));
//! assert_eq!(engine.score(), 1);
//! assert_eq!(engine.phase(), Phase::Idle);
//! ```

mod match_engine;
mod state;

pub use match_engine::MatchEngine;
pub use state::SessionState;

use serde::{Deserialize, Serialize};

use crate::cards::CardIndex;

/// State machine phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    OneSelected,
    Resolving,
    Won,
}

/// Why a tap did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card at that index.
    OutOfRange,
    /// Card is already matched.
    Matched,
    /// Card is already face up.
    AlreadyFlipped,
    /// Two cards are waiting for resolution.
    Resolving,
    /// The easy-mode reveal is showing.
    Revealing,
    /// The game is won.
    Finished,
    /// The session was abandoned.
    Abandoned,
}

/// Result of a tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TapOutcome {
    /// First card of a pair turned face up.
    Selected(CardIndex),
    /// Second card turned face up; resolution is scheduled.
    AwaitingResolution,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl TapOutcome {
    /// Did the tap change anything?
    #[must_use]
    pub fn is_ignored(self) -> bool {
        matches!(self, TapOutcome::Ignored(_))
    }
}

/// Result of resolving the two selected cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    Match {
        /// Points added, equal to the multiplier.
        points: u32,
        multiplier: u32,
        /// This pair finished the game.
        won: bool,
    },
    Mismatch {
        /// A life was spent.
        life_lost: bool,
        /// Points deducted by the penalty.
        points_lost: u32,
    },
}

impl Resolution {
    #[must_use]
    pub fn is_match(self) -> bool {
        matches!(self, Resolution::Match { .. })
    }
}
