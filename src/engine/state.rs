//! Per-session state.
//!
//! `SessionState` is created when a theme and difficulty are chosen and
//! thrown away when the player leaves or starts another game. Only the
//! engine mutates it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Phase;
use crate::cards::{CardIndex, Deck};

/// Everything that changes during one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub(crate) deck: Deck,

    /// Face-up, unresolved cards. Never more than two.
    pub(crate) selection: SmallVec<[CardIndex; 2]>,

    pub(crate) score: u32,
    pub(crate) consecutive_matches: u32,
    pub(crate) multiplier: u32,

    /// Remaining lives, when the mismatch penalty uses lives.
    pub(crate) lives: Option<u32>,

    pub(crate) easy_mode_used: bool,

    /// Set while two cards wait for `resolve`. Taps are ignored meanwhile.
    pub(crate) is_checking: bool,

    /// Set while the easy-mode reveal is showing.
    pub(crate) revealing: bool,

    pub(crate) won: bool,
    pub(crate) abandoned: bool,
}

impl SessionState {
    pub(crate) fn new(deck: Deck, lives: Option<u32>) -> Self {
        Self {
            deck,
            selection: SmallVec::new(),
            score: 0,
            consecutive_matches: 0,
            multiplier: 1,
            lives,
            easy_mode_used: false,
            is_checking: false,
            revealing: false,
            won: false,
            abandoned: false,
        }
    }

    /// Current state machine phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else if self.is_checking {
            Phase::Resolving
        } else if self.selection.len() == 1 {
            Phase::OneSelected
        } else {
            Phase::Idle
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn selection(&self) -> &[CardIndex] {
        &self.selection
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn consecutive_matches(&self) -> u32 {
        self.consecutive_matches
    }

    #[must_use]
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    #[must_use]
    pub fn lives(&self) -> Option<u32> {
        self.lives
    }

    #[must_use]
    pub fn easy_mode_used(&self) -> bool {
        self.easy_mode_used
    }

    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.revealing
    }

    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        self.abandoned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SessionState {
        SessionState::new(Deck::from_tokens(["A", "B", "A", "B"]).unwrap(), None)
    }

    #[test]
    fn test_fresh_state() {
        let state = state();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.score(), 0);
        assert_eq!(state.multiplier(), 1);
        assert_eq!(state.consecutive_matches(), 0);
        assert!(state.selection().is_empty());
        assert!(!state.easy_mode_used());
    }

    #[test]
    fn test_phase_follows_flags() {
        let mut state = state();

        state.selection.push(CardIndex(0));
        assert_eq!(state.phase(), Phase::OneSelected);

        state.selection.push(CardIndex(1));
        state.is_checking = true;
        assert_eq!(state.phase(), Phase::Resolving);

        state.won = true;
        assert_eq!(state.phase(), Phase::Won);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = state();
        state.selection.push(CardIndex(2));
        state.score = 3;

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: SessionState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_saved_state_with_broken_deck_is_rejected() {
        let mut json: serde_json::Value = serde_json::to_value(state()).unwrap();
        json["deck"].as_array_mut().unwrap().truncate(2);

        assert!(serde_json::from_value::<SessionState>(json).is_err());
    }
}
