//! Observer hooks for the presentation, audio and statistics layers.
//!
//! The engine calls these as state changes. They are fire-and-forget
//! notifications: nothing they return feeds back into the game.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardIndex};
use crate::stats::GameSummary;

/// Receives engine notifications.
///
/// Every method has an empty default so hosts implement only what they need.
pub trait MatchObserver {
    /// A card's `flipped` or `matched` flag changed.
    fn on_card_state_changed(&mut self, _index: CardIndex, _card: &Card) {}

    /// A card turned face up and audio assist is on.
    ///
    /// Fired once per flip, with the theme's cue for the card.
    fn on_card_revealed(&mut self, _index: CardIndex, _cue: &str) {}

    /// A pair was found and the game is not over yet.
    fn on_match_found(&mut self, _matched_pairs: usize, _total_pairs: usize) {}

    /// The game was won. Fired exactly once per session.
    fn on_game_won(&mut self, _summary: &GameSummary) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl MatchObserver for NullObserver {}

/// A notification captured by `RecordingObserver`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObserverEvent {
    CardChanged {
        index: CardIndex,
        flipped: bool,
        matched: bool,
    },
    CardRevealed {
        index: CardIndex,
        cue: String,
    },
    MatchFound {
        matched_pairs: usize,
        total_pairs: usize,
    },
    GameWon(GameSummary),
}

/// Observer that records every notification in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Vec<ObserverEvent>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[ObserverEvent] {
        &self.events
    }

    /// Drain the recorded events.
    pub fn take(&mut self) -> Vec<ObserverEvent> {
        std::mem::take(&mut self.events)
    }

    /// Summaries of won games seen so far.
    pub fn wins(&self) -> impl Iterator<Item = &GameSummary> {
        self.events.iter().filter_map(|e| match e {
            ObserverEvent::GameWon(summary) => Some(summary),
            _ => None,
        })
    }

    /// Cues fired so far.
    pub fn cues(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            ObserverEvent::CardRevealed { cue, .. } => Some(cue.as_str()),
            _ => None,
        })
    }
}

impl MatchObserver for RecordingObserver {
    fn on_card_state_changed(&mut self, index: CardIndex, card: &Card) {
        self.events.push(ObserverEvent::CardChanged {
            index,
            flipped: card.is_flipped(),
            matched: card.is_matched(),
        });
    }

    fn on_card_revealed(&mut self, index: CardIndex, cue: &str) {
        self.events.push(ObserverEvent::CardRevealed {
            index,
            cue: cue.to_string(),
        });
    }

    fn on_match_found(&mut self, matched_pairs: usize, total_pairs: usize) {
        self.events.push(ObserverEvent::MatchFound {
            matched_pairs,
            total_pairs,
        });
    }

    fn on_game_won(&mut self, summary: &GameSummary) {
        self.events.push(ObserverEvent::GameWon(summary.clone()));
    }
}

impl<O: MatchObserver + ?Sized> MatchObserver for &mut O {
    fn on_card_state_changed(&mut self, index: CardIndex, card: &Card) {
        (**self).on_card_state_changed(index, card);
    }

    fn on_card_revealed(&mut self, index: CardIndex, cue: &str) {
        (**self).on_card_revealed(index, cue);
    }

    fn on_match_found(&mut self, matched_pairs: usize, total_pairs: usize) {
        (**self).on_match_found(matched_pairs, total_pairs);
    }

    fn on_game_won(&mut self, summary: &GameSummary) {
        (**self).on_game_won(summary);
    }
}

impl<O: MatchObserver + ?Sized> MatchObserver for Box<O> {
    fn on_card_state_changed(&mut self, index: CardIndex, card: &Card) {
        (**self).on_card_state_changed(index, card);
    }

    fn on_card_revealed(&mut self, index: CardIndex, cue: &str) {
        (**self).on_card_revealed(index, cue);
    }

    fn on_match_found(&mut self, matched_pairs: usize, total_pairs: usize) {
        (**self).on_match_found(matched_pairs, total_pairs);
    }

    fn on_game_won(&mut self, summary: &GameSummary) {
        (**self).on_game_won(summary);
    }
}
