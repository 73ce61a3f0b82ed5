//! # memory-match
//!
//! A deterministic engine for memory-matching ("Concentration") card games.
//!
//! ## Design Principles
//!
//! 1. **Toolkit-Agnostic**: No rendering, input or audio. The presentation
//!    layer calls `tap` and `reveal_all`; the engine answers through a
//!    `MatchObserver`.
//!
//! 2. **No Hidden Clocks**: Delays go through an injected `TimerService`,
//!    so a whole game can be played synchronously in tests.
//!
//! 3. **Explicit Session Objects**: All mutable game state lives in one
//!    `MatchEngine`. There are no process-wide globals.
//!
//! ## Modules
//!
//! - `core`: RNG, difficulty presets, engine config, player settings, errors
//! - `cards`: Identity tokens, cards, themes and the deck factory
//! - `hooks`: Observer and timer contracts with deterministic implementations
//! - `engine`: The match engine state machine
//! - `stats`: Game summaries and lifetime statistics

pub mod core;
pub mod cards;
pub mod hooks;
pub mod engine;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    DeckError, DeckRng, DeckRngState, Difficulty, EngineConfig, MismatchPenalty, Settings,
};

pub use crate::cards::{build_deck, Card, CardIndex, Deck, IdentityToken, Theme};

pub use crate::hooks::{
    ManualTimer, MatchObserver, NullObserver, ObserverEvent, RecordingObserver, TimerHandle,
    TimerService, TimerTask,
};

pub use crate::engine::{IgnoreReason, MatchEngine, Phase, Resolution, SessionState, TapOutcome};

pub use crate::stats::{format_time, GameSummary, Statistics, StatsRecorder};
