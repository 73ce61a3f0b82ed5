//! Core types: RNG, difficulty presets, configuration, settings and errors.
//!
//! Nothing here knows about cards; the deck factory and the match engine
//! build on these.

pub mod config;
pub mod difficulty;
pub mod error;
pub mod rng;
pub mod settings;

pub use config::{EngineConfig, MismatchPenalty};
pub use difficulty::Difficulty;
pub use error::{DeckError, Result};
pub use rng::{DeckRng, DeckRngState};
pub use settings::Settings;
