//! Engine configuration.
//!
//! `EngineConfig` carries everything the match engine needs to know about
//! how a session behaves: resolution timing, the score multiplier cap,
//! which optional capabilities are switched on, and the mismatch penalty.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::settings::Settings;

/// What a mismatch costs the player.
///
/// The streak always resets on a mismatch; this only decides the extra cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MismatchPenalty {
    /// Score is left unchanged.
    #[default]
    None,
    /// Score drops by one, never below zero.
    DecrementScore,
    /// Each mismatch costs a life. Once lives run out, further mismatches
    /// decrement the score, never below zero.
    Lives {
        /// Lives at the start of a session.
        lives: u32,
    },
}

/// Match engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Delay between the second tap and resolution, so both faces are seen.
    pub resolve_delay: Duration,

    /// How long the easy-mode reveal keeps cards face up.
    pub reveal_duration: Duration,

    /// Upper bound of the consecutive-match multiplier.
    pub multiplier_cap: u32,

    /// Enables the one-shot `reveal_all` capability.
    pub easy_mode: bool,

    /// Fire the audio cue hook when a card turns face up.
    pub audio_assist: bool,

    /// Cost of a mismatch.
    pub mismatch_penalty: MismatchPenalty,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resolve_delay: Duration::from_secs(1),
            reveal_duration: Duration::from_secs(2),
            multiplier_cap: 5,
            easy_mode: false,
            audio_assist: false,
            mismatch_penalty: MismatchPenalty::None,
        }
    }
}

impl EngineConfig {
    /// Build a config from the player's settings.
    ///
    /// Only `easy_mode` and `audio_assist` affect the engine; everything
    /// else in `Settings` is presentation.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::default()
            .with_easy_mode(settings.easy_mode)
            .with_audio_assist(settings.audio_assist)
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay = delay;
        self
    }

    /// Set the easy-mode reveal duration.
    #[must_use]
    pub fn with_reveal_duration(mut self, duration: Duration) -> Self {
        self.reveal_duration = duration;
        self
    }

    /// Set the multiplier cap (minimum 1).
    #[must_use]
    pub fn with_multiplier_cap(mut self, cap: u32) -> Self {
        self.multiplier_cap = cap.max(1);
        self
    }

    /// Enable or disable easy mode.
    #[must_use]
    pub fn with_easy_mode(mut self, enabled: bool) -> Self {
        self.easy_mode = enabled;
        self
    }

    /// Enable or disable audio cues.
    #[must_use]
    pub fn with_audio_assist(mut self, enabled: bool) -> Self {
        self.audio_assist = enabled;
        self
    }

    /// Set the mismatch penalty.
    #[must_use]
    pub fn with_mismatch_penalty(mut self, penalty: MismatchPenalty) -> Self {
        self.mismatch_penalty = penalty;
        self
    }

    /// Lives at session start, if the penalty uses lives.
    #[must_use]
    pub fn starting_lives(&self) -> Option<u32> {
        match self.mismatch_penalty {
            MismatchPenalty::Lives { lives } => Some(lives),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.resolve_delay, Duration::from_secs(1));
        assert_eq!(config.reveal_duration, Duration::from_secs(2));
        assert_eq!(config.multiplier_cap, 5);
        assert!(!config.easy_mode);
        assert!(!config.audio_assist);
        assert_eq!(config.mismatch_penalty, MismatchPenalty::None);
        assert_eq!(config.starting_lives(), None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_resolve_delay(Duration::from_millis(250))
            .with_multiplier_cap(0)
            .with_easy_mode(true)
            .with_mismatch_penalty(MismatchPenalty::Lives { lives: 3 });

        assert_eq!(config.resolve_delay, Duration::from_millis(250));
        assert_eq!(config.multiplier_cap, 1);
        assert!(config.easy_mode);
        assert_eq!(config.starting_lives(), Some(3));
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            easy_mode: true,
            audio_assist: true,
            colorblind_mode: true,
            ..Settings::default()
        };

        let config = EngineConfig::from_settings(&settings);
        assert!(config.easy_mode);
        assert!(config.audio_assist);
        assert_eq!(config.multiplier_cap, 5);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_mismatch_penalty(MismatchPenalty::DecrementScore);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
