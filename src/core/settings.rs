//! Player settings.
//!
//! The settings document is owned by the host, which decides where and how
//! it is stored. Every field has a serde default so a document written by an
//! older build, or a partial one, still loads with the missing keys filled in.

use serde::{Deserialize, Serialize};

/// Player-facing options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fullscreen: bool,
    /// Multiplier applied to all text sizes.
    pub text_size_factor: f32,
    pub sound_effects: bool,
    pub music: bool,
    /// Background music volume in `0.0..=1.0`.
    pub music_volume: f32,
    pub score_display: bool,
    pub timer_display: bool,
    pub colorblind_mode: bool,
    /// Speak / play a cue when a card is revealed.
    pub audio_assist: bool,
    pub visual_feedback: bool,
    /// Offer the one-shot reveal-all button.
    pub easy_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fullscreen: true,
            text_size_factor: 1.0,
            sound_effects: true,
            music: true,
            music_volume: 0.5,
            score_display: true,
            timer_display: true,
            colorblind_mode: false,
            audio_assist: false,
            visual_feedback: true,
            easy_mode: false,
        }
    }
}

impl Settings {
    /// Casual mode hides both score and timer. It has no effect on the engine.
    #[must_use]
    pub fn is_casual(&self) -> bool {
        !self.score_display && !self.timer_display
    }

    /// Set the music volume, clamped to `0.0..=1.0`.
    pub fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = volume.clamp(0.0, 1.0);
    }
}
