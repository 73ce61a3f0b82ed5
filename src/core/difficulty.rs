//! Difficulty presets.
//!
//! A difficulty is just a deck size. The engine accepts any even card count,
//! but the game ships with a fixed set of presets so statistics keyed by
//! theme and difficulty stay comparable.

use serde::{Deserialize, Serialize};

/// Supported deck sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// 8 cards, 2x4.
    Tiny,
    /// 16 cards, 4x4.
    Easy,
    /// 20 cards, 4x5.
    Casual,
    /// 24 cards, 4x6.
    Medium,
    /// 30 cards, 5x6.
    Tricky,
    /// 32 cards, 4x8.
    Hard,
    /// 36 cards, 6x6.
    Expert,
    /// 42 cards, 6x7.
    Master,
}

impl Difficulty {
    /// Every preset, smallest deck first.
    pub const ALL: [Difficulty; 8] = [
        Difficulty::Tiny,
        Difficulty::Easy,
        Difficulty::Casual,
        Difficulty::Medium,
        Difficulty::Tricky,
        Difficulty::Hard,
        Difficulty::Expert,
        Difficulty::Master,
    ];

    /// Number of cards dealt.
    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            Difficulty::Tiny => 8,
            Difficulty::Easy => 16,
            Difficulty::Casual => 20,
            Difficulty::Medium => 24,
            Difficulty::Tricky => 30,
            Difficulty::Hard => 32,
            Difficulty::Expert => 36,
            Difficulty::Master => 42,
        }
    }

    /// Number of distinct pairs.
    #[must_use]
    pub const fn pairs(self) -> usize {
        self.card_count() / 2
    }

    /// Grid shape as (rows, cols).
    #[must_use]
    pub const fn grid(self) -> (usize, usize) {
        match self {
            Difficulty::Tiny => (2, 4),
            Difficulty::Easy => (4, 4),
            Difficulty::Casual => (4, 5),
            Difficulty::Medium => (4, 6),
            Difficulty::Tricky => (5, 6),
            Difficulty::Hard => (4, 8),
            Difficulty::Expert => (6, 6),
            Difficulty::Master => (6, 7),
        }
    }

    /// Look up the preset for a card count.
    #[must_use]
    pub fn from_card_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.card_count() == count)
    }

    /// Menu label, e.g. `"4x4"`.
    #[must_use]
    pub fn label(self) -> String {
        let (rows, cols) = self.grid();
        format!("{rows}x{cols}")
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.card_count())
    }
}
