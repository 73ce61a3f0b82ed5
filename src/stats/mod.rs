//! Game summaries and lifetime statistics.
//!
//! The engine hands a `GameSummary` to its observer when a game is won.
//! `Statistics` folds summaries into lifetime totals and per theme /
//! difficulty best times. Storing the document is up to the host.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardIndex};
use crate::hooks::MatchObserver;

/// Terminal summary of a won game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: u32,
    /// Game clock at the moment of the win.
    pub elapsed_secs: u64,
    pub theme_id: String,
    /// Deck size the game was played with.
    pub difficulty: usize,
    pub pairs_matched: usize,
}

impl GameSummary {
    /// Key used for best times, e.g. `"animals_16"`.
    #[must_use]
    pub fn best_time_key(&self) -> String {
        best_time_key(&self.theme_id, self.difficulty)
    }
}

fn best_time_key(theme_id: &str, difficulty: usize) -> String {
    format!("{theme_id}_{difficulty}")
}

/// Lifetime statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub games_played: u64,
    pub best_score: u32,
    /// Total seconds across all recorded games.
    pub total_time: u64,
    pub pairs_matched: u64,
    /// Fastest win in seconds, keyed by `"{theme}_{difficulty}"`.
    pub best_times: FxHashMap<String, u64>,
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished game into the totals.
    ///
    /// Returns `true` if the game set a new best time. Zero-second games
    /// never count as a best time.
    pub fn record(&mut self, summary: &GameSummary) -> bool {
        self.games_played += 1;
        self.best_score = self.best_score.max(summary.score);
        self.total_time += summary.elapsed_secs;
        self.pairs_matched += summary.pairs_matched as u64;

        if summary.elapsed_secs == 0 {
            return false;
        }

        let key = summary.best_time_key();
        let improved = self
            .best_times
            .get(&key)
            .map_or(true, |&best| summary.elapsed_secs < best);
        if improved {
            tracing::info!(key = %key, secs = summary.elapsed_secs, "new best time");
            self.best_times.insert(key, summary.elapsed_secs);
        }
        improved
    }

    /// Best time for a theme and deck size.
    #[must_use]
    pub fn best_time(&self, theme_id: &str, difficulty: usize) -> Option<u64> {
        self.best_times.get(&best_time_key(theme_id, difficulty)).copied()
    }
}

/// Observer that records won games into `Statistics` and forwards every
/// notification to an inner observer.
#[derive(Clone, Debug, Default)]
pub struct StatsRecorder<O> {
    stats: Statistics,
    inner: O,
}

impl<O: MatchObserver> StatsRecorder<O> {
    /// Wrap `inner`, starting from existing statistics.
    #[must_use]
    pub fn new(stats: Statistics, inner: O) -> Self {
        Self { stats, inner }
    }

    #[must_use]
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut O {
        &mut self.inner
    }

    /// Unwrap into the statistics and the inner observer.
    pub fn into_parts(self) -> (Statistics, O) {
        (self.stats, self.inner)
    }
}

impl<O: MatchObserver> MatchObserver for StatsRecorder<O> {
    fn on_card_state_changed(&mut self, index: CardIndex, card: &Card) {
        self.inner.on_card_state_changed(index, card);
    }

    fn on_card_revealed(&mut self, index: CardIndex, cue: &str) {
        self.inner.on_card_revealed(index, cue);
    }

    fn on_match_found(&mut self, matched_pairs: usize, total_pairs: usize) {
        self.inner.on_match_found(matched_pairs, total_pairs);
    }

    fn on_game_won(&mut self, summary: &GameSummary) {
        self.stats.record(summary);
        self.inner.on_game_won(summary);
    }
}

/// Human-readable duration: `"1h 2m"`, `"2m 5s"` or `"7s"`.
#[must_use]
pub fn format_time(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::RecordingObserver;

    fn summary(score: u32, secs: u64) -> GameSummary {
        GameSummary {
            score,
            elapsed_secs: secs,
            theme_id: "animals".to_string(),
            difficulty: 16,
            pairs_matched: 8,
        }
    }

    #[test]
    fn test_record_totals() {
        let mut stats = Statistics::new();
        stats.record(&summary(12, 90));
        stats.record(&summary(7, 60));

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.best_score, 12);
        assert_eq!(stats.total_time, 150);
        assert_eq!(stats.pairs_matched, 16);
    }

    #[test]
    fn test_best_time_only_improves() {
        let mut stats = Statistics::new();

        assert!(stats.record(&summary(1, 90)));
        assert!(!stats.record(&summary(1, 120)));
        assert!(stats.record(&summary(1, 45)));
        assert!(!stats.record(&summary(1, 45)));

        assert_eq!(stats.best_time("animals", 16), Some(45));
        assert_eq!(stats.best_time("animals", 8), None);
    }

    #[test]
    fn test_zero_time_not_a_best() {
        let mut stats = Statistics::new();
        assert!(!stats.record(&summary(3, 0)));
        assert!(stats.best_times.is_empty());
        assert_eq!(stats.games_played, 1);
    }

    #[test]
    fn test_partial_document_loads() {
        let stats: Statistics = serde_json::from_str(r#"{"games_played": 3}"#).unwrap();
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.best_score, 0);
        assert!(stats.best_times.is_empty());
    }

    #[test]
    fn test_recorder_forwards() {
        let mut recorder = StatsRecorder::new(Statistics::new(), RecordingObserver::new());
        recorder.on_match_found(1, 8);
        recorder.on_game_won(&summary(20, 75));

        assert_eq!(recorder.stats().games_played, 1);
        assert_eq!(recorder.inner().events().len(), 2);

        let (stats, inner) = recorder.into_parts();
        assert_eq!(stats.best_time("animals", 16), Some(75));
        assert_eq!(inner.wins().count(), 1);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0s");
        assert_eq!(format_time(7), "7s");
        assert_eq!(format_time(125), "2m 5s");
        assert_eq!(format_time(3600), "1h 0m");
        assert_eq!(format_time(3725), "1h 2m");
    }
}
