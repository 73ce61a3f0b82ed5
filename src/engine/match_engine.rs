//! Match engine implementation.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::state::SessionState;
use super::{IgnoreReason, Phase, Resolution, TapOutcome};
use crate::cards::{build_deck, Card, CardIndex, Deck, Theme};
use crate::core::{DeckRng, EngineConfig, MismatchPenalty, Result};
use crate::hooks::{ManualTimer, MatchObserver, TimerHandle, TimerService, TimerTask};
use crate::stats::GameSummary;

/// Drives one game session.
///
/// Not reentrant: every public operation runs to completion before the next
/// event is handled, and all calls must come from the thread that owns the
/// engine.
pub struct MatchEngine<O, T> {
    theme: Theme,
    config: EngineConfig,
    state: SessionState,
    observer: O,
    timer: T,
    pending_resolve: Option<TimerHandle>,
    pending_conceal: Option<TimerHandle>,
    summary: Option<GameSummary>,
}

impl<O: MatchObserver, T: TimerService> MatchEngine<O, T> {
    /// Start a session with a freshly shuffled deck.
    ///
    /// Fails if the theme cannot supply `num_cards / 2` distinct pairs.
    pub fn new(
        theme: Theme,
        num_cards: usize,
        config: EngineConfig,
        rng: &mut DeckRng,
        observer: O,
        timer: T,
    ) -> Result<Self> {
        let deck = build_deck(&theme, num_cards, rng)?;
        Ok(Self::from_deck(theme, deck, config, observer, timer))
    }

    /// Start a session with a prepared deck.
    pub fn from_deck(
        theme: Theme,
        deck: Deck,
        config: EngineConfig,
        observer: O,
        mut timer: T,
    ) -> Self {
        let lives = config.starting_lives();
        timer.start_clock();
        debug!(theme = theme.id(), cards = deck.len(), "session started");
        Self {
            theme,
            config,
            state: SessionState::new(deck, lives),
            observer,
            timer,
            pending_resolve: None,
            pending_conceal: None,
            summary: None,
        }
    }

    /// Handle a tap on the card at `index`.
    pub fn tap(&mut self, index: CardIndex) -> TapOutcome {
        if let Some(reason) = self.tap_guard(index) {
            debug!(index = index.raw(), ?reason, "tap ignored");
            return TapOutcome::Ignored(reason);
        }

        if let Some(card) = self.state.deck.get_mut(index) {
            card.set_flipped(true);
        }
        self.notify_card(index);
        self.play_cue(index);
        self.state.selection.push(index);

        if self.state.selection.len() == 2 {
            self.state.is_checking = true;
            let handle = self.timer.schedule_once(TimerTask::Resolve, self.config.resolve_delay);
            self.pending_resolve = Some(handle);
            debug!(index = index.raw(), "second card selected, resolution scheduled");
            TapOutcome::AwaitingResolution
        } else {
            debug!(index = index.raw(), "first card selected");
            TapOutcome::Selected(index)
        }
    }

    fn tap_guard(&self, index: CardIndex) -> Option<IgnoreReason> {
        if self.state.won {
            return Some(IgnoreReason::Finished);
        }
        if self.state.abandoned {
            return Some(IgnoreReason::Abandoned);
        }
        if self.state.is_checking || self.state.selection.len() >= 2 {
            return Some(IgnoreReason::Resolving);
        }
        if self.state.revealing {
            return Some(IgnoreReason::Revealing);
        }
        match self.state.deck.get(index) {
            None => Some(IgnoreReason::OutOfRange),
            Some(card) if card.is_matched() => Some(IgnoreReason::Matched),
            Some(card) if card.is_flipped() => Some(IgnoreReason::AlreadyFlipped),
            Some(_) => None,
        }
    }

    /// Compare the two selected cards.
    ///
    /// Normally delivered by the timer after `resolve_delay`. Calling it
    /// without exactly two selected cards logs a warning and returns `None`.
    pub fn resolve(&mut self) -> Option<Resolution> {
        if let Some(handle) = self.pending_resolve.take() {
            self.timer.cancel(handle);
        }
        if self.state.won || self.state.abandoned {
            warn!("resolve called on a finished session");
            return None;
        }
        if self.state.selection.len() != 2 {
            warn!(
                selected = self.state.selection.len(),
                "resolve called without two selected cards"
            );
            self.state.is_checking = false;
            return None;
        }

        let (first, second) = (self.state.selection[0], self.state.selection[1]);
        let compared = self
            .state
            .deck
            .get(first)
            .zip(self.state.deck.get(second))
            .map(|(a, b)| a.pairs_with(b));
        let Some(is_match) = compared else {
            warn!(%first, %second, "selection points outside the deck");
            self.state.selection.clear();
            self.state.is_checking = false;
            return None;
        };

        let mut resolution = if is_match {
            self.apply_match(first, second)
        } else {
            self.apply_mismatch(first, second)
        };

        self.state.selection.clear();
        self.state.is_checking = false;

        if self.state.deck.all_matched() {
            self.finish();
        } else if resolution.is_match() {
            self.observer
                .on_match_found(self.state.deck.matched_pairs(), self.state.deck.total_pairs());
        }

        if let Resolution::Match { won, .. } = &mut resolution {
            *won = self.state.won;
        }
        Some(resolution)
    }

    fn apply_match(&mut self, first: CardIndex, second: CardIndex) -> Resolution {
        for index in [first, second] {
            if let Some(card) = self.state.deck.get_mut(index) {
                card.set_matched();
            }
            self.notify_card(index);
        }

        self.state.consecutive_matches += 1;
        self.state.multiplier = self.state.consecutive_matches.min(self.config.multiplier_cap);
        self.state.score += self.state.multiplier;

        debug!(
            %first,
            %second,
            multiplier = self.state.multiplier,
            score = self.state.score,
            "match"
        );

        Resolution::Match {
            points: self.state.multiplier,
            multiplier: self.state.multiplier,
            won: false,
        }
    }

    fn apply_mismatch(&mut self, first: CardIndex, second: CardIndex) -> Resolution {
        self.state.consecutive_matches = 0;
        self.state.multiplier = 1;

        let before = self.state.score;
        let mut life_lost = false;
        match self.config.mismatch_penalty {
            MismatchPenalty::None => {}
            MismatchPenalty::DecrementScore => {
                self.state.score = self.state.score.saturating_sub(1);
            }
            MismatchPenalty::Lives { .. } => match self.state.lives {
                Some(lives) if lives > 0 => {
                    self.state.lives = Some(lives - 1);
                    life_lost = true;
                }
                _ => self.state.score = self.state.score.saturating_sub(1),
            },
        }

        for index in [first, second] {
            if let Some(card) = self.state.deck.get_mut(index) {
                card.set_flipped(false);
            }
            self.notify_card(index);
        }

        debug!(%first, %second, score = self.state.score, "mismatch");

        Resolution::Mismatch {
            life_lost,
            points_lost: before - self.state.score,
        }
    }

    fn finish(&mut self) {
        self.state.won = true;
        self.state.revealing = false;
        self.timer.stop_clock();
        self.cancel_pending();

        let summary = GameSummary {
            score: self.state.score,
            elapsed_secs: self.timer.elapsed_secs(),
            theme_id: self.theme.id().to_string(),
            difficulty: self.state.deck.len(),
            pairs_matched: self.state.deck.total_pairs(),
        };
        info!(
            theme = %summary.theme_id,
            difficulty = summary.difficulty,
            score = summary.score,
            secs = summary.elapsed_secs,
            "game won"
        );
        self.observer.on_game_won(&summary);
        self.summary = Some(summary);
    }

    /// Easy mode: show every unmatched card for `reveal_duration`.
    ///
    /// Usable once per session, only when easy mode is enabled, and never
    /// while two cards are waiting for resolution. Returns whether the
    /// reveal started.
    pub fn reveal_all(&mut self) -> bool {
        if !self.config.easy_mode
            || self.state.easy_mode_used
            || self.state.is_checking
            || self.state.won
            || self.state.abandoned
        {
            debug!(used = self.state.easy_mode_used, "reveal refused");
            return false;
        }

        self.state.easy_mode_used = true;
        self.state.revealing = true;

        let hidden: Vec<CardIndex> = self
            .state
            .deck
            .iter()
            .filter(|(_, c)| c.is_selectable())
            .map(|(i, _)| i)
            .collect();
        for &index in &hidden {
            if let Some(card) = self.state.deck.get_mut(index) {
                card.set_flipped(true);
            }
            self.notify_card(index);
        }

        let handle = self
            .timer
            .schedule_once(TimerTask::ConcealUnmatched, self.config.reveal_duration);
        self.pending_conceal = Some(handle);
        debug!(revealed = hidden.len(), "reveal started");
        true
    }

    /// End the easy-mode reveal: turn unmatched cards face down again.
    ///
    /// Cards in the selection stay face up. No-op when no reveal is showing.
    pub fn conceal_unmatched(&mut self) {
        if let Some(handle) = self.pending_conceal.take() {
            self.timer.cancel(handle);
        }
        if !self.state.revealing {
            return;
        }
        self.state.revealing = false;

        let to_hide: Vec<CardIndex> = self
            .state
            .deck
            .iter()
            .filter(|(i, c)| c.is_flipped() && !c.is_matched() && !self.state.selection.contains(i))
            .map(|(i, _)| i)
            .collect();
        for &index in &to_hide {
            if let Some(card) = self.state.deck.get_mut(index) {
                card.set_flipped(false);
            }
            self.notify_card(index);
        }
        debug!(concealed = to_hide.len(), "reveal ended");
    }

    /// Deliver a scheduled task from the host timer.
    pub fn fire(&mut self, task: TimerTask) {
        match task {
            TimerTask::Resolve => {
                self.resolve();
            }
            TimerTask::ConcealUnmatched => self.conceal_unmatched(),
        }
    }

    /// Leave the session: cancel pending callbacks and stop the clock.
    ///
    /// Later taps are ignored.
    pub fn abandon(&mut self) {
        if self.state.abandoned || self.state.won {
            return;
        }
        self.cancel_pending();
        self.timer.stop_clock();
        self.state.abandoned = true;
        self.state.is_checking = false;
        self.state.revealing = false;
        debug!(theme = self.theme.id(), "session abandoned");
    }

    /// Play again with the same theme and deck size.
    ///
    /// On error the current session is left untouched.
    pub fn restart(&mut self, rng: &mut DeckRng) -> Result<()> {
        let deck = build_deck(&self.theme, self.state.deck.len(), rng)?;
        self.cancel_pending();
        self.state = SessionState::new(deck, self.config.starting_lives());
        self.summary = None;
        self.timer.start_clock();
        debug!(theme = self.theme.id(), cards = self.state.deck.len(), "session restarted");
        Ok(())
    }

    fn cancel_pending(&mut self) {
        for handle in [self.pending_resolve.take(), self.pending_conceal.take()]
            .into_iter()
            .flatten()
        {
            self.timer.cancel(handle);
        }
    }

    fn notify_card(&mut self, index: CardIndex) {
        if let Some(card) = self.state.deck.get(index) {
            self.observer.on_card_state_changed(index, card);
        }
    }

    fn play_cue(&mut self, index: CardIndex) {
        if !self.config.audio_assist {
            return;
        }
        let cue = self
            .state
            .deck
            .get(index)
            .and_then(|card| self.theme.audio_cue(card.token()));
        if let Some(cue) = cue {
            self.observer.on_card_revealed(index, cue);
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.state.deck
    }

    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.state.deck.get(index)
    }

    #[must_use]
    pub fn selection(&self) -> &[CardIndex] {
        &self.state.selection
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    #[must_use]
    pub fn consecutive_matches(&self) -> u32 {
        self.state.consecutive_matches
    }

    #[must_use]
    pub fn multiplier(&self) -> u32 {
        self.state.multiplier
    }

    #[must_use]
    pub fn lives(&self) -> Option<u32> {
        self.state.lives
    }

    #[must_use]
    pub fn easy_mode_used(&self) -> bool {
        self.state.easy_mode_used
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.won
    }

    /// Summary of the won game, once there is one.
    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    #[must_use]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Tear down into the observer and timer.
    pub fn into_parts(self) -> (O, T) {
        (self.observer, self.timer)
    }
}

impl<O: MatchObserver> MatchEngine<O, ManualTimer> {
    /// Advance the manual timer and deliver whatever became due.
    ///
    /// Returns the delivered tasks in order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerTask> {
        let due = self.timer.advance(by);
        for &task in &due {
            self.fire(task);
        }
        due
    }
}
