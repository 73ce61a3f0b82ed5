//! Timer service contract and a deterministic in-process implementation.
//!
//! The engine never sleeps. When it needs a delay it asks the host to call
//! back later with a `TimerTask`; the host's event loop delivers it through
//! `MatchEngine::fire`. The same service owns the game clock, which the
//! engine only reads when reporting a finished game.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Work the engine asks to be run later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerTask {
    /// Compare the two selected cards.
    Resolve,
    /// End the easy-mode reveal.
    ConcealUnmatched,
}

/// Handle to a scheduled task, used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

/// Host timer service.
///
/// Callbacks must be delivered on the same thread that owns the engine.
pub trait TimerService {
    /// Schedule `task` to be delivered once after `delay`.
    fn schedule_once(&mut self, task: TimerTask, delay: Duration) -> TimerHandle;

    /// Cancel a scheduled task. Cancelling a delivered or unknown handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);

    /// Start (or restart from zero) the game clock.
    fn start_clock(&mut self);

    /// Freeze the game clock.
    fn stop_clock(&mut self);

    /// Whole seconds on the game clock.
    fn elapsed_secs(&self) -> u64;
}

#[derive(Clone, Debug)]
struct Pending {
    handle: TimerHandle,
    task: TimerTask,
    due: Duration,
}

/// Deterministic timer driven by `advance`.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memory_match::hooks::{ManualTimer, TimerService, TimerTask};
///
/// let mut timer = ManualTimer::new();
/// timer.schedule_once(TimerTask::Resolve, Duration::from_secs(1));
///
/// assert!(timer.advance(Duration::from_millis(500)).is_empty());
/// assert_eq!(timer.advance(Duration::from_millis(500)), vec![TimerTask::Resolve]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualTimer {
    now: Duration,
    next_handle: u64,
    pending: Vec<Pending>,
    clock_started: Option<Duration>,
    clock_frozen: Option<Duration>,
}

impl ManualTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Tasks still waiting, in scheduling order.
    pub fn pending(&self) -> impl Iterator<Item = TimerTask> + '_ {
        self.pending.iter().map(|p| p.task)
    }

    /// Number of tasks still waiting.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Move virtual time forward and return the tasks that became due,
    /// earliest first. Ties keep scheduling order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerTask> {
        self.now += by;
        let now = self.now;

        let (mut due, waiting): (Vec<Pending>, Vec<Pending>) =
            std::mem::take(&mut self.pending).into_iter().partition(|p| p.due <= now);
        self.pending = waiting;

        due.sort_by_key(|p| (p.due, p.handle.0));
        due.into_iter().map(|p| p.task).collect()
    }
}

impl TimerService for ManualTimer {
    fn schedule_once(&mut self, task: TimerTask, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Pending {
            handle,
            task,
            due: self.now + delay,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|p| p.handle != handle);
    }

    fn start_clock(&mut self) {
        self.clock_started = Some(self.now);
        self.clock_frozen = None;
    }

    fn stop_clock(&mut self) {
        if self.clock_frozen.is_none() {
            self.clock_frozen = Some(self.now);
        }
    }

    fn elapsed_secs(&self) -> u64 {
        match self.clock_started {
            Some(start) => {
                let end = self.clock_frozen.unwrap_or(self.now);
                end.saturating_sub(start).as_secs()
            }
            None => 0,
        }
    }
}
