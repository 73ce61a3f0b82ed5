//! Contracts with the collaborators around the engine.
//!
//! - `MatchObserver`: rendering, audio cues, match and win notifications
//! - `TimerService`: cancellable one-shot callbacks and the game clock
//!
//! `ManualTimer` and `RecordingObserver` are deterministic implementations
//! for tests and headless hosts.

mod observer;
mod timer;

pub use observer::{MatchObserver, NullObserver, ObserverEvent, RecordingObserver};
pub use timer::{ManualTimer, TimerHandle, TimerService, TimerTask};
