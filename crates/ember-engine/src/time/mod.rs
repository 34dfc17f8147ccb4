//! Time subsystem.
//!
//! Provides the game clock driven by the run loop:
//! - one `GameClock` per `Game`
//! - `initialize()` once at loop entry, `advance()` once per tick
//! - each tick yields a `GameTime` snapshot for subscribers

mod game_clock;

pub use game_clock::{GameClock, GameTime, MonotonicSource, TimeSource};
