//! Ember engine crate.
//!
//! This crate owns the game bootstrap: the run loop, the frame-timing clock,
//! lifecycle dispatch, and the exactly-once teardown of the platform backend.

pub mod core;
pub mod logging;
pub mod options;
pub mod platform;
pub mod time;

mod error;

pub use crate::core::{Game, GameState, LifecycleEvent, LifecyclePhase, QuitHandle};
pub use error::GameError;
pub use options::{AppVersion, GameOptions};
