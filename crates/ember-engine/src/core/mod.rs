//! Run loop and lifecycle contracts.
//!
//! This module defines what the embedding application sees: the four
//! lifecycle phases, the subscriber dispatcher, and the `Game` run loop that
//! sequences them around a backend.

mod dispatcher;
mod game;
mod lifecycle;
mod quit;

pub use dispatcher::{LifecycleDispatcher, Subscriber, SubscriptionId};
pub use game::{Game, GameState};
pub use lifecycle::{LifecycleEvent, LifecyclePhase};
pub use quit::QuitHandle;
