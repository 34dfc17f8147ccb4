use std::fmt;
use std::time::Duration;

use crate::time::GameTime;

/// One of the four phases a game passes through.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LifecyclePhase {
    Initializing,
    Updating,
    Drawing,
    Exiting,
}

impl LifecyclePhase {
    pub const ALL: [LifecyclePhase; 4] = [
        LifecyclePhase::Initializing,
        LifecyclePhase::Updating,
        LifecyclePhase::Drawing,
        LifecyclePhase::Exiting,
    ];

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            LifecyclePhase::Initializing => 0,
            LifecyclePhase::Updating => 1,
            LifecyclePhase::Drawing => 2,
            LifecyclePhase::Exiting => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LifecyclePhase::Initializing => "initializing",
            LifecyclePhase::Updating => "updating",
            LifecyclePhase::Drawing => "drawing",
            LifecyclePhase::Exiting => "exiting",
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification passed to phase subscribers.
///
/// Subscribers borrow it for the duration of the dispatch call only.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Backend is up and metadata applied; fired once before the first tick.
    Initializing,
    /// Fired once per tick, after pending backend events were drained.
    Updating(GameTime),
    /// Fired once per tick, after `Updating`.
    Drawing(GameTime),
    /// Fired once after the last tick with the clock's final total time.
    /// The backend is still alive during this notification.
    Exiting(Duration),
}

impl LifecycleEvent {
    pub fn phase(&self) -> LifecyclePhase {
        match self {
            LifecycleEvent::Initializing => LifecyclePhase::Initializing,
            LifecycleEvent::Updating(_) => LifecyclePhase::Updating,
            LifecycleEvent::Drawing(_) => LifecyclePhase::Drawing,
            LifecycleEvent::Exiting(_) => LifecyclePhase::Exiting,
        }
    }
}
