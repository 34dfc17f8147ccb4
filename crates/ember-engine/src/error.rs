use thiserror::Error;

use crate::core::LifecyclePhase;
use crate::options::MetadataKey;
use crate::platform::BackendError;

/// Errors surfaced by [`Game::run`](crate::core::Game::run) and the pieces it drives.
///
/// None of these are retried. Every variant reaches the caller of `run()`
/// as soon as it happens.
#[derive(Debug, Error)]
pub enum GameError {
    /// The backend could not be loaded or refused to start. No phase fired.
    #[error("failed to initialize backend subsystems: {0}")]
    SubsystemInit(#[source] BackendError),

    /// The backend rejected an app metadata write during startup.
    #[error("backend rejected app metadata `{key}`: {source}")]
    Metadata {
        key: MetadataKey,
        #[source]
        source: BackendError,
    },

    /// The game clock was advanced before `initialize()`.
    #[error("game clock is not initialized")]
    NotInitialized,

    /// A phase subscriber returned an error; the loop stopped mid-phase.
    #[error("{phase} subscriber failed")]
    Subscriber {
        phase: LifecyclePhase,
        #[source]
        source: anyhow::Error,
    },

    /// `run()` was called on a game that already ran or was disposed.
    #[error("game cannot run from the {0} state")]
    InvalidState(&'static str),
}
