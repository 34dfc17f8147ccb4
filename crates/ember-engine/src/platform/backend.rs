use bitflags::bitflags;
use thiserror::Error;

use crate::options::MetadataKey;

bitflags! {
    /// Capability subsystems requested from the backend at init.
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct InitFlags: u32 {
        const AUDIO    = 0x0000_0010;
        const VIDEO    = 0x0000_0020;
        const JOYSTICK = 0x0000_0200;
        const HAPTIC   = 0x0000_1000;
        const GAMEPAD  = 0x0000_2000;
        const EVENTS   = 0x0000_4000;
        const SENSOR   = 0x0000_8000;
        const CAMERA   = 0x0001_0000;
    }
}

/// Error message reported by a backend.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Backend event, classified only as far as the run loop cares.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BackendEvent {
    /// The user or the platform asked the app to quit.
    Quit,
    /// Anything else. Drained and ignored by the run loop.
    Other,
}

/// Multimedia backend contract (windowing, input, audio).
///
/// The run loop owns exactly one backend per run through a
/// [`SubsystemGuard`](super::SubsystemGuard), which calls [`quit`](Backend::quit)
/// exactly once.
pub trait Backend {
    /// Starts the requested subsystems.
    fn init(&mut self, flags: InitFlags) -> Result<(), BackendError>;

    /// Sets one app metadata property. `None` clears it.
    fn set_metadata_property(
        &mut self,
        key: MetadataKey,
        value: Option<&str>,
    ) -> Result<(), BackendError>;

    /// Returns the next pending event without blocking.
    fn poll_event(&mut self) -> Option<BackendEvent>;

    /// Shuts the backend down.
    fn quit(&mut self);
}
