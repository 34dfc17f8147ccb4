//! Backend boundary.
//!
//! The run loop only sees the [`Backend`] trait. A [`BackendLoader`] picks
//! the implementation for the current [`Platform`], and [`SubsystemGuard`]
//! owns the result until it is released.

mod backend;
mod guard;
mod loader;

#[cfg(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "linux",
    target_os = "freebsd",
))]
mod winit;

pub use backend::{Backend, BackendError, BackendEvent, InitFlags};
pub use guard::SubsystemGuard;
pub use loader::{BackendLoader, Platform};

#[cfg(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "linux",
    target_os = "freebsd",
))]
pub use self::winit::{WinitBackend, WinitLoader};
