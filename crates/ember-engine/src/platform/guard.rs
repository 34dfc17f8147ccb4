use super::backend::{Backend, InitFlags};
use super::loader::{BackendLoader, Platform};
use crate::error::GameError;

/// Exclusive owner of an initialized backend.
///
/// `release()` calls [`Backend::quit`] the first time and does nothing
/// afterwards. Dropping the guard releases it too, so the backend is shut
/// down exactly once however teardown is reached.
pub struct SubsystemGuard<B: Backend> {
    backend: B,
    released: bool,
}

impl<B: Backend> SubsystemGuard<B> {
    /// Loads a backend for `platform` and initializes it with `flags`.
    ///
    /// A backend whose `init` fails was never acquired and is not released.
    pub fn acquire<L>(loader: &L, platform: Platform, flags: InitFlags) -> Result<Self, GameError>
    where
        L: BackendLoader<Backend = B>,
    {
        let mut backend = loader.load(platform).map_err(GameError::SubsystemInit)?;
        backend.init(flags).map_err(GameError::SubsystemInit)?;

        log::debug!("backend initialized on {platform} with {flags:?}");
        Ok(Self { backend, released: false })
    }

    /// The live backend. Must not be used after [`release`](Self::release).
    pub fn backend_mut(&mut self) -> &mut B {
        debug_assert!(!self.released, "backend used after release");
        &mut self.backend
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.backend.quit();
        log::info!("backend released");
    }
}

impl<B: Backend> Drop for SubsystemGuard<B> {
    fn drop(&mut self) {
        self.release();
    }
}
