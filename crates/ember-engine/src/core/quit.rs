use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// External quit request for a running [`Game`](super::Game).
///
/// Cloneable and `Send`, so it can be captured by subscribers or handed to
/// another thread. A request is picked up at the next event drain; the tick
/// in progress still finishes its `Updating` and `Drawing` phases.
#[derive(Debug, Clone, Default)]
pub struct QuitHandle {
    requested: Arc<AtomicBool>,
}

impl QuitHandle {
    pub fn request_quit(&self) {
        self.requested.store(true, Ordering::Release);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_request() {
        let handle = QuitHandle::default();
        let remote = handle.clone();
        assert!(!handle.is_requested());

        std::thread::spawn(move || remote.request_quit()).join().unwrap();
        assert!(handle.is_requested());
    }
}
