use super::lifecycle::{LifecycleEvent, LifecyclePhase};
use crate::error::GameError;

/// Callback invoked for every event of the phase it was registered for.
pub type Subscriber = Box<dyn FnMut(&LifecycleEvent) -> anyhow::Result<()>>;

/// Handle identifying one registered subscriber.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered per-phase subscriber lists.
///
/// Fan-out is synchronous and runs in subscription order on the calling
/// thread. The first subscriber error stops the fan-out and is returned as
/// [`GameError::Subscriber`]; nothing is swallowed.
///
/// Subscribing from inside a notification is not supported: `notify` holds
/// the dispatcher mutably for the whole fan-out.
#[derive(Default)]
pub struct LifecycleDispatcher {
    phases: [Vec<(SubscriptionId, Subscriber)>; 4],
    next_id: u64,
}

impl LifecycleDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `f` to the subscribers of `phase`.
    pub fn subscribe<F>(&mut self, phase: LifecyclePhase, f: F) -> SubscriptionId
    where
        F: FnMut(&LifecycleEvent) -> anyhow::Result<()> + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let subscriber: Subscriber = Box::new(f);
        self.phases[phase.index()].push((id, subscriber));
        id
    }

    /// Removes a subscriber. Returns `false` if `id` is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for list in &mut self.phases {
            if let Some(pos) = list.iter().position(|(sid, _)| *sid == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn subscriber_count(&self, phase: LifecyclePhase) -> usize {
        self.phases[phase.index()].len()
    }

    /// Delivers `event` to every subscriber of its phase.
    pub fn notify(&mut self, event: &LifecycleEvent) -> Result<(), GameError> {
        let phase = event.phase();
        for (_, subscriber) in &mut self.phases[phase.index()] {
            subscriber(event).map_err(|source| GameError::Subscriber { phase, source })?;
        }
        Ok(())
    }
}
