use std::time::Duration;

use super::dispatcher::{LifecycleDispatcher, SubscriptionId};
use super::lifecycle::{LifecycleEvent, LifecyclePhase};
use super::quit::QuitHandle;
use crate::error::GameError;
use crate::options::GameOptions;
use crate::platform::{Backend, BackendEvent, BackendLoader, InitFlags, Platform, SubsystemGuard};
use crate::time::{GameClock, GameTime};

/// Run-loop state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameState {
    Created,
    Initialized,
    Running,
    Exited,
    /// Disposed before `run()` was ever called.
    Disposed,
}

impl GameState {
    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Created => "created",
            GameState::Initialized => "initialized",
            GameState::Running => "running",
            GameState::Exited => "exited",
            GameState::Disposed => "disposed",
        }
    }
}

/// Top-level run loop.
///
/// Owns the clock, the phase subscribers and, while running, the backend.
/// A `Game` runs once:
///
/// ```text
/// run()
///   acquire backend → apply metadata → Initializing
///   loop until quit:
///     advance clock → drain backend events → Updating → Drawing
///   Exiting(total) → release backend
/// ```
///
/// A quit event or a [`QuitHandle`] request never interrupts a tick: the
/// loop stops at the top of the next iteration. If a subscriber fails, the
/// error is returned from `run()` without firing `Exiting`, and the backend
/// is still released exactly once.
///
/// ```rust,ignore
/// let mut game = Game::with_options(WinitLoader, |o| o.app_name = "Demo".into());
/// game.on_updating(|time| {
///     log::trace!("dt = {:.4}", time.delta_secs());
///     Ok(())
/// });
/// game.run()?;
/// ```
pub struct Game<L: BackendLoader> {
    loader: L,
    platform: Platform,
    init_flags: InitFlags,
    options: GameOptions,
    dispatcher: LifecycleDispatcher,
    clock: GameClock,
    quit: QuitHandle,
    state: GameState,
    subsystem: Option<SubsystemGuard<L::Backend>>,
}

impl<L: BackendLoader> Game<L> {
    /// Creates a game with default options.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            platform: Platform::current(),
            init_flags: InitFlags::all(),
            options: GameOptions::default(),
            dispatcher: LifecycleDispatcher::new(),
            clock: GameClock::new(),
            quit: QuitHandle::default(),
            state: GameState::Created,
            subsystem: None,
        }
    }

    /// Creates a game and applies `configure` to its options once.
    pub fn with_options<F>(loader: L, configure: F) -> Self
    where
        F: FnOnce(&mut GameOptions),
    {
        let mut game = Self::new(loader);
        configure(&mut game.options);
        game
    }

    /// Overrides the platform handed to the loader.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Overrides the subsystems requested at init. Defaults to all of them.
    pub fn init_flags(mut self, flags: InitFlags) -> Self {
        self.init_flags = flags;
        self
    }

    // ── Subscription ──────────────────────────────────────────────────────

    pub fn on_initializing<F>(&mut self, mut f: F) -> SubscriptionId
    where
        F: FnMut() -> anyhow::Result<()> + 'static,
    {
        self.dispatcher
            .subscribe(LifecyclePhase::Initializing, move |_| f())
    }

    pub fn on_updating<F>(&mut self, mut f: F) -> SubscriptionId
    where
        F: FnMut(&GameTime) -> anyhow::Result<()> + 'static,
    {
        self.dispatcher
            .subscribe(LifecyclePhase::Updating, move |ev| match ev {
                LifecycleEvent::Updating(time) => f(time),
                _ => Ok(()),
            })
    }

    pub fn on_drawing<F>(&mut self, mut f: F) -> SubscriptionId
    where
        F: FnMut(&GameTime) -> anyhow::Result<()> + 'static,
    {
        self.dispatcher
            .subscribe(LifecyclePhase::Drawing, move |ev| match ev {
                LifecycleEvent::Drawing(time) => f(time),
                _ => Ok(()),
            })
    }

    /// `f` receives the clock's total time at loop exit.
    pub fn on_exiting<F>(&mut self, mut f: F) -> SubscriptionId
    where
        F: FnMut(Duration) -> anyhow::Result<()> + 'static,
    {
        self.dispatcher
            .subscribe(LifecyclePhase::Exiting, move |ev| match ev {
                LifecycleEvent::Exiting(total) => f(*total),
                _ => Ok(()),
            })
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.dispatcher.unsubscribe(id)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Mutable options, available only before `run()`.
    pub fn options_mut(&mut self) -> Option<&mut GameOptions> {
        (self.state == GameState::Created).then_some(&mut self.options)
    }

    pub fn quit_handle(&self) -> QuitHandle {
        self.quit.clone()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Latest clock snapshot.
    pub fn time(&self) -> GameTime {
        self.clock.snapshot()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Runs the game until a quit is observed.
    ///
    /// Blocks the calling thread. Fails with [`GameError::InvalidState`] if
    /// the game already ran or was disposed.
    pub fn run(&mut self) -> Result<(), GameError> {
        if self.state != GameState::Created {
            return Err(GameError::InvalidState(self.state.as_str()));
        }

        let result = self.run_lifecycle();
        if let Err(e) = &result {
            log::error!("game aborted in {} state: {e}", self.state.as_str());
        }

        self.release_subsystem();
        self.state = GameState::Exited;
        result
    }

    /// Releases the backend if it is still held. Safe to call any number of
    /// times, before or after `run()`.
    pub fn dispose(&mut self) {
        self.release_subsystem();
        if self.state == GameState::Created {
            self.state = GameState::Disposed;
        }
    }

    fn release_subsystem(&mut self) {
        if let Some(mut guard) = self.subsystem.take() {
            guard.release();
        }
    }

    fn run_lifecycle(&mut self) -> Result<(), GameError> {
        log::info!(
            "starting {} {} on {}",
            self.options.app_name,
            self.options.version,
            self.platform
        );

        let guard = SubsystemGuard::acquire(&self.loader, self.platform, self.init_flags)?;
        let guard = self.subsystem.insert(guard);
        apply_metadata(guard.backend_mut(), &self.options)?;

        self.state = GameState::Initialized;
        self.dispatcher.notify(&LifecycleEvent::Initializing)?;

        self.state = GameState::Running;
        self.clock.initialize();
        log::debug!("entering main loop");

        let mut quit = false;
        let mut frames = 0u64;
        while !quit && !self.quit.is_requested() {
            let time = self.clock.advance()?;
            frames += 1;
            quit = drain_events(guard.backend_mut());

            log::trace!(
                "frame {} dt={:?} total={:?}",
                time.frame_index,
                time.delta,
                time.total
            );

            self.dispatcher.notify(&LifecycleEvent::Updating(time))?;
            self.dispatcher.notify(&LifecycleEvent::Drawing(time))?;
        }

        let total = self.clock.total();
        log::info!(
            "exiting after {frames} frames ({:.3}s)",
            total.as_secs_f64()
        );
        self.dispatcher.notify(&LifecycleEvent::Exiting(total))?;
        Ok(())
    }
}

/// Writes every metadata property, stopping at the first rejection.
fn apply_metadata<B: Backend>(backend: &mut B, options: &GameOptions) -> Result<(), GameError> {
    for (key, value) in options.metadata() {
        log::debug!("app metadata {key} = {value:?}");
        backend
            .set_metadata_property(key, value.as_deref())
            .map_err(|source| GameError::Metadata { key, source })?;
    }
    Ok(())
}

/// Polls until the queue is empty. Returns whether any event was a quit.
fn drain_events<B: Backend>(backend: &mut B) -> bool {
    let mut quit = false;
    let mut drained = 0usize;

    while let Some(event) = backend.poll_event() {
        drained += 1;
        if event == BackendEvent::Quit {
            quit = true;
        }
    }

    if quit {
        log::debug!("quit requested by backend ({drained} events drained)");
    }
    quit
}
