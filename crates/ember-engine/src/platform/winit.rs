use std::collections::VecDeque;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use super::backend::{Backend, BackendError, BackendEvent, InitFlags};
use super::loader::{BackendLoader, Platform};
use crate::options::MetadataKey;

/// Loads [`WinitBackend`] on desktop platforms.
#[derive(Debug, Default, Clone, Copy)]
pub struct WinitLoader;

impl BackendLoader for WinitLoader {
    type Backend = WinitBackend;

    fn load(&self, platform: Platform) -> Result<WinitBackend, BackendError> {
        match platform {
            Platform::Windows | Platform::MacOs | Platform::Linux | Platform::FreeBsd => {
                Ok(WinitBackend::new())
            }
            Platform::Other(os) => Err(BackendError::new(format!(
                "winit backend is not available on `{os}`"
            ))),
        }
    }
}

/// Backend driving a `winit` event loop without blocking.
///
/// Each empty `poll_event` pumps the loop once with a zero timeout and
/// buffers what it produced. `VIDEO` opens one window titled with the app
/// name; closing it is reported as [`BackendEvent::Quit`].
///
/// winit allows a single event loop per process, so a second `init` in the
/// same process fails.
pub struct WinitBackend {
    event_loop: Option<EventLoop<()>>,
    handler: PumpHandler,
}

impl WinitBackend {
    pub fn new() -> Self {
        Self {
            event_loop: None,
            handler: PumpHandler::default(),
        }
    }

    fn pump(&mut self) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            return;
        };

        let status = event_loop.pump_app_events(Some(Duration::ZERO), &mut self.handler);
        if let PumpStatus::Exit(code) = status {
            log::debug!("winit event loop exited with code {code}");
            self.handler.pending.push_back(BackendEvent::Quit);
            self.close_loop();
        }
    }

    /// Drops the window before the event loop that owns it.
    fn close_loop(&mut self) {
        self.handler.window = None;
        self.event_loop = None;
    }
}

impl Default for WinitBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for WinitBackend {
    fn init(&mut self, flags: InitFlags) -> Result<(), BackendError> {
        let event_loop = EventLoop::new()
            .map_err(|e| BackendError::new(format!("failed to create winit EventLoop: {e}")))?;

        let unsupported = flags.difference(InitFlags::VIDEO | InitFlags::EVENTS);
        if !unsupported.is_empty() {
            log::debug!("winit backend ignores {unsupported:?}");
        }

        self.handler.open_window = flags.contains(InitFlags::VIDEO);
        self.event_loop = Some(event_loop);
        Ok(())
    }

    fn set_metadata_property(
        &mut self,
        key: MetadataKey,
        value: Option<&str>,
    ) -> Result<(), BackendError> {
        if key == MetadataKey::Name {
            self.handler.title = value.unwrap_or_default().to_string();
            if let Some(window) = &self.handler.window {
                window.set_title(&self.handler.title);
            }
        }
        Ok(())
    }

    fn poll_event(&mut self) -> Option<BackendEvent> {
        if self.handler.pending.is_empty() {
            self.pump();
        }
        self.handler.pending.pop_front()
    }

    fn quit(&mut self) {
        self.handler.pending.clear();
        self.close_loop();
    }
}

#[derive(Default)]
struct PumpHandler {
    open_window: bool,
    title: String,
    window: Option<Window>,
    pending: VecDeque<BackendEvent>,
}

impl ApplicationHandler for PumpHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);

        if !self.open_window || self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes().with_title(self.title.clone());
        match event_loop.create_window(attrs) {
            Ok(window) => self.window = Some(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                self.pending.push_back(BackendEvent::Quit);
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let classified = match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => BackendEvent::Quit,
            _ => BackendEvent::Other,
        };
        self.pending.push_back(classified);
    }
}
