use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::core::{App, AppControl};
use crate::device::{GpuContext, GpuInit};
use crate::error::StartupError;

/// How the loop waits between iterations.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LoopMode {
    /// Spin continuously, polling for events every iteration.
    Poll,
    /// Sleep until the next event arrives.
    #[default]
    Wait,
}

impl LoopMode {
    pub fn control_flow(self) -> ControlFlow {
        match self {
            LoopMode::Poll => ControlFlow::Poll,
            LoopMode::Wait => ControlFlow::Wait,
        }
    }
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
    pub loop_mode: LoopMode,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Learn WebGPU".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
            resizable: true,
            loop_mode: LoopMode::Wait,
        }
    }
}

impl RuntimeConfig {
    fn window_attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.initial_size)
            .with_resizable(self.resizable)
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and runs the event loop until it is closed.
    ///
    /// With `gpu_init`, a [`GpuContext`] is bound to the window before the
    /// app sees any event. The context is released before the window.
    pub fn run<A>(config: RuntimeConfig, gpu_init: Option<GpuInit>, app: A) -> Result<(), StartupError>
    where
        A: App,
    {
        let event_loop = EventLoop::new().map_err(StartupError::Windowing)?;
        event_loop.set_control_flow(config.loop_mode.control_flow());

        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .map_err(StartupError::EventLoop)?;

        state.finish()
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Option<GpuContext<'this>>,
}

impl WindowEntry {
    fn create(window: Window, gpu_init: Option<GpuInit>) -> Result<Self, StartupError> {
        WindowEntryTryBuilder {
            window,
            gpu_builder: |w| match gpu_init {
                Some(init) => GpuContext::new(w, init).map(Some),
                None => Ok(None),
            },
        }
        .try_build()
    }

    fn id(&self) -> WindowId {
        self.with_window(|w| w.id())
    }
}

struct AppState<A>
where
    A: App,
{
    config: RuntimeConfig,
    gpu_init: Option<GpuInit>,
    app: A,

    entry: Option<WindowEntry>,
    failure: Option<StartupError>,
}

impl<A> AppState<A>
where
    A: App,
{
    fn new(config: RuntimeConfig, gpu_init: Option<GpuInit>, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            failure: None,
        }
    }

    /// Records the first failure and stops the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: StartupError) {
        self.record_failure(err);
        event_loop.exit();
    }

    /// Keeps the first failure only and releases the window.
    fn record_failure(&mut self, err: StartupError) {
        log::debug!("stopping event loop: {err}");
        self.failure.get_or_insert(err);
        if self.entry.take().is_some() {
            log::debug!("window released");
        }
    }

    /// Releases GPU objects and the window, then stops the loop.
    fn close(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.take().is_some() {
            log::debug!("window released");
        }
        event_loop.exit();
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<(), StartupError> {
        let window = event_loop
            .create_window(self.config.window_attributes())
            .map_err(StartupError::CreateWindow)?;
        log::info!("created window {:?}", self.config.title);

        let entry = WindowEntry::create(window, self.gpu_init.clone())?;
        self.entry = Some(entry);
        Ok(())
    }

    fn notify_gpu_ready(&mut self) -> AppControl {
        let (app, entry) = (&mut self.app, &self.entry);

        let Some(entry) = entry else {
            return AppControl::Continue;
        };

        entry.with_gpu(|gpu| match gpu {
            Some(gpu) => app.on_gpu_ready(gpu),
            None => AppControl::Continue,
        })
    }

    fn finish(mut self) -> Result<(), StartupError> {
        self.entry = None;
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.failure.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            self.fail(event_loop, e);
            return;
        }

        if self.notify_gpu_ready() == AppControl::Exit {
            self.close(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(self.config.loop_mode.control_flow());
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = &self.entry else {
            return;
        };
        if entry.id() != window_id {
            return;
        }

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.close(event_loop);
            return;
        }

        if let WindowEvent::CloseRequested = event {
            log::info!("close requested");
            self.close(event_loop);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Size;
    use winit::error::EventLoopError;

    #[test]
    fn default_config_opens_640x480_learn_webgpu_window() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.title, "Learn WebGPU");
        assert_eq!(cfg.initial_size, LogicalSize::new(640.0, 480.0));
        assert!(cfg.resizable);
        assert_eq!(cfg.loop_mode, LoopMode::Wait);
    }

    #[test]
    fn loop_mode_maps_to_control_flow() {
        assert_eq!(LoopMode::Poll.control_flow(), ControlFlow::Poll);
        assert_eq!(LoopMode::Wait.control_flow(), ControlFlow::Wait);
        assert_eq!(LoopMode::default(), LoopMode::Wait);
    }

    #[test]
    fn window_attributes_follow_config() {
        let cfg = RuntimeConfig {
            title: "probe".into(),
            initial_size: LogicalSize::new(320.0, 200.0),
            resizable: false,
            loop_mode: LoopMode::Poll,
        };
        let attrs = cfg.window_attributes();

        assert_eq!(attrs.title, "probe");
        assert_eq!(attrs.inner_size, Some(Size::Logical(LogicalSize::new(320.0, 200.0))));
        assert!(!attrs.resizable);
    }

    struct Quiet;
    impl App for Quiet {}

    #[test]
    fn finish_without_failure_is_ok() {
        let state = AppState::new(RuntimeConfig::default(), None, Quiet);
        assert!(state.finish().is_ok());
    }

    #[test]
    fn finish_returns_recorded_failure() {
        let mut state = AppState::new(RuntimeConfig::default(), None, Quiet);
        state.record_failure(StartupError::ZeroSize { width: 0, height: 0 });
        assert!(state.entry.is_none());
        assert!(matches!(state.finish(), Err(StartupError::ZeroSize { .. })));
    }

    #[test]
    fn first_failure_wins() {
        let mut state = AppState::new(RuntimeConfig::default(), None, Quiet);
        state.record_failure(StartupError::ZeroSize { width: 0, height: 480 });
        state.record_failure(StartupError::Windowing(EventLoopError::RecreationAttempt));

        match state.finish() {
            Err(StartupError::ZeroSize { width, height }) => assert_eq!((width, height), (0, 480)),
            other => panic!("expected the first recorded failure, got {other:?}"),
        }
    }

    #[test]
    fn gpu_ready_is_skipped_without_window() {
        let mut state = AppState::new(RuntimeConfig::default(), Some(GpuInit::default()), Quiet);
        assert_eq!(state.notify_gpu_ready(), AppControl::Continue);
    }
}
