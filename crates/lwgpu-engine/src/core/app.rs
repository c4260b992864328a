use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::device::GpuContext;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the example programs.
pub trait App {
    /// Called once, right after the adapter has been acquired.
    ///
    /// Never called when the runtime was started without a `GpuInit`.
    fn on_gpu_ready(&mut self, gpu: &GpuContext<'_>) -> AppControl {
        let _ = gpu;
        AppControl::Continue
    }

    /// Called for every window event, before the runtime handles it.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }
}
