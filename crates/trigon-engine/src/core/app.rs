use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called for window events.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called when the drawable size changes.
    ///
    /// The default does nothing: the system does not adapt rendering to the
    /// output size (no viewport or projection recompute). The runtime keeps
    /// the swapchain itself presentable independently of this hook.
    fn on_resize(&mut self, new_size: PhysicalSize<u32>) {
        let _ = new_size;
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
