//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::KioskShell;
use super::init::logical_size;

impl ApplicationHandler for KioskShell {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.handle_resize();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => self.handle_resize(),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl KioskShell {
    /// Views keep their own geometry; only the overlay follows the window.
    fn handle_resize(&mut self) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        let (width, height) = logical_size(window);
        tracing::debug!(width, height, "window resized");
        if let Some(state) = self.state.as_mut() {
            state.window_resized(width, height);
        }
    }
}
