//! The shell window.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the view registry (through the control bridge), the
//! keyboard overlay and the event sink the web views report into.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod state;
mod title;

pub use core::KioskShell;
