//! Windowing platform abstraction
//!
//! The bootstrap and the display talk to the windowing library only through
//! the two traits in this module:
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │  Bootstrap / Display            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!      ┌────────▼────────┐
//!      │ WindowSystem    │ ← library lifetime, context hints, window creation
//!      │ NativeWindow    │ ← one window + its context
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ glfw::GlfwSystem      │
//!   │ mock::MockSystem      │ ← tests only
//!   └───────────────────────┘
//! ```
//!
//! All calls must happen on the thread that initialized the windowing library.

pub mod glfw;
#[cfg(test)]
pub(crate) mod mock;

use std::any::Any;
use std::ffi::c_void;

use crate::core::config::ContextVersion;
use crate::display::DisplayEvent;
use crate::error::DisplayResult;

pub use self::glfw::{GlfwSystem, GlfwWindow};

/// Address of a resolved OpenGL entry point, null when unresolved
pub type ProcAddress = *const c_void;

/// Per-window creation parameters
#[derive(Debug, Clone, Copy)]
pub struct WindowSpec<'a> {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Title bar text
    pub title: &'a str,
    /// Whether the user can resize the window
    pub resizable: bool,
    /// Whether the window is shown on creation
    pub visible: bool,
}

/// A windowing library: process-level setup and window creation
pub trait WindowSystem {
    /// Initialize the native library
    ///
    /// Called at most once between [`WindowSystem::terminate`] calls by [`crate::Bootstrap`].
    fn init(&mut self) -> DisplayResult<()>;

    /// Request a core-profile, forward-compatible context of `version`
    /// for every window created afterwards
    fn request_context(&mut self, version: ContextVersion);

    /// Create a window and its context
    fn create_window(&mut self, spec: &WindowSpec<'_>) -> DisplayResult<Box<dyn NativeWindow>>;

    /// Shut the native library down
    fn terminate(&mut self);
}

/// A native window owning one OpenGL context
///
/// Dropping the value destroys the window.
pub trait NativeWindow {
    /// Make this window's context current on the calling thread
    fn make_current(&mut self);

    /// Whether closing the window has been requested
    fn should_close(&self) -> bool;

    /// Set or clear the close request
    fn set_should_close(&mut self, should_close: bool);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Process pending window system events
    fn poll_events(&mut self);

    /// Take the window events received since the last call
    fn drain_events(&mut self) -> Vec<DisplayEvent>;

    /// Set the number of vertical blanks to wait for per buffer swap
    ///
    /// Applies to the current context.
    fn set_swap_interval(&mut self, interval: u32);

    /// Resolve an OpenGL entry point through this window's context
    fn get_proc_address(&mut self, symbol: &str) -> ProcAddress;

    /// Client area size in screen coordinates
    fn size(&self) -> (u32, u32);

    /// Framebuffer size in pixels
    fn framebuffer_size(&self) -> (u32, u32);

    /// Update the title bar text
    fn set_title(&mut self, title: &str);

    /// Get access to the concrete type for downcasting
    fn as_any(&self) -> &dyn Any;
}
