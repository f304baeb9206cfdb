//! GLFW-based window and OpenGL context management
//!
//! GLFW reports its own errors through `glfw::log_errors`, so they reach the
//! `log` facade instead of aborting the process.

use std::any::Any;

use glfw::Context;

use super::{NativeWindow, ProcAddress, WindowSpec, WindowSystem};
use crate::core::config::ContextVersion;
use crate::display::DisplayEvent;
use crate::error::{DisplayError, DisplayResult};

/// GLFW library handle
///
/// Holds the `glfw::Glfw` token while the library is initialized. Every
/// window keeps its own clone, so the library is only torn down by GLFW once
/// the last window is gone as well.
#[derive(Default)]
pub struct GlfwSystem {
    glfw: Option<glfw::Glfw>,
}

impl GlfwSystem {
    /// Create an uninitialized handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the library is currently initialized through this handle
    pub fn is_initialized(&self) -> bool {
        self.glfw.is_some()
    }
}

impl WindowSystem for GlfwSystem {
    fn init(&mut self) -> DisplayResult<()> {
        let glfw = glfw::init(glfw::log_errors)
            .map_err(|e| DisplayError::InitializationFailed(format!("{e:?}")))?;

        log::debug!("GLFW {} initialized", glfw::get_version_string());
        self.glfw = Some(glfw);
        Ok(())
    }

    fn request_context(&mut self, version: ContextVersion) {
        let Some(glfw) = self.glfw.as_mut() else {
            log::warn!("Ignoring OpenGL {version} context request, GLFW is not initialized");
            return;
        };

        glfw.window_hint(glfw::WindowHint::ContextVersion(version.major, version.minor));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
    }

    fn create_window(&mut self, spec: &WindowSpec<'_>) -> DisplayResult<Box<dyn NativeWindow>> {
        let creation_failed = || DisplayError::CreationFailed {
            width: spec.width,
            height: spec.height,
            title: spec.title.to_string(),
        };

        let glfw = self.glfw.as_mut().ok_or_else(creation_failed)?;

        glfw.window_hint(glfw::WindowHint::Resizable(spec.resizable));
        glfw.window_hint(glfw::WindowHint::Visible(spec.visible));

        let (mut window, events) = glfw
            .create_window(spec.width, spec.height, spec.title, glfw::WindowMode::Windowed)
            .ok_or_else(creation_failed)?;

        // Window-level events only; keyboard and mouse polling stay off
        window.set_close_polling(true);
        window.set_size_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_focus_polling(true);

        Ok(Box::new(GlfwWindow {
            window,
            events,
            glfw: glfw.clone(),
        }))
    }

    fn terminate(&mut self) {
        // Dropping the last Glfw token terminates the library
        if self.glfw.take().is_some() {
            log::debug!("Released GLFW library handle");
        }
    }
}

/// GLFW window with its OpenGL context
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    glfw: glfw::Glfw,
}

impl GlfwWindow {
    fn clamp_size((width, height): (i32, i32)) -> (u32, u32) {
        (
            u32::try_from(width).unwrap_or(0),
            u32::try_from(height).unwrap_or(0),
        )
    }

    fn translate(event: glfw::WindowEvent) -> Option<DisplayEvent> {
        match event {
            glfw::WindowEvent::Close => Some(DisplayEvent::CloseRequested),
            glfw::WindowEvent::Focus(focused) => Some(DisplayEvent::Focused(focused)),
            glfw::WindowEvent::Size(w, h) => {
                let (width, height) = Self::clamp_size((w, h));
                Some(DisplayEvent::Resized { width, height })
            }
            glfw::WindowEvent::FramebufferSize(w, h) => {
                let (width, height) = Self::clamp_size((w, h));
                Some(DisplayEvent::FramebufferResized { width, height })
            }
            _ => None,
        }
    }
}

impl NativeWindow for GlfwWindow {
    fn make_current(&mut self) {
        self.window.make_current();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn drain_events(&mut self) -> Vec<DisplayEvent> {
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| Self::translate(event))
            .collect()
    }

    fn set_swap_interval(&mut self, interval: u32) {
        self.glfw.set_swap_interval(glfw::SwapInterval::Sync(interval));
    }

    fn get_proc_address(&mut self, symbol: &str) -> ProcAddress {
        self.window.get_proc_address(symbol) as ProcAddress
    }

    fn size(&self) -> (u32, u32) {
        Self::clamp_size(self.window.get_size())
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        Self::clamp_size(self.window.get_framebuffer_size())
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_events_translated() {
        assert_eq!(
            GlfwWindow::translate(glfw::WindowEvent::Close),
            Some(DisplayEvent::CloseRequested)
        );
        assert_eq!(
            GlfwWindow::translate(glfw::WindowEvent::FramebufferSize(1920, 1080)),
            Some(DisplayEvent::FramebufferResized { width: 1920, height: 1080 })
        );
        assert_eq!(
            GlfwWindow::translate(glfw::WindowEvent::Size(-5, 300)),
            Some(DisplayEvent::Resized { width: 0, height: 300 })
        );
        assert_eq!(
            GlfwWindow::translate(glfw::WindowEvent::Focus(false)),
            Some(DisplayEvent::Focused(false))
        );
    }

    #[test]
    fn test_input_events_ignored() {
        assert_eq!(GlfwWindow::translate(glfw::WindowEvent::CursorPos(10.0, 20.0)), None);
        assert_eq!(GlfwWindow::translate(glfw::WindowEvent::Char('a')), None);
    }

    #[test]
    fn test_new_system_is_uninitialized() {
        let mut system = GlfwSystem::new();
        assert!(!system.is_initialized());

        // No library handle to release yet
        system.terminate();
        assert!(!system.is_initialized());
    }
}
