//! Window + OpenGL context
//!
//! A [`Display`] owns one native window and its context. The window is
//! destroyed when the display is dropped or explicitly terminated. Shutting
//! the windowing library down is left to the [`Bootstrap`] that created it,
//! so several displays can share one library.

use crate::bootstrap::{Bootstrap, WindowToken};
use crate::core::config::{ContextVersion, DisplayConfig};
use crate::error::{DisplayError, DisplayResult};
use crate::loader::{self, GlInfo};
use crate::platform::{NativeWindow, WindowSpec, WindowSystem};

/// Window-level events delivered by the windowing library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    /// The user asked to close the window
    CloseRequested,

    /// Client area resized
    Resized {
        /// New width in screen coordinates
        width: u32,
        /// New height in screen coordinates
        height: u32,
    },

    /// Framebuffer resized
    FramebufferResized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },

    /// Input focus gained (`true`) or lost (`false`)
    Focused(bool),
}

/// A native window with a current OpenGL core-profile context
pub struct Display {
    window: Box<dyn NativeWindow>,
    title: String,
    context: ContextVersion,
    frames: u64,
    gl_info: Option<GlInfo>,
    _token: WindowToken,
}

impl Display {
    /// Open a window with the default OpenGL 4.2 core-profile context
    ///
    /// Starts the bootstrap if needed and makes the new context current on
    /// the calling thread.
    pub fn new<S: WindowSystem>(
        bootstrap: &mut Bootstrap<S>,
        width: u32,
        height: u32,
        title: &str,
    ) -> DisplayResult<Self> {
        Self::with_config(bootstrap, &DisplayConfig::new(width, height, title))
    }

    /// Open a window described by `config`
    pub fn with_config<S: WindowSystem>(
        bootstrap: &mut Bootstrap<S>,
        config: &DisplayConfig,
    ) -> DisplayResult<Self> {
        config.validate().map_err(DisplayError::InvalidConfig)?;
        bootstrap.start(config.context)?;

        let spec = WindowSpec {
            width: config.width,
            height: config.height,
            title: &config.title,
            resizable: config.resizable,
            visible: config.visible,
        };
        let (mut window, token) = bootstrap.open_window(&spec)?;

        window.make_current();
        if let Some(interval) = config.swap_interval {
            window.set_swap_interval(interval);
        }

        log::info!(
            "Created {}x{} window \"{}\"",
            config.width, config.height, config.title
        );

        Ok(Self {
            window,
            title: config.title.clone(),
            context: bootstrap.context_version().unwrap_or(config.context),
            frames: 0,
            gl_info: None,
            _token: token,
        })
    }

    /// Whether the platform has requested that the window close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Request or cancel window closure from the application
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Present the back buffer, then process pending window events
    ///
    /// Blocks for vertical sync when a swap interval is configured.
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
        self.window.poll_events();
        self.frames += 1;
    }

    /// Take the window events received during previous [`Display::swap_buffers`] calls
    pub fn drain_events(&mut self) -> Vec<DisplayEvent> {
        self.window.drain_events()
    }

    /// Load OpenGL functions through this display's context
    ///
    /// The context is made current first. On success the driver strings
    /// are cached and returned.
    pub fn load_gl(&mut self) -> DisplayResult<&GlInfo> {
        self.window.make_current();

        let window = &mut self.window;
        loader::load_functions(|symbol| window.get_proc_address(symbol))?;

        let info = loader::query_info();
        log::info!("OpenGL {} on {} ({})", info.version, info.renderer, info.vendor);
        log::debug!("GLSL {}", info.shading_language);
        if info.is_older_than(self.context) {
            log::warn!(
                "Driver reports OpenGL {}, older than the requested {}",
                info.version, self.context
            );
        }

        Ok(self.gl_info.insert(info))
    }

    /// Driver strings, once [`Display::load_gl`] has succeeded
    pub fn gl_info(&self) -> Option<&GlInfo> {
        self.gl_info.as_ref()
    }

    /// Client area size in screen coordinates
    pub fn size(&self) -> (u32, u32) {
        self.window.size()
    }

    /// Framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (u32, u32) {
        self.window.framebuffer_size()
    }

    /// Current window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Change the window title
    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
        self.title = title.to_string();
    }

    /// Context version the windowing library was started with
    pub fn context_version(&self) -> ContextVersion {
        self.context
    }

    /// Number of buffer swaps so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Destroy the window
    ///
    /// Same as dropping the display, spelled out for call sites that want the
    /// release to be visible.
    pub fn terminate(self) {
        log::info!("Terminating display \"{}\"", self.title);
    }

    #[cfg(test)]
    pub(crate) fn native(&self) -> &dyn NativeWindow {
        self.window.as_ref()
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        log::debug!("Destroying window \"{}\" after {} frames", self.title, self.frames);
    }
}
