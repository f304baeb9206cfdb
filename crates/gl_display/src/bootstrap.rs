//! Windowing library bootstrap
//!
//! [`Bootstrap`] owns the "already initialized" state of the windowing
//! library. The native init routine runs at most once while the bootstrap is
//! started, no matter how many displays are opened through it. A new
//! bootstrap starts from a clean state, which is what the tests rely on.

use std::cell::Cell;
use std::rc::Rc;

use crate::core::config::ContextVersion;
use crate::error::{DisplayError, DisplayResult};
use crate::platform::{GlfwSystem, NativeWindow, WindowSpec, WindowSystem};

/// Owner of the windowing library's process-level state
pub struct Bootstrap<S: WindowSystem = GlfwSystem> {
    system: S,
    context: Option<ContextVersion>,
    native_inits: u32,
    live_windows: Rc<Cell<usize>>,
}

impl Bootstrap<GlfwSystem> {
    /// Create a bootstrap over GLFW
    pub fn new() -> Self {
        Self::with_system(GlfwSystem::new())
    }
}

impl Default for Bootstrap<GlfwSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WindowSystem> Bootstrap<S> {
    /// Create a bootstrap over an arbitrary windowing system
    pub fn with_system(system: S) -> Self {
        Self {
            system,
            context: None,
            native_inits: 0,
            live_windows: Rc::new(Cell::new(0)),
        }
    }

    /// Initialize the windowing library and request an OpenGL context version
    ///
    /// The first call initializes the library and sets the core-profile,
    /// forward-compatible context hints. Later calls return immediately. A
    /// failed initialization leaves the bootstrap unstarted, so the next call
    /// tries again.
    pub fn start(&mut self, version: ContextVersion) -> DisplayResult<()> {
        if let Some(active) = self.context {
            if active != version {
                log::warn!("Windowing library already started for OpenGL {active}, ignoring request for {version}");
            }
            return Ok(());
        }

        version.validate().map_err(DisplayError::InvalidConfig)?;

        if let Err(e) = self.system.init() {
            log::error!("{e}");
            return Err(e);
        }

        self.native_inits += 1;
        self.system.request_context(version);
        self.context = Some(version);

        log::info!("Windowing library started, requesting OpenGL {version} core profile");
        Ok(())
    }

    /// Whether the windowing library is currently initialized
    pub fn is_started(&self) -> bool {
        self.context.is_some()
    }

    /// Context version requested by the first successful [`Bootstrap::start`]
    pub fn context_version(&self) -> Option<ContextVersion> {
        self.context
    }

    /// How many times the native init routine has run
    pub fn native_init_count(&self) -> u32 {
        self.native_inits
    }

    /// Number of displays created through this bootstrap that are still alive
    pub fn live_windows(&self) -> usize {
        self.live_windows.get()
    }

    /// Terminate the windowing library
    ///
    /// Fails with [`DisplayError::WindowsStillOpen`] while any display created
    /// through this bootstrap is alive. Does nothing if the library is not started.
    pub fn shutdown(&mut self) -> DisplayResult<()> {
        if self.context.is_none() {
            return Ok(());
        }

        let live = self.live_windows.get();
        if live > 0 {
            return Err(DisplayError::WindowsStillOpen(live));
        }

        self.system.terminate();
        self.context = None;

        log::info!("Windowing library shut down");
        Ok(())
    }

    pub(crate) fn open_window(
        &mut self,
        spec: &WindowSpec<'_>,
    ) -> DisplayResult<(Box<dyn NativeWindow>, WindowToken)> {
        let window = self.system.create_window(spec).inspect_err(|e| log::error!("{e}"))?;
        Ok((window, WindowToken::new(&self.live_windows)))
    }
}

impl<S: WindowSystem> Drop for Bootstrap<S> {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            log::warn!("{e}, releasing the library handle anyway");
            self.system.terminate();
        }
    }
}

/// Keeps a bootstrap's live-window count up to date
pub(crate) struct WindowToken {
    live_windows: Rc<Cell<usize>>,
}

impl WindowToken {
    fn new(live_windows: &Rc<Cell<usize>>) -> Self {
        live_windows.set(live_windows.get() + 1);
        Self {
            live_windows: Rc::clone(live_windows),
        }
    }
}

impl Drop for WindowToken {
    fn drop(&mut self) {
        self.live_windows.set(self.live_windows.get().saturating_sub(1));
    }
}
