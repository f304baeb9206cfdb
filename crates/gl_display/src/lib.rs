//! # GL Display
//!
//! Window and OpenGL context bootstrap on top of GLFW.
//!
//! ## Features
//!
//! - **Explicit bootstrap**: the windowing library is started once per [`Bootstrap`]
//! - **Core profile contexts**: forward-compatible OpenGL contexts, 4.2 by default
//! - **Function loading**: GL entry points resolved through the current context
//! - **Scoped release**: windows are destroyed when their [`Display`] goes out of scope
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_display::prelude::*;
//!
//! fn main() -> Result<(), DisplayError> {
//!     let mut bootstrap = Bootstrap::new();
//!     let mut display = Display::new(&mut bootstrap, 800, 600, "Hello")?;
//!     display.load_gl()?;
//!
//!     while !display.should_close() {
//!         display.swap_buffers();
//!     }
//!
//!     display.terminate();
//!     bootstrap.shutdown()
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod platform;

mod bootstrap;
mod display;
mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use bootstrap::Bootstrap;
pub use display::{Display, DisplayEvent};
pub use error::{DisplayError, DisplayResult};
pub use loader::GlInfo;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        Bootstrap,
        Display, DisplayEvent,
        DisplayError, DisplayResult,
        GlInfo,
        config::{Config, ConfigError},
        core::config::{ApplicationConfig, ContextVersion, DisplayConfig, LoggingConfig},
        foundation::time::FrameClock,
    };
}
