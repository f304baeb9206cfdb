//! Display error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while bringing up or tearing down a display
#[derive(Error, Debug)]
pub enum DisplayError {
    /// The windowing library could not be initialized
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// The native window or its context could not be created
    #[error("Window creation failed ({width}x{height} \"{title}\")")]
    CreationFailed {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
        /// Requested title
        title: String,
    },

    /// One or more OpenGL entry points could not be resolved
    #[error("OpenGL function loading failed, missing: {}", missing.join(", "))]
    GlLoadFailed {
        /// Names of the entry points that resolved to null
        missing: Vec<String>,
    },

    /// Display parameters rejected before reaching the windowing library
    #[error("Invalid display configuration: {0}")]
    InvalidConfig(String),

    /// The windowing library cannot shut down while windows are alive
    #[error("Cannot shut down the windowing library, {0} window(s) still open")]
    WindowsStillOpen(usize),

    /// Configuration file error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for display operations
pub type DisplayResult<T> = Result<T, DisplayError>;
