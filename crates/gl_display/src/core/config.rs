//! # Display Configuration
//!
//! Settings types for the window, the requested OpenGL context and logging.
//! Every section has serde defaults so a config file only needs the keys it
//! wants to change.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Config;

/// Requested OpenGL context version
///
/// Contexts are always requested as core profile and forward-compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextVersion {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
}

impl ContextVersion {
    /// OpenGL 4.2, the version requested when none is configured
    pub const DEFAULT: Self = Self::new(4, 2);

    /// Create a context version
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Validate the version
    ///
    /// Core profiles only exist from OpenGL 3.2 onwards.
    pub fn validate(&self) -> Result<(), String> {
        if (self.major, self.minor) < (3, 2) {
            return Err(format!("OpenGL {self} has no core profile, 3.2 or newer is required"));
        }
        Ok(())
    }
}

impl Default for ContextVersion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ContextVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// # Display Configuration
///
/// Parameters for a single window and its OpenGL context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Requested context version
    pub context: ContextVersion,
    /// Buffer swap interval, `None` leaves the driver default
    pub swap_interval: Option<u32>,
    /// Whether the window can be resized by the user
    pub resizable: bool,
    /// Whether the window is shown on creation
    pub visible: bool,
}

impl DisplayConfig {
    /// Create a new display configuration
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            context: ContextVersion::DEFAULT,
            swap_interval: None,
            resizable: true,
            visible: true,
        }
    }

    /// Set the requested context version
    pub fn with_context_version(mut self, major: u32, minor: u32) -> Self {
        self.context = ContextVersion::new(major, minor);
        self
    }

    /// Set the swap interval (1 = vsync)
    pub fn with_swap_interval(mut self, interval: u32) -> Self {
        self.swap_interval = Some(interval);
        self
    }

    /// Set whether the window is resizable
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set whether the window starts visible
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Window size must be positive, got {}x{}",
                self.width, self.height
            ));
        }

        // GLFW takes c_int sizes
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(format!("Window size {}x{} is out of range", self.width, self.height));
        }

        self.context.validate()
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(1280, 720, "GL Display")
    }
}

/// # Logging Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level (`error`, `warn`, `info`, `debug`, `trace`, `off`)
    ///
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
}

impl LoggingConfig {
    /// Set log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Parse the configured level, falling back to `Info`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration read by applications from `display.toml` or `.ron`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Window and context settings
    pub display: DisplayConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        self.display.validate()
    }
}

impl Config for ApplicationConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_default_requests_gl_4_2() {
        let config = DisplayConfig::default();
        assert_eq!(config.context, ContextVersion::new(4, 2));
        assert_eq!(config.context.to_string(), "4.2");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(DisplayConfig::new(0, 600, "x").validate().is_err());
        assert!(DisplayConfig::new(800, 0, "x").validate().is_err());
    }

    #[test]
    fn test_oversized_window_rejected() {
        assert!(DisplayConfig::new(u32::MAX, 600, "x").validate().is_err());
    }

    #[test]
    fn test_core_profile_version_floor() {
        assert!(ContextVersion::new(3, 1).validate().is_err());
        assert!(ContextVersion::new(2, 1).validate().is_err());
        assert!(ContextVersion::new(3, 2).validate().is_ok());
        assert!(ContextVersion::new(4, 6).validate().is_ok());
    }

    #[test]
    fn test_partial_toml_takes_defaults() {
        let text = r#"
            [display]
            title = "Partial"
            context = { major = 3, minor = 3 }
        "#;

        let config = ApplicationConfig::from_str_as(text, ConfigFormat::Toml).unwrap();

        assert_eq!(config.display.title, "Partial");
        assert_eq!(config.display.context, ContextVersion::new(3, 3));
        assert_eq!(config.display.width, 1280);
        assert_eq!(config.display.height, 720);
        assert_eq!(config.display.swap_interval, None);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ApplicationConfig {
            display: DisplayConfig::new(640, 480, "Round trip")
                .with_context_version(4, 1)
                .with_swap_interval(1)
                .with_resizable(false),
            logging: LoggingConfig::default().with_level("debug"),
        };

        let text = config.to_string_as(ConfigFormat::Toml).unwrap();
        let parsed = ApplicationConfig::from_str_as(&text, ConfigFormat::Toml).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_level_filter_fallback() {
        assert_eq!(LoggingConfig::default().with_level("debug").level_filter(), log::LevelFilter::Debug);
        assert_eq!(LoggingConfig::default().with_level("loud").level_filter(), log::LevelFilter::Info);
    }
}
