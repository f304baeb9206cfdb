//! # Core Module
//!
//! Shared settings types used by the bootstrap, the display and applications.

pub mod config;

pub use config::{ApplicationConfig, ContextVersion, DisplayConfig, LoggingConfig};
pub use crate::config::{Config, ConfigError};
