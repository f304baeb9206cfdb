//! Logging setup

pub use log::{debug, error, info, trace, warn};

use crate::core::config::LoggingConfig;

/// Initialize the logging system
///
/// The configured level replaces the global level. Per-module directives
/// from `RUST_LOG` still apply. Calling this twice returns the logger error from the
/// second call.
pub fn init(config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_default_env()
        .filter_level(config.level_filter())
        .try_init()
}
