//! Cross-module tests driving the bootstrap and displays together
//!
//! Everything runs against the mock platform, no display server needed.
