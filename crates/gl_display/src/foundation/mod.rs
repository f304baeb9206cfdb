//! Foundation utilities shared by the library and applications

pub mod logging;
pub mod time;
