//! OpenGL function loading
//!
//! Entry points are resolved at runtime through the current context and
//! stored in the `gl` crate's function table. The table is process-wide.

#![allow(unsafe_code)]

use std::ffi::CStr;

use crate::core::config::ContextVersion;
use crate::error::{DisplayError, DisplayResult};
use crate::platform::ProcAddress;

/// Entry points that must resolve for loading to count as successful
pub const REQUIRED_ENTRY_POINTS: [&str; 6] = [
    "glGetString",
    "glGetIntegerv",
    "glGetError",
    "glViewport",
    "glClear",
    "glClearColor",
];

/// Driver strings reported by a freshly loaded context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlInfo {
    /// `GL_VERSION`
    pub version: String,
    /// `GL_RENDERER`
    pub renderer: String,
    /// `GL_VENDOR`
    pub vendor: String,
    /// `GL_SHADING_LANGUAGE_VERSION`
    pub shading_language: String,
}

impl GlInfo {
    /// Major and minor version parsed from the `GL_VERSION` string
    ///
    /// Accepts both desktop (`"4.6.0 NVIDIA 535.54"`) and ES style
    /// (`"OpenGL ES 3.2 Mesa"`) strings.
    pub fn version_numbers(&self) -> Option<(u32, u32)> {
        let numeric = self
            .version
            .split_whitespace()
            .find(|part| part.starts_with(|c: char| c.is_ascii_digit()))?;

        let mut parts = numeric.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts
            .next()?
            .chars()
            .take_while(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .ok()?;

        Some((major, minor))
    }

    /// Whether the reported version is older than `requested`
    ///
    /// An unparseable version string is not considered older.
    pub fn is_older_than(&self, requested: ContextVersion) -> bool {
        self.version_numbers()
            .is_some_and(|actual| actual < (requested.major, requested.minor))
    }
}

/// Load OpenGL entry points through `resolve`
///
/// Every name in [`REQUIRED_ENTRY_POINTS`] is checked first. If any of them
/// resolves to null the function table is left untouched.
///
/// `resolve` must look symbols up in a context that is current on the calling
/// thread. [`crate::Display::load_gl`] takes care of that.
pub fn load_functions<F>(mut resolve: F) -> DisplayResult<()>
where
    F: FnMut(&str) -> ProcAddress,
{
    let mut missing = Vec::new();
    for symbol in REQUIRED_ENTRY_POINTS {
        if resolve(symbol).is_null() {
            missing.push(symbol.to_string());
        }
    }

    if !missing.is_empty() {
        let error = DisplayError::GlLoadFailed { missing };
        log::error!("{error}");
        return Err(error);
    }

    gl::load_with(|symbol| resolve(symbol));
    log::debug!("OpenGL function table loaded");
    Ok(())
}

/// Read the driver strings of the current context
///
/// Only valid after [`load_functions`] succeeded for the current context.
pub(crate) fn query_info() -> GlInfo {
    GlInfo {
        version: get_string(gl::VERSION),
        renderer: get_string(gl::RENDERER),
        vendor: get_string(gl::VENDOR),
        shading_language: get_string(gl::SHADING_LANGUAGE_VERSION),
    }
}

fn get_string(name: gl::types::GLenum) -> String {
    // SAFETY: glGetString was resolved by load_functions and a context is current
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return "unknown".to_string();
    }

    // SAFETY: non-null glGetString results are static NUL-terminated strings
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::c_void;

    extern "system" fn never_called() {}

    fn info(version: &str) -> GlInfo {
        GlInfo {
            version: version.to_string(),
            renderer: String::new(),
            vendor: String::new(),
            shading_language: String::new(),
        }
    }

    #[test]
    fn test_missing_entry_points_are_reported() {
        let result = load_functions(|symbol| {
            if symbol == "glClear" || symbol == "glViewport" {
                std::ptr::null()
            } else {
                never_called as *const c_void
            }
        });

        match result {
            Err(DisplayError::GlLoadFailed { missing }) => {
                assert_eq!(missing, vec!["glViewport".to_string(), "glClear".to_string()]);
            }
            other => panic!("expected GlLoadFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_all_missing_without_context() {
        let result = load_functions(|_| std::ptr::null());
        match result {
            Err(DisplayError::GlLoadFailed { missing }) => {
                assert_eq!(missing.len(), REQUIRED_ENTRY_POINTS.len());
            }
            other => panic!("expected GlLoadFailed, got {other:?}"),
        }
    }

    // Leaves every entry of the process-wide table pointing at `never_called`.
    // No test in this binary may reach query_info() or any other GL call.
    #[test]
    fn test_successful_load_fills_function_table() {
        let mut lookups = 0;
        load_functions(|_| {
            lookups += 1;
            never_called as *const c_void
        })
        .unwrap();

        assert!(lookups > REQUIRED_ENTRY_POINTS.len());
        assert!(gl::Viewport::is_loaded());
        assert!(gl::ClearColor::is_loaded());
    }

    #[test]
    fn test_version_numbers() {
        assert_eq!(info("4.6.0 NVIDIA 535.54.03").version_numbers(), Some((4, 6)));
        assert_eq!(info("4.2 (Core Profile) Mesa 23.1").version_numbers(), Some((4, 2)));
        assert_eq!(info("OpenGL ES 3.2 Mesa 23.1").version_numbers(), Some((3, 2)));
        assert_eq!(info("3.3.0-build.7").version_numbers(), Some((3, 3)));
        assert_eq!(info("unknown").version_numbers(), None);
    }

    #[test]
    fn test_older_than_requested() {
        let requested = ContextVersion::new(4, 2);
        assert!(info("3.3.0 Mesa 23.1").is_older_than(requested));
        assert!(info("4.1 Metal - 83.1").is_older_than(requested));
        assert!(!info("4.2.0 NVIDIA 535.54.03").is_older_than(requested));
        assert!(!info("4.6 (Core Profile) Mesa 23.1").is_older_than(requested));
        assert!(!info("unknown").is_older_than(requested));
    }
}
