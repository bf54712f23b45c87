//! Structured errors for the tracking transform.

use core::fmt;

/// Failure to make a typeface variant's glyph data available.
///
/// This is the only genuine error in the core. Scope exclusions (shared named
/// styles, unknown families) are classification outcomes, never errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontLoadError {
    /// Stable machine-readable code.
    pub code: &'static str,
    /// Family that failed to load.
    pub family: Box<str>,
    /// Human-readable message.
    pub message: Box<str>,
}

impl FontLoadError {
    /// Error for a family the host cannot provide at all.
    pub fn unavailable(family: impl Into<String>) -> Self {
        let family = family.into();
        let message = format!("font family \"{}\" is not available", family);
        Self {
            code: "FONT_UNAVAILABLE",
            family: family.into_boxed_str(),
            message: message.into_boxed_str(),
        }
    }

    /// Error with an explicit code and message.
    pub fn new(code: &'static str, family: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            family: family.into().into_boxed_str(),
            message: message.into().into_boxed_str(),
        }
    }
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [family={}]", self.code, self.message, self.family)
    }
}

impl std::error::Error for FontLoadError {}
