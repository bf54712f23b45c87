//! Async font-loading collaborator.

use std::collections::BTreeSet;

use crate::error::FontLoadError;

/// Makes a font family's glyph data available before it is applied.
///
/// This models the host's asynchronous, possibly failing font subsystem. The
/// traversal awaits every required load for an element before mutating any of
/// its runs, so a failure never leaves an element half written.
pub trait FontLoader {
    /// Load `family`, suspending until its glyph data is confirmed available.
    fn load(&self, family: &str) -> impl core::future::Future<Output = Result<(), FontLoadError>>;
}

/// Loader backed by an explicit set of available family names.
///
/// Loads succeed iff the family is in the set. Useful for tests and for hosts
/// that resolve availability up front.
#[derive(Clone, Debug, Default)]
pub struct PreloadedFonts {
    available: BTreeSet<String>,
}

impl PreloadedFonts {
    /// Loader over the given available families.
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: families.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark one more family as available.
    pub fn insert(&mut self, family: impl Into<String>) {
        self.available.insert(family.into());
    }
}

impl FontLoader for PreloadedFonts {
    async fn load(&self, family: &str) -> Result<(), FontLoadError> {
        if self.available.contains(family) {
            Ok(())
        } else {
            Err(FontLoadError::unavailable(family))
        }
    }
}
