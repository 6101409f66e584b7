//! Error types for umbra-core.
//!
//! The color math is total and never fails. Errors only come from turning
//! user-supplied text into colors, e.g. `#3366cc` or `0.2,0.4,0.6`.
//!
//! ```rust
//! use umbra_core::{Error, Rgb};
//!
//! let err = "#12".parse::<Rgb>().unwrap_err();
//! assert!(matches!(err, Error::InvalidColor { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by umbra-core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Text could not be interpreted as a color.
    #[error("invalid color '{input}': {reason}")]
    InvalidColor {
        /// The rejected input, as given.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl Error {
    /// Convenience constructor for [`Error::InvalidColor`].
    pub fn invalid_color(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
