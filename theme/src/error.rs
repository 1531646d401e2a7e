//! FILENAME: theme/src/error.rs
//! PURPOSE: Error type for theme lookups.

use thiserror::Error;

/// Contract violation raised by opacity-taking helpers.
///
/// Malformed formatting rules never reach this error: the engine silently
/// skips them. An out-of-range opacity means the caller computed a bad
/// value, which is a bug on their side.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    #[error("the opacity should between 0 and 1, but got: {0}")]
    OpacityOutOfRange(f64),
}
