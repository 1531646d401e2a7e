//! FILENAME: theme/src/lib.rs
//! PURPOSE: Main library entry point for the presentation theme crate.
//! CONTEXT: Re-exports the token registry and color utilities used by the
//! conditional formatting engine when it turns rule matches into renderable
//! attributes.

pub mod color;
pub mod error;
pub mod tokens;

// Re-export commonly used types at the crate root
pub use color::{add_alpha, rgb_to_rgba};
pub use error::ThemeError;
pub use tokens::{default_theme, Icon, Style, Theme};
