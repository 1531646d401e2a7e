//! FILENAME: theme/src/color.rs
//! PURPOSE: Color channel utilities for alpha blending.

use crate::error::ThemeError;

/// Append an alpha channel to a `#RRGGBB` color.
///
/// The alpha byte is the rounded `opacity * 255`, rendered as two uppercase
/// hex digits. Opacity outside `[0, 1]` is a contract violation.
pub fn add_alpha(color: &str, opacity: f64) -> Result<String, ThemeError> {
    if !(0.0..=1.0).contains(&opacity) {
        return Err(ThemeError::OpacityOutOfRange(opacity));
    }
    let alpha = (opacity * 255.0).round() as u8;
    Ok(format!("{}{:02X}", color, alpha))
}

/// Rewrite a CSS `rgb(...)` color into `rgba(...)` with the given alpha.
///
/// Only the first `rgb` occurrence and the first closing parenthesis are
/// rewritten; inputs that are not `rgb(...)` strings pass through with at
/// most the parenthesis edit applied.
pub fn rgb_to_rgba(rgb: &str, alpha: f64) -> String {
    let with_fn = match rgb.to_ascii_lowercase().find("rgb") {
        Some(pos) => {
            let mut s = String::with_capacity(rgb.len() + 8);
            s.push_str(&rgb[..pos]);
            s.push_str("rgba");
            s.push_str(&rgb[pos + 3..]);
            s
        }
        None => rgb.to_string(),
    };
    match with_fn.find(')') {
        Some(pos) => format!("{},{}{}", &with_fn[..pos], alpha, &with_fn[pos..]),
        None => with_fn,
    }
}
