//! FILENAME: formatter-engine/src/opacity.rs
//! PURPOSE: Opacity interpolation between a comparator's cutoff and extreme.
//! CONTEXT: A matched value's opacity grows linearly from the cutoff (where
//! formatting is faintest) to the extreme (fully opaque). Bounded
//! comparators keep a small floor so a match at the cutoff stays visible;
//! the unbounded "None" comparator starts fully transparent at the column
//! minimum.

/// Opacity floor for comparators with an explicit threshold.
pub const MIN_OPACITY_BOUNDED: f64 = 0.05;
/// Opacity floor for the unbounded `None` comparator.
pub const MIN_OPACITY_UNBOUNDED: f64 = 0.0;
/// Opacity at the extreme, for every comparator.
pub const MAX_OPACITY: f64 = 1.0;

/// Round half away from zero at the given decimal precision.
///
/// The value is shifted by a decimal exponent in its string form, rounded,
/// and shifted back. Shifting through the string representation avoids the
/// float drift of `value * 10^precision` at halfway points, so
/// `round_to(0.125, 2)` is `0.13` and not `0.12`.
pub fn round_to(num: f64, precision: u32) -> f64 {
    let shifted: f64 = match format!("{}e{}", num, precision).parse() {
        Ok(v) => v,
        Err(_) => return f64::NAN,
    };
    match format!("{}e-{}", shifted.round(), precision).parse() {
        Ok(v) => v,
        Err(_) => f64::NAN,
    }
}

/// Interpolate the opacity for `value` between `cutoff` and `extreme`.
///
/// Returns `max_opacity` for a degenerate range (cutoff == extreme, e.g.
/// the Equal comparator). Otherwise the distance from the cutoff is scaled
/// onto `[min_opacity, max_opacity]`, rounded to two decimals, and clamped
/// to `max_opacity`.
pub fn get_opacity(
    value: f64,
    cutoff: f64,
    extreme: f64,
    min_opacity: f64,
    max_opacity: f64,
) -> f64 {
    if extreme == cutoff {
        return max_opacity;
    }
    let scaled = ((max_opacity - min_opacity) / (extreme - cutoff)) * (value - cutoff);
    max_opacity.min(round_to(scaled.abs() + min_opacity, 2))
}
