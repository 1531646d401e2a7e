//! FILENAME: formatter-engine/src/lib.rs
//! PURPOSE: Main library entry point for the conditional formatting engine.
//! CONTEXT: Turns user-authored formatting rules plus a dataset into pure
//! per-rule evaluator bundles the table renderer queries per cell value.
//! The computation is synchronous, side-effect-free, and memoized through a
//! caller-owned cache.

pub mod cache;
pub mod formatter;
pub mod opacity;
pub mod rule;
pub mod value;

// Re-export commonly used types at the crate root
pub use cache::FormatterCache;
pub use formatter::{build_color_formatters, ColorFormatter, MatchBounds};
pub use opacity::{get_opacity, round_to, MAX_OPACITY, MIN_OPACITY_BOUNDED, MIN_OPACITY_UNBOUNDED};
pub use rule::{Comparator, FormattingRule, RadioFormat, RadioSide};
pub use value::{column_values, CellValue, DataRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_formatters_for_active_rules() {
        let rule = FormattingRule {
            column: Some("sales".to_string()),
            comparator: Some(Comparator::None),
            color_scheme: Some("#ACE1AF".to_string()),
            ..Default::default()
        };
        let mut row = DataRecord::new();
        row.insert("sales".to_string(), CellValue::Number(3.0));

        let formatters = build_color_formatters(&[rule], &[row], true);
        assert_eq!(formatters.len(), 1);
        assert_eq!(formatters[0].column(), Some("sales"));
        assert!(formatters[0].color(3.0).is_some());
    }

    #[test]
    fn it_drops_incomplete_rules() {
        let rule = FormattingRule {
            column: Some("sales".to_string()),
            comparator: Some(Comparator::GreaterThan),
            color_scheme: Some("#ACE1AF".to_string()),
            ..Default::default()
        };
        assert!(build_color_formatters(&[rule], &[], true).is_empty());
    }
}
