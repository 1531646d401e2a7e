//! FILENAME: formatter-engine/src/cache.rs
//! PURPOSE: Caller-owned single-slot cache for formatter bundles.
//! CONTEXT: Rebuilding the bundles on every render would rescan the dataset
//! per rule, so each chart instance keeps one of these next to its state.
//! The cache is keyed on reference identity (Arc pointers), not content:
//! callers signal a data change by supplying new Arcs, the same contract as
//! last-call memoization in the rendering layer. Owning the cache at the
//! call site keeps independent charts from clobbering each other.

use std::sync::Arc;

use log::trace;

use crate::formatter::{build_color_formatters, ColorFormatter};
use crate::rule::FormattingRule;
use crate::value::DataRecord;

struct CacheSlot {
    rules: Arc<Vec<FormattingRule>>,
    data: Arc<Vec<DataRecord>>,
    alpha: bool,
    formatters: Arc<Vec<ColorFormatter>>,
}

/// Single-slot memoization of the last `color_formatters` call.
#[derive(Default)]
pub struct FormatterCache {
    slot: Option<CacheSlot>,
}

impl FormatterCache {
    pub fn new() -> Self {
        FormatterCache { slot: None }
    }

    /// Formatter bundles for the given rules and dataset.
    ///
    /// Returns the cached result (same Arc) when both input Arcs and the
    /// alpha flag are identical to the previous call; otherwise recomputes
    /// and replaces the slot. Equal content behind a fresh Arc still
    /// recomputes — identity is the key.
    pub fn color_formatters(
        &mut self,
        rules: &Arc<Vec<FormattingRule>>,
        data: &Arc<Vec<DataRecord>>,
        alpha: bool,
    ) -> Arc<Vec<ColorFormatter>> {
        if let Some(slot) = &self.slot {
            if Arc::ptr_eq(&slot.rules, rules)
                && Arc::ptr_eq(&slot.data, data)
                && slot.alpha == alpha
            {
                trace!("formatter cache hit ({} bundles)", slot.formatters.len());
                return Arc::clone(&slot.formatters);
            }
        }
        let formatters = Arc::new(build_color_formatters(rules, data, alpha));
        self.slot = Some(CacheSlot {
            rules: Arc::clone(rules),
            data: Arc::clone(data),
            alpha,
            formatters: Arc::clone(&formatters),
        });
        formatters
    }

    /// Drop the cached slot, forcing the next call to recompute.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Comparator;
    use crate::value::CellValue;

    fn active_rule() -> FormattingRule {
        FormattingRule {
            column: Some("sales".to_string()),
            comparator: Some(Comparator::GreaterThan),
            target_value: Some(5.0),
            color_scheme: Some("#FF0000".to_string()),
            style_scheme: Some("style1".to_string()),
            ..Default::default()
        }
    }

    fn dataset() -> Vec<DataRecord> {
        [1.0, 5.0, 10.0]
            .iter()
            .map(|n| {
                let mut row = DataRecord::new();
                row.insert("sales".to_string(), CellValue::Number(*n));
                row
            })
            .collect()
    }

    #[test]
    fn test_identical_references_hit_the_cache() {
        let rules = Arc::new(vec![active_rule()]);
        let data = Arc::new(dataset());
        let mut cache = FormatterCache::new();

        let first = cache.color_formatters(&rules, &data, true);
        let second = cache.color_formatters(&rules, &data, true);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_new_rule_list_recomputes() {
        let rules = Arc::new(vec![active_rule()]);
        let data = Arc::new(dataset());
        let mut cache = FormatterCache::new();

        let first = cache.color_formatters(&rules, &data, true);
        // Same content, fresh Arc: identity changed, so the cache misses
        let cloned_rules = Arc::new((*rules).clone());
        let second = cache.color_formatters(&cloned_rules, &data, true);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn test_alpha_flag_is_part_of_the_key() {
        let rules = Arc::new(vec![active_rule()]);
        let data = Arc::new(dataset());
        let mut cache = FormatterCache::new();

        let blended = cache.color_formatters(&rules, &data, true);
        let flat = cache.color_formatters(&rules, &data, false);
        assert!(!Arc::ptr_eq(&blended, &flat));
        assert_eq!(blended[0].color(10.0).unwrap(), "#FF0000FF");
        assert_eq!(flat[0].color(10.0).unwrap(), "#FF0000");
    }

    #[test]
    fn test_single_slot_forgets_older_inputs() {
        let rules_a = Arc::new(vec![active_rule()]);
        let rules_b = Arc::new(vec![active_rule()]);
        let data = Arc::new(dataset());
        let mut cache = FormatterCache::new();

        let a1 = cache.color_formatters(&rules_a, &data, true);
        cache.color_formatters(&rules_b, &data, true);
        // rules_a was evicted by the rules_b call
        let a2 = cache.color_formatters(&rules_a, &data, true);
        assert!(!Arc::ptr_eq(&a1, &a2));
    }

    #[test]
    fn test_clear_forces_recompute() {
        let rules = Arc::new(vec![active_rule()]);
        let data = Arc::new(dataset());
        let mut cache = FormatterCache::new();

        let first = cache.color_formatters(&rules, &data, true);
        cache.clear();
        let second = cache.color_formatters(&rules, &data, true);
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
