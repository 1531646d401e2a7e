//! FILENAME: formatter-engine/src/formatter.rs
//! PURPOSE: Per-rule evaluator bundle and the aggregation entry point.
//! CONTEXT: Every visual attribute (color, style, icon, ...) shares one
//! match pipeline: check the rule is active, run its comparator against the
//! value, then project the attribute out of the rule. The pipeline lives
//! here once; the attribute accessors are thin projections over it.

use log::debug;
use theme::{add_alpha, default_theme, Icon, Style};

use crate::opacity::{get_opacity, MAX_OPACITY, MIN_OPACITY_BOUNDED, MIN_OPACITY_UNBOUNDED};
use crate::rule::{Comparator, FormattingRule, RadioFormat, RadioSide};
use crate::value::{column_values, DataRecord};

/// Where a matched value sits inside its comparator's range.
///
/// `cutoff` is the faint end of the opacity ramp, `extreme` the opaque end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchBounds {
    pub cutoff: f64,
    pub extreme: f64,
}

/// Run a rule's comparator against one value.
///
/// `min_value`/`max_value` are the extremes of the rule's column value set.
/// Returns None when the value does not match or the comparator's
/// thresholds are missing.
fn match_bounds(
    rule: &FormattingRule,
    value: f64,
    min_value: f64,
    max_value: f64,
) -> Option<MatchBounds> {
    let bounds = |cutoff: f64, extreme: f64| MatchBounds { cutoff, extreme };
    match rule.comparator? {
        Comparator::None => {
            if value >= min_value && value <= max_value {
                Some(bounds(min_value, max_value))
            } else {
                None
            }
        }
        Comparator::GreaterThan => {
            let target = rule.target_value?;
            (value > target).then(|| bounds(target, max_value))
        }
        Comparator::LessThan => {
            let target = rule.target_value?;
            (value < target).then(|| bounds(target, min_value))
        }
        Comparator::GreaterOrEqual => {
            let target = rule.target_value?;
            (value >= target).then(|| bounds(target, max_value))
        }
        Comparator::LessOrEqual => {
            let target = rule.target_value?;
            (value <= target).then(|| bounds(target, min_value))
        }
        Comparator::Equal => {
            let target = rule.target_value?;
            (value == target).then(|| bounds(target, target))
        }
        Comparator::NotEqual => {
            let target = rule.target_value?;
            if value == target {
                return None;
            }
            // Extreme is whichever end of the value set lies farther from
            // the target. On a tie max wins: the min side must be strictly
            // farther to be chosen.
            let extreme = if (target - min_value).abs() > (max_value - target).abs() {
                min_value
            } else {
                max_value
            };
            Some(bounds(target, extreme))
        }
        Comparator::Between => {
            let (left, right) = (rule.target_value_left?, rule.target_value_right?);
            (value > left && value < right).then(|| bounds(left, right))
        }
        Comparator::BetweenOrEqual => {
            let (left, right) = (rule.target_value_left?, rule.target_value_right?);
            (value >= left && value <= right).then(|| bounds(left, right))
        }
        Comparator::BetweenOrLeftEqual => {
            let (left, right) = (rule.target_value_left?, rule.target_value_right?);
            (value >= left && value < right).then(|| bounds(left, right))
        }
        Comparator::BetweenOrRightEqual => {
            let (left, right) = (rule.target_value_left?, rule.target_value_right?);
            (value > left && value <= right).then(|| bounds(left, right))
        }
    }
}

/// Evaluator bundle for one rule against one column's value set.
///
/// All accessors are pure: the bundle captures the rule and the column
/// extremes at build time and never mutates. A non-matching value (or an
/// inactive rule) answers None from every accessor, which the renderer
/// treats as "apply no formatting".
#[derive(Debug, Clone, PartialEq)]
pub struct ColorFormatter {
    rule: FormattingRule,
    min_value: f64,
    max_value: f64,
    alpha: bool,
}

impl ColorFormatter {
    /// Build the bundle from a rule and its column's numeric value set.
    ///
    /// An empty value set leaves the extremes at +inf/-inf, so the `None`
    /// comparator matches nothing and threshold comparators fall back to
    /// their target-side bound.
    pub fn new(rule: FormattingRule, values: &[f64], alpha: bool) -> Self {
        let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        ColorFormatter {
            rule,
            min_value,
            max_value,
            alpha,
        }
    }

    /// The rule's target column, if set.
    pub fn column(&self) -> Option<&str> {
        self.rule.column.as_deref()
    }

    pub fn rule(&self) -> &FormattingRule {
        &self.rule
    }

    /// Comparator match gated on rule activation.
    fn bounds_for(&self, value: f64) -> Option<MatchBounds> {
        if !self.rule.is_active() {
            return None;
        }
        match_bounds(&self.rule, value, self.min_value, self.max_value)
    }

    /// Opacity floor for this rule's comparator: the unbounded `None`
    /// comparator starts fully transparent, everything else keeps a small
    /// visible floor.
    fn min_opacity(&self) -> f64 {
        match self.rule.comparator {
            Some(Comparator::None) => MIN_OPACITY_UNBOUNDED,
            _ => MIN_OPACITY_BOUNDED,
        }
    }

    /// Evaluate the match once, then project an attribute out of the rule.
    ///
    /// The non-color attributes additionally require the rule to carry both
    /// a color and a style scheme, matching what the rule editor always
    /// saves; partially filled rules stay silent.
    fn project<T>(&self, value: f64, field: impl FnOnce(&FormattingRule) -> T) -> Option<T> {
        self.rule.color_scheme.as_ref()?;
        self.rule.style_scheme.as_ref()?;
        self.bounds_for(value)?;
        Some(field(&self.rule))
    }

    /// Matched color for a value: the rule's color scheme, alpha-blended
    /// with the interpolated opacity unless flat colors were requested.
    pub fn color(&self, value: f64) -> Option<String> {
        let scheme = self.rule.color_scheme.as_ref()?;
        let bounds = self.bounds_for(value)?;
        if !self.alpha {
            return Some(scheme.clone());
        }
        let opacity = get_opacity(
            value,
            bounds.cutoff,
            bounds.extreme,
            self.min_opacity(),
            MAX_OPACITY,
        );
        // get_opacity clamps into [0, 1], so the blend cannot be rejected
        add_alpha(scheme, opacity).ok()
    }

    /// Matched style token resolved against the theme.
    pub fn style(&self, value: f64) -> Option<Style> {
        self.rule.color_scheme.as_ref()?;
        let scheme = self.rule.style_scheme.as_ref()?;
        let bounds = self.bounds_for(value)?;
        let opacity = get_opacity(
            value,
            bounds.cutoff,
            bounds.extreme,
            MIN_OPACITY_BOUNDED,
            MAX_OPACITY,
        );
        default_theme().style(scheme, opacity).ok().flatten().cloned()
    }

    pub fn on_style(&self, value: f64) -> Option<bool> {
        self.project(value, |rule| rule.on_style)
    }

    pub fn on_icon(&self, value: f64) -> Option<bool> {
        self.project(value, |rule| rule.on_icon)
    }

    /// Matched icon token resolved against the theme.
    pub fn icon(&self, value: f64) -> Option<Icon> {
        self.project(value, |rule| rule.icon_scheme.clone())
            .flatten()
            .and_then(|name| default_theme().icon(&name).cloned())
    }

    pub fn radio_format(&self, value: f64) -> Option<RadioFormat> {
        self.project(value, |rule| rule.radio_format).flatten()
    }

    pub fn radio_side(&self, value: f64) -> Option<RadioSide> {
        self.project(value, |rule| rule.radio_side).flatten()
    }

    /// Columns that should display the NaN fallback when this rule matches.
    pub fn nan_columns(&self, value: f64) -> Option<Vec<String>> {
        self.project(value, |rule| rule.column_nan.clone())
    }

    pub fn show_value(&self, value: f64) -> Option<bool> {
        self.project(value, |rule| rule.show_value)
    }
}

/// Build evaluator bundles for every active rule, in rule order.
///
/// Inactive rules (missing column or thresholds) are dropped, not errored:
/// the rule editor allows saving half-finished rules and they simply do
/// nothing until completed.
pub fn build_color_formatters(
    rules: &[FormattingRule],
    data: &[DataRecord],
    alpha: bool,
) -> Vec<ColorFormatter> {
    rules
        .iter()
        .filter_map(|rule| {
            if !rule.is_active() {
                debug!("skipping inactive formatting rule for column {:?}", rule.column);
                return None;
            }
            let column = rule.column.as_deref()?;
            let values = column_values(data, column);
            Some(ColorFormatter::new(rule.clone(), &values, alpha))
        })
        .collect()
}
