//! FILENAME: formatter-engine/src/rule.rs
//! PURPOSE: User-authored conditional formatting rule model.
//! CONTEXT: Rules are authored in a popover form, persisted as part of the
//! chart configuration JSON, and handed to the engine verbatim. The
//! serialized shape therefore mirrors the form field names (camelCase) and
//! the comparator dropdown values (the display symbols).

use serde::{Deserialize, Serialize};

/// Match predicate kind of a rule.
///
/// Serialized as the symbol shown in the rule editor dropdown, which is
/// what ends up in saved chart configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = "None")]
    None,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "≥")]
    GreaterOrEqual,
    #[serde(rename = "≤")]
    LessOrEqual,
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "≠")]
    NotEqual,
    #[serde(rename = "< x <")]
    Between,
    #[serde(rename = "≤ x ≤")]
    BetweenOrEqual,
    #[serde(rename = "≤ x <")]
    BetweenOrLeftEqual,
    #[serde(rename = "< x ≤")]
    BetweenOrRightEqual,
}

impl Comparator {
    /// Range comparators take a left and a right bound instead of a single
    /// target value.
    pub fn is_range(self) -> bool {
        matches!(
            self,
            Comparator::Between
                | Comparator::BetweenOrEqual
                | Comparator::BetweenOrLeftEqual
                | Comparator::BetweenOrRightEqual
        )
    }
}

/// Whether the radio decoration renders as a color chip or a styled label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RadioFormat {
    Color,
    Style,
}

/// Which side of the cell value the radio decoration sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RadioSide {
    Left,
    Right,
}

/// One conditional formatter as authored in the rule editor.
///
/// Every field is optional from the form's point of view; a rule missing
/// something its comparator needs is simply inactive (see `is_active`),
/// never an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingRule {
    /// Target column identifier. Required for the rule to activate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<Comparator>,
    /// Threshold for single-value comparators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<f64>,
    /// Bounds for range comparators. Left must come with right.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value_right: Option<f64>,
    /// Match color as `#RRGGBB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,
    /// Style token name resolved against the theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_scheme: Option<String>,
    #[serde(default)]
    pub on_style: bool,
    #[serde(default)]
    pub on_icon: bool,
    /// Icon token name resolved against the theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_format: Option<RadioFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_side: Option<RadioSide>,
    #[serde(default)]
    pub show_value: bool,
    /// Columns whose cell gets the NaN fallback treatment on match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_nan: Vec<String>,
}

impl FormattingRule {
    /// A rule participates in evaluation only when its column is set and
    /// every threshold its comparator requires is present. The `None`
    /// comparator needs no thresholds.
    pub fn is_active(&self) -> bool {
        if self.column.is_none() {
            return false;
        }
        match self.comparator {
            None => false,
            Some(Comparator::None) => true,
            Some(c) if c.is_range() => {
                self.target_value_left.is_some() && self.target_value_right.is_some()
            }
            Some(_) => self.target_value.is_some(),
        }
    }
}
