//! FILENAME: theme/src/tokens.rs
//! PURPOSE: Style and icon token registry.
//! CONTEXT: The formatting rule editor stores tokens by name ("style1",
//! "arrowUp", ...). At render time the engine resolves those names against a
//! Theme to get the concrete presentation data. Unknown names resolve to
//! None so stale saved configurations degrade gracefully.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// A ready-made cell style referenced by formatting rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Token name used in saved configurations (e.g. "style4").
    pub name: String,
    /// CSS class the renderer attaches to the cell (e.g. "rm-st-4").
    pub class_name: String,
}

/// A glyph icon referenced by formatting rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    /// Token name used in saved configurations (e.g. "arrowUp").
    pub name: String,
    /// The glyph the renderer draws next to the cell value.
    pub glyph: String,
}

/// Named collections of the presentation tokens a chart may reference.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
    icons: HashMap<String, Icon>,
}

impl Theme {
    pub fn new() -> Self {
        Theme::default()
    }

    /// The theme shipped with the application: ten ready-made styles and
    /// the fixed icon set offered by the rule editor.
    pub fn builtin() -> Self {
        let mut theme = Theme::new();
        for i in 1..=10u32 {
            theme.insert_style(Style {
                name: format!("style{}", i),
                class_name: format!("rm-st-{}", i),
            });
        }
        for (name, glyph) in [
            ("arrowUp", "\u{25B2}"),
            ("arrowDown", "\u{25BC}"),
            ("check", "\u{2713}"),
            ("cross", "\u{2717}"),
            ("warning", "\u{26A0}"),
            ("flag", "\u{2691}"),
            ("star", "\u{2605}"),
            ("circle", "\u{25CF}"),
        ] {
            theme.insert_icon(Icon {
                name: name.to_string(),
                glyph: glyph.to_string(),
            });
        }
        theme
    }

    pub fn insert_style(&mut self, style: Style) {
        self.styles.insert(style.name.clone(), style);
    }

    pub fn insert_icon(&mut self, icon: Icon) {
        self.icons.insert(icon.name.clone(), icon);
    }

    /// Look up a style token by name.
    ///
    /// The opacity the caller derived for the matched cell must be within
    /// `[0, 1]`; anything else is a contract violation and returns an error
    /// rather than silently resolving. An unknown token name is not an
    /// error — it yields `None`.
    pub fn style(&self, name: &str, opacity: f64) -> Result<Option<&Style>, ThemeError> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ThemeError::OpacityOutOfRange(opacity));
        }
        Ok(self.styles.get(name))
    }

    /// Look up an icon token by name.
    pub fn icon(&self, name: &str) -> Option<&Icon> {
        self.icons.get(name)
    }
}

static BUILTIN_THEME: Lazy<Theme> = Lazy::new(Theme::builtin);

/// The process-wide built-in theme.
pub fn default_theme() -> &'static Theme {
    &BUILTIN_THEME
}
