//! Theme preference and effective theme types, plus the light/dark palettes.
//!
//! A [`ThemePreference`] is what the user picks and what gets persisted. An
//! [`EffectiveTheme`] is what is actually shown; it is always derived from a
//! preference and the operating system's color scheme.
//!
//! # Examples
//!
//! ```
//! use rstarter::theme::{EffectiveTheme, ThemePreference};
//!
//! let pref: ThemePreference = "system".parse().unwrap();
//! assert_eq!(pref.resolve(EffectiveTheme::Dark), EffectiveTheme::Dark);
//! assert_eq!(pref.next(), ThemePreference::Light);
//! ```

use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::constants::themes;

/// The user's theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the operating system's color scheme
    #[default]
    System,
}

impl ThemePreference {
    /// All preferences in toggle order.
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    /// Next preference in the `Light → Dark → System → Light` cycle.
    pub fn next(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
            ThemePreference::System => ThemePreference::Light,
        }
    }

    /// Maps this preference to the theme to display, given the system theme.
    pub fn resolve(self, system: EffectiveTheme) -> EffectiveTheme {
        match self {
            ThemePreference::Light => EffectiveTheme::Light,
            ThemePreference::Dark => EffectiveTheme::Dark,
            ThemePreference::System => system,
        }
    }

    /// Persisted name.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => themes::LIGHT,
            ThemePreference::Dark => themes::DARK,
            ThemePreference::System => themes::SYSTEM,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }

    /// Glyph shown on the toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            ThemePreference::Light => "☀",
            ThemePreference::Dark => "🌙",
            ThemePreference::System => "🖥",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a known preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme: {0:?}")]
pub struct InvalidTheme(pub String);

impl FromStr for ThemePreference {
    type Err = InvalidTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            themes::LIGHT => Ok(ThemePreference::Light),
            themes::DARK => Ok(ThemePreference::Dark),
            themes::SYSTEM => Ok(ThemePreference::System),
            other => Err(InvalidTheme(other.to_string())),
        }
    }
}

/// The theme actually applied to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            EffectiveTheme::Dark
        } else {
            EffectiveTheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == EffectiveTheme::Dark
    }

    pub fn palette(self) -> Palette {
        match self {
            EffectiveTheme::Light => Palette::light(),
            EffectiveTheme::Dark => Palette::dark(),
        }
    }
}

impl From<EffectiveTheme> for egui::Theme {
    fn from(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Light => egui::Theme::Light,
            EffectiveTheme::Dark => egui::Theme::Dark,
        }
    }
}

/// Colors of the shell for one effective theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub accent: Color32,

    pub error: Color32,
    pub warning: Color32,
}

impl Palette {
    /// White page, gray-900 text.
    pub fn light() -> Self {
        Self {
            background: hex_to_color32("#ffffff"),
            panel_background: hex_to_color32("#ffffff"),
            extreme_background: hex_to_color32("#f3f4f6"),
            text: hex_to_color32("#111827"),
            text_dim: hex_to_color32("#6b7280"),
            selection: hex_to_color32("#bfdbfe"),
            hover: hex_to_color32("#f3f4f6"),
            border: hex_to_color32("#d1d5db"),
            accent: hex_to_color32("#2563eb"),
            error: hex_to_color32("#dc2626"),
            warning: hex_to_color32("#d97706"),
        }
    }

    /// Gray-800 page, white text.
    pub fn dark() -> Self {
        Self {
            background: hex_to_color32("#1f2937"),
            panel_background: hex_to_color32("#1f2937"),
            extreme_background: hex_to_color32("#111827"),
            text: hex_to_color32("#ffffff"),
            text_dim: hex_to_color32("#9ca3af"),
            selection: hex_to_color32("#1e3a8a"),
            hover: hex_to_color32("#374151"),
            border: hex_to_color32("#4b5563"),
            accent: hex_to_color32("#60a5fa"),
            error: hex_to_color32("#f87171"),
            warning: hex_to_color32("#fbbf24"),
        }
    }

    /// Applies this palette's colors to egui visuals.
    pub fn apply_to(&self, visuals: &mut egui::Visuals) {
        visuals.panel_fill = self.panel_background;
        visuals.window_fill = self.background;
        visuals.extreme_bg_color = self.extreme_background;
        visuals.faint_bg_color = self.hover;

        visuals.override_text_color = Some(self.text);

        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke.color = self.accent;

        visuals.widgets.noninteractive.bg_fill = self.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.widgets.inactive.bg_fill = self.hover;
        visuals.widgets.inactive.weak_bg_fill = self.hover;
        visuals.widgets.hovered.bg_fill = self.hover;
        visuals.widgets.active.bg_fill = self.selection;

        visuals.hyperlink_color = self.accent;
        visuals.error_fg_color = self.error;
        visuals.warn_fg_color = self.warning;
    }

    /// Egui base visuals for `theme` with this palette on top.
    pub fn visuals(&self, theme: EffectiveTheme) -> egui::Visuals {
        let mut visuals = if theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        self.apply_to(&mut visuals);
        visuals
    }
}

/// Converts a hex color string (like "#1f2937") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mapping_table() {
        for system in [EffectiveTheme::Light, EffectiveTheme::Dark] {
            assert_eq!(ThemePreference::Light.resolve(system), EffectiveTheme::Light);
            assert_eq!(ThemePreference::Dark.resolve(system), EffectiveTheme::Dark);
            assert_eq!(ThemePreference::System.resolve(system), system);
        }
    }

    #[test]
    fn test_cycle_wraps_after_three() {
        assert_eq!(ThemePreference::Light.next(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.next(), ThemePreference::System);
        assert_eq!(ThemePreference::System.next(), ThemePreference::Light);
        for pref in ThemePreference::ALL {
            assert_eq!(pref.next().next().next(), pref);
        }
    }

    #[test]
    fn test_parse_and_display() {
        for pref in ThemePreference::ALL {
            assert_eq!(pref.to_string().parse::<ThemePreference>(), Ok(pref));
        }
        assert_eq!(
            "neon".parse::<ThemePreference>(),
            Err(InvalidTheme("neon".to_string()))
        );
        assert!("Dark".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&ThemePreference::Dark).unwrap(), "\"dark\"");
        let pref: ThemePreference = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(pref, ThemePreference::System);
        assert!(serde_json::from_str::<ThemePreference>("\"neon\"").is_err());
    }

    #[test]
    fn test_default_is_system() {
        assert_eq!(ThemePreference::default(), ThemePreference::System);
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#1f2937"), Color32::from_rgb(0x1f, 0x29, 0x37));
        assert_eq!(hex_to_color32("bad"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_palette_visuals_follow_theme() {
        let dark = EffectiveTheme::Dark.palette().visuals(EffectiveTheme::Dark);
        assert!(dark.dark_mode);
        assert_eq!(dark.panel_fill, Palette::dark().panel_background);

        let light = EffectiveTheme::Light.palette().visuals(EffectiveTheme::Light);
        assert!(!light.dark_mode);
        assert_eq!(light.override_text_color, Some(Palette::light().text));
    }
}
