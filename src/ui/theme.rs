//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML files with a name and a flat `[colors]` table of hex
//! strings. Three are compiled in; a custom one can be loaded with the
//! `theme_file` option.
//!
//! # Built-in Themes
//!
//! - `blossom`: pink and fuchsia on a light page (default)
//! - `blossom-night`: the same accents on a dark page
//! - `catppuccin-mocha`: dark theme with warm tones
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! page_bg = "#fff7fb"
//! text_normal = "#1f2937"
//! text_dim = "#6b7280"
//! heading = "#c026d3"
//! accent = "#db2777"
//! highlight = "#a21caf"
//! border = "#f9a8d4"
//! nav_fg = "#374151"
//! nav_active = "#c026d3"
//! nav_scrolled_bg = "#fdf2f8"
//! brand = "#db2777"
//! bar_filled = "#e879f9"
//! bar_empty = "#e5e7eb"
//! card_edge = "#fbcfe8"
//! focus_fg = "#ffffff"
//! focus_bg = "#d946ef"
//! dialog_border = "#c026d3"
//! match_highlight_fg = "#1f2937"
//! match_highlight_bg = "#fde68a"
//! ```
//!
//! # Example
//!
//! ```
//! use zfolio::ui::Theme;
//!
//! let theme = Theme::from_name("blossom-night").unwrap();
//! let styled = format!("{}{}Yara{}", Theme::bold(), Theme::fg(&theme.colors.heading), Theme::reset());
//! assert!(styled.ends_with("\u{1b}[0m"));
//! ```

use crate::domain::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names of the compiled-in themes.
pub const BUILTIN_THEMES: [&str; 3] = ["blossom", "blossom-night", "catppuccin-mocha"];

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Page background. `None` leaves the terminal's own background.
    #[serde(default)]
    pub page_bg: Option<String>,

    pub text_normal: String,
    /// Secondary text: dates, locations, hints.
    pub text_dim: String,
    /// Section and card titles.
    pub heading: String,
    /// Theme blocks, institutions, taglines.
    pub accent: String,
    /// `*highlighted*` phrases of the about section.
    pub highlight: String,

    /// Rules, separators and the scrolled navigation border.
    pub border: String,

    pub nav_fg: String,
    /// Label and underline of the active section.
    pub nav_active: String,
    /// Navigation bar background once the page is scrolled.
    pub nav_scrolled_bg: String,
    pub brand: String,

    pub bar_filled: String,
    pub bar_empty: String,

    pub card_edge: String,
    /// Focused card marker.
    pub focus_fg: String,
    pub focus_bg: String,

    pub dialog_border: String,

    /// Fuzzy match highlight in the quick jump list.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name. See [`BUILTIN_THEMES`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "blossom" => include_str!("../../themes/blossom.toml"),
            "blossom-night" => include_str!("../../themes/blossom-night.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Theme`] if the file cannot be read or does not
    /// describe a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| FolioError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| FolioError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Returns `(255, 255, 255)` on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Page background escape, or nothing when the theme keeps the terminal's.
    #[must_use]
    pub fn page(&self) -> String {
        self.colors.page_bg.as_deref().map(Self::bg).unwrap_or_default()
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `blossom` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("blossom").expect("built-in blossom theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("bogus"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn page_background_is_optional() {
        let mut theme = Theme::default();
        theme.colors.page_bg = None;
        assert_eq!(theme.page(), "");
    }

    #[test]
    fn theme_files_load_and_report_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", include_str!("../../themes/catppuccin-mocha.toml")).unwrap();
        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "catppuccin-mocha");

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "name = \"half\"").unwrap();
        assert!(matches!(Theme::from_file(broken.path()), Err(FolioError::Theme(_))));
    }
}
