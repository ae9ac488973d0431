//! zfolio: a personal portfolio as a Zellij plugin.
//!
//! The page (about, studies, experience, projects, skills, certificates) is
//! laid out as a scrollable document under a navigation bar that tracks the
//! section being read. Project and certificate cards open detail dialogs
//! that lock page scrolling until closed with Escape, the close control, or
//! a click outside.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← key/mouse → Event
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← handle_event
//! │  - AppState, quick jump, view model                 │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌────────────────────────┐   ┌────────────────────────┐
//! │ Interaction            │   │ UI Layer (ui/)         │
//! │ (interaction/)         │   │                        │
//! │ - Scroll spy           │   │ - Document layout      │
//! │ - Page shell, locks    │   │ - Components, theming  │
//! │ - Dialog controller    │   │                        │
//! └────────────────────────┘   └────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Sections, navigation, content records, errors    │
//! │  - Content loading (embedded TOML or file), paths   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing → OpenTelemetry → OTLP-JSON file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zfolio.wasm" {
//!         theme "blossom-night"
//!         content_file "~/.config/zfolio/portfolio.toml"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use zfolio::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//! handle_event(&mut state, &Event::Resize { rows: 30, cols: 100 })?;
//! let (_, actions) = handle_event(&mut state, &Event::Navigate(6))?;
//! assert_eq!(actions.len(), 1); // Contact opens the mail client
//! # Ok::<(), zfolio::FolioError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod interaction;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{FolioError, Result};
pub use ui::Theme;

use chrono::Datelike;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TOML file replacing the built-in content. `~` is expanded.
    pub content_file: Option<String>,

    /// Built-in theme name: `blossom`, `blossom-night` or `catppuccin-mocha`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing filter. `RUST_LOG` wins when set. Default: `"info"`
    pub trace_level: Option<String>,

    /// Row the scroll spy tests sections against. Default: 4
    pub focus_line: usize,

    /// Rows scrolled before the navigation bar switches state. Default: 1
    pub scrolled_threshold: usize,

    /// Command that opens links and `mailto:` URIs. Default: `xdg-open`
    pub opener: String,
}

pub const DEFAULT_FOCUS_LINE: usize = 4;
pub const DEFAULT_SCROLLED_THRESHOLD: usize = 1;
pub const DEFAULT_OPENER: &str = "xdg-open";

impl Default for Config {
    fn default() -> Self {
        Self {
            content_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            focus_line: DEFAULT_FOCUS_LINE,
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            opener: DEFAULT_OPENER.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparsable numbers fall back to their defaults; blank strings count as
    /// unset.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zfolio::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("focus_line".to_string(), "6".to_string());
    /// map.insert("scrolled_threshold".to_string(), "lots".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.focus_line, 6);
    /// assert_eq!(config.scrolled_threshold, 1);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let number = |key: &str, default: usize| {
            config.get(key).map_or(default, |raw| {
                raw.trim().parse().unwrap_or_else(|_| {
                    tracing::debug!(key, value = %raw, default, "invalid number in configuration");
                    default
                })
            })
        };

        Self {
            content_file: text("content_file"),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            focus_line: number("focus_line", DEFAULT_FOCUS_LINE),
            scrolled_threshold: number("scrolled_threshold", DEFAULT_SCROLLED_THRESHOLD),
            opener: text("opener").unwrap_or_else(|| DEFAULT_OPENER.to_string()),
        }
    }

    /// Theme from `theme_file`, else `theme`, else the default.
    ///
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }
        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the application state: theme, content, and the current year for
/// the footer.
///
/// # Errors
///
/// Returns an error only if the built-in content cannot be parsed. A
/// configured content file that fails to load falls back to it.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!(?config, "initializing zfolio plugin");

    let content_file = config
        .content_file
        .as_deref()
        .map(|path| PathBuf::from(infrastructure::expand_tilde(path)));
    let portfolio = infrastructure::load_portfolio(content_file.as_deref())?;

    Ok(AppState::new(
        portfolio,
        config.theme(),
        config.focus_line,
        config.scrolled_threshold,
        chrono::Utc::now().year(),
    ))
}
