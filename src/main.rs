//! Zellij plugin wrapper and entry point.
//!
//! A thin layer between the zfolio library and Zellij: it maps key and mouse
//! events to library [`Event`]s, executes the returned actions, and renders.
//! Built for any other target it prints a single frame of the page, which is
//! handy for checking content and themes without Zellij.
//!
//! # Keybindings
//!
//! Page:
//! - `j`/`k`, arrows, mouse wheel: scroll
//! - `Ctrl+d`/`Ctrl+u`: half page, `PageDown`/`PageUp`/`Space`: full page
//! - `g`/`Home`, `G`/`End`: top and bottom
//! - `1`..`9`: jump to the n-th navigation entry (or open Contact)
//! - `Tab`/`Shift+Tab`: focus cards, `Enter`: open the focused card
//! - `/`: quick jump, `q`: hide the plugin
//!
//! Dialog:
//! - `Esc`, click on `[×]` or outside: close
//! - `j`/`k` and friends: scroll the dialog
//! - `o`: open the project link or certificate PDF
//!
//! Quick jump:
//! - type to filter, `Ctrl+n`/`Ctrl+p` or arrows to move, `Enter` to jump, `Esc` to leave

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(target_family = "wasm")]
struct State {
    app: zfolio::AppState,

    /// Command handed links and `mailto:` URIs.
    opener: String,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        let config = zfolio::Config::default();
        let app = zfolio::initialize(&config).unwrap_or_else(|_| {
            zfolio::AppState::new(
                zfolio::domain::Portfolio::default(),
                zfolio::Theme::default(),
                config.focus_line,
                config.scrolled_threshold,
                1970,
            )
        });
        Self { app, opener: config.opener }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    fn load(&mut self, configuration: std::collections::BTreeMap<String, String>) {
        let config = zfolio::Config::from_zellij(&configuration);
        zfolio::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        match zfolio::initialize(&config) {
            Ok(app) => self.app = app,
            Err(e) => tracing::error!(error = %e, "built-in content failed to load"),
        }
        self.opener.clone_from(&config.opener);

        request_permission(&[PermissionType::RunCommands]);
        subscribe(&[EventType::Key, EventType::Mouse, EventType::PermissionRequestResult]);
        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                if matches!(status, PermissionStatus::Denied) {
                    tracing::warn!("run-commands permission denied, links will not open");
                }
                return false;
            }
            _ => return false,
        };

        match zfolio::handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        if rows != self.app.rows || cols != self.app.cols || self.app.document.is_empty() {
            if let Err(e) = zfolio::handle_event(&mut self.app, &zfolio::Event::Resize { rows, cols }) {
                tracing::error!(error = %e, rows, cols, "error handling resize");
            }
        }
        zfolio::ui::render(&self.app);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<zfolio::Event> {
        use zfolio::app::Direction;
        use zfolio::{Event, InputMode};

        tracing::debug!(bare_key = ?key.bare_key, "key event");
        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

        if self.app.input_mode == InputMode::QuickJump {
            return Some(match key.bare_key {
                BareKey::Char('n') if ctrl => Event::SelectionDown,
                BareKey::Char('p') if ctrl => Event::SelectionUp,
                BareKey::Down => Event::SelectionDown,
                BareKey::Up => Event::SelectionUp,
                BareKey::Enter => Event::Activate,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if !ctrl => Event::Char(c),
                _ => return None,
            });
        }

        Some(match key.bare_key {
            BareKey::Char('d') if ctrl => Event::ScrollHalfPage(Direction::Down),
            BareKey::Char('u') if ctrl => Event::ScrollHalfPage(Direction::Up),
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::FocusPrev,
            BareKey::Tab => Event::FocusNext,
            BareKey::Down | BareKey::Char('j') => Event::ScrollLines(1),
            BareKey::Up | BareKey::Char('k') => Event::ScrollLines(-1),
            BareKey::PageDown | BareKey::Char(' ') => Event::ScrollPage(Direction::Down),
            BareKey::PageUp => Event::ScrollPage(Direction::Up),
            BareKey::Home | BareKey::Char('g') => Event::ScrollTop,
            BareKey::End | BareKey::Char('G') => Event::ScrollBottom,
            BareKey::Enter => Event::Activate,
            BareKey::Esc => Event::Escape,
            BareKey::Char('/') => Event::QuickJump,
            BareKey::Char('o') => Event::OpenLink,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char(c @ '1'..='9') => Event::Navigate(c as usize - '1' as usize),
            _ => return None,
        })
    }

    fn map_mouse_event(mouse: Mouse) -> Option<zfolio::Event> {
        use zfolio::app::WHEEL_ROWS;
        use zfolio::Event;

        match mouse {
            Mouse::ScrollUp(_) => Some(Event::ScrollLines(-WHEEL_ROWS)),
            Mouse::ScrollDown(_) => Some(Event::ScrollLines(WHEEL_ROWS)),
            Mouse::LeftClick(line, col) => {
                usize::try_from(line).ok().map(|row| Event::Click { row, col })
            }
            _ => None,
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &zfolio::Action) {
        match action {
            zfolio::Action::CloseFocus => hide_self(),
            zfolio::Action::OpenExternal(external) => {
                let uri = external.uri();
                tracing::debug!(opener = %self.opener, uri = %uri, "opening external link");
                run_command(&[self.opener.as_str(), uri.as_str()], std::collections::BTreeMap::new());
            }
        }
    }
}

/// Prints one frame of the page at the terminal's size (`LINES`/`COLUMNS`,
/// 40x100 when unset).
#[cfg(not(target_family = "wasm"))]
fn main() -> std::process::ExitCode {
    let size = |var: &str, default: usize| {
        std::env::var(var).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
    };

    let config = zfolio::Config::default();
    let mut app = match zfolio::initialize(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("zfolio: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    let event = zfolio::Event::Resize { rows: size("LINES", 40), cols: size("COLUMNS", 100) };
    if let Err(e) = zfolio::handle_event(&mut app, &event) {
        eprintln!("zfolio: {e}");
        return std::process::ExitCode::FAILURE;
    }
    println!("{}", zfolio::ui::render_to_string(&app));
    std::process::ExitCode::SUCCESS
}
