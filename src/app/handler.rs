//! Event handling and state transition logic.
//!
//! The plugin shim turns Zellij key and mouse events into [`Event`]s; the
//! handler applies them to [`AppState`] and returns whether a re-render is
//! needed plus the [`Action`]s to execute.
//!
//! ```text
//! Zellij event → main.rs → Event → handle_event → state changes → (render?, actions)
//! ```
//!
//! Which events a key produces depends on the mode (see `main.rs`); the
//! handler still checks the mode and the dialogs so that stray events are
//! ignored rather than misapplied.
//!
//! # Example
//!
//! ```
//! use zfolio::app::{handle_event, AppState, Event};
//! use zfolio::infrastructure::embedded_portfolio;
//! use zfolio::ui::Theme;
//!
//! let mut state = AppState::new(embedded_portfolio()?, Theme::default(), 4, 1, 2026);
//! handle_event(&mut state, &Event::Resize { rows: 30, cols: 100 })?;
//! let (render, actions) = handle_event(&mut state, &Event::Navigate(0))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), zfolio::FolioError>(())
//! ```

use super::modes::InputMode;
use super::quick_jump::{JumpTarget, QuickJump};
use crate::app::{Action, AppState};
use crate::domain::{ExternalAction, NavTarget, Result};
use crate::interaction::{ClickTarget, ShellKey};
use crate::ui::dialog::{certificate_link, project_link};
use crate::ui::document::MARGIN;
use crate::ui::layout::{BODY_TOP, NAV_ROW};
use tracing::debug;

/// Rows the mouse wheel scrolls per notch.
pub const WHEEL_ROWS: isize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    const fn sign(self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
        }
    }
}

/// Events produced by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The pane was drawn at a new size. The first one mounts the page.
    Resize { rows: usize, cols: usize },

    /// Scrolls by a number of rows; negative is up. Scrolls the dialog body
    /// instead of the page while a dialog is open.
    ScrollLines(isize),
    ScrollHalfPage(Direction),
    ScrollPage(Direction),
    ScrollTop,
    ScrollBottom,

    /// Selects the n-th navigation entry.
    Navigate(usize),

    /// Moves card focus to the next card in page order.
    FocusNext,
    FocusPrev,
    /// Opens the focused card, or confirms the quick jump selection.
    Activate,
    /// Leaves quick jump, closes dialogs, or clears card focus.
    Escape,

    /// Left click at a 0-based screen position.
    Click { row: usize, col: usize },

    /// Opens the link of the open dialog (project repo/demo/paper, certificate PDF).
    OpenLink,

    /// Opens the quick jump finder.
    QuickJump,
    /// Appends a character to the quick jump query.
    Char(char),
    /// Removes the last character of the quick jump query.
    Backspace,
    SelectionDown,
    SelectionUp,

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns whether to
/// re-render plus the actions to execute.
///
/// # Errors
///
/// Returns a content error when an event refers to a card that is not in the
/// content.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Resize { rows, cols } => {
            state.resize(*rows, *cols);
            Ok((true, vec![]))
        }
        Event::ScrollLines(delta) => Ok((scroll(state, *delta), vec![])),
        Event::ScrollHalfPage(direction) => {
            let rows = half(page_rows(state));
            Ok((scroll(state, direction.sign() * rows), vec![]))
        }
        Event::ScrollPage(direction) => {
            let rows = signed(page_rows(state).max(1));
            Ok((scroll(state, direction.sign() * rows), vec![]))
        }
        Event::ScrollTop => Ok((scroll(state, isize::MIN), vec![])),
        Event::ScrollBottom => Ok((scroll(state, isize::MAX), vec![])),

        Event::Navigate(index) => {
            if state.dialog_open() || state.input_mode == InputMode::QuickJump {
                debug!(index, "navigation ignored, overlay open");
                return Ok((false, vec![]));
            }
            Ok(navigate(state, *index))
        }

        Event::FocusNext | Event::FocusPrev => {
            if state.dialog_open() || state.input_mode == InputMode::QuickJump {
                return Ok((false, vec![]));
            }
            Ok((state.cycle_focus(*event == Event::FocusNext), vec![]))
        }

        Event::Activate => {
            if state.input_mode == InputMode::QuickJump {
                return confirm_quick_jump(state);
            }
            if state.dialog_open() {
                return Ok((false, vec![]));
            }
            let Some(card) = state.focused_card else {
                debug!("nothing focused to open");
                return Ok((false, vec![]));
            };
            state.open_card(card)?;
            Ok((true, vec![]))
        }

        Event::Escape => {
            if state.input_mode == InputMode::QuickJump {
                leave_quick_jump(state);
                return Ok((true, vec![]));
            }
            if state.route_key(ShellKey::Escape) {
                return Ok((true, vec![]));
            }
            Ok((state.focused_card.take().is_some(), vec![]))
        }

        Event::Click { row, col } => click(state, *row, *col),

        Event::OpenLink => {
            let url = state
                .certificates
                .selected()
                .and_then(certificate_link)
                .or_else(|| state.projects.selected().and_then(project_link));
            let Some(url) = url else {
                debug!("no link to open");
                return Ok((false, vec![]));
            };
            Ok((false, vec![Action::OpenExternal(ExternalAction::OpenUrl { url: url.to_string() })]))
        }

        Event::QuickJump => {
            if state.dialog_open() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::QuickJump;
            state.quick_jump = Some(QuickJump::new(&state.portfolio));
            Ok((true, vec![]))
        }
        Event::Char(c) => Ok((with_quick_jump(state, |jump| jump.push(*c)), vec![])),
        Event::Backspace => Ok((with_quick_jump(state, QuickJump::pop), vec![])),
        Event::SelectionDown => Ok((with_quick_jump(state, QuickJump::move_down), vec![])),
        Event::SelectionUp => Ok((with_quick_jump(state, QuickJump::move_up), vec![])),

        Event::CloseFocus => {
            if state.dialog_open() || state.input_mode == InputMode::QuickJump {
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::CloseFocus]))
        }
    }
}

fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

fn half(rows: usize) -> isize {
    signed((rows / 2).max(1))
}

/// Rows a page step covers: the dialog's visible body or the page body.
fn page_rows(state: &AppState) -> usize {
    state
        .dialog_frame()
        .map_or_else(|| state.body_rows(), |frame| frame.visible_rows())
}

fn scroll(state: &mut AppState, delta: isize) -> bool {
    if state.dialog_open() {
        state.scroll_dialog(delta)
    } else {
        state.scroll_by(delta)
    }
}

fn navigate(state: &mut AppState, index: usize) -> (bool, Vec<Action>) {
    let Some(entry) = state.portfolio.navigation.get(index) else {
        debug!(index, "no navigation entry");
        return (false, vec![]);
    };
    debug!(label = %entry.label, "navigation");
    let target = entry.target.clone();
    follow(state, target)
}

/// Scrolls to an in-page target, or hands an external one to the shim.
fn follow(state: &mut AppState, target: NavTarget) -> (bool, Vec<Action>) {
    match target {
        target @ NavTarget::Section(_) => (state.scroll_to_section(&target), vec![]),
        NavTarget::External(action) => (false, vec![Action::OpenExternal(action)]),
    }
}

fn open_profile_link(state: &mut AppState, link: usize) -> (bool, Vec<Action>) {
    let Some(profile_link) = state.portfolio.profile.links.get(link) else {
        return (false, vec![]);
    };
    debug!(label = %profile_link.label, "profile link");
    let target = profile_link.href.clone();
    follow(state, target)
}

fn with_quick_jump(state: &mut AppState, f: impl FnOnce(&mut QuickJump)) -> bool {
    match state.quick_jump.as_mut() {
        Some(jump) if state.input_mode == InputMode::QuickJump => {
            f(jump);
            true
        }
        _ => false,
    }
}

fn leave_quick_jump(state: &mut AppState) {
    state.input_mode = InputMode::Page;
    state.quick_jump = None;
}

fn confirm_quick_jump(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let target = state.quick_jump.as_ref().and_then(QuickJump::selected_target);
    leave_quick_jump(state);
    match target {
        Some(JumpTarget::Nav(index)) => {
            let (_, actions) = navigate(state, index);
            Ok((true, actions))
        }
        Some(JumpTarget::Card(card)) => {
            state.focus_card(card)?;
            Ok((true, vec![]))
        }
        None => Ok((true, vec![])),
    }
}

fn click(state: &mut AppState, row: usize, col: usize) -> Result<(bool, Vec<Action>)> {
    if let Some(frame) = state.dialog_frame() {
        let target = frame.classify(row, col);
        debug!(row, col, ?target, "dialog click");
        if target == ClickTarget::Content {
            return Ok((false, vec![]));
        }
        let closed = if state.certificates.is_open() {
            state.certificates.on_click(target, &mut state.shell)
        } else {
            state.projects.on_click(target, &mut state.shell)
        };
        return Ok((closed, vec![]));
    }

    if state.input_mode == InputMode::QuickJump {
        leave_quick_jump(state);
        return Ok((true, vec![]));
    }

    if row == NAV_ROW {
        let hit = state
            .nav_slots()
            .into_iter()
            .find(|slot| (slot.start..slot.end).contains(&col));
        return Ok(hit.map_or((false, vec![]), |slot| navigate(state, slot.index)));
    }

    if row < BODY_TOP || row >= BODY_TOP + state.body_rows() {
        return Ok((false, vec![]));
    }
    let line = state.offset + row - BODY_TOP;
    let link = col.checked_sub(MARGIN).and_then(|col| state.document.link_at(line, col));
    if let Some(link) = link {
        return Ok(open_profile_link(state, link));
    }
    let Some(card) = state.document.card_at(line) else {
        return Ok((false, vec![]));
    };
    state.open_card(card)?;
    Ok((true, vec![]))
}
