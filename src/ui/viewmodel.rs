//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready data only: the visible slice of the page, which navigation
//! entry is active, the dialog body already cut to its frame.

use crate::interaction::DialogKind;
use crate::ui::dialog::BodyLine;
use crate::ui::document::Line;
use crate::ui::layout::DialogFrame;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub nav: NavBar,

    /// Page lines visible in the body area, top to bottom.
    pub body: Vec<BodyRow>,

    pub footer: FooterInfo,

    /// Open detail dialog, drawn over a dimmed page.
    pub dialog: Option<DialogView>,

    /// Quick jump finder, when active.
    pub quick_jump: Option<QuickJumpView>,

    /// Shown instead of everything else when the pane is too small.
    pub empty_state: Option<EmptyState>,
}

/// Navigation bar contents.
#[derive(Debug, Clone)]
pub struct NavBar {
    /// Brand text (`AB Portfolio`).
    pub brand: String,

    /// Labels that fit on the bar, in declared order.
    pub items: Vec<NavItem>,

    /// Whether the page is scrolled past the threshold.
    pub scrolled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    /// Column of the label's first character.
    pub start: usize,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct BodyRow {
    pub line: Line,
    /// Whether this line belongs to the focused card.
    pub focused: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Site credit with the year filled in.
    pub credit: String,

    /// Keybinding hints for the current mode.
    pub keybindings: String,

    /// Scroll position, `42%` or `tout` when the page fits.
    pub position: String,
}

#[derive(Debug, Clone)]
pub struct DialogView {
    pub kind: DialogKind,
    pub frame: DialogFrame,
    /// Body lines visible inside the frame.
    pub lines: Vec<BodyLine>,
    pub more_above: bool,
    pub more_below: bool,
}

#[derive(Debug, Clone)]
pub struct QuickJumpView {
    pub query: String,
    pub items: Vec<QuickJumpItem>,
}

#[derive(Debug, Clone)]
pub struct QuickJumpItem {
    pub label: String,
    pub kind: &'static str,
    /// Char positions matched by the query.
    pub indices: Vec<usize>,
    pub selected: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
