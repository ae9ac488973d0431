//! Composable UI component renderers.
//!
//! Each component draws one part of the screen into the frame buffer:
//!
//! - [`nav`]: navigation bar, active underline and separator
//! - [`page`]: the visible slice of the page body
//! - [`footer`]: credit, keybinding hints and scroll position
//! - [`dialog`]: detail dialog frame with its close control
//! - [`quick_jump`]: fuzzy finder box
//! - [`empty`]: message for panes too small to draw in
//!
//! Components paint whole rows, so a frame never shows leftovers of the
//! previous one.

mod dialog;
mod empty;
mod footer;
mod nav;
mod page;
mod quick_jump;

pub use empty::render_empty_state;

use crate::ui::document::{Span, Tone};
use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Draws the page with its chrome, then any overlay on top.
pub fn render_page_mode(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let dimmed = vm.dialog.is_some();

    nav::render_nav(out, &vm.nav, theme, cols);
    page::render_body(out, &vm.body, theme, layout::body_rows(rows), cols, dimmed);
    footer::render_footer(out, layout::footer_row(rows), &vm.footer, theme, cols);

    if let Some(dialog) = &vm.dialog {
        dialog::render_dialog(out, dialog, theme);
    } else if let Some(jump) = &vm.quick_jump {
        quick_jump::render_quick_jump(out, jump, theme, rows, cols);
    }
}

/// Theme color for a span tone.
fn tone_color(theme: &Theme, tone: Tone) -> &str {
    let c = &theme.colors;
    match tone {
        Tone::Text => &c.text_normal,
        Tone::Dim => &c.text_dim,
        Tone::Heading => &c.heading,
        Tone::Accent => &c.accent,
        Tone::Highlight => &c.highlight,
        Tone::Rule => &c.border,
        Tone::BarFilled => &c.bar_filled,
        Tone::BarEmpty => &c.bar_empty,
        Tone::CardEdge => &c.card_edge,
    }
}

/// Appends styled spans. `base` is the background state re-applied before
/// each span. Returns the columns written.
fn push_spans(out: &mut String, spans: &[Span], theme: &Theme, base: &str) -> usize {
    let mut used = 0;
    for span in spans {
        out.push_str(Theme::reset());
        out.push_str(base);
        if span.bold {
            out.push_str(Theme::bold());
        }
        out.push_str(&Theme::fg(tone_color(theme, span.tone)));
        out.push_str(&span.text);
        used += display_width(&span.text);
    }
    out.push_str(Theme::reset());
    used
}

/// Blanks a whole row in the page background.
fn clear_row(out: &mut String, row: usize, theme: &Theme, cols: usize) {
    position_cursor(out, row, 0);
    out.push_str(&theme.page());
    out.push_str(&" ".repeat(cols));
    out.push_str(Theme::reset());
}

/// Blanks every row of the pane.
fn clear_screen(out: &mut String, theme: &Theme, rows: usize, cols: usize) {
    for row in 0..rows {
        clear_row(out, row, theme, cols);
    }
}
