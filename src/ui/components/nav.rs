//! Navigation bar renderer.
//!
//! Row 0 carries the brand and the labels, row 1 underlines the active label
//! and row 2 becomes a border once the page is scrolled. A scrolled bar also
//! switches to a filled background.

use super::clear_row;
use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::layout::{brand_col, NAV_ROW, SEPARATOR_ROW, UNDERLINE_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NavBar;

pub fn render_nav(out: &mut String, nav: &NavBar, theme: &Theme, cols: usize) {
    let base = if nav.scrolled {
        Theme::bg(&theme.colors.nav_scrolled_bg)
    } else {
        theme.page()
    };

    position_cursor(out, NAV_ROW, 0);
    out.push_str(&base);
    let mut col = 0;

    pad_to(out, brand_col(), &mut col);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.brand));
    out.push_str(&nav.brand);
    out.push_str(Theme::reset());
    out.push_str(&base);
    col += display_width(&nav.brand);

    for item in &nav.items {
        pad_to(out, item.start, &mut col);
        if item.active {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.nav_active));
        } else {
            out.push_str(&Theme::fg(&theme.colors.nav_fg));
        }
        out.push_str(&item.label);
        out.push_str(Theme::reset());
        out.push_str(&base);
        col += display_width(&item.label);
    }
    pad_to(out, cols, &mut col);
    out.push_str(Theme::reset());

    clear_row(out, UNDERLINE_ROW, theme, cols);
    if let Some(active) = nav.items.iter().find(|item| item.active) {
        position_cursor(out, UNDERLINE_ROW, active.start);
        out.push_str(&theme.page());
        out.push_str(&Theme::fg(&theme.colors.nav_active));
        out.push_str(&"▔".repeat(display_width(&active.label)));
        out.push_str(Theme::reset());
    }

    position_cursor(out, SEPARATOR_ROW, 0);
    out.push_str(&theme.page());
    if nav.scrolled {
        out.push_str(&Theme::fg(&theme.colors.border));
        out.push_str(&"─".repeat(cols));
    } else {
        out.push_str(&" ".repeat(cols));
    }
    out.push_str(Theme::reset());
}

/// Pads with spaces from `col` up to `target`.
fn pad_to(out: &mut String, target: usize, col: &mut usize) {
    out.push_str(&" ".repeat(target.saturating_sub(*col)));
    *col = (*col).max(target);
}
