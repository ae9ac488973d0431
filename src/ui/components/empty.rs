//! Empty state renderer, shown when the pane is too small for the page.

use super::clear_screen;
use crate::ui::helpers::{display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Blanks the pane and centers the message with its subtitle below.
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, rows: usize, cols: usize) {
    clear_screen(out, theme, rows, cols);

    let row = rows.saturating_sub(2) / 2;
    centered(out, row, &empty.message, &Theme::fg(&theme.colors.heading), theme, cols);
    if rows > 1 {
        let style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        centered(out, row + 1, &empty.subtitle, &style, theme, cols);
    }
}

fn centered(out: &mut String, row: usize, text: &str, style: &str, theme: &Theme, cols: usize) {
    let text = truncate_to_width(text, cols);
    let padding = cols.saturating_sub(display_width(&text)) / 2;
    position_cursor(out, row, padding);
    out.push_str(&theme.page());
    out.push_str(style);
    out.push_str(&text);
    out.push_str(Theme::reset());
}
