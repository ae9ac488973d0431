//! Footer renderer.
//!
//! The credit sits on the left, keybinding hints and the scroll position on
//! the right. When the row is too narrow the credit gives way first.

use crate::ui::helpers::{display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let right = truncate_to_width(&format!("{}  {} ", footer.keybindings, footer.position), cols);
    let right_width = display_width(&right);
    let room = cols.saturating_sub(right_width);
    let credit = if room > 2 {
        truncate_to_width(&format!(" {}", footer.credit), room - 1)
    } else {
        String::new()
    };
    let gap = room.saturating_sub(display_width(&credit));

    position_cursor(out, row, 0);
    out.push_str(&theme.page());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&credit);
    out.push_str(&" ".repeat(gap));
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(&right);
    out.push_str(Theme::reset());
}
