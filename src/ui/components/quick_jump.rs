//! Quick jump box renderer.
//!
//! A bordered box below the navigation bar: the query line, then matches
//! with their kind tag, the selected one on the focus background.

use crate::ui::helpers::{display_width, position_cursor, push_highlighted, truncate_to_width};
use crate::ui::layout::BODY_TOP;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::QuickJumpView;

const BOX_MARGIN: usize = 4;
const BOX_MAX_WIDTH: usize = 60;
const MAX_ITEMS: usize = 10;

pub fn render_quick_jump(out: &mut String, jump: &QuickJumpView, theme: &Theme, rows: usize, cols: usize) {
    let box_width = cols.saturating_sub(BOX_MARGIN * 2).min(BOX_MAX_WIDTH);
    let inner_width = box_width.saturating_sub(2);
    let left = cols.saturating_sub(box_width) / 2;
    let list_rows = rows.saturating_sub(BODY_TOP + 4).min(MAX_ITEMS);
    let border = Theme::fg(&theme.colors.dialog_border);
    let base = theme.page();

    let mut row = BODY_TOP;
    let title = " Aller à ";
    position_cursor(out, row, left);
    out.push_str(&base);
    out.push_str(&border);
    out.push('┌');
    out.push_str(title);
    out.push_str(&"─".repeat(inner_width.saturating_sub(display_width(title))));
    out.push('┐');
    out.push_str(Theme::reset());
    row += 1;

    let query = truncate_to_width(&format!(" › {}▏", jump.query), inner_width);
    boxed_line(out, row, left, inner_width, theme, |out| {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&query);
        display_width(&query)
    });
    row += 1;

    if jump.items.is_empty() {
        let message = truncate_to_width(" Aucun résultat", inner_width);
        boxed_line(out, row, left, inner_width, theme, |out| {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(&message);
            display_width(&message)
        });
        row += 1;
    }

    let selected = jump.items.iter().position(|item| item.selected).unwrap_or(0);
    let first = (selected + 1).saturating_sub(list_rows);
    for item in jump.items.iter().skip(first).take(list_rows) {
        let kind_width = display_width(item.kind) + 1;
        let label_room = inner_width.saturating_sub(kind_width + 2);
        let label = truncate_to_width(&item.label, label_room);
        boxed_line(out, row, left, inner_width, theme, |out| {
            let mut restore = theme.page();
            if item.selected {
                restore.push_str(&Theme::bg(&theme.colors.focus_bg));
                restore.push_str(&Theme::fg(&theme.colors.focus_fg));
            } else {
                restore.push_str(&Theme::fg(&theme.colors.text_normal));
            }
            out.push_str(&restore);
            out.push(' ');
            push_highlighted(out, &label, &item.indices, theme, &restore);
            let used = 1 + display_width(&label);
            out.push_str(&" ".repeat(inner_width.saturating_sub(used + kind_width)));
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(item.kind);
            out.push(' ');
            inner_width.max(used + kind_width)
        });
        row += 1;
    }

    position_cursor(out, row, left);
    out.push_str(&base);
    out.push_str(&border);
    out.push('└');
    out.push_str(&"─".repeat(inner_width));
    out.push('┘');
    out.push_str(Theme::reset());
}

/// Draws one bordered line; `content` writes the inside and returns its width.
fn boxed_line(
    out: &mut String,
    row: usize,
    left: usize,
    inner_width: usize,
    theme: &Theme,
    content: impl FnOnce(&mut String) -> usize,
) {
    let border = Theme::fg(&theme.colors.dialog_border);
    position_cursor(out, row, left);
    out.push_str(&theme.page());
    out.push_str(&border);
    out.push('│');
    let used = content(out);
    out.push_str(Theme::reset());
    out.push_str(&theme.page());
    out.push_str(&" ".repeat(inner_width.saturating_sub(used)));
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());
}
