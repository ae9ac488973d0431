//! Detail dialog renderer.
//!
//! ```text
//! ┌─ Projet ──────────────────[×]─┐
//! │ Gestion de Bibliothèque       │
//! │ …                             │
//! └──────────────────────── ↓ ────┘
//! ```

use super::push_spans;
use crate::interaction::DialogKind;
use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DialogView;

const CLOSE_CONTROL: &str = "[×]";

fn title(kind: DialogKind) -> &'static str {
    match kind {
        DialogKind::Project => " Projet ",
        DialogKind::Certificate => " Certificat ",
    }
}

pub fn render_dialog(out: &mut String, dialog: &DialogView, theme: &Theme) {
    let frame = dialog.frame;
    let base = theme.page();
    let border = Theme::fg(&theme.colors.dialog_border);
    let inner = frame.inner_width();

    // Top border: corner, title, fill, close control, one rule, corner.
    let fill = frame.width.saturating_sub(6);
    let label = title(dialog.kind);
    let label_width = display_width(label);
    position_cursor(out, frame.top, frame.left);
    out.push_str(&base);
    out.push_str(&border);
    out.push('┌');
    if label_width < fill {
        out.push('─');
        out.push_str(Theme::bold());
        out.push_str(label);
        out.push_str(Theme::reset());
        out.push_str(&base);
        out.push_str(&border);
        out.push_str(&"─".repeat(fill - label_width - 1));
    } else {
        out.push_str(&"─".repeat(fill));
    }
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(CLOSE_CONTROL);
    out.push_str(&border);
    out.push_str("─┐");
    out.push_str(Theme::reset());

    for i in 0..frame.visible_rows() {
        position_cursor(out, frame.top + 1 + i, frame.left);
        out.push_str(&base);
        out.push_str(&border);
        out.push_str("│ ");
        let used = dialog
            .lines
            .get(i)
            .map_or(0, |line| push_spans(out, line, theme, &base));
        out.push_str(&base);
        out.push_str(&" ".repeat(inner.saturating_sub(used)));
        out.push_str(&border);
        out.push_str(" │");
        out.push_str(Theme::reset());
    }

    let hint = match (dialog.more_above, dialog.more_below) {
        (true, true) => " ↑↓ ",
        (true, false) => " ↑ ",
        (false, true) => " ↓ ",
        (false, false) => "",
    };
    let rule = frame.width.saturating_sub(2);
    let hint_width = display_width(hint);
    position_cursor(out, frame.top + frame.height.saturating_sub(1), frame.left);
    out.push_str(&base);
    out.push_str(&border);
    out.push('└');
    if hint_width + 2 <= rule {
        out.push_str(&"─".repeat(rule - hint_width - 2));
        out.push_str(&Theme::fg(&theme.colors.accent));
        out.push_str(hint);
        out.push_str(&border);
        out.push_str("──");
    } else {
        out.push_str(&"─".repeat(rule));
    }
    out.push('┘');
    out.push_str(Theme::reset());
}
