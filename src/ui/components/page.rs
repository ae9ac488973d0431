//! Page body renderer.

use super::{clear_row, push_spans};
use crate::ui::document::MARGIN;
use crate::ui::helpers::position_cursor;
use crate::ui::layout::BODY_TOP;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BodyRow;

/// Draws the visible page lines, blanking the rest of the body area.
///
/// Lines of the focused card get the focus background; `dimmed` fades the
/// whole body while a dialog sits on top.
pub fn render_body(
    out: &mut String,
    body: &[BodyRow],
    theme: &Theme,
    body_rows: usize,
    cols: usize,
    dimmed: bool,
) {
    for i in 0..body_rows {
        let row = BODY_TOP + i;
        let Some(body_row) = body.get(i) else {
            clear_row(out, row, theme, cols);
            continue;
        };

        let mut base = theme.page();
        if dimmed {
            base.push_str(Theme::dim());
        }
        if body_row.focused {
            base.push_str(&Theme::bg(&theme.colors.focus_bg));
        }

        position_cursor(out, row, 0);
        out.push_str(&theme.page());
        out.push_str(&" ".repeat(MARGIN));
        let used = MARGIN + push_spans(out, &body_row.line.spans, theme, &base);
        out.push_str(&theme.page());
        out.push_str(&" ".repeat(cols.saturating_sub(used)));
        out.push_str(Theme::reset());
    }
}
