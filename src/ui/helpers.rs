//! Shared text and cursor helpers.
//!
//! Everything here measures text in terminal columns (via `unicode-width`),
//! never in bytes or chars, so accented French copy and the odd emoji line up.
//! Output is appended to a frame buffer that the plugin prints once per render.

use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Moves the cursor to a 0-based `row` and `col`.
///
/// ANSI positions are 1-based; the conversion happens here.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{};{}H", row + 1, col + 1));
}

/// Display width of `text` in terminal columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Cuts `text` to at most `max` columns, ending with `…` when shortened.
///
/// ```
/// use zfolio::ui::helpers::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Formations", 20), "Formations");
/// assert_eq!(truncate_to_width("Formations", 6), "Forma…");
/// ```
#[must_use]
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = char_width(c);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pads `text` with spaces to exactly `width` columns, truncating if longer.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let pad = width.saturating_sub(display_width(&text));
    format!("{text}{}", " ".repeat(pad))
}

/// Splits a word wider than `width` into pieces that fit.
pub(crate) fn split_long_word(word: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for c in word.chars() {
        let w = char_width(c);
        if used + w > width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(c);
        used += w;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Greedy word wrap to `width` columns. Always returns at least one line.
///
/// ```
/// use zfolio::ui::helpers::wrap_words;
///
/// assert_eq!(wrap_words("Curieuse, rigoureuse et motivée", 12), vec![
///     "Curieuse,", "rigoureuse", "et motivée",
/// ]);
/// ```
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in split_long_word(word, width) {
            let needed = if current.is_empty() {
                display_width(&piece)
            } else {
                display_width(&current) + 1 + display_width(&piece)
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&piece);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Appends `text`, highlighting the chars at `indices` (fuzzy match positions).
///
/// `restore` is the style re-applied after each highlighted run.
pub fn push_highlighted(out: &mut String, text: &str, indices: &[usize], theme: &Theme, restore: &str) {
    if indices.is_empty() {
        out.push_str(text);
        return;
    }

    let mut highlighted = false;
    for (i, c) in text.chars().enumerate() {
        let hit = indices.contains(&i);
        if hit && !highlighted {
            out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
            out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        } else if !hit && highlighted {
            out.push_str(Theme::reset());
            out.push_str(restore);
        }
        highlighted = hit;
        out.push(c);
    }
    if highlighted {
        out.push_str(Theme::reset());
        out.push_str(restore);
    }
}
