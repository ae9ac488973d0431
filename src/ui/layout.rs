//! Screen geometry shared by the renderer and the click hit-testing.
//!
//! ```text
//! row 0          navigation bar
//! row 1          active-section underline
//! row 2          separator (border once scrolled)
//! rows 3..n-2    page body
//! row n-1        footer
//! ```

use crate::interaction::ClickTarget;
use crate::ui::helpers::display_width;

pub const NAV_ROW: usize = 0;
pub const UNDERLINE_ROW: usize = 1;
pub const SEPARATOR_ROW: usize = 2;
/// First screen row of the page body.
pub const BODY_TOP: usize = 3;

/// Smallest pane the page is drawn in.
pub const MIN_ROWS: usize = 8;
pub const MIN_COLS: usize = 30;

/// Widest a dialog frame gets.
pub const DIALOG_MAX_WIDTH: usize = 76;

const BRAND_COL: usize = 1;
const BRAND_GAP: usize = 3;
const LABEL_GAP: usize = 2;

/// Rows available to the page body on a `rows`-high pane.
#[must_use]
pub const fn body_rows(rows: usize) -> usize {
    rows.saturating_sub(BODY_TOP + 1)
}

/// Screen row of the footer.
#[must_use]
pub const fn footer_row(rows: usize) -> usize {
    rows.saturating_sub(1)
}

/// Whether a `rows` x `cols` pane is too small to draw the page.
#[must_use]
pub const fn too_small(rows: usize, cols: usize) -> bool {
    rows < MIN_ROWS || cols < MIN_COLS
}

/// Brand text at the left of the navigation bar.
#[must_use]
pub fn brand(initials: &str) -> String {
    format!("{initials} Portfolio")
}

/// Where a navigation label sits on the navigation row, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSlot {
    /// Index into the navigation entries.
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

/// The navigation row as drawn: brand text and label placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLayout {
    pub brand: String,
    pub slots: Vec<NavSlot>,
}

/// Lays the navigation bar out on a pane `cols` wide.
///
/// Tightens before dropping anything: the full brand with normal gaps, then
/// single-column gaps, then the bare initials. Labels that still do not fit
/// entirely are left out.
#[must_use]
pub fn nav_layout(initials: &str, labels: &[&str], cols: usize) -> NavLayout {
    let full = brand(initials);
    for (brand, gap) in [(full.as_str(), LABEL_GAP), (full.as_str(), 1)] {
        let slots = nav_slots(brand, labels, cols, gap);
        if slots.len() == labels.len() {
            return NavLayout { brand: brand.to_string(), slots };
        }
    }
    NavLayout {
        brand: initials.to_string(),
        slots: nav_slots(initials, labels, cols, 1),
    }
}

fn nav_slots(brand: &str, labels: &[&str], cols: usize, gap: usize) -> Vec<NavSlot> {
    let mut col = BRAND_COL + display_width(brand) + BRAND_GAP;
    let mut slots = Vec::with_capacity(labels.len());
    for (index, label) in labels.iter().enumerate() {
        let end = col + display_width(label);
        if end > cols {
            break;
        }
        slots.push(NavSlot { index, start: col, end });
        col = end + gap;
    }
    slots
}

/// Column where the brand starts.
#[must_use]
pub const fn brand_col() -> usize {
    BRAND_COL
}

/// Placement of a dialog frame on screen.
///
/// The top border carries the close control `[×]` near its right end; the
/// body sits inside a one-column border plus one column of padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogFrame {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl DialogFrame {
    /// Frame width on a pane `cols` wide.
    #[must_use]
    pub fn width_for(cols: usize) -> usize {
        cols.saturating_sub(4).min(DIALOG_MAX_WIDTH).max(cols.min(12))
    }

    /// Text width inside a frame on a pane `cols` wide.
    #[must_use]
    pub fn inner_width_for(cols: usize) -> usize {
        Self::width_for(cols).saturating_sub(4).max(1)
    }

    /// Centers a frame for `content_lines` lines of body, shrinking to fit.
    #[must_use]
    pub fn fit(rows: usize, cols: usize, content_lines: usize) -> Self {
        let width = Self::width_for(cols);
        let height = (content_lines + 2).min(rows.saturating_sub(2)).max(rows.min(3));
        Self {
            top: rows.saturating_sub(height) / 2,
            left: cols.saturating_sub(width) / 2,
            width,
            height,
        }
    }

    #[must_use]
    pub fn inner_width(&self) -> usize {
        self.width.saturating_sub(4).max(1)
    }

    /// Body lines visible at once.
    #[must_use]
    pub const fn visible_rows(&self) -> usize {
        self.height.saturating_sub(2)
    }

    /// Columns `[start, end)` of the close control on the top border row.
    #[must_use]
    pub fn close_control(&self) -> (usize, usize) {
        let end = self.left + self.width.saturating_sub(2);
        (end.saturating_sub(3), end)
    }

    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top
            && row < self.top + self.height
            && col >= self.left
            && col < self.left + self.width
    }

    /// Classifies a click at a screen position.
    #[must_use]
    pub fn classify(&self, row: usize, col: usize) -> ClickTarget {
        let (close_start, close_end) = self.close_control();
        if row == self.top && (close_start..close_end).contains(&col) {
            ClickTarget::CloseControl
        } else if self.contains(row, col) {
            ClickTarget::Content
        } else {
            ClickTarget::Backdrop
        }
    }
}
