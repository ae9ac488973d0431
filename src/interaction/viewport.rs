//! Viewport geometry consumed by the scroll spy.

use crate::domain::SectionId;

/// Vertical extent of a section, in rows relative to the top of the viewport.
///
/// Rows above the viewport are negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub top: isize,
    pub bottom: isize,
}

impl Rect {
    #[must_use]
    pub const fn new(top: isize, bottom: isize) -> Self {
        Self { top, bottom }
    }

    /// True if the horizontal line at `line` crosses this rectangle,
    /// edges included.
    ///
    /// # Examples
    ///
    /// ```
    /// use zfolio::interaction::Rect;
    ///
    /// let rect = Rect::new(-3, 4);
    /// assert!(rect.straddles(4));
    /// assert!(!rect.straddles(5));
    /// ```
    #[must_use]
    pub const fn straddles(&self, line: isize) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Read-only view of the page the scroll spy reads.
pub trait Viewport {
    /// Current vertical scroll offset, in rows.
    fn scroll_offset(&self) -> usize;

    /// Current rectangle of a section, or `None` when the page has no such
    /// anchor.
    fn section_rect(&self, id: &SectionId) -> Option<Rect>;
}

#[cfg(test)]
pub(crate) mod fake {
    use super::{Rect, Viewport};
    use crate::domain::SectionId;
    use std::collections::HashMap;

    /// In-memory viewport with hand-placed sections.
    #[derive(Debug, Default)]
    pub struct FakeViewport {
        pub offset: usize,
        pub rects: HashMap<SectionId, Rect>,
    }

    impl FakeViewport {
        pub fn with(sections: &[(&str, isize, isize)]) -> Self {
            Self {
                offset: 0,
                rects: sections
                    .iter()
                    .map(|&(id, top, bottom)| (SectionId::new(id), Rect::new(top, bottom)))
                    .collect(),
            }
        }

        /// Moves every section up by `rows`, as scrolling down would.
        pub fn scroll_by(&mut self, rows: isize) {
            self.offset = self.offset.saturating_add_signed(rows);
            for rect in self.rects.values_mut() {
                rect.top -= rows;
                rect.bottom -= rows;
            }
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> usize {
            self.offset
        }

        fn section_rect(&self, id: &SectionId) -> Option<Rect> {
            self.rects.get(id).copied()
        }
    }
}
