//! Scroll-spy navigator.
//!
//! Derives which section is "current" from viewport geometry: the first
//! section, in navigation order, whose rectangle straddles the focus line. When
//! nothing straddles the line (a gap between sections, or the page header) the
//! previous answer is kept, so the highlight never flickers back to nothing.
//!
//! Also tracks the scrolled flag the navigation bar uses for its styling.

use super::viewport::Viewport;
use crate::domain::{NavigationEntry, SectionId};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    /// In-page targets of the navigation entries, in declared order.
    sections: Vec<SectionId>,
    focus_line: isize,
    scrolled_threshold: usize,
    active: Option<SectionId>,
    scrolled: bool,
}

impl ScrollSpy {
    /// Creates a spy over the section targets of `entries`.
    ///
    /// External entries are ignored. Nothing is active until the first
    /// [`mount`](Self::mount) or [`on_scroll`](Self::on_scroll).
    #[must_use]
    pub fn new(entries: &[NavigationEntry], focus_line: usize, scrolled_threshold: usize) -> Self {
        Self {
            sections: entries
                .iter()
                .filter_map(|entry| entry.target.section().cloned())
                .collect(),
            focus_line: isize::try_from(focus_line).unwrap_or(isize::MAX),
            scrolled_threshold,
            active: None,
            scrolled: false,
        }
    }

    /// Evaluates the viewport once, so the first frame already reflects a
    /// non-zero initial scroll position.
    pub fn mount(&mut self, viewport: &impl Viewport) {
        self.refresh(viewport);
    }

    /// Recomputes both signals after a scroll. Returns `true` if either changed.
    pub fn on_scroll(&mut self, viewport: &impl Viewport) -> bool {
        self.refresh(viewport)
    }

    fn refresh(&mut self, viewport: &impl Viewport) -> bool {
        let before = (self.active.clone(), self.scrolled);
        self.compute_active_section(viewport);
        self.compute_scrolled_flag(viewport);
        let changed = before != (self.active.clone(), self.scrolled);
        if changed {
            trace!(active = ?self.active, scrolled = self.scrolled, "scroll spy updated");
        }
        changed
    }

    /// Updates the active section from the current geometry.
    ///
    /// Sections whose anchor is missing from the page are skipped. If no
    /// section straddles the focus line, the previous value stays.
    pub fn compute_active_section(&mut self, viewport: &impl Viewport) -> Option<&SectionId> {
        if let Some(hit) = self.straddling(viewport) {
            if self.active.as_ref() != Some(hit) {
                self.active = Some(hit.clone());
            }
        }
        self.active.as_ref()
    }

    /// Updates the scrolled flag: true once the offset exceeds the threshold.
    pub fn compute_scrolled_flag(&mut self, viewport: &impl Viewport) -> bool {
        self.scrolled = viewport.scroll_offset() > self.scrolled_threshold;
        self.scrolled
    }

    fn straddling(&self, viewport: &impl Viewport) -> Option<&SectionId> {
        self.sections.iter().find(|id| {
            viewport
                .section_rect(id)
                .is_some_and(|rect| rect.straddles(self.focus_line))
        })
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub const fn focus_line(&self) -> isize {
        self.focus_line
    }

    /// Section targets in declared order.
    #[must_use]
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExternalAction;
    use crate::interaction::viewport::fake::FakeViewport;

    fn entries() -> Vec<NavigationEntry> {
        vec![
            NavigationEntry::section("About", "about"),
            NavigationEntry::section("Formations", "formations"),
            NavigationEntry::section("Experience", "experience"),
            NavigationEntry::external(
                "Contact",
                ExternalAction::OpenUrl { url: "https://example.com".to_string() },
            ),
        ]
    }

    fn spy() -> ScrollSpy {
        ScrollSpy::new(&entries(), 100, 10)
    }

    fn active(spy: &ScrollSpy) -> Option<&str> {
        spy.active_section().map(SectionId::as_str)
    }

    #[test]
    fn external_entries_are_not_spied() {
        assert_eq!(spy().sections().len(), 3);
    }

    #[test]
    fn picks_the_section_under_the_focus_line() {
        let mut spy = spy();
        let viewport = FakeViewport::with(&[
            ("about", -500, -10),
            ("formations", 0, 400),
            ("experience", 401, 900),
        ]);
        spy.mount(&viewport);
        assert_eq!(active(&spy), Some("formations"));
    }

    #[test]
    fn edges_count_as_straddling() {
        let mut spy = spy();
        spy.mount(&FakeViewport::with(&[("about", 100, 200)]));
        assert_eq!(active(&spy), Some("about"));

        let mut spy = ScrollSpy::new(&entries(), 100, 10);
        spy.mount(&FakeViewport::with(&[("about", 0, 100)]));
        assert_eq!(active(&spy), Some("about"));
    }

    #[test]
    fn overlapping_sections_resolve_to_declared_order() {
        let mut spy = spy();
        spy.mount(&FakeViewport::with(&[
            ("experience", 0, 300),
            ("formations", 50, 150),
        ]));
        assert_eq!(active(&spy), Some("formations"));
    }

    #[test]
    fn keeps_previous_section_across_gaps() {
        let mut spy = spy();
        let mut viewport = FakeViewport::with(&[("about", 0, 150), ("formations", 200, 400)]);
        spy.mount(&viewport);
        assert_eq!(active(&spy), Some("about"));

        // Focus line now falls between the two sections.
        viewport.scroll_by(60);
        spy.on_scroll(&viewport);
        assert_eq!(active(&spy), Some("about"));

        viewport.scroll_by(60);
        assert!(spy.on_scroll(&viewport));
        assert_eq!(active(&spy), Some("formations"));
    }

    #[test]
    fn missing_anchors_are_skipped() {
        let mut spy = spy();
        spy.mount(&FakeViewport::with(&[("experience", 90, 120)]));
        assert_eq!(active(&spy), Some("experience"));
    }

    #[test]
    fn nothing_active_before_any_section_is_reached() {
        let mut spy = spy();
        spy.mount(&FakeViewport::with(&[("about", 300, 600)]));
        assert_eq!(active(&spy), None);
        assert!(!spy.is_scrolled());
    }

    #[test]
    fn scrolled_flag_is_strictly_greater_than_threshold() {
        let mut spy = spy();
        let mut viewport = FakeViewport::default();
        viewport.offset = 10;
        assert!(!spy.compute_scrolled_flag(&viewport));
        viewport.offset = 11;
        assert!(spy.compute_scrolled_flag(&viewport));
        viewport.offset = 0;
        assert!(!spy.compute_scrolled_flag(&viewport));
    }

    #[test]
    fn at_most_one_section_is_active_over_a_sweep() {
        let mut spy = spy();
        let mut viewport = FakeViewport::with(&[
            ("about", 0, 300),
            ("formations", 250, 700),
            ("experience", 710, 1200),
        ]);
        spy.mount(&viewport);
        let mut seen = Vec::new();
        for _ in 0..120 {
            viewport.scroll_by(10);
            spy.on_scroll(&viewport);
            if let Some(id) = spy.active_section() {
                if seen.last() != Some(id) {
                    seen.push(id.clone());
                }
            }
        }
        let seen: Vec<_> = seen.iter().map(SectionId::as_str).collect();
        assert_eq!(seen, ["about", "formations", "experience"]);
    }
}
