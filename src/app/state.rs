//! Application state and view model computation.
//!
//! [`AppState`] owns everything the plugin knows between events: the content,
//! the composed document and scroll offset, the scroll spy, the page shell
//! and both dialog controllers, card focus, and the quick jump finder.
//!
//! The shell and the controllers are separate fields so a controller can
//! borrow the shell mutably while it opens or closes.
//!
//! # Example
//!
//! ```
//! use zfolio::app::AppState;
//! use zfolio::infrastructure::embedded_portfolio;
//! use zfolio::ui::Theme;
//!
//! let mut state = AppState::new(embedded_portfolio()?, Theme::default(), 4, 1, 2026);
//! state.resize(30, 100);
//! let vm = state.compute_viewmodel();
//! assert!(vm.footer.credit.contains("2026"));
//! # Ok::<(), zfolio::FolioError>(())
//! ```

use super::modes::InputMode;
use super::quick_jump::QuickJump;
use crate::domain::{CardRef, Certificate, NavTarget, Portfolio, Project, Result, SectionId};
use crate::interaction::{DialogController, DialogKind, PageShell, ScrollSpy, ShellKey};
use crate::ui::dialog::{certificate_body, project_body, BodyLine};
use crate::ui::document::Document;
use crate::ui::layout::{self, DialogFrame, NavLayout, NavSlot, BODY_TOP};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyRow, DialogView, EmptyState, FooterInfo, NavBar, NavItem, QuickJumpItem, QuickJumpView,
    UIViewModel,
};
use tracing::debug;

#[derive(Debug)]
pub struct AppState {
    pub portfolio: Portfolio,
    pub theme: Theme,

    /// Page laid out for the current width.
    pub document: Document,
    /// First document line shown at the top of the body.
    pub offset: usize,
    pub rows: usize,
    pub cols: usize,
    mounted: bool,

    pub spy: ScrollSpy,
    pub shell: PageShell,
    pub projects: DialogController<Project>,
    pub certificates: DialogController<Certificate>,
    /// First body line shown inside the open dialog.
    pub dialog_scroll: usize,

    /// Card Tab focus is on.
    pub focused_card: Option<CardRef>,
    pub input_mode: InputMode,
    pub quick_jump: Option<QuickJump>,

    /// Year shown in the footer credit.
    pub year: i32,
}

impl AppState {
    /// Creates the state. Nothing is laid out until the first [`resize`](Self::resize).
    #[must_use]
    pub fn new(
        portfolio: Portfolio,
        theme: Theme,
        focus_line: usize,
        scrolled_threshold: usize,
        year: i32,
    ) -> Self {
        let spy = ScrollSpy::new(&portfolio.navigation, focus_line, scrolled_threshold);
        Self {
            portfolio,
            theme,
            document: Document::default(),
            offset: 0,
            rows: 0,
            cols: 0,
            mounted: false,
            spy,
            shell: PageShell::new(),
            projects: DialogController::new(DialogKind::Project),
            certificates: DialogController::new(DialogKind::Certificate),
            dialog_scroll: 0,
            focused_card: None,
            input_mode: InputMode::Page,
            quick_jump: None,
            year,
        }
    }

    /// Applies new pane dimensions, re-laying the page out if the width
    /// changed. The first call mounts the scroll spy.
    ///
    /// A reflow is not a scroll and ignores the scroll lock: the offset
    /// follows the reading position into the new layout, keeping the same
    /// section and the same relative place in it, and is clamped to the new
    /// page length.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if cols != self.cols || !self.mounted {
            let reading = self.reading_position();
            self.document = Document::compose(&self.portfolio, cols);
            debug!(cols, lines = self.document.len(), "document composed");
            if let Some((id, into, old_len)) = reading {
                if let Some(anchor) = self.document.anchor(&id) {
                    let len = anchor.end - anchor.start + 1;
                    self.offset = anchor.start + into * len / old_len;
                }
            }
        }
        self.rows = rows;
        self.cols = cols;
        self.offset = self.offset.min(self.max_offset());
        self.dialog_scroll = self.dialog_scroll.min(self.max_dialog_scroll());

        let viewport = self.document.viewport(self.offset, BODY_TOP);
        if self.mounted {
            self.spy.on_scroll(&viewport);
        } else {
            self.spy.mount(&viewport);
            self.mounted = true;
        }
    }

    /// Section under the top body row, the lines read into it and its length.
    fn reading_position(&self) -> Option<(SectionId, usize, usize)> {
        let anchor = self
            .document
            .anchors()
            .iter()
            .find(|a| (a.start..=a.end).contains(&self.offset))?;
        Some((anchor.id.clone(), self.offset - anchor.start, anchor.end - anchor.start + 1))
    }

    #[must_use]
    pub fn body_rows(&self) -> usize {
        layout::body_rows(self.rows)
    }

    #[must_use]
    pub fn max_offset(&self) -> usize {
        self.document.len().saturating_sub(self.body_rows())
    }

    /// Scrolls the page to `offset` (clamped) and updates the scroll spy.
    ///
    /// Returns `false` without moving while the shell has scrolling locked.
    pub fn scroll_to(&mut self, offset: usize) -> bool {
        if !self.shell.can_scroll() {
            debug!("scroll ignored, page is locked");
            return false;
        }
        let offset = offset.min(self.max_offset());
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        self.spy.on_scroll(&self.document.viewport(self.offset, BODY_TOP));
        true
    }

    pub fn scroll_by(&mut self, delta: isize) -> bool {
        self.scroll_to(self.offset.saturating_add_signed(delta))
    }

    /// Scrolls so the section's first line sits on the focus line.
    ///
    /// Returns `false` if the page has no such section.
    pub fn scroll_to_section(&mut self, target: &NavTarget) -> bool {
        let Some(anchor) = target.section().and_then(|id| self.document.anchor(id)) else {
            return false;
        };
        let focus = usize::try_from(self.spy.focus_line()).unwrap_or(0);
        let offset = (anchor.start + BODY_TOP).saturating_sub(focus);
        self.scroll_to(offset);
        true
    }

    /// True while either detail dialog is open.
    #[must_use]
    pub const fn dialog_open(&self) -> bool {
        self.projects.is_open() || self.certificates.is_open()
    }

    /// Opens the dialog for `card`.
    ///
    /// # Errors
    ///
    /// Returns a content error if the card no longer exists.
    pub fn open_card(&mut self, card: CardRef) -> Result<()> {
        match card {
            CardRef::Project(i) => {
                let project = self.portfolio.project(i)?.clone();
                self.projects.open(project, &mut self.shell);
            }
            CardRef::Certificate(i) => {
                let cert = self.portfolio.certificate(i)?.clone();
                self.certificates.open(cert, &mut self.shell);
            }
        }
        self.focused_card = Some(card);
        self.dialog_scroll = 0;
        Ok(())
    }

    /// Closes whichever dialogs the shell routed a key to.
    ///
    /// Returns `true` if any dialog closed.
    pub fn route_key(&mut self, key: ShellKey) -> bool {
        let mut closed = false;
        for owner in self.shell.dispatch_key(key) {
            closed |= match owner {
                DialogKind::Project => self.projects.on_key(key, &mut self.shell),
                DialogKind::Certificate => self.certificates.on_key(key, &mut self.shell),
            };
        }
        closed
    }

    /// Moves card focus forward or backward through the page, then scrolls
    /// the focused card into view.
    pub fn cycle_focus(&mut self, forward: bool) -> bool {
        let cards = self.document.cards();
        if cards.is_empty() {
            return false;
        }
        let current = self
            .focused_card
            .and_then(|card| cards.iter().position(|slot| slot.card == card));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => cards.len() - 1,
            (Some(i), true) => (i + 1) % cards.len(),
            (Some(i), false) => i.checked_sub(1).unwrap_or(cards.len() - 1),
        };
        let card = cards[next].card;
        self.focused_card = Some(card);
        self.reveal_card(card);
        true
    }

    /// Focuses `card` and scrolls it into view.
    ///
    /// # Errors
    ///
    /// Returns a content error if the card no longer exists.
    pub fn focus_card(&mut self, card: CardRef) -> Result<()> {
        match card {
            CardRef::Project(i) => {
                self.portfolio.project(i)?;
            }
            CardRef::Certificate(i) => {
                self.portfolio.certificate(i)?;
            }
        }
        self.focused_card = Some(card);
        self.reveal_card(card);
        Ok(())
    }

    /// Scrolls the least amount that shows the whole card, or its top if it
    /// is taller than the body.
    pub fn reveal_card(&mut self, card: CardRef) {
        let Some(slot) = self.document.card_slot(card).copied() else {
            return;
        };
        let rows = self.body_rows().max(1);
        if slot.start < self.offset {
            self.scroll_to(slot.start);
        } else if slot.end >= self.offset + rows {
            self.scroll_to((slot.end + 1).saturating_sub(rows).min(slot.start));
        }
    }

    /// Lines of the open dialog's body, laid out for the current width.
    #[must_use]
    pub fn dialog_body(&self) -> Option<(DialogKind, Vec<BodyLine>)> {
        let width = DialogFrame::inner_width_for(self.cols);
        if let Some(cert) = self.certificates.selected() {
            return Some((DialogKind::Certificate, certificate_body(cert, width)));
        }
        self.projects
            .selected()
            .map(|project| (DialogKind::Project, project_body(project, width)))
    }

    /// Frame of the open dialog on screen.
    #[must_use]
    pub fn dialog_frame(&self) -> Option<DialogFrame> {
        self.dialog_body()
            .map(|(_, body)| DialogFrame::fit(self.rows, self.cols, body.len()))
    }

    #[must_use]
    pub fn max_dialog_scroll(&self) -> usize {
        match (self.dialog_body(), self.dialog_frame()) {
            (Some((_, body)), Some(frame)) => body.len().saturating_sub(frame.visible_rows()),
            _ => 0,
        }
    }

    /// Scrolls the open dialog's body. The page itself stays put.
    pub fn scroll_dialog(&mut self, delta: isize) -> bool {
        let next = self.dialog_scroll.saturating_add_signed(delta).min(self.max_dialog_scroll());
        let moved = next != self.dialog_scroll;
        self.dialog_scroll = next;
        moved
    }

    /// The navigation bar at the current width.
    #[must_use]
    pub fn nav_layout(&self) -> NavLayout {
        let labels: Vec<&str> = self.portfolio.navigation.iter().map(|e| e.label.as_str()).collect();
        layout::nav_layout(&self.portfolio.profile.initials, &labels, self.cols)
    }

    #[must_use]
    pub fn nav_slots(&self) -> Vec<NavSlot> {
        self.nav_layout().slots
    }

    /// Snapshot of everything the renderer draws.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let active = self.spy.active_section();
        let NavLayout { brand, slots } = self.nav_layout();
        let items = slots
            .into_iter()
            .map(|slot| {
                let entry = &self.portfolio.navigation[slot.index];
                NavItem {
                    label: entry.label.clone(),
                    start: slot.start,
                    active: active.is_some() && entry.target.section() == active,
                }
            })
            .collect();

        let nav = NavBar {
            brand,
            items,
            scrolled: self.spy.is_scrolled(),
        };

        let body = self
            .document
            .lines()
            .iter()
            .skip(self.offset)
            .take(self.body_rows())
            .map(|line| BodyRow {
                line: line.clone(),
                focused: line.card.is_some() && line.card == self.focused_card,
            })
            .collect();

        UIViewModel {
            nav,
            body,
            footer: self.compute_footer(),
            dialog: self.compute_dialog(),
            quick_jump: self.compute_quick_jump(),
            empty_state: self.compute_empty_state(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        layout::too_small(self.rows, self.cols).then(|| EmptyState {
            message: "Fenêtre trop petite".to_string(),
            subtitle: format!("{}x{} minimum", layout::MIN_COLS, layout::MIN_ROWS),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.dialog_open() {
            "Esc fermer · j/k défiler · o ouvrir le lien"
        } else if self.input_mode == InputMode::QuickJump {
            "Enter aller · ↑/↓ choisir · Esc annuler"
        } else {
            "1-9 sections · Tab cartes · Enter ouvrir · / chercher · q quitter"
        };

        let max_offset = self.max_offset();
        let position = if max_offset == 0 {
            "tout".to_string()
        } else {
            format!("{}%", self.offset * 100 / max_offset)
        };

        FooterInfo {
            credit: self.portfolio.footer.replace("{year}", &self.year.to_string()),
            keybindings: keybindings.to_string(),
            position,
        }
    }

    fn compute_dialog(&self) -> Option<DialogView> {
        let (kind, body) = self.dialog_body()?;
        let frame = DialogFrame::fit(self.rows, self.cols, body.len());
        let visible = frame.visible_rows();
        let more_below = self.dialog_scroll + visible < body.len();
        Some(DialogView {
            kind,
            frame,
            more_above: self.dialog_scroll > 0,
            more_below,
            lines: body.into_iter().skip(self.dialog_scroll).take(visible).collect(),
        })
    }

    fn compute_quick_jump(&self) -> Option<QuickJumpView> {
        let jump = self.quick_jump.as_ref()?;
        let items = jump
            .matches()
            .iter()
            .enumerate()
            .filter_map(|(i, m)| {
                let candidate = jump.candidates().get(m.candidate)?;
                Some(QuickJumpItem {
                    label: candidate.label.clone(),
                    kind: candidate.kind,
                    indices: m.indices.clone(),
                    selected: i == jump.selected,
                })
            })
            .collect();
        Some(QuickJumpView { query: jump.query.clone(), items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::fixtures::portfolio;

    fn state() -> AppState {
        let mut state = AppState::new(portfolio(), Theme::default(), 4, 1, 2026);
        state.resize(20, 60);
        state
    }

    #[test]
    fn mount_evaluates_the_spy_once() {
        let state = state();
        // The profile header sits above the first section at offset 0.
        assert_eq!(state.offset, 0);
        assert_eq!(state.spy.active_section(), None);
        assert!(!state.spy.is_scrolled());
    }

    #[test]
    fn reflow_keeps_the_reading_position_while_locked() {
        let mut state = AppState::new(portfolio(), Theme::default(), 4, 1, 2026);
        state.resize(8, 60);
        let formations = SectionId::new("formations");
        let start = state.document.anchor(&formations).unwrap().start;
        assert!(state.scroll_to(start + 1));
        state.open_card(CardRef::Project(0)).unwrap();

        state.resize(8, 120);
        let anchor = state.document.anchor(&formations).unwrap();
        assert!((anchor.start..=anchor.end).contains(&state.offset));
        assert!(state.projects.is_open());
        assert_eq!(state.shell.lock_depth(), 1);
        assert!(!state.scroll_by(1));
    }

    #[test]
    fn section_jump_puts_heading_on_focus_line() {
        let mut state = AppState::new(portfolio(), Theme::default(), 4, 1, 2026);
        state.resize(12, 60);
        let about = SectionId::new("about");
        assert!(state.scroll_to_section(&NavTarget::Section(about.clone())));

        let anchor = state.document.anchor(&about).unwrap();
        assert_eq!(state.offset, anchor.start + BODY_TOP - 4);
        assert_eq!(state.spy.active_section(), Some(&about));
        assert!(state.spy.is_scrolled());
    }

    #[test]
    fn every_nav_entry_fits_at_eighty_columns() {
        let mut state = AppState::new(portfolio(), Theme::default(), 4, 1, 2026);
        state.resize(20, 80);
        let nav = state.compute_viewmodel().nav;
        assert_eq!(nav.items.len(), state.portfolio.navigation.len());
        assert_eq!(nav.items.last().map(|item| item.label.as_str()), Some("Contact"));
    }

    #[test]
    fn missing_sections_are_ignored() {
        let mut state = state();
        assert!(!state.scroll_to_section(&NavTarget::Section(SectionId::new("nowhere"))));
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn scroll_is_clamped() {
        let mut state = state();
        state.scroll_by(-5);
        assert_eq!(state.offset, 0);
        state.scroll_by(10_000);
        assert_eq!(state.offset, state.max_offset());
    }

    #[test]
    fn dialogs_lock_page_scrolling() {
        let mut state = state();
        state.open_card(CardRef::Project(0)).unwrap();
        assert!(!state.scroll_by(3));
        assert_eq!(state.offset, 0);

        assert!(state.route_key(ShellKey::Escape));
        assert!(state.scroll_by(3));
    }

    #[test]
    fn stale_cards_are_errors() {
        let mut state = state();
        assert!(state.open_card(CardRef::Certificate(42)).is_err());
        assert!(!state.dialog_open());
    }

    #[test]
    fn focus_cycles_through_cards_and_wraps() {
        let mut state = state();
        let order: Vec<_> = state.document.cards().iter().map(|s| s.card).collect();
        for expected in order.iter().chain(order.first()) {
            state.cycle_focus(true);
            assert_eq!(state.focused_card, Some(*expected));
            let slot = *state.document.card_slot(*expected).unwrap();
            assert!(slot.start >= state.offset);
        }
        state.cycle_focus(false);
        assert_eq!(state.focused_card, order.last().copied());
    }

    #[test]
    fn footer_replaces_year() {
        let vm = state().compute_viewmodel();
        assert_eq!(vm.footer.credit, "© 2026 Ada");
    }

    #[test]
    fn viewmodel_marks_active_nav_item() {
        let mut state = state();
        state.scroll_to_section(&NavTarget::Section(SectionId::new("about")));
        let vm = state.compute_viewmodel();
        let active: Vec<_> = vm.nav.items.iter().filter(|i| i.active).map(|i| i.label.as_str()).collect();
        assert_eq!(active, ["About"]);
    }

    #[test]
    fn tiny_panes_get_an_empty_state() {
        let mut state = state();
        assert!(state.compute_viewmodel().empty_state.is_none());
        state.resize(5, 20);
        assert!(state.compute_viewmodel().empty_state.is_some());
    }

    #[test]
    fn dialog_view_scrolls_its_own_body() {
        let mut state = AppState::new(portfolio(), Theme::default(), 4, 1, 2026);
        state.resize(8, 40);
        state.open_card(CardRef::Project(0)).unwrap();
        let max = state.max_dialog_scroll();
        assert!(max > 0);
        assert!(state.scroll_dialog(100));
        assert_eq!(state.dialog_scroll, max);
        let vm = state.compute_viewmodel();
        let dialog = vm.dialog.unwrap();
        assert!(dialog.more_above);
        assert!(!dialog.more_below);
    }
}
