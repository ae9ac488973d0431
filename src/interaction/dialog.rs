//! Generic detail dialog over a [`Selectable`] item.
//!
//! A controller is either closed or showing one item. Entering the open state
//! installs an Escape observer and suspends page scrolling on the
//! [`PageShell`]; leaving it, by any path, gives both back. Replacing the item
//! of an open dialog keeps the existing session, so there is never more than
//! one observer and one lock per controller.
//!
//! Project and certificate dialogs are two instances of this type and share
//! nothing but the shell.

use super::shell::{DialogKind, LockToken, ObserverId, PageShell, ShellKey};
use crate::domain::Selectable;
use tracing::debug;

/// What a click inside a dialog's area landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Outside the content panel.
    Backdrop,
    /// Inside the content panel. Never closes the dialog.
    Content,
    /// The explicit close control.
    CloseControl,
}

/// Resources held while a dialog is open.
#[derive(Debug)]
struct Session {
    escape: ObserverId,
    lock: LockToken,
}

#[derive(Debug)]
pub struct DialogController<T> {
    kind: DialogKind,
    selected: Option<T>,
    session: Option<Session>,
}

impl<T: Selectable> DialogController<T> {
    #[must_use]
    pub const fn new(kind: DialogKind) -> Self {
        Self { kind, selected: None, session: None }
    }

    #[must_use]
    pub const fn kind(&self) -> DialogKind {
        self.kind
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Sets the selection. `None` closes the dialog.
    pub fn select(&mut self, item: Option<T>, shell: &mut PageShell) {
        match item {
            Some(item) => self.open(item, shell),
            None => {
                self.close(shell);
            }
        }
    }

    /// Shows `item`, replacing whatever was shown.
    pub fn open(&mut self, item: T, shell: &mut PageShell) {
        debug!(kind = ?self.kind, id = item.id(), replacing = self.is_open(), "dialog open");
        if self.session.is_none() {
            self.session = Some(Session {
                escape: shell.subscribe_key(self.kind, ShellKey::Escape),
                lock: shell.suspend_scroll(),
            });
        }
        self.selected = Some(item);
    }

    /// Closes the dialog. Returns `false` if it was already closed.
    pub fn close(&mut self, shell: &mut PageShell) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        shell.unsubscribe_key(session.escape);
        shell.release_scroll(session.lock);
        let closed = self.selected.take();
        debug!(kind = ?self.kind, id = closed.as_ref().map(Selectable::id), "dialog closed");
        true
    }

    /// Routes a key the shell dispatched to this dialog.
    ///
    /// Returns `true` if the key closed the dialog.
    pub fn on_key(&mut self, key: ShellKey, shell: &mut PageShell) -> bool {
        key == ShellKey::Escape && self.close(shell)
    }

    /// Handles a click on the dialog overlay. Returns `true` if it closed.
    pub fn on_click(&mut self, target: ClickTarget, shell: &mut PageShell) -> bool {
        match target {
            ClickTarget::Content => false,
            ClickTarget::Backdrop | ClickTarget::CloseControl => self.close(shell),
        }
    }

    /// Tears the controller down, releasing anything it still holds.
    pub fn unmount(&mut self, shell: &mut PageShell) {
        self.close(shell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::fixtures::{certificate, project};
    use crate::domain::{Certificate, Project};
    use crate::interaction::shell::Affordance;

    fn project_dialog() -> DialogController<Project> {
        DialogController::new(DialogKind::Project)
    }

    fn shown<T: Selectable>(dialog: &DialogController<T>) -> Option<&str> {
        dialog.selected().map(Selectable::id)
    }

    #[test]
    fn starts_closed() {
        let dialog = project_dialog();
        assert!(!dialog.is_open());
        assert_eq!(dialog.kind(), DialogKind::Project);
    }

    #[test]
    fn open_installs_observer_and_lock() {
        let mut shell = PageShell::new();
        let mut dialog = project_dialog();
        dialog.open(project("lib", "Web"), &mut shell);

        assert_eq!(shown(&dialog), Some("lib"));
        assert_eq!(shell.observer_count(), 1);
        assert_eq!(shell.affordance(), Affordance::Locked);
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let mut shell = PageShell::new();
        let mut dialog = project_dialog();
        assert!(!dialog.close(&mut shell));

        dialog.open(project("lib", "Web"), &mut shell);
        assert!(dialog.close(&mut shell));
        assert!(!dialog.close(&mut shell));
        assert_eq!(shell.observer_count(), 0);
        assert_eq!(shell.lock_depth(), 0);
    }

    #[test]
    fn reopen_replaces_without_stacking() {
        let mut shell = PageShell::new();
        let mut dialog = project_dialog();
        dialog.open(project("a", "Web"), &mut shell);
        dialog.open(project("b", "Web"), &mut shell);

        assert_eq!(shown(&dialog), Some("b"));
        assert_eq!(shell.observer_count(), 1);
        assert_eq!(shell.lock_depth(), 1);

        dialog.close(&mut shell);
        assert_eq!(shell.affordance(), Affordance::Enabled);
    }

    #[test]
    fn close_restores_the_prior_affordance() {
        for prior in [Affordance::Enabled, Affordance::Locked] {
            let mut shell = PageShell::with_affordance(prior);
            let mut dialog = project_dialog();
            dialog.open(project("a", "Web"), &mut shell);
            dialog.close(&mut shell);
            assert_eq!(shell.affordance(), prior);
        }
    }

    #[test]
    fn escape_closes_exactly_once() {
        let mut shell = PageShell::new();
        let mut dialog = project_dialog();
        dialog.open(project("a", "Web"), &mut shell);

        assert_eq!(shell.dispatch_key(ShellKey::Escape), vec![DialogKind::Project]);
        assert!(dialog.on_key(ShellKey::Escape, &mut shell));
        assert!(shell.dispatch_key(ShellKey::Escape).is_empty());
        assert!(!dialog.on_key(ShellKey::Escape, &mut shell));
    }

    #[test]
    fn other_keys_do_not_close() {
        let mut shell = PageShell::new();
        let mut dialog = project_dialog();
        dialog.open(project("a", "Web"), &mut shell);
        assert!(!dialog.on_key(ShellKey::Enter, &mut shell));
        assert!(dialog.is_open());
    }

    #[test]
    fn content_clicks_stay_open_backdrop_clicks_close() {
        let mut shell = PageShell::new();
        let mut dialog = project_dialog();
        dialog.open(project("a", "Web"), &mut shell);

        assert!(!dialog.on_click(ClickTarget::Content, &mut shell));
        assert!(dialog.is_open());
        assert!(dialog.on_click(ClickTarget::Backdrop, &mut shell));
        assert!(!dialog.is_open());

        dialog.open(project("a", "Web"), &mut shell);
        assert!(dialog.on_click(ClickTarget::CloseControl, &mut shell));
    }

    #[test]
    fn selecting_none_closes() {
        let mut shell = PageShell::new();
        let mut dialog = project_dialog();
        dialog.select(Some(project("a", "Web")), &mut shell);
        dialog.select(None, &mut shell);
        assert!(!dialog.is_open());
        assert_eq!(shell.observer_count(), 0);
    }

    #[test]
    fn unmount_releases_everything() {
        let mut shell = PageShell::new();
        let mut dialog = project_dialog();
        dialog.open(project("a", "Web"), &mut shell);
        dialog.unmount(&mut shell);
        assert_eq!(shell.observer_count(), 0);
        assert_eq!(shell.lock_depth(), 0);
        assert!(shell.can_scroll());
    }

    #[test]
    fn repeated_cycles_do_not_leak() {
        let mut shell = PageShell::new();
        let mut dialog = project_dialog();
        for i in 0..50 {
            dialog.open(project(&i.to_string(), "Web"), &mut shell);
            dialog.on_key(ShellKey::Escape, &mut shell);
        }
        assert_eq!(shell.observer_count(), 0);
        assert_eq!(shell.lock_depth(), 0);
    }

    #[test]
    fn two_controllers_are_independent() {
        let mut shell = PageShell::new();
        let mut projects = project_dialog();
        let mut certs: DialogController<Certificate> = DialogController::new(DialogKind::Certificate);

        projects.open(project("a", "Web"), &mut shell);
        certs.open(certificate("delf"), &mut shell);
        assert_eq!(shell.lock_depth(), 2);

        certs.close(&mut shell);
        assert_eq!(shown(&projects), Some("a"));
        assert!(!shell.can_scroll());

        projects.close(&mut shell);
        assert!(shell.can_scroll());
    }
}
