//! Page shell: the page-level resources dialogs borrow while open.
//!
//! Two resources live here instead of in ambient globals:
//!
//! - the **scroll lock**, a reference-counted suspension of page scrolling.
//!   The first holder records the affordance in effect, the last release
//!   puts exactly that affordance back.
//! - the **key observers**, a subscribe/unsubscribe registry standing in for
//!   global key listeners. Dispatching a key returns the owners whose filter
//!   matched; the caller routes the key to them.

use tracing::{debug, trace};

/// Whether the page may currently scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Affordance {
    #[default]
    Enabled,
    Locked,
}

/// Keys the shell can route to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKey {
    Escape,
    Enter,
    Char(char),
}

/// Which dialog owns an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Project,
    Certificate,
}

/// Proof of a scroll suspension. Consumed by [`PageShell::release_scroll`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a scroll lock is held until its token is released"]
pub struct LockToken(u64);

/// Handle of a key subscription.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping the id leaks the subscription"]
pub struct ObserverId(u64);

#[derive(Debug)]
struct Observer {
    id: u64,
    owner: DialogKind,
    key: ShellKey,
}

#[derive(Debug, Default)]
pub struct PageShell {
    affordance: Affordance,
    saved: Option<Affordance>,
    holders: Vec<u64>,
    observers: Vec<Observer>,
    next_id: u64,
}

impl PageShell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the given affordance, e.g. a page that is locked for
    /// reasons of its own.
    #[must_use]
    pub fn with_affordance(affordance: Affordance) -> Self {
        Self { affordance, ..Self::default() }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    #[must_use]
    pub const fn affordance(&self) -> Affordance {
        self.affordance
    }

    #[must_use]
    pub fn can_scroll(&self) -> bool {
        self.affordance == Affordance::Enabled
    }

    /// Changes the page's own affordance. While suspended, the change is
    /// recorded and applied when the last lock is released.
    pub fn set_affordance(&mut self, affordance: Affordance) {
        match self.saved.as_mut() {
            Some(saved) => *saved = affordance,
            None => self.affordance = affordance,
        }
    }

    /// Suspends page scrolling until the returned token is released.
    pub fn suspend_scroll(&mut self) -> LockToken {
        if self.holders.is_empty() {
            self.saved = Some(self.affordance);
            self.affordance = Affordance::Locked;
            debug!(prior = ?self.saved, "page scroll suspended");
        }
        let id = self.next_id();
        self.holders.push(id);
        LockToken(id)
    }

    /// Releases one suspension. The prior affordance comes back when the last
    /// holder lets go.
    pub fn release_scroll(&mut self, token: LockToken) {
        let Some(pos) = self.holders.iter().position(|&id| id == token.0) else {
            return;
        };
        self.holders.remove(pos);
        if self.holders.is_empty() {
            if let Some(prior) = self.saved.take() {
                self.affordance = prior;
            }
            debug!(restored = ?self.affordance, "page scroll restored");
        }
    }

    /// Number of outstanding scroll suspensions.
    #[must_use]
    pub fn lock_depth(&self) -> usize {
        self.holders.len()
    }

    /// Registers `owner` for presses of `key`.
    pub fn subscribe_key(&mut self, owner: DialogKind, key: ShellKey) -> ObserverId {
        let id = self.next_id();
        self.observers.push(Observer { id, owner, key });
        trace!(?owner, ?key, id, "key observer installed");
        ObserverId(id)
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe_key(&mut self, observer: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| o.id != observer.0);
        let removed = self.observers.len() != before;
        if removed {
            trace!(id = observer.0, "key observer removed");
        }
        removed
    }

    /// Owners subscribed to `key`, in subscription order.
    #[must_use]
    pub fn dispatch_key(&self, key: ShellKey) -> Vec<DialogKind> {
        self.observers
            .iter()
            .filter(|o| o.key == key)
            .map(|o| o.owner)
            .collect()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_lock_restores_prior_affordance() {
        let mut shell = PageShell::new();
        let token = shell.suspend_scroll();
        assert!(!shell.can_scroll());
        shell.release_scroll(token);
        assert_eq!(shell.affordance(), Affordance::Enabled);

        let mut shell = PageShell::with_affordance(Affordance::Locked);
        let token = shell.suspend_scroll();
        shell.release_scroll(token);
        assert_eq!(shell.affordance(), Affordance::Locked);
    }

    #[test]
    fn nested_locks_restore_once_all_released() {
        let mut shell = PageShell::new();
        let first = shell.suspend_scroll();
        let second = shell.suspend_scroll();
        assert_eq!(shell.lock_depth(), 2);

        shell.release_scroll(first);
        assert_eq!(shell.affordance(), Affordance::Locked);
        shell.release_scroll(second);
        assert_eq!(shell.affordance(), Affordance::Enabled);
        assert_eq!(shell.lock_depth(), 0);
    }

    #[test]
    fn affordance_changes_while_locked_apply_on_release() {
        let mut shell = PageShell::new();
        let token = shell.suspend_scroll();
        shell.set_affordance(Affordance::Locked);
        assert_eq!(shell.affordance(), Affordance::Locked);
        shell.release_scroll(token);
        assert_eq!(shell.affordance(), Affordance::Locked);
    }

    #[test]
    fn dispatch_routes_to_matching_owners() {
        let mut shell = PageShell::new();
        let project = shell.subscribe_key(DialogKind::Project, ShellKey::Escape);
        let _cert = shell.subscribe_key(DialogKind::Certificate, ShellKey::Escape);
        let _enter = shell.subscribe_key(DialogKind::Project, ShellKey::Enter);

        assert_eq!(
            shell.dispatch_key(ShellKey::Escape),
            vec![DialogKind::Project, DialogKind::Certificate]
        );
        assert!(shell.dispatch_key(ShellKey::Char('q')).is_empty());

        assert!(shell.unsubscribe_key(project));
        assert_eq!(shell.dispatch_key(ShellKey::Escape), vec![DialogKind::Certificate]);
        assert_eq!(shell.observer_count(), 2);
    }

    #[test]
    fn unsubscribing_twice_is_reported() {
        let mut shell = PageShell::new();
        let id = shell.subscribe_key(DialogKind::Project, ShellKey::Escape);
        let stale = ObserverId(id.0);
        assert!(shell.unsubscribe_key(id));
        assert!(!shell.unsubscribe_key(stale));
    }
}
