//! Interaction model of the page.
//!
//! The two mechanisms with real state-transition logic live here, free of any
//! terminal or Zellij type:
//!
//! - [`scroll_spy`]: which section is current, and whether the page is scrolled
//! - [`dialog`]: the generic detail dialog controller
//! - [`shell`]: the page-level scroll lock and key observers dialogs borrow
//! - [`viewport`]: the geometry the scroll spy reads
//!
//! # Examples
//!
//! ```
//! use zfolio::domain::Certificate;
//! use zfolio::interaction::{DialogController, DialogKind, PageShell, ShellKey};
//!
//! # fn cert(id: &str) -> Certificate {
//! #     Certificate {
//! #         id: id.to_string(), title: id.to_string(), issuer: String::new(),
//! #         date: String::new(), expires: None, credential_id: None,
//! #         skills: vec![], pdf: None,
//! #     }
//! # }
//! let mut shell = PageShell::new();
//! let mut dialog = DialogController::new(DialogKind::Certificate);
//!
//! dialog.open(cert("delf"), &mut shell);
//! assert!(!shell.can_scroll());
//!
//! for owner in shell.dispatch_key(ShellKey::Escape) {
//!     assert_eq!(owner, DialogKind::Certificate);
//!     dialog.on_key(ShellKey::Escape, &mut shell);
//! }
//! assert!(dialog.selected().is_none());
//! assert!(shell.can_scroll());
//! ```

pub mod dialog;
pub mod scroll_spy;
pub mod shell;
pub mod viewport;

pub use dialog::{ClickTarget, DialogController};
pub use scroll_spy::ScrollSpy;
pub use shell::{Affordance, DialogKind, LockToken, ObserverId, PageShell, ShellKey};
pub use viewport::{Rect, Viewport};
