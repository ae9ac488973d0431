//! Side effects requested by the event handler.
//!
//! The handler never talks to Zellij; it returns actions the plugin shim
//! executes after each event.

use crate::domain::ExternalAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Hands a link to the configured opener command (mail client, browser).
    OpenExternal(ExternalAction),
}
