//! Input mode of the plugin.
//!
//! Whether a detail dialog is open is not a mode: it is read from the dialog
//! controllers, which own that state. The mode only says how typed characters
//! are interpreted.

/// How key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Reading the page: keys scroll, navigate and open cards.
    #[default]
    Page,

    /// The quick jump finder is open and typed characters go to its query.
    QuickJump,
}
