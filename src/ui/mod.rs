//! Terminal user interface.
//!
//! ```text
//! Portfolio → Document::compose → AppState → compute_viewmodel → UIViewModel → render → ANSI
//! ```
//!
//! # Modules
//!
//! - [`document`]: the page laid out as styled lines, with section anchors
//!   and card slots
//! - [`layout`]: screen rows, navigation slots and dialog frames
//! - [`dialog`]: project and certificate dialog bodies
//! - [`viewmodel`]: display-ready snapshot of the state
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: renderers for each part of the screen
//! - [`helpers`]: column-aware text utilities
//! - [`theme`]: colors and ANSI escapes

pub mod components;
pub mod dialog;
pub mod document;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use document::Document;
pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{FooterInfo, UIViewModel};
