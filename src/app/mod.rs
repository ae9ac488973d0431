//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! User input → Event → handle_event → AppState changes → Actions → side effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects emitted by the event handler
//! - [`handler`]: event processing and state transitions
//! - [`modes`]: input mode
//! - [`quick_jump`]: fuzzy finder over sections and cards
//! - [`state`]: application state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod quick_jump;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Direction, Event, WHEEL_ROWS};
pub use modes::InputMode;
pub use quick_jump::{JumpTarget, QuickJump};
pub use state::AppState;
