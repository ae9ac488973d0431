//! Infrastructure: sandbox paths and content loading.

pub mod content;
pub mod paths;

pub use content::{embedded_portfolio, load_portfolio, parse_portfolio, read_portfolio};
pub use paths::{expand_tilde, get_data_dir};
