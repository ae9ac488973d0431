//! Error types for the zfolio plugin.
//!
//! This module defines the centralized error type [`FolioError`] and a type alias
//! [`Result`] used throughout the crate. Errors are built with `thiserror`.
//!
//! The interaction core (scroll spy, dialogs) has no failure modes of its own:
//! missing sections are skipped and empty selections mean "closed". Errors only
//! surface at the edges, when content or theme files are loaded, or when an
//! event points at a card the loaded content does not have.

use thiserror::Error;

/// The main error type for zfolio operations.
///
/// # Examples
///
/// ```
/// use zfolio::FolioError;
///
/// fn first_project(ids: &[&str]) -> Result<String, FolioError> {
///     ids.first()
///         .map(|id| id.to_string())
///         .ok_or_else(|| FolioError::Content("no projects".to_string()))
/// }
/// assert_eq!(
///     first_project(&[]).unwrap_err().to_string(),
///     "Content error: no projects"
/// );
/// ```
#[derive(Debug, Error)]
pub enum FolioError {
    /// Portfolio content is inconsistent or references something missing.
    #[error("Content error: {0}")]
    Content(String),

    /// A TOML document (content or theme) could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme lookup or parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for zfolio operations.
pub type Result<T> = std::result::Result<T, FolioError>;
