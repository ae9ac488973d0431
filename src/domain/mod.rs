//! Domain layer for the zfolio plugin.
//!
//! Plain data and rules with no dependency on Zellij or the terminal:
//!
//! - [`error`]: error type and result alias
//! - [`section`]: section identifiers and navigation entries
//! - [`content`]: the static portfolio records a page is built from
//!
//! # Examples
//!
//! ```
//! use zfolio::domain::{NavTarget, NavigationEntry};
//!
//! let entry = NavigationEntry::section("About", "about");
//! assert!(matches!(entry.target, NavTarget::Section(_)));
//! ```

pub mod content;
pub mod error;
pub mod section;

pub use content::{
    About, CardRef, Certificate, Experience, Formation, Portfolio, Profile, ProfileLink, Project,
    ProjectDetails, ProjectLinks, SectionTitles, Selectable, Skill, SkillCategory, SkillLevel,
    ThemeBlock, PROJECTS_PER_THEME,
};
pub use error::{FolioError, Result};
pub use section::{ExternalAction, NavTarget, NavigationEntry, SectionId};
