//! Portfolio content records.
//!
//! The content is static: it is deserialized once from TOML (see
//! [`crate::infrastructure::content`]) and only read afterwards. Projects and
//! certificates are the two kinds of [`Selectable`] items a detail dialog can
//! show.

use crate::domain::error::{FolioError, Result};
use crate::domain::section::{NavTarget, NavigationEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of projects shown per theme block.
pub const PROJECTS_PER_THEME: usize = 4;

/// A record a detail dialog can be opened on.
pub trait Selectable {
    /// Stable identifier, unique within its kind.
    fn id(&self) -> &str;

    /// Title shown in the dialog header.
    fn title(&self) -> &str;
}

/// The complete static content of the portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub navigation: Vec<NavigationEntry>,
    #[serde(default)]
    pub titles: SectionTitles,
    pub about: About,
    #[serde(default)]
    pub formations: Vec<Formation>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    /// Theme blocks of the projects section, in display order.
    #[serde(default)]
    pub project_themes: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    /// Footer line; `{year}` is replaced with the current year.
    pub footer: String,
}

/// Name, tagline and contact links at the top of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Brand shown at the left of the navigation bar.
    pub initials: String,
    pub tagline: String,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

/// A link under the profile name. The href takes the same forms as a
/// navigation entry's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub href: NavTarget,
}

/// Headings of the page sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionTitles {
    pub about: String,
    pub formations: String,
    pub experience: String,
    pub projects: String,
    pub skills: String,
    pub certificates: String,
}

impl Default for SectionTitles {
    fn default() -> Self {
        Self {
            about: "À propos de moi".to_string(),
            formations: "Parcours académique".to_string(),
            experience: "Apprentissages & Réalisations".to_string(),
            projects: "Projets académiques".to_string(),
            skills: "Compétences techniques & personnelles".to_string(),
            certificates: "Certifications".to_string(),
        }
    }
}

/// The "about me" section. Paragraphs may mark `*highlighted*` phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    pub institution: String,
    pub diploma: String,
    pub period: String,
    pub competences: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub date: String,
    pub institution: String,
    pub location: String,
    pub summary: String,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub theme: String,
    pub details: ProjectDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub overview: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

/// Optional links of a project. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub paper: Option<String>,
}

impl ProjectLinks {
    /// Returns the `(label, url)` pairs that are actually set.
    #[must_use]
    pub fn present(&self) -> Vec<(&'static str, &str)> {
        [("repo", &self.repo), ("demo", &self.demo), ("paper", &self.paper)]
            .into_iter()
            .filter_map(|(label, url)| {
                url.as_deref()
                    .map(str::trim)
                    .filter(|u| !u.is_empty())
                    .map(|u| (label, u))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub expires: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub pdf: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed mastery, clamped to 100 when displayed.
    pub percentage: u8,
}

/// Coarse mastery level derived from a skill percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Débutant",
            Self::Intermediate => "Intermédiaire",
            Self::Advanced => "Avancé",
        }
    }
}

impl Skill {
    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.percentage.min(100)
    }

    #[must_use]
    pub fn level(&self) -> SkillLevel {
        match self.percentage() {
            80.. => SkillLevel::Advanced,
            60..=79 => SkillLevel::Intermediate,
            _ => SkillLevel::Beginner,
        }
    }
}

impl Selectable for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Selectable for Certificate {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Reference to a clickable card by its index in the content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardRef {
    Project(usize),
    Certificate(usize),
}

/// Projects of one theme block, with their indices into [`Portfolio::projects`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeBlock<'a> {
    pub theme: &'a str,
    pub projects: Vec<(usize, &'a Project)>,
}

impl Portfolio {
    /// Groups projects by theme in `project_themes` order.
    ///
    /// Projects whose theme is not listed are not shown; each block keeps at
    /// most [`PROJECTS_PER_THEME`] projects in declaration order.
    #[must_use]
    pub fn themed_projects(&self) -> Vec<ThemeBlock<'_>> {
        self.project_themes
            .iter()
            .map(|theme| ThemeBlock {
                theme,
                projects: self
                    .projects
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| &p.theme == theme)
                    .take(PROJECTS_PER_THEME)
                    .collect(),
            })
            .collect()
    }

    /// Looks up the card a reference points at.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Content`] if the index is out of range.
    pub fn project(&self, index: usize) -> Result<&Project> {
        self.projects
            .get(index)
            .ok_or_else(|| FolioError::Content(format!("no project at index {index}")))
    }

    /// # Errors
    ///
    /// Returns [`FolioError::Content`] if the index is out of range.
    pub fn certificate(&self, index: usize) -> Result<&Certificate> {
        self.certificates
            .get(index)
            .ok_or_else(|| FolioError::Content(format!("no certificate at index {index}")))
    }

    /// Checks invariants the loader cannot express through serde alone.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Content`] on empty navigation labels, or on
    /// duplicate project or certificate identifiers.
    pub fn validate(&self) -> Result<()> {
        if let Some(entry) = self.navigation.iter().find(|e| e.label.trim().is_empty()) {
            return Err(FolioError::Content(format!(
                "navigation entry with empty label ({:?})",
                String::from(entry.target.clone())
            )));
        }

        check_unique("project", self.projects.iter().map(Selectable::id))?;
        check_unique("certificate", self.certificates.iter().map(Selectable::id))?;
        Ok(())
    }
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FolioError::Content(format!("duplicate {kind} id: {id}")));
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::section::{ExternalAction, NavigationEntry};

    pub fn project(id: &str, theme: &str) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            date: "2025".to_string(),
            description: format!("Description of {id}"),
            skills: vec!["Rust".to_string()],
            theme: theme.to_string(),
            details: ProjectDetails {
                overview: format!("Overview of {id}"),
                highlights: vec!["first".to_string(), "second".to_string()],
                links: ProjectLinks::default(),
            },
        }
    }

    pub fn certificate(id: &str) -> Certificate {
        Certificate {
            id: id.to_string(),
            title: format!("Certificate {id}"),
            issuer: "Issuer".to_string(),
            date: "juin 2024".to_string(),
            expires: None,
            credential_id: None,
            skills: vec![],
            pdf: None,
        }
    }

    pub fn portfolio() -> Portfolio {
        Portfolio {
            profile: Profile {
                name: "Ada Test".to_string(),
                initials: "AT".to_string(),
                tagline: "Tagline".to_string(),
                links: vec![],
            },
            navigation: vec![
                NavigationEntry::section("About", "about"),
                NavigationEntry::section("Formations", "formations"),
                NavigationEntry::section("Experience", "experience"),
                NavigationEntry::section("Projects", "projects"),
                NavigationEntry::section("Skills", "skills"),
                NavigationEntry::section("Certificates", "certificates"),
                NavigationEntry::external(
                    "Contact",
                    ExternalAction::ComposeEmail {
                        address: "ada@example.com".to_string(),
                        subject: Some("Hi".to_string()),
                    },
                ),
            ],
            titles: SectionTitles::default(),
            about: About {
                paragraphs: vec!["I like *terminals* a lot.".to_string()],
            },
            formations: vec![Formation {
                institution: "Uni".to_string(),
                diploma: "L3".to_string(),
                period: "2023".to_string(),
                competences: "Rust".to_string(),
            }],
            experiences: vec![Experience {
                title: "Exp".to_string(),
                date: "2024".to_string(),
                institution: "Uni".to_string(),
                location: "Bordeaux".to_string(),
                summary: "Summary".to_string(),
                tasks: vec!["task".to_string()],
                skills: vec!["C".to_string()],
            }],
            project_themes: vec!["Web".to_string(), "AI".to_string()],
            projects: vec![project("lib", "Web"), project("morpion", "AI")],
            skill_categories: vec![SkillCategory {
                name: "Langages".to_string(),
                skills: vec![Skill { name: "Rust".to_string(), percentage: 70 }],
            }],
            certificates: vec![certificate("delf"), certificate("toeic")],
            footer: "© {year} Ada".to_string(),
        }
    }
}
