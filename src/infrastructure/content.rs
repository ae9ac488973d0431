//! Loading portfolio content from TOML.

use crate::domain::{FolioError, Portfolio, Result};
use std::path::Path;
use tracing::{debug, error};

/// Content compiled into the plugin binary.
pub const EMBEDDED_CONTENT: &str = include_str!("../../content/portfolio.toml");

/// Parses and validates a portfolio document.
///
/// # Errors
///
/// Returns [`FolioError::Toml`] for malformed TOML or a bad navigation href,
/// and [`FolioError::Content`] when [`Portfolio::validate`] rejects it.
pub fn parse_portfolio(source: &str) -> Result<Portfolio> {
    let portfolio: Portfolio = toml::from_str(source)?;
    portfolio.validate()?;
    Ok(portfolio)
}

/// Parses the embedded content.
///
/// # Errors
///
/// Fails only if the embedded document is broken, which the test suite guards.
pub fn embedded_portfolio() -> Result<Portfolio> {
    parse_portfolio(EMBEDDED_CONTENT)
}

/// Reads a content file from disk.
///
/// # Errors
///
/// Returns [`FolioError::Io`] if the file cannot be read, otherwise whatever
/// [`parse_portfolio`] returns.
pub fn read_portfolio(path: &Path) -> Result<Portfolio> {
    let source = std::fs::read_to_string(path)?;
    parse_portfolio(&source)
}

/// Loads the configured content, falling back to the embedded document.
///
/// A broken `content_file` is logged and ignored.
///
/// # Errors
///
/// Returns an error only when the embedded content itself fails to parse.
pub fn load_portfolio(content_file: Option<&Path>) -> Result<Portfolio> {
    if let Some(path) = content_file {
        match read_portfolio(path) {
            Ok(portfolio) => {
                debug!(path = %path.display(), "loaded portfolio content");
                return Ok(portfolio);
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "content file rejected, using built-in content");
            }
        }
    }

    embedded_portfolio().map_err(|err| FolioError::Content(format!("built-in content: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExternalAction, NavTarget, SectionId};
    use std::io::Write;

    #[test]
    fn embedded_content_is_valid() {
        let portfolio = embedded_portfolio().unwrap();
        assert_eq!(portfolio.profile.name, "Yara ELMAWLA");
        assert_eq!(portfolio.navigation.len(), 7);
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.certificates[0].credential_id.as_deref(), Some("FR-DELFB2-2024-12456"));
    }

    #[test]
    fn embedded_navigation_targets_resolve() {
        let portfolio = embedded_portfolio().unwrap();
        let sections: Vec<_> = portfolio
            .navigation
            .iter()
            .filter_map(|entry| entry.target.section().map(SectionId::as_str))
            .collect();
        assert_eq!(
            sections,
            ["about", "formations", "experience", "projects", "skills", "certificates"]
        );

        let contact = &portfolio.navigation[6].target;
        assert_eq!(
            contact,
            &NavTarget::External(ExternalAction::ComposeEmail {
                address: "yara.elmawla@example.com".to_string(),
                subject: Some("Contact from Website".to_string()),
            })
        );
    }

    #[test]
    fn every_theme_has_a_project() {
        let portfolio = embedded_portfolio().unwrap();
        assert!(portfolio.themed_projects().iter().all(|b| b.projects.len() == 1));
    }

    #[test]
    fn content_file_overrides_embedded() {
        let mut custom = toml::from_str::<toml::Value>(EMBEDDED_CONTENT).unwrap();
        custom["profile"]["name"] = toml::Value::String("Someone Else".to_string());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();

        let portfolio = load_portfolio(Some(file.path())).unwrap();
        assert_eq!(portfolio.profile.name, "Someone Else");
    }

    #[test]
    fn broken_content_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "profile = 12").unwrap();

        assert!(matches!(read_portfolio(file.path()), Err(FolioError::Toml(_))));
        let portfolio = load_portfolio(Some(file.path())).unwrap();
        assert_eq!(portfolio.profile.name, "Yara ELMAWLA");
    }

    #[test]
    fn missing_content_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_portfolio(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn bad_href_is_rejected() {
        let source = EMBEDDED_CONTENT.replace("href = \"#about\"", "href = \"ftp://about\"");
        assert!(matches!(parse_portfolio(&source), Err(FolioError::Toml(_))));
    }
}
