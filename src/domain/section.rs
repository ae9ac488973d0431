//! Sections and navigation entries.
//!
//! A section is a named, anchor-addressable region of the page. Navigation
//! entries point either at a section (`#about`) or at an external action the
//! navigator never resolves itself (`mailto:` links, web URLs). Entries are
//! configured once with the content and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an in-page section anchor.
///
/// # Examples
///
/// ```
/// use zfolio::domain::SectionId;
///
/// let id = SectionId::new("formations");
/// assert_eq!(id.as_str(), "formations");
/// assert_eq!(id.to_string(), "formations");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// An action that leaves the page. Opaque to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalAction {
    /// Opens the user's mail client on a new message.
    ComposeEmail {
        address: String,
        subject: Option<String>,
    },
    /// Opens a web page.
    OpenUrl { url: String },
}

impl ExternalAction {
    /// Returns the URI handed to the opener command.
    ///
    /// # Examples
    ///
    /// ```
    /// use zfolio::domain::ExternalAction;
    ///
    /// let action = ExternalAction::ComposeEmail {
    ///     address: "me@example.com".to_string(),
    ///     subject: Some("Hello there".to_string()),
    /// };
    /// assert_eq!(action.uri(), "mailto:me@example.com?subject=Hello%20there");
    /// ```
    #[must_use]
    pub fn uri(&self) -> String {
        match self {
            Self::ComposeEmail { address, subject: Some(subject) } => {
                format!("mailto:{address}?subject={}", urlencoding::encode(subject))
            }
            Self::ComposeEmail { address, subject: None } => format!("mailto:{address}"),
            Self::OpenUrl { url } => url.clone(),
        }
    }
}

/// Where a navigation entry leads.
///
/// Deserialized from the `href` string used by the content file: `#id` for
/// sections, `mailto:` for e-mail, `http(s)://` for web pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NavTarget {
    Section(SectionId),
    External(ExternalAction),
}

impl NavTarget {
    /// Returns the section this target scrolls to, if it is in-page.
    #[must_use]
    pub const fn section(&self) -> Option<&SectionId> {
        match self {
            Self::Section(id) => Some(id),
            Self::External(_) => None,
        }
    }
}

impl TryFrom<String> for NavTarget {
    type Error = String;

    fn try_from(href: String) -> std::result::Result<Self, Self::Error> {
        let href = href.trim();

        if let Some(anchor) = href.strip_prefix('#') {
            if anchor.is_empty() {
                return Err("empty section anchor".to_string());
            }
            return Ok(Self::Section(SectionId::new(anchor)));
        }

        if let Some(rest) = href.strip_prefix("mailto:") {
            let (address, query) = rest.split_once('?').unwrap_or((rest, ""));
            if address.is_empty() {
                return Err(format!("mailto link without address: {href}"));
            }
            let subject = query
                .split('&')
                .find_map(|pair| pair.strip_prefix("subject="))
                .map(decode_subject);
            return Ok(Self::External(ExternalAction::ComposeEmail {
                address: address.to_string(),
                subject,
            }));
        }

        if href.starts_with("https://") || href.starts_with("http://") {
            return Ok(Self::External(ExternalAction::OpenUrl { url: href.to_string() }));
        }

        Err(format!("unsupported navigation href: {href:?}"))
    }
}

impl From<NavTarget> for String {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Section(id) => format!("#{id}"),
            NavTarget::External(action) => action.uri(),
        }
    }
}

/// One entry of the navigation bar. Display order is declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub label: String,
    #[serde(rename = "href")]
    pub target: NavTarget,
}

impl NavigationEntry {
    #[must_use]
    pub fn section(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: NavTarget::Section(SectionId::new(id)),
        }
    }

    #[must_use]
    pub fn external(label: impl Into<String>, action: ExternalAction) -> Self {
        Self {
            label: label.into(),
            target: NavTarget::External(action),
        }
    }
}

/// Percent-decodes a `mailto:` subject. Invalid UTF-8 is replaced, not
/// rejected; malformed escapes stay literal.
fn decode_subject(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(
        |_| String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned(),
        std::borrow::Cow::into_owned,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(href: &str) -> std::result::Result<NavTarget, String> {
        NavTarget::try_from(href.to_string())
    }

    #[test]
    fn anchors_become_sections() {
        assert_eq!(parse("#about"), Ok(NavTarget::Section(SectionId::new("about"))));
        assert!(parse("#").is_err());
    }

    #[test]
    fn mailto_keeps_subject_with_spaces() {
        let target = parse("mailto:yara@example.com?subject=Contact from Website").unwrap();
        assert_eq!(
            target,
            NavTarget::External(ExternalAction::ComposeEmail {
                address: "yara@example.com".to_string(),
                subject: Some("Contact from Website".to_string()),
            })
        );
    }

    #[test]
    fn mailto_subject_is_percent_decoded_and_reencoded() {
        let target = parse("mailto:a@b.fr?subject=Caf%C3%A9%20time").unwrap();
        let NavTarget::External(action) = target else {
            panic!("expected external target");
        };
        assert_eq!(action.uri(), "mailto:a@b.fr?subject=Caf%C3%A9%20time");
    }

    #[test]
    fn trailing_percent_is_kept_literally() {
        assert_eq!(decode_subject("100%"), "100%");
        assert_eq!(decode_subject("%4"), "%4");
        assert_eq!(decode_subject("%zz"), "%zz");
    }

    #[test]
    fn invalid_utf8_subject_is_decoded_lossily() {
        let target = parse("mailto:a@b.fr?subject=Caf%E9").unwrap();
        let NavTarget::External(ExternalAction::ComposeEmail { subject, .. }) = target else {
            panic!("expected an e-mail action");
        };
        assert_eq!(subject.as_deref(), Some("Caf\u{fffd}"));
    }

    #[test]
    fn web_links_and_garbage() {
        assert!(matches!(
            parse("https://github.com/yaraelmawla"),
            Ok(NavTarget::External(ExternalAction::OpenUrl { .. }))
        ));
        assert!(parse("ftp://nope").is_err());
        assert!(parse("mailto:").is_err());
    }

    #[test]
    fn section_accessor() {
        let entry = NavigationEntry::section("About", "about");
        assert_eq!(entry.target.section().map(SectionId::as_str), Some("about"));
        let contact = NavigationEntry::external(
            "Contact",
            ExternalAction::OpenUrl { url: "https://example.com".to_string() },
        );
        assert!(contact.target.section().is_none());
    }
}
