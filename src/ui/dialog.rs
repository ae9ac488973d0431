//! Dialog bodies for projects and certificates.
//!
//! Bodies are plain span lines wrapped to the frame's inner width; the frame
//! itself (border, close control, scrolling) is drawn by the dialog component.

use crate::domain::{Certificate, Project};
use crate::ui::document::{wrap_spans, Span, Tone};

pub type BodyLine = Vec<Span>;

struct Body {
    lines: Vec<BodyLine>,
    width: usize,
}

impl Body {
    const fn new(width: usize) -> Self {
        Self { lines: Vec::new(), width }
    }

    fn wrapped(&mut self, spans: Vec<Span>, indent: usize) {
        self.lines.extend(wrap_spans(&spans, self.width, indent));
    }

    fn blank(&mut self) {
        self.lines.push(Vec::new());
    }
}

/// Title, date, overview, highlights, skills, then any non-empty links.
#[must_use]
pub fn project_body(project: &Project, width: usize) -> Vec<BodyLine> {
    let mut body = Body::new(width);
    body.wrapped(vec![Span::bold(&project.title, Tone::Heading)], 0);
    body.wrapped(vec![Span::new(&project.date, Tone::Dim)], 0);
    body.blank();
    body.wrapped(vec![Span::new(&project.details.overview, Tone::Text)], 0);

    if !project.details.highlights.is_empty() {
        body.blank();
        for highlight in &project.details.highlights {
            body.wrapped(vec![Span::new("• ", Tone::Accent), Span::new(highlight, Tone::Text)], 2);
        }
    }

    if !project.skills.is_empty() {
        body.blank();
        body.wrapped(vec![Span::new(project.skills.join(" · "), Tone::Accent)], 0);
    }

    let links = project.details.links.present();
    if !links.is_empty() {
        body.blank();
        for (label, url) in links {
            body.wrapped(
                vec![Span::bold(format!("{label} "), Tone::Dim), Span::new(url, Tone::Highlight)],
                2,
            );
        }
    }
    body.lines
}

/// Title, `issuer • date • expire …`, credential id, skills and PDF state.
#[must_use]
pub fn certificate_body(cert: &Certificate, width: usize) -> Vec<BodyLine> {
    let mut body = Body::new(width);
    body.wrapped(vec![Span::bold(&cert.title, Tone::Heading)], 0);

    let mut meta = format!("{} • {}", cert.issuer, cert.date);
    if let Some(expires) = cert.expires.as_deref().filter(|e| !e.trim().is_empty()) {
        meta.push_str(&format!(" • expire {expires}"));
    }
    body.wrapped(vec![Span::new(meta, Tone::Dim)], 0);
    body.blank();

    let credential = cert
        .credential_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .unwrap_or("—");
    body.wrapped(
        vec![Span::bold("Identifiant : ", Tone::Text), Span::new(credential, Tone::Text)],
        0,
    );

    if !cert.skills.is_empty() {
        body.blank();
        body.wrapped(vec![Span::bold("Compétences", Tone::Heading)], 0);
        body.wrapped(vec![Span::new(cert.skills.join(" · "), Tone::Accent)], 0);
    }

    body.blank();
    match cert.pdf.as_deref().filter(|p| !p.trim().is_empty()) {
        Some(pdf) => body.wrapped(
            vec![Span::bold("PDF ", Tone::Dim), Span::new(pdf, Tone::Highlight)],
            2,
        ),
        None => body.wrapped(vec![Span::new("PDF non disponible", Tone::Dim)], 0),
    }
    body.lines
}

/// First link `o` opens from a dialog: a project's repo, demo or paper.
#[must_use]
pub fn project_link(project: &Project) -> Option<&str> {
    project.details.links.present().first().map(|&(_, url)| url)
}

/// The certificate PDF `o` opens, if any.
#[must_use]
pub fn certificate_link(cert: &Certificate) -> Option<&str> {
    cert.pdf.as_deref().map(str::trim).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::fixtures::{certificate, project};
    use crate::domain::ProjectLinks;

    fn texts(lines: &[BodyLine]) -> Vec<String> {
        lines.iter().map(|l| l.iter().map(|s| s.text.as_str()).collect()).collect()
    }

    #[test]
    fn project_body_lists_highlights_and_skips_empty_links() {
        let lines = texts(&project_body(&project("lib", "Web"), 60));
        assert_eq!(lines[0], "Project lib");
        assert!(lines.contains(&"• first".to_string()));
        assert!(lines.contains(&"Rust".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("repo")));
    }

    #[test]
    fn project_links_are_listed_and_openable() {
        let mut p = project("lib", "Web");
        p.details.links = ProjectLinks {
            repo: Some(String::new()),
            demo: Some("https://demo.example".to_string()),
            paper: None,
        };
        let lines = texts(&project_body(&p, 60));
        assert_eq!(lines.last().map(String::as_str), Some("demo https://demo.example"));
        assert_eq!(project_link(&p), Some("https://demo.example"));
    }

    #[test]
    fn certificate_body_shows_placeholders() {
        let lines = texts(&certificate_body(&certificate("delf"), 60));
        assert_eq!(lines[1], "Issuer • juin 2024");
        assert!(lines.contains(&"Identifiant : —".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("PDF non disponible"));
        assert_eq!(certificate_link(&certificate("delf")), None);
    }

    #[test]
    fn certificate_body_shows_expiry_and_credential() {
        let mut cert = certificate("delf");
        cert.expires = Some("—".to_string());
        cert.credential_id = Some("FR-1".to_string());
        cert.skills = vec!["Français".to_string()];
        let lines = texts(&certificate_body(&cert, 60));
        assert_eq!(lines[1], "Issuer • juin 2024 • expire —");
        assert!(lines.contains(&"Identifiant : FR-1".to_string()));
        assert!(lines.contains(&"Français".to_string()));
    }
}
