//! The page as a scrollable document.
//!
//! [`Document::compose`] lays the portfolio out for a given width: a list of
//! styled lines plus two indexes over them. **Anchors** give each section's
//! line range, which is what the scroll spy measures. **Card slots** give the
//! line range of each project and certificate card, for focus and hit-testing.
//! **Link slots** give the line and columns of each profile link label.
//!
//! The document knows nothing about scroll position; [`PageViewport`] pairs it
//! with an offset to answer the scroll spy's geometry queries.

use crate::domain::{
    CardRef, Certificate, Portfolio, ProfileLink, Project, SectionId, Skill, SkillCategory,
};
use crate::interaction::{Rect, Viewport};
use crate::ui::helpers::{display_width, pad_to_width, split_long_word, truncate_to_width};

/// Columns left blank on each side of the page.
pub const MARGIN: usize = 2;

const MIN_CONTENT_WIDTH: usize = 16;
const CARD_EDGE: &str = "│ ";
const LINK_SEPARATOR: &str = " · ";

/// Semantic style of a span; the theme decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Text,
    Dim,
    Heading,
    Accent,
    Highlight,
    Rule,
    BarFilled,
    BarEmpty,
    CardEdge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
    pub bold: bool,
}

impl Span {
    #[must_use]
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self { text: text.into(), tone, bold: false }
    }

    #[must_use]
    pub fn bold(text: impl Into<String>, tone: Tone) -> Self {
        Self { text: text.into(), tone, bold: true }
    }

    fn same_style(&self, other: &Self) -> bool {
        self.tone == other.tone && self.bold == other.bold
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
    /// Card this line belongs to, if any.
    pub card: Option<CardRef>,
}

impl Line {
    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| display_width(&s.text)).sum()
    }
}

/// Line range of a section, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub id: SectionId,
    pub start: usize,
    pub end: usize,
}

/// Line range of a card, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub card: CardRef,
    pub start: usize,
    pub end: usize,
}

/// Position of a profile link label: its line and content columns
/// `[start, end)`, margin excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSlot {
    /// Index into the profile links.
    pub link: usize,
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<Line>,
    anchors: Vec<Anchor>,
    cards: Vec<CardSlot>,
    links: Vec<LinkSlot>,
    width: usize,
}

impl Document {
    /// Lays out `portfolio` for a pane `width` columns wide.
    #[must_use]
    pub fn compose(portfolio: &Portfolio, width: usize) -> Self {
        let content_width = width.saturating_sub(2 * MARGIN).max(MIN_CONTENT_WIDTH);
        let mut c = Composer::new(content_width);

        c.profile(portfolio);

        let titles = &portfolio.titles;
        c.section("about", &titles.about, |c| {
            for paragraph in &portfolio.about.paragraphs {
                c.wrapped(parse_highlights(paragraph), 0);
                c.blank();
            }
        });
        c.section("formations", &titles.formations, |c| {
            for formation in &portfolio.formations {
                c.wrapped(vec![Span::bold(&formation.institution, Tone::Accent)], 0);
                c.wrapped(
                    vec![
                        Span::new(&formation.diploma, Tone::Text),
                        Span::new(format!(" · {}", formation.period), Tone::Dim),
                    ],
                    0,
                );
                c.wrapped(vec![Span::new(format!("Compétences : {}", formation.competences), Tone::Dim)], 0);
                c.blank();
            }
        });
        c.section("experience", &titles.experience, |c| {
            for exp in &portfolio.experiences {
                c.wrapped(vec![Span::bold(&exp.title, Tone::Heading)], 0);
                c.wrapped(
                    vec![Span::new(format!("{} · {} · {}", exp.date, exp.institution, exp.location), Tone::Dim)],
                    0,
                );
                c.wrapped(vec![Span::new(&exp.summary, Tone::Text)], 0);
                for task in &exp.tasks {
                    c.wrapped(vec![Span::new("• ", Tone::Accent), Span::new(task, Tone::Text)], 2);
                }
                if !exp.skills.is_empty() {
                    c.wrapped(vec![Span::new(exp.skills.join(" · "), Tone::Dim)], 0);
                }
                c.blank();
            }
        });
        c.section("projects", &titles.projects, |c| {
            for block in portfolio.themed_projects() {
                if block.projects.is_empty() {
                    continue;
                }
                c.wrapped(vec![Span::bold(block.theme, Tone::Accent)], 0);
                for (index, project) in block.projects {
                    c.project_card(index, project);
                    c.blank();
                }
            }
        });
        c.section("skills", &titles.skills, |c| {
            for category in &portfolio.skill_categories {
                c.skill_category(category);
                c.blank();
            }
        });
        c.section("certificates", &titles.certificates, |c| {
            for (index, cert) in portfolio.certificates.iter().enumerate() {
                c.certificate_card(index, cert);
                c.blank();
            }
        });

        let mut doc = c.finish();
        doc.width = content_width;
        doc
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Width the lines were wrapped to, margins excluded.
    #[must_use]
    pub const fn content_width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    #[must_use]
    pub fn anchor(&self, id: &SectionId) -> Option<&Anchor> {
        self.anchors.iter().find(|a| &a.id == id)
    }

    /// Card slots in document order.
    #[must_use]
    pub fn cards(&self) -> &[CardSlot] {
        &self.cards
    }

    #[must_use]
    pub fn card_slot(&self, card: CardRef) -> Option<&CardSlot> {
        self.cards.iter().find(|slot| slot.card == card)
    }

    #[must_use]
    pub fn card_at(&self, line: usize) -> Option<CardRef> {
        self.lines.get(line).and_then(|l| l.card)
    }

    #[must_use]
    pub fn links(&self) -> &[LinkSlot] {
        &self.links
    }

    /// Profile link under content column `col` of `line`.
    #[must_use]
    pub fn link_at(&self, line: usize, col: usize) -> Option<usize> {
        self.links
            .iter()
            .find(|slot| slot.line == line && (slot.start..slot.end).contains(&col))
            .map(|slot| slot.link)
    }

    /// Geometry view of this document at a scroll offset.
    #[must_use]
    pub const fn viewport(&self, offset: usize, body_top: usize) -> PageViewport<'_> {
        PageViewport { document: self, offset, body_top }
    }
}

/// A [`Document`] seen through the body area of the screen.
#[derive(Debug, Clone, Copy)]
pub struct PageViewport<'a> {
    document: &'a Document,
    offset: usize,
    body_top: usize,
}

fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

impl Viewport for PageViewport<'_> {
    fn scroll_offset(&self) -> usize {
        self.offset
    }

    fn section_rect(&self, id: &SectionId) -> Option<Rect> {
        let anchor = self.document.anchor(id)?;
        let shift = signed(self.body_top) - signed(self.offset);
        Some(Rect::new(signed(anchor.start) + shift, signed(anchor.end) + shift))
    }
}

/// Splits `*marked*` phrases out as highlighted spans.
///
/// ```
/// use zfolio::ui::document::{parse_highlights, Tone};
///
/// let spans = parse_highlights("à l’*Université de Bordeaux*, je");
/// assert_eq!(spans.len(), 3);
/// assert_eq!(spans[1].text, "Université de Bordeaux");
/// assert_eq!(spans[1].tone, Tone::Highlight);
/// ```
#[must_use]
pub fn parse_highlights(text: &str) -> Vec<Span> {
    text.split('*')
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            if i % 2 == 1 {
                Span::bold(part, Tone::Highlight)
            } else {
                Span::new(part, Tone::Text)
            }
        })
        .collect()
}

/// Word-wraps styled spans to `width` columns.
///
/// Words may change style mid-word (`l’` + highlighted `Université`); such
/// words stay together. Continuation lines are indented by `indent` columns.
#[must_use]
pub fn wrap_spans(spans: &[Span], width: usize, indent: usize) -> Vec<Vec<Span>> {
    let width = width.max(1);
    let indent = indent.min(width.saturating_sub(1));

    let mut words: Vec<Vec<Span>> = Vec::new();
    let mut word: Vec<Span> = Vec::new();
    for span in spans {
        for ch in span.text.chars() {
            if ch.is_whitespace() {
                if !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
                continue;
            }
            match word.last_mut() {
                Some(last) if last.same_style(span) => last.text.push(ch),
                _ => word.push(Span { text: ch.to_string(), tone: span.tone, bold: span.bold }),
            }
        }
    }
    if !word.is_empty() {
        words.push(word);
    }

    let mut lines = Vec::new();
    let mut line: Vec<Span> = Vec::new();
    let mut used = 0;
    let limit = |lines: &Vec<Vec<Span>>| if lines.is_empty() { width } else { width - indent };

    for word in words {
        let word_width: usize = word.iter().map(|s| display_width(&s.text)).sum();
        let gap = usize::from(used > 0);

        if used + gap + word_width > limit(&lines) && used > 0 {
            lines.push(std::mem::take(&mut line));
            used = 0;
        }

        if word_width > limit(&lines) {
            for span in word {
                for piece in split_long_word(&span.text, limit(&lines)) {
                    let w = display_width(&piece);
                    if used + w > limit(&lines) && used > 0 {
                        lines.push(std::mem::take(&mut line));
                        used = 0;
                    }
                    line.push(Span { text: piece, tone: span.tone, bold: span.bold });
                    used += w;
                }
            }
            continue;
        }

        if used > 0 {
            line.push(Span::new(" ", Tone::Text));
            used += 1;
        }
        used += word_width;
        line.extend(word);
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }

    for continuation in lines.iter_mut().skip(1) {
        if indent > 0 {
            continuation.insert(0, Span::new(" ".repeat(indent), Tone::Text));
        }
    }
    lines
}

/// Incremental builder behind [`Document::compose`].
struct Composer {
    lines: Vec<Line>,
    anchors: Vec<Anchor>,
    cards: Vec<CardSlot>,
    links: Vec<LinkSlot>,
    width: usize,
    card: Option<CardRef>,
}

impl Composer {
    const fn new(width: usize) -> Self {
        Self {
            lines: Vec::new(),
            anchors: Vec::new(),
            cards: Vec::new(),
            links: Vec::new(),
            width,
            card: None,
        }
    }

    fn inner_width(&self) -> usize {
        if self.card.is_some() {
            self.width.saturating_sub(display_width(CARD_EDGE)).max(1)
        } else {
            self.width
        }
    }

    fn push(&mut self, mut spans: Vec<Span>) {
        if self.card.is_some() {
            spans.insert(0, Span::new(CARD_EDGE, Tone::CardEdge));
        }
        self.lines.push(Line { spans, card: self.card });
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn wrapped(&mut self, spans: Vec<Span>, indent: usize) {
        for line in wrap_spans(&spans, self.inner_width(), indent) {
            self.push(line);
        }
    }

    fn section(&mut self, id: &str, title: &str, body: impl FnOnce(&mut Self)) {
        let start = self.lines.len();
        self.wrapped(vec![Span::bold(title, Tone::Heading)], 0);
        let rule = "─".repeat(display_width(title).clamp(1, self.width));
        self.push(vec![Span::new(rule, Tone::Rule)]);
        self.blank();
        body(self);
        self.anchors.push(Anchor {
            id: SectionId::new(id),
            start,
            end: self.lines.len().saturating_sub(1),
        });
    }

    fn card(&mut self, card: CardRef, body: impl FnOnce(&mut Self)) {
        let start = self.lines.len();
        self.card = Some(card);
        body(self);
        self.card = None;
        self.cards.push(CardSlot { card, start, end: self.lines.len().saturating_sub(1) });
    }

    fn profile(&mut self, portfolio: &Portfolio) {
        let profile = &portfolio.profile;
        self.blank();
        self.wrapped(vec![Span::bold(&profile.name, Tone::Heading)], 0);
        self.wrapped(vec![Span::new(&profile.tagline, Tone::Accent)], 0);
        self.profile_links(&profile.links);
        self.blank();
    }

    /// Link labels separated by dots, wrapping between labels.
    fn profile_links(&mut self, links: &[ProfileLink]) {
        let separator = display_width(LINK_SEPARATOR);
        let mut spans = Vec::new();
        let mut used = 0;

        for (link, profile_link) in links.iter().enumerate() {
            let label = truncate_to_width(&profile_link.label, self.width);
            let width = display_width(&label);
            if used > 0 && used + separator + width > self.width {
                self.push(std::mem::take(&mut spans));
                used = 0;
            } else if used > 0 {
                spans.push(Span::new(LINK_SEPARATOR, Tone::Dim));
                used += separator;
            }
            self.links.push(LinkSlot { link, line: self.lines.len(), start: used, end: used + width });
            spans.push(Span::new(label, Tone::Accent));
            used += width;
        }
        if !spans.is_empty() {
            self.push(spans);
        }
    }

    fn project_card(&mut self, index: usize, project: &Project) {
        self.card(CardRef::Project(index), |c| {
            c.wrapped(vec![Span::bold(&project.title, Tone::Heading)], 0);
            c.wrapped(vec![Span::new(&project.date, Tone::Dim)], 0);
            c.wrapped(vec![Span::new(&project.description, Tone::Text)], 0);
            if !project.skills.is_empty() {
                c.wrapped(vec![Span::new(project.skills.join(" · "), Tone::Accent)], 0);
            }
            c.wrapped(vec![Span::new("⏎ Voir les détails", Tone::Dim)], 0);
        });
    }

    fn certificate_card(&mut self, index: usize, cert: &Certificate) {
        self.card(CardRef::Certificate(index), |c| {
            c.wrapped(vec![Span::bold(&cert.title, Tone::Heading)], 0);
            c.wrapped(vec![Span::new(&cert.issuer, Tone::Dim)], 0);
            c.wrapped(vec![Span::new(format!("Délivré : {}", cert.date), Tone::Text)], 0);
            c.wrapped(vec![Span::new("⏎ Voir le certificat", Tone::Dim)], 0);
        });
    }

    fn skill_category(&mut self, category: &SkillCategory) {
        self.wrapped(vec![Span::bold(&category.name, Tone::Accent)], 0);

        let name_width = category
            .skills
            .iter()
            .map(|s| display_width(&s.name))
            .max()
            .unwrap_or(0)
            .min(self.width / 2);

        for skill in &category.skills {
            self.push(skill_bar(skill, name_width, self.width));
        }
    }

    fn finish(self) -> Document {
        Document {
            lines: self.lines,
            anchors: self.anchors,
            cards: self.cards,
            links: self.links,
            width: self.width,
        }
    }
}

/// `Python      ███████░░░  75% Intermédiaire`
fn skill_bar(skill: &Skill, name_width: usize, width: usize) -> Vec<Span> {
    let level = skill.level().label();
    let suffix = format!(" {:>3}% {level}", skill.percentage());
    let bar_width = width
        .saturating_sub(name_width + 1 + display_width(&suffix))
        .clamp(5, 30);
    let filled = bar_width * usize::from(skill.percentage()) / 100;
    let room = width.saturating_sub(name_width + 1 + bar_width);

    vec![
        Span::new(format!("{} ", pad_to_width(&skill.name, name_width)), Tone::Text),
        Span::new("█".repeat(filled), Tone::BarFilled),
        Span::new("░".repeat(bar_width - filled), Tone::BarEmpty),
        Span::new(truncate_to_width(&suffix, room), Tone::Dim),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::fixtures::portfolio;

    fn doc() -> Document {
        Document::compose(&portfolio(), 60)
    }

    #[test]
    fn every_section_gets_an_anchor_in_page_order() {
        let doc = doc();
        let ids: Vec<_> = doc.anchors().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["about", "formations", "experience", "projects", "skills", "certificates"]);

        for pair in doc.anchors().windows(2) {
            assert_eq!(pair[0].end + 1, pair[1].start, "sections are contiguous");
        }
        assert_eq!(doc.anchors().last().map(|a| a.end), Some(doc.len() - 1));
    }

    #[test]
    fn anchors_start_on_their_heading() {
        let doc = doc();
        let about = doc.anchor(&SectionId::new("about")).unwrap();
        assert_eq!(doc.lines()[about.start].text(), "À propos de moi");
    }

    #[test]
    fn cards_are_indexed_in_document_order() {
        let doc = doc();
        let cards: Vec<_> = doc.cards().iter().map(|slot| slot.card).collect();
        assert_eq!(
            cards,
            [CardRef::Project(0), CardRef::Project(1), CardRef::Certificate(0), CardRef::Certificate(1)]
        );

        let slot = doc.card_slot(CardRef::Project(1)).unwrap();
        assert_eq!(doc.card_at(slot.start), Some(CardRef::Project(1)));
        assert_eq!(doc.card_at(slot.end), Some(CardRef::Project(1)));
        assert_eq!(doc.card_at(slot.end + 1), None);
        assert!(doc.lines()[slot.start].text().starts_with(CARD_EDGE));
    }

    #[test]
    fn profile_links_get_slots_and_wrap_between_labels() {
        let mut portfolio = portfolio();
        portfolio.profile.links = ["LinkedIn", "GitHub", "Me contacter"]
            .into_iter()
            .map(|label| ProfileLink {
                label: label.to_string(),
                href: crate::domain::NavTarget::try_from("https://example.com".to_string()).unwrap(),
            })
            .collect();

        let doc = Document::compose(&portfolio, 60);
        let slots = doc.links();
        assert_eq!(slots.len(), 3);
        assert_eq!((slots[0].start, slots[0].end), (0, 8));
        assert_eq!((slots[1].start, slots[1].end), (11, 17));
        assert_eq!(doc.lines()[slots[0].line].text(), "LinkedIn · GitHub · Me contacter");
        assert_eq!(doc.link_at(slots[1].line, 12), Some(1));
        assert_eq!(doc.link_at(slots[1].line, 9), None);

        // 16 columns of content: one label per line.
        let narrow = Document::compose(&portfolio, 20);
        let lines: Vec<_> = narrow.links().iter().map(|slot| slot.line).collect();
        assert_eq!(lines[1], lines[0] + 1);
        assert_eq!(lines[2], lines[1] + 1);
        assert!(narrow.links().iter().all(|slot| slot.start == 0));
    }

    #[test]
    fn lines_fit_the_content_width() {
        for width in [20, 45, 80, 200] {
            let doc = Document::compose(&portfolio(), width);
            for line in doc.lines() {
                assert!(line.width() <= doc.content_width(), "{:?} too wide at {width}", line.text());
            }
        }
    }

    #[test]
    fn viewport_shifts_rects_by_offset() {
        let doc = doc();
        let about = doc.anchor(&SectionId::new("about")).unwrap().clone();
        let view = doc.viewport(2, 3);
        let rect = view.section_rect(&SectionId::new("about")).unwrap();
        assert_eq!(rect.top, signed(about.start) + 1);
        assert_eq!(rect.bottom, signed(about.end) + 1);
        assert!(view.section_rect(&SectionId::new("contact")).is_none());
    }

    #[test]
    fn highlights_become_bold_spans() {
        let spans = parse_highlights("*a* b *c*");
        assert_eq!(spans, vec![
            Span::bold("a", Tone::Highlight),
            Span::new(" b ", Tone::Text),
            Span::bold("c", Tone::Highlight),
        ]);
    }

    #[test]
    fn wrap_keeps_mixed_style_words_together() {
        let spans = parse_highlights("à l’*Université* de");
        let lines = wrap_spans(&spans, 12, 0);
        let texts: Vec<String> = lines
            .iter()
            .map(|l| l.iter().map(|s| s.text.as_str()).collect())
            .collect();
        assert_eq!(texts, ["à", "l’Université", "de"]);
    }

    #[test]
    fn wrap_indents_continuations() {
        let lines = wrap_spans(&[Span::new("• one two three", Tone::Text)], 9, 2);
        let texts: Vec<String> = lines
            .iter()
            .map(|l| l.iter().map(|s| s.text.as_str()).collect())
            .collect();
        assert_eq!(texts, ["• one two", "  three"]);
    }

    #[test]
    fn skill_bars_show_level_and_clamped_percentage() {
        let skill = Skill { name: "Rust".to_string(), percentage: 130 };
        let spans = skill_bar(&skill, 6, 40);
        let text: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert!(text.starts_with("Rust   █"));
        assert!(text.ends_with("100% Avancé"));
        assert!(!text.contains('░'));
    }
}
