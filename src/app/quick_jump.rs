//! Fuzzy quick jump over navigation labels and card titles.

use crate::domain::{CardRef, Portfolio};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Where a quick jump candidate leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpTarget {
    /// Index into the navigation entries.
    Nav(usize),
    Card(CardRef),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: String,
    /// Short kind tag shown next to the label.
    pub kind: &'static str,
    pub target: JumpTarget,
}

/// A candidate that matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpMatch {
    /// Index into [`QuickJump::candidates`].
    pub candidate: usize,
    pub score: i64,
    /// Char positions of the matched characters, for highlighting.
    pub indices: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct QuickJump {
    pub query: String,
    pub selected: usize,
    candidates: Vec<Candidate>,
    matches: Vec<JumpMatch>,
}

impl QuickJump {
    /// Builds the finder with every candidate listed, in page order.
    #[must_use]
    pub fn new(portfolio: &Portfolio) -> Self {
        let nav = portfolio.navigation.iter().enumerate().map(|(i, entry)| Candidate {
            label: entry.label.clone(),
            kind: if entry.target.section().is_some() { "section" } else { "lien" },
            target: JumpTarget::Nav(i),
        });
        let projects = portfolio.projects.iter().enumerate().map(|(i, p)| Candidate {
            label: p.title.clone(),
            kind: "projet",
            target: JumpTarget::Card(CardRef::Project(i)),
        });
        let certificates = portfolio.certificates.iter().enumerate().map(|(i, c)| Candidate {
            label: c.title.clone(),
            kind: "certificat",
            target: JumpTarget::Card(CardRef::Certificate(i)),
        });

        let mut jump = Self {
            query: String::new(),
            selected: 0,
            candidates: nav.chain(projects).chain(certificates).collect(),
            matches: Vec::new(),
        };
        jump.refilter();
        jump
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn matches(&self) -> &[JumpMatch] {
        &self.matches
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop(&mut self) {
        self.query.pop();
        self.refilter();
    }

    /// Moves the selection down, wrapping to the top.
    pub fn move_down(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.matches.len();
    }

    /// Moves the selection up, wrapping to the bottom.
    pub fn move_up(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.selected = self.selected.checked_sub(1).unwrap_or(self.matches.len() - 1);
    }

    #[must_use]
    pub fn selected_target(&self) -> Option<JumpTarget> {
        self.matches
            .get(self.selected)
            .and_then(|m| self.candidates.get(m.candidate))
            .map(|c| c.target)
    }

    fn refilter(&mut self) {
        let query = self.query.trim();

        self.matches = if query.is_empty() {
            (0..self.candidates.len())
                .map(|candidate| JumpMatch { candidate, score: 0, indices: Vec::new() })
                .collect()
        } else {
            let matcher = SkimMatcherV2::default();
            let mut found: Vec<JumpMatch> = self
                .candidates
                .iter()
                .enumerate()
                .filter_map(|(candidate, c)| {
                    matcher
                        .fuzzy_indices(&c.label, query)
                        .map(|(score, indices)| JumpMatch { candidate, score, indices })
                })
                .collect();
            found.sort_by(|a, b| b.score.cmp(&a.score));
            found
        };

        self.selected = self.selected.min(self.matches.len().saturating_sub(1));
        tracing::trace!(query = %self.query, matches = self.matches.len(), "quick jump filtered");
    }
}
