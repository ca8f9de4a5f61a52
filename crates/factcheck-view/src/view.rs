//! Renderer-facing views: a borrowed input plus derived fields.
//!
//! Views never copy or mutate the `EvidenceSource`; they hold a reference and
//! serialize it flattened next to the derived fields.

use factcheck_core::{CoverageBucket, EvidenceSource, Stance};
use serde::Serialize;

/// NLI scores shown for a source the backend evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NliScores {
    pub entail: Option<f64>,
    pub contra: Option<f64>,
}

impl NliScores {
    /// `entail: 0.71 contra: 0.10`, omitting missing scores.
    pub fn summary(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if let Some(e) = self.entail {
            parts.push(format!("entail: {e:.2}"));
        }
        if let Some(c) = self.contra {
            parts.push(format!("contra: {c:.2}"));
        }
        parts.join(" ")
    }
}

/// One source with everything a card needs.
#[derive(Debug, Clone, Serialize)]
pub struct SourceView<'a> {
    #[serde(flatten)]
    pub source: &'a EvidenceSource,
    /// `domain`, or the host of `url`.
    pub display_domain: Option<String>,
    /// Title, then display domain, then url, then the untitled label.
    pub headline: String,
    pub stance: Stance,
    pub stance_label: &'static str,
    /// Empty when no preview is available.
    pub snippet: &'a str,
    pub trusted: bool,
    /// Formatted publication date, empty when unknown.
    pub published: String,
    /// Present only when the backend ran NLI over this source.
    pub nli: Option<NliScores>,
}

impl SourceView<'_> {
    pub fn has_snippet(&self) -> bool {
        !self.snippet.is_empty()
    }

    pub fn has_published(&self) -> bool {
        !self.published.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultView<'a> {
    pub claim: &'a str,
    /// Normalized confidence, 0..=100.
    pub confidence: u8,
    /// Backend value, else the number of distinct display domains.
    pub unique_domains: u64,
    pub coverage: Option<CoverageBucket>,
    pub notes: Option<&'a str>,
    pub sources: Vec<SourceView<'a>>,
}

impl<'a> ResultView<'a> {
    pub fn count_by_stance(&self, stance: Stance) -> usize {
        self.sources.iter().filter(|s| s.stance == stance).count()
    }

    pub fn trusted_sources(&self) -> impl Iterator<Item = &SourceView<'a>> {
        self.sources.iter().filter(|s| s.trusted)
    }
}
