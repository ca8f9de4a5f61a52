//! Presenter: derives a `ResultView` from a `VerificationResult`.

use std::collections::HashSet;

use factcheck_core::{EvidenceSource, FactcheckConfig, VerificationResult};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::date::DateFormatter;
use crate::score::ScoreNormalizer;
use crate::snippet::SnippetSelector;
use crate::stance::StanceClassifier;
use crate::trust::{display_domain, TrustRegistry};
use crate::view::{NliScores, ResultView, SourceView};

/// Holds the configured components. Immutable once built, safe to share.
#[derive(Debug, Clone)]
pub struct Presenter {
    stance: StanceClassifier,
    trust: TrustRegistry,
    dates: DateFormatter,
    untitled_label: String,
}

impl Presenter {
    pub fn new(
        stance: StanceClassifier,
        trust: TrustRegistry,
        dates: DateFormatter,
        untitled_label: impl Into<String>,
    ) -> Self {
        Self {
            stance,
            trust,
            dates,
            untitled_label: untitled_label.into(),
        }
    }

    pub fn from_config(config: &FactcheckConfig) -> Self {
        Self::new(
            StanceClassifier::from_config(&config.stance),
            TrustRegistry::from_config(&config.trust),
            DateFormatter::from_config(&config.display),
            config.display.untitled_label.clone(),
        )
    }

    pub fn trust(&self) -> &TrustRegistry {
        &self.trust
    }

    /// Derive the full view. Sources are processed in parallel; order is kept.
    pub fn present<'a>(&self, result: &'a VerificationResult) -> ResultView<'a> {
        let sources: Vec<SourceView<'a>> = result
            .sources
            .par_iter()
            .map(|source| self.present_source(source))
            .collect();

        let unique_domains = result.unique_domains.unwrap_or_else(|| {
            let distinct: HashSet<String> = sources
                .iter()
                .filter_map(|s| s.display_domain.as_deref())
                .map(str::to_lowercase)
                .collect();
            distinct.len() as u64
        });

        let coverage = result.coverage();
        if coverage.is_none() {
            if let Some(label) = result.coverage_bucket.as_deref() {
                debug!(label, "unknown coverage bucket, dropped");
            }
        }

        let view = ResultView {
            claim: &result.claim,
            confidence: ScoreNormalizer::normalize_opt(result.score),
            unique_domains,
            coverage,
            notes: result.notes.as_deref(),
            sources,
        };
        debug!(
            confidence = view.confidence,
            sources = view.sources.len(),
            unique_domains = view.unique_domains,
            "derived result view"
        );
        view
    }

    /// Derive one source's view from its own fields only.
    pub fn present_source<'a>(&self, source: &'a EvidenceSource) -> SourceView<'a> {
        let stance = self.stance.classify_source(source);
        let snippet = SnippetSelector::select_for_source(stance, source);
        let display_domain = display_domain(source);
        let trusted = self.trust.is_trusted(display_domain.as_deref());
        let published = self.dates.format(source.published_at.as_deref());
        let headline = self.headline(source, display_domain.as_deref());
        let nli = source.is_nli_evaluated().then_some(NliScores {
            entail: source.nli_max_entail,
            contra: source.nli_max_contra,
        });

        trace!(
            domain = display_domain.as_deref().unwrap_or(""),
            stance = %stance,
            trusted,
            "derived source view"
        );

        SourceView {
            source,
            display_domain,
            headline,
            stance,
            stance_label: stance.label(),
            snippet,
            trusted,
            published,
            nli,
        }
    }

    fn headline(&self, source: &EvidenceSource, display_domain: Option<&str>) -> String {
        source
            .title
            .as_deref()
            .or(display_domain)
            .or(source.url.as_deref())
            .unwrap_or(self.untitled_label.as_str())
            .to_string()
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::from_config(&FactcheckConfig::default())
    }
}
