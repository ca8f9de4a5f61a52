//! Preview excerpt selection.

use factcheck_core::{EvidenceSource, Stance};

/// Picks the single excerpt to preview for a source.
///
/// Priority:
/// 1. `Supports` with a non-empty best-entailment chunk
/// 2. `Contradicts` with a non-empty best-contradiction chunk
/// 3. the first chunk
/// 4. `""`, meaning no preview available
#[derive(Debug, Clone, Copy, Default)]
pub struct SnippetSelector;

impl SnippetSelector {
    pub fn select<'a>(
        stance: Stance,
        chunks: &'a [String],
        best_entail_chunk: Option<&'a str>,
        best_contra_chunk: Option<&'a str>,
    ) -> &'a str {
        let preferred = match stance {
            Stance::Supports => best_entail_chunk,
            Stance::Contradicts => best_contra_chunk,
            Stance::Neutral => None,
        };

        preferred
            .filter(|chunk| !chunk.is_empty())
            .or_else(|| chunks.first().map(String::as_str))
            .unwrap_or("")
    }

    pub fn select_for_source(stance: Stance, source: &EvidenceSource) -> &str {
        Self::select(
            stance,
            &source.chunks,
            source.nli_best_ent_chunk.as_deref(),
            source.nli_best_contra_chunk.as_deref(),
        )
    }
}
