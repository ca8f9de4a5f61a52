//! Property tests for the normalization and classification laws.

use proptest::prelude::*;

use factcheck_core::Stance;
use factcheck_view::{ScoreNormalizer, SnippetSelector, StanceClassifier};

fn expected(raw: f64) -> u8 {
    let scaled = if raw < 1.0 { raw * 100.0 } else { raw };
    scaled.clamp(0.0, 100.0).round() as u8
}

proptest! {
    #[test]
    fn fractions_scale_then_clamp(raw in -10.0f64..1.0) {
        prop_assert_eq!(ScoreNormalizer::normalize(raw), expected(raw));
        prop_assert_eq!(ScoreNormalizer::normalize(raw), (raw * 100.0).clamp(0.0, 100.0).round() as u8);
    }

    #[test]
    fn percentages_clamp_only(raw in 1.0f64..1.0e6) {
        prop_assert_eq!(ScoreNormalizer::normalize(raw), raw.clamp(0.0, 100.0).round() as u8);
    }

    #[test]
    fn normalized_is_always_in_range(raw in any::<f64>()) {
        prop_assert!(ScoreNormalizer::normalize(raw) <= 100);
    }

    #[test]
    fn idempotent_on_normalized_integers(n in 0u8..=100) {
        let once = ScoreNormalizer::normalize(f64::from(n));
        prop_assert_eq!(once, n);
        prop_assert_eq!(ScoreNormalizer::normalize(f64::from(once)), once);
    }

    #[test]
    fn entailment_at_threshold_always_supports(
        entail in 0.5f64..=1.0,
        contra in proptest::option::of(0.0f64..=1.0),
    ) {
        let classifier = StanceClassifier::default();
        prop_assert_eq!(classifier.classify(Some(entail), contra), Stance::Supports);
    }

    #[test]
    fn stance_matches_ordered_rule(
        entail in proptest::option::of(0.0f64..=1.0),
        contra in proptest::option::of(0.0f64..=1.0),
    ) {
        let expected = match (entail, contra) {
            (Some(e), _) if e >= 0.5 => Stance::Supports,
            (_, Some(c)) if c >= 0.5 => Stance::Contradicts,
            _ => Stance::Neutral,
        };
        prop_assert_eq!(StanceClassifier::default().classify(entail, contra), expected);
    }

    #[test]
    fn neutral_snippet_is_first_chunk_or_empty(
        chunks in proptest::collection::vec("[a-z ]{0,12}", 0..5),
        ent in proptest::option::of("[a-z]{0,8}"),
        contra in proptest::option::of("[a-z]{0,8}"),
    ) {
        let snippet = SnippetSelector::select(Stance::Neutral, &chunks, ent.as_deref(), contra.as_deref());
        let expected = chunks.first().map(String::as_str).unwrap_or("");
        prop_assert_eq!(snippet, expected);
    }
}
