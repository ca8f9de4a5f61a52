//! # factcheck-view
//!
//! Pure, synchronous derivation of presentation facts from a
//! `VerificationResult`. No I/O, no shared mutable state; every component can
//! run on any thread.
//!
//! ## Modules
//! - `score`: ScoreNormalizer: raw score of ambiguous scale → 0..=100
//! - `stance`: StanceClassifier: entailment/contradiction → Stance
//! - `snippet`: SnippetSelector: the excerpt to preview for a stance
//! - `trust`: TrustRegistry and domain derivation from urls
//! - `date`: DateFormatter: date-like text → display date or ""
//! - `view`: SourceView / ResultView, the renderer-facing shapes
//! - `presenter`: Presenter: runs all of the above over a result

pub mod date;
pub mod presenter;
pub mod score;
pub mod snippet;
pub mod stance;
pub mod trust;
pub mod view;

pub use date::DateFormatter;
pub use presenter::Presenter;
pub use score::ScoreNormalizer;
pub use snippet::SnippetSelector;
pub use stance::StanceClassifier;
pub use trust::TrustRegistry;
pub use view::{NliScores, ResultView, SourceView};
