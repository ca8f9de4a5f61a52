//! Verification data shapes (no logic beyond small accessors).

pub mod coverage_bucket;
pub mod evidence_source;
pub mod stance;
pub mod verification_result;

pub use coverage_bucket::CoverageBucket;
pub use evidence_source::EvidenceSource;
pub use stance::Stance;
pub use verification_result::VerificationResult;
