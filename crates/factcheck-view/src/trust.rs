//! Trusted-domain registry and domain derivation.
//!
//! The allow-list is injected (usually from `[trust]` in the config file);
//! nothing in here knows which domains are trusted.

use std::collections::HashSet;

use factcheck_core::config::TrustConfig;
use factcheck_core::EvidenceSource;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, Default)]
pub struct TrustRegistry {
    /// Stored lower-cased.
    domains: HashSet<String>,
}

impl TrustRegistry {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| d.as_ref().trim().to_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        Self { domains }
    }

    pub fn from_config(config: &TrustConfig) -> Self {
        Self::new(&config.domains)
    }

    /// Case-insensitive membership, trimmed like the entries. Absent or
    /// blank domains are never trusted.
    pub fn is_trusted(&self, domain: Option<&str>) -> bool {
        match domain.map(str::trim) {
            Some(d) if !d.is_empty() => self.domains.contains(&d.to_lowercase()),
            _ => false,
        }
    }

    /// Trust for a source, deriving the domain from its url when needed.
    pub fn is_source_trusted(&self, source: &EvidenceSource) -> bool {
        self.is_trusted(display_domain(source).as_deref())
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Lower-cased host of `url`, or `None` if it does not parse or has no host.
pub fn derive_domain(url: &str) -> Option<String> {
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str().map(str::to_lowercase),
        Err(e) => {
            debug!(url, error = %e, "cannot derive domain from url");
            None
        }
    }
}

/// The source's own `domain`, else the host of its `url`.
pub fn display_domain(source: &EvidenceSource) -> Option<String> {
    match source.domain.as_deref() {
        Some(domain) if !domain.is_empty() => Some(domain.to_string()),
        _ => source.url.as_deref().and_then(derive_domain),
    }
}
