pub mod client_config;
pub mod display_config;
pub mod stance_config;
pub mod trust_config;

use std::fmt::Write;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use client_config::ClientConfig;
pub use display_config::DisplayConfig;
pub use stance_config::StanceConfig;
pub use trust_config::TrustConfig;

use crate::errors::ConfigError;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "FACTCHECK_CONFIG";
/// Config file used when `FACTCHECK_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "factcheck.toml";

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FactcheckConfig {
    pub trust: TrustConfig,
    pub stance: StanceConfig,
    pub display: DisplayConfig,
    pub client: ClientConfig,
}

impl FactcheckConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Like [`load`](Self::load), but any failure yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config unusable, using defaults");
                Self::default()
            }
        }
    }

    /// Load from `$FACTCHECK_CONFIG`, or `factcheck.toml` when unset.
    pub fn from_env() -> Self {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_or_default(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.stance.threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Invalid {
                field: "stance.threshold",
                reason: format!("must be between 0.0 and 1.0, got {threshold}"),
            });
        }
        if self.display.date_format.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "display.date_format",
                reason: "must not be empty".to_string(),
            });
        }
        if !is_valid_date_format(&self.display.date_format) {
            return Err(ConfigError::Invalid {
                field: "display.date_format",
                reason: format!("unsupported strftime pattern {:?}", self.display.date_format),
            });
        }
        if let Err(e) = url::Url::parse(&self.client.base_url) {
            return Err(ConfigError::Invalid {
                field: "client.base_url",
                reason: e.to_string(),
            });
        }
        if self.client.error_body_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "client.error_body_limit",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Whether chrono can render a calendar date with `pattern`.
///
/// Time and offset specifiers (`%H`, `%z`, ...) parse fine but fail when
/// rendered against a bare date, so the pattern is test-rendered.
pub fn is_valid_date_format(pattern: &str) -> bool {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let Some(sample) = NaiveDate::from_ymd_opt(2024, 1, 15) else {
        return false;
    };
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format_with_items(items.iter())).is_ok()
}
