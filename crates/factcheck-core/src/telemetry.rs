//! Tracing subscriber setup for binaries. Library code only emits events.

use tracing_subscriber::EnvFilter;

use crate::errors::FactcheckError;

/// Filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber honouring `RUST_LOG`.
///
/// `json` switches to one JSON object per line. Fails if a global subscriber
/// is already installed.
pub fn init_tracing(json: bool) -> Result<(), FactcheckError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| FactcheckError::Telemetry(e.to_string()))
}
