// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! Filter resolution order: `STOCKROOM_LOG` environment variable, then the
//! `--log-level` CLI value, then `info`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const ENV_LOG_FILTER: &str = "STOCKROOM_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Builds the filter that [`init`] installs.
#[must_use]
pub fn filter(cli_level: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(ENV_LOG_FILTER) {
        return filter;
    }
    cli_level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global fmt subscriber.
///
/// Returns `false` if a subscriber was already installed (tests, embedders).
pub fn init(cli_level: Option<&str>) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(cli_level))
        .with_target(false)
        .try_init()
        .is_ok()
}
