//! Installs the tracing subscriber that renders backend output.

use tracing_subscriber::EnvFilter;

use crate::error::{BuildLogError, Result};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "info";

/// Build the filter. Quiet turns everything off, even over `RUST_LOG`;
/// otherwise `RUST_LOG` wins and falls back to `info`.
pub fn env_filter(quiet: bool) -> EnvFilter {
    if quiet {
        return EnvFilter::new("off");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a stderr formatter as the global subscriber.
///
/// Fails instead of panicking when a subscriber is already installed.
pub fn init_subscriber(quiet: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| BuildLogError::SubscriberInit(e.to_string()))
}
