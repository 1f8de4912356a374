//! Diagnostic logging on stderr.
//!
//! The level defaults to `warn`, `--verbose` raises it to `debug`, and
//! `GIT_SEMVER_LOG` (standard filter directives) overrides both.

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives
pub const LOG_ENV: &str = "GIT_SEMVER_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "git_semver=debug"
    } else {
        "warn"
    }
}

/// Build the filter for this invocation
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed; callers treat that as non-fatal.
pub fn init_logging(verbose: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(fmt_layer)
        .try_init()
}
