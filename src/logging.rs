//! Diagnostic logging setup
//!
//! Logs go to stderr so they never interleave with the game on stdout. The filter comes
//! from the command line only; the game reads no environment variables.

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Default filter: quiet unless something goes wrong
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global `tracing` subscriber
///
/// `filter` uses `EnvFilter` directive syntax, e.g. `debug` or `wordle_fsm=trace`.
///
/// # Errors
///
/// Returns an error if the filter does not parse or a subscriber is already installed.
pub fn init(filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter '{filter}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))?;

    tracing::debug!(filter, "logging initialized");
    Ok(())
}
