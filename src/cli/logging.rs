use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Sets up the global tracing subscriber. Logs go to stderr so the word lists on
/// stdout stay clean. `--log` wins over `RUST_LOG`, and `--verbose` raises the
/// fallback level from warn to info
pub fn init(log: Option<&str>, verbose: bool) -> Result<()> {
    let fallback = if verbose { "info" } else { "warn" };
    let filter = match log {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))
}
