//! Logging setup for the command-line binary

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Initialize stderr logging.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `debug` when
/// `verbose` is set and at `warn` by default.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(format!("warn,emoji_translator={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
