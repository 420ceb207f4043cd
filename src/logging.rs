//! Tracing subscriber initialization.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `level` is an `EnvFilter` directive string (the `RUST_LOG` value, e.g.
/// `info` or `short_url=debug,tower_http=info`). `format` is `text` or `json`.
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter or a global subscriber
/// is already installed.
pub fn init(level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        "json" => builder
            .json()
            .with_current_span(true)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?,
        _ => builder.try_init().map_err(|e| anyhow::anyhow!(e))?,
    }

    Ok(())
}
