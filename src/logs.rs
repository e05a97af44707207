//! Tracing setup.
//!
//! The terminal owns stdout while the reader runs, so tracing output goes
//! to a file. Without a log file, tracing stays uninitialized and events
//! are dropped.

use anyhow::Context;
use std::path::Path;
use std::sync::Mutex;

/// Initialize the global tracing subscriber, writing to `path` if given.
///
/// The filter is built from `RUST_LOG` with a default level of `info`.
pub fn init(path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("initializing tracing: {e}"))?;

    Ok(())
}
