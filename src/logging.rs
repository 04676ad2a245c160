//! Logging setup
//!
//! Installs a global tracing subscriber writing to stderr, so stdout stays
//! reserved for rendered output and `--json`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Errors that may occur while initializing logging
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Failed to set the global tracing subscriber
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Default filter directive for a `-v` count
fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// `RUST_LOG` wins; otherwise the level comes from `-v` flags
fn build_env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)))
}

/// Initialize tracing. Calling twice returns an error rather than panicking.
pub fn init(verbosity: u8) -> Result<(), LoggingError> {
    let stderr_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    let subscriber = Registry::default()
        .with(build_env_filter(verbosity))
        .with(stderr_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
