//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "taskbridge=info";

/// Installs a global formatting subscriber writing to stderr.
///
/// The filter is read from `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`]. Stdout is left free for command output.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}
