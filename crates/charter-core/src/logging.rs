//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::CharterError;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.filter`. A subscriber that is
/// already installed is left in place.
///
/// # Errors
///
/// Returns `CharterError::Invalid` if the configured filter does not parse.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), CharterError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| {
            CharterError::invalid(format!("Invalid log filter {}: {e}", config.filter))
        })?,
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(true)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(filter = %config.filter, ansi = config.ansi, "tracing initialized");
    } else {
        tracing::trace!("tracing subscriber already installed");
    }
    Ok(())
}
