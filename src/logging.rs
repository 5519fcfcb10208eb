//! Diagnostic logging for the CLI.
//!
//! Library code only emits `tracing` events; installing a subscriber is
//! left to the binary. Events never carry keys, plaintext, tokens or
//! passwords.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::{Result, SecretsError};

/// Environment variable that overrides every other log setting.
pub const LOG_ENV: &str = "FLEET_SECRETS_LOG";

/// Pick the filter directive: `FLEET_SECRETS_LOG`, then `--verbose`, then
/// the configured level.
fn build_filter(verbose: bool, configured: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    let directive = if verbose { "debug" } else { configured };
    EnvFilter::try_new(directive)
        .map_err(|e| SecretsError::ConfigError(format!("invalid log level '{directive}': {e}")))
}

/// Install a compact stderr subscriber. Calling it twice is an error.
pub fn init(verbose: bool, configured: &str) -> Result<()> {
    let filter = build_filter(verbose, configured)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| SecretsError::ConfigError(format!("failed to initialise logging: {e}")))
}
