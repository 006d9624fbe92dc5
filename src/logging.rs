//! Logging subscriber initialisation.
//!
//! Logs go to stderr so that invoices and payment confirmations on stdout stay clean.

use std::io;

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Registry,
    filter::ParseError,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::{Config, LogFormat};

/// Errors setting up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log level directive could not be parsed.
    #[error("invalid log level: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber was already installed.
    #[error(transparent)]
    Init(#[from] TryInitError),
}

/// Install the global tracing subscriber described by `config`.
///
/// # Errors
///
/// Returns a [`LoggingError`] if the log level is invalid or a subscriber is already installed.
pub fn init_subscriber(config: &Config) -> Result<(), LoggingError> {
    let filter = build_env_filter(config)?;

    match config.log_format {
        LogFormat::Compact => init_with_layer(
            filter,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(io::stderr),
        ),
        LogFormat::Json => init_with_layer(
            filter,
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true)
                .with_writer(io::stderr),
        ),
    }
}

fn build_env_filter(config: &Config) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(&config.log_level)
}

fn init_with_layer<L>(filter: EnvFilter, fmt_layer: L) -> Result<(), LoggingError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn build_env_filter_accepts_directives() {
        let config = Config::try_parse_from(["folio", "--log-level", "folio=debug,warn"]);

        assert!(config.is_ok_and(|config| build_env_filter(&config).is_ok()));
    }
}
