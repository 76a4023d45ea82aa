//! Logging setup shared by the workspace binaries.

use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence; `default_level` applies when it is unset.
/// Events go to stdout without target or span noise, which is all a
/// one-shot command-line run needs.
pub fn init(default_level: &str) -> Result<(), TracingInitError> {
    let filter = build_filter(default_level)?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| TracingInitError::SetGlobalDefault { source })?;

    Ok(())
}

fn build_filter(default_level: &str) -> Result<EnvFilter, TracingInitError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|source| TracingInitError::InvalidFilter {
                directive: default_level.to_string(),
                source,
            }),
    }
}

#[derive(Debug, Error)]
pub enum TracingInitError {
    #[error("InvalidFilter: {directive}: {source}")]
    InvalidFilter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("SetGlobalDefault: {source}")]
    SetGlobalDefault {
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}
