use std::process::ExitCode;

use projects_contributors::config::FetcherConfig;
use projects_contributors::run::{run, RunError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("Run: {source}")]
    Run {
        #[source]
        source: RunError,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, MainError> {
    let config = FetcherConfig::from_env();

    utils_trace::init("info")
        .map_err(|source| MainError::TracingInit { source })?;

    let outcome = run(&config)
        .await
        .map_err(|source| MainError::Run { source })?;

    Ok(ExitCode::from(outcome.exit_code()))
}
