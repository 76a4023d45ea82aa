use projects_prober::client::HttpProbeClient;
use projects_prober::config::ProbeConfig;
use projects_prober::pause::ProgressPause;
use projects_prober::probe::run_probes;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    utils_trace::init("info")
        .map_err(|source| MainError::TracingInit { source })?;

    let config = ProbeConfig::default();
    info!(url = %config.url, iterations = config.iterations, pause_secs = config.pause.as_secs(), "starting probe run");

    run_probes(&HttpProbeClient::new(), &config, &ProgressPause).await;

    Ok(())
}
