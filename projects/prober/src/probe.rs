use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use crate::client::ProbeClient;
use crate::config::ProbeConfig;
use crate::pause::Pause;

const HEALTHY_STATUS: u16 = 200;

/// Result of a single GET.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    Responded { status: u16, elapsed: Duration },
    Unreachable { error: String, elapsed: Duration },
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Responded { status, .. } if *status == HEALTHY_STATUS)
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            ProbeOutcome::Responded { elapsed, .. } | ProbeOutcome::Unreachable { elapsed, .. } => *elapsed,
        }
    }
}

/// Success and failure counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeTally {
    pub successful: u32,
    pub failed: u32,
}

impl ProbeTally {
    pub fn record(&mut self, outcome: &ProbeOutcome) {
        if outcome.is_success() {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.successful + self.failed
    }
}

/// One GET against `url`, timed until the response head arrives.
pub async fn probe_once<C: ProbeClient>(client: &C, url: &str) -> ProbeOutcome {
    let started = Instant::now();
    let result = client.get(url).await;
    let elapsed = started.elapsed();

    match result {
        Ok(status) => ProbeOutcome::Responded { status, elapsed },
        Err(source) => ProbeOutcome::Unreachable {
            error: source.to_string(),
            elapsed,
        },
    }
}

/// Probes `config.iterations` times, pausing between rounds.
///
/// Every outcome is reported and counted; an unreachable endpoint is a
/// failed round, not the end of the run.
pub async fn run_probes<C, P>(client: &C, config: &ProbeConfig, pause: &P) -> ProbeTally
where
    C: ProbeClient,
    P: Pause,
{
    let mut tally = ProbeTally::default();

    for attempt in 1..=config.iterations {
        let outcome = probe_once(client, &config.url).await;
        report(attempt, &outcome);
        tally.record(&outcome);

        if attempt < config.iterations {
            pause.pause(config.pause).await;
        }
    }

    info!(
        successful = tally.successful,
        failed = tally.failed,
        total = tally.total(),
        "probe run finished"
    );

    tally
}

fn report(attempt: u32, outcome: &ProbeOutcome) {
    let elapsed_secs = outcome.elapsed().as_secs_f64();
    match outcome {
        ProbeOutcome::Responded { status, .. } if outcome.is_success() => {
            info!(attempt, status, elapsed_secs, "Attempt {attempt}: {status}");
        }
        ProbeOutcome::Responded { status, .. } => {
            warn!(attempt, status, elapsed_secs, "Attempt {attempt}: {status}");
        }
        ProbeOutcome::Unreachable { error, .. } => {
            error!(attempt, error = %error, elapsed_secs, "Attempt {attempt}: request failed");
        }
    }
}
