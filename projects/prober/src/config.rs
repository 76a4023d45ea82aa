use std::time::Duration;

pub const PROBE_URL: &str =
    "https://ishaan-new-test-1-ishaan-ws-80.tfy-ctl-euwe1-devtest.devtest.truefoundry.tech/";
pub const PROBE_ITERATIONS: u32 = 60;
pub const PROBE_PAUSE: Duration = Duration::from_secs(80);

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub url: String,
    pub iterations: u32,
    pub pause: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: PROBE_URL.to_string(),
            iterations: PROBE_ITERATIONS,
            pause: PROBE_PAUSE,
        }
    }
}
