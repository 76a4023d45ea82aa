use std::future::Future;
use std::io::Write;
use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

/// Waits between probe rounds.
pub trait Pause {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps one second at a time, redrawing a `Sleeping: n/total` line on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressPause;

impl Pause for ProgressPause {
    async fn pause(&self, duration: Duration) {
        let total = tick_count(duration);
        draw(&render_tick(0, total));
        for tick in 1..=total {
            tokio::time::sleep(TICK).await;
            draw(&render_tick(tick, total));
        }
        draw("\n");
    }
}

fn tick_count(duration: Duration) -> u64 {
    duration.as_secs()
}

fn render_tick(done: u64, total: u64) -> String {
    format!("\rSleeping: {done}/{total}")
}

fn draw(text: &str) {
    let mut stderr = std::io::stderr().lock();
    // Write failures are ignored.
    let _ = stderr.write_all(text.as_bytes());
    let _ = stderr.flush();
}
