//! The polling loop.
//!
//! Each cycle applies any pending slow refresh, composes the line, and
//! publishes it. The loop then sleeps for the interval minus the time the
//! cycle took, so slow collectors or sinks do not push later ticks back.
//! A refresh or terminate request cuts the sleep short.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::time::Instant;

use crate::composer::Composer;
use crate::refresh::RefreshController;
use crate::sink::Sink;
use crate::state::RunState;

/// Time left to sleep after a cycle that took `elapsed`.
///
/// `None` means the cycle overran the interval and the next one starts now.
pub fn sleep_budget(interval: Duration, elapsed: Duration) -> Option<Duration> {
    interval.checked_sub(elapsed)
}

pub struct Scheduler {
    composer: Composer,
    interval: Duration,
    run: Arc<RunState>,
}

impl Scheduler {
    pub fn new(composer: Composer, interval: Duration, run: Arc<RunState>) -> Self {
        Self {
            composer,
            interval,
            run,
        }
    }

    /// Runs until termination is requested, then tears the sink down.
    ///
    /// Errors are fatal: they come from the sink and abort the loop without
    /// a teardown.
    pub async fn run(&self, sink: &mut dyn Sink) -> Result<()> {
        let mut refresh = RefreshController::startup(&self.composer);
        tracing::info!(
            sink = sink.name(),
            interval_ms = self.interval.as_millis(),
            modules = self.composer.registry().len(),
            "status loop started"
        );

        loop {
            let start = Instant::now();
            refresh.apply_pending(&self.composer, &self.run);

            let line = self.composer.compose(refresh.slow_section());
            sink.publish(line.as_str())?;

            if self.run.is_done() {
                break;
            }

            let Some(wait) = sleep_budget(self.interval, start.elapsed()) else {
                tracing::debug!(elapsed = ?start.elapsed(), "cycle overran interval");
                continue;
            };
            tokio::select! {
                () = tokio::time::sleep(wait) => {}
                () = self.run.woken() => {
                    tracing::debug!("sleep interrupted");
                }
            }
        }

        tracing::info!(sink = sink.name(), "tearing down sink");
        sink.teardown()
    }
}
