/******************************************************************************
   Author: ALGORHYTHM Team
   Date: 14/10/26
******************************************************************************/

//! Fixed-cadence polling of widget fetchers
//!
//! Each registered source gets its own timer. A tick spawns one independent
//! fetch and goes straight back to waiting, so a slow response neither delays
//! nor cancels the next tick. Stopping the scheduler aborts the timers only;
//! fetches already in flight run to completion.

use crate::application::fetcher::Refresh;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info};

struct PollJob {
    source: Arc<dyn Refresh>,
    every: Duration,
}

/// Owner of the polling timers of one page
#[derive(Default)]
pub struct PollingScheduler {
    jobs: Vec<PollJob>,
    timers: Mutex<Vec<JoinHandle<()>>>,
}

impl PollingScheduler {
    /// Scheduler without sources
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `source` to be refreshed every `every`
    ///
    /// Sources registered after [`start`](Self::start) are only primed by a later
    /// `prime` call and polled after a restart.
    pub fn register(&mut self, source: Arc<dyn Refresh>, every: Duration) {
        debug!("Registering {} every {:?}", source.name(), every);
        self.jobs.push(PollJob { source, every });
    }

    /// Number of registered sources
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// `true` when no source is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Fetches every source exactly once, concurrently, and waits for all of them
    ///
    /// Failures are already logged by the sources and are not propagated.
    pub async fn prime(&self) {
        let pending: Vec<_> = self
            .jobs
            .iter()
            .map(|job| {
                let source = job.source.clone();
                tokio::spawn(async move {
                    let _ = source.refresh().await;
                })
            })
            .collect();

        for handle in pending {
            let _ = handle.await;
        }
    }

    /// Arms one timer per source; the first tick fires one period from now
    ///
    /// Calling `start` on a running scheduler restarts every timer.
    pub fn start(&self) {
        let mut timers = self.timers();
        for handle in timers.drain(..) {
            handle.abort();
        }

        for job in &self.jobs {
            if job.every.is_zero() {
                debug!("{}: zero period, not polled", job.source.name());
                continue;
            }
            let source = job.source.clone();
            let every = job.every;
            timers.push(tokio::spawn(async move {
                let mut ticker = interval_at(Instant::now() + every, every);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    let source = source.clone();
                    tokio::spawn(async move {
                        let _ = source.refresh().await;
                    });
                }
            }));
        }
        info!("Polling started for {} sources", timers.len());
    }

    /// Aborts every timer
    pub fn shutdown(&self) {
        let mut timers = self.timers();
        if timers.is_empty() {
            return;
        }
        for handle in timers.drain(..) {
            handle.abort();
        }
        info!("Polling stopped");
    }

    /// `true` while timers are armed
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.timers().is_empty()
    }

    fn timers(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        match self.timers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Drop for PollingScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
