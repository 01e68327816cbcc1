use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::SessionStore;

/// Default period between eviction passes.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// Background task that periodically evicts idle sessions from a store.
///
/// Eviction is advisory maintenance: it never interrupts a turn already
/// holding its session lock. The task is aborted when the sweeper is
/// dropped or shut down.
#[derive(Debug)]
pub struct Sweeper {
    handle: JoinHandle<()>,
}

impl Sweeper {
    /// Spawns the sweep loop on the current tokio runtime.
    pub fn spawn(store: SessionStore, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                store.sweep(Instant::now());
            }
        });
        Self { handle }
    }

    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
