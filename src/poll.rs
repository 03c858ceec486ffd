//! Periodic store refresh
//!
//! A [`PollingController`] owns one background task that refreshes the
//! store immediately on start and then on every interval tick. Refresh
//! failures are reported and swallowed; only [`PollingController::stop`]
//! ends polling.
//!
//! Scheduling goes through `tokio::time`, so with a paused clock
//! (`#[tokio::test(start_paused = true)]`) ticks are driven by virtual
//! time instead of real waits.

use crate::notify::Notifier;
use crate::store::{RefreshOutcome, Refresher};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// No polling task running
    Idle,
    /// Refreshing on a fixed schedule
    Polling,
}

struct PollTask {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

/// Drives periodic refreshes independent of user actions
pub struct PollingController {
    refresher: Arc<Refresher>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    task: Option<PollTask>,
}

impl PollingController {
    /// Create an idle controller
    ///
    /// A zero interval is raised to one millisecond.
    pub fn new(refresher: Arc<Refresher>, notifier: Arc<dyn Notifier>, interval: Duration) -> Self {
        Self {
            refresher,
            notifier,
            interval: interval.max(Duration::from_millis(1)),
            task: None,
        }
    }

    /// Current state
    pub const fn state(&self) -> PollState {
        if self.task.is_some() {
            PollState::Polling
        } else {
            PollState::Idle
        }
    }

    /// Interval between ticks
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Start polling; no-op if already polling
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }

        debug!("Polling every {:?}", self.interval);
        let (stop, stop_rx) = oneshot::channel();
        let handle = tokio::spawn(poll_loop(
            Arc::clone(&self.refresher),
            Arc::clone(&self.notifier),
            self.interval,
            stop_rx,
        ));
        self.task = Some(PollTask { stop, handle });
    }

    /// Stop polling and wait for the task to finish; no-op if idle
    ///
    /// A refresh in flight is abandoned.
    pub async fn stop(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };

        // Err means the loop already exited
        let _ = task.stop.send(());
        if let Err(e) = task.handle.await {
            warn!("Polling task ended abnormally: {e}");
        }
        debug!("Polling stopped");
    }
}

async fn poll_loop(
    refresher: Arc<Refresher>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    mut stop: oneshot::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(interval);
    // Ticks missed during a slow refresh collapse into one immediate tick,
    // then the schedule realigns to multiples of the interval
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = &mut stop => break,
            _ = ticker.tick() => {
                tokio::select! {
                    _ = &mut stop => break,
                    () = poll_once(&refresher, notifier.as_ref()) => {}
                }
            }
        }
    }
}

async fn poll_once(refresher: &Refresher, notifier: &dyn Notifier) {
    match refresher.refresh().await {
        Ok(RefreshOutcome::Applied(count)) => notifier.on_refreshed(count).await,
        Ok(RefreshOutcome::Stale) => {}
        Err(e) => {
            warn!("Poll failed, will retry next tick: {e}");
            notifier.on_refresh_failed(&e).await;
        }
    }
}
