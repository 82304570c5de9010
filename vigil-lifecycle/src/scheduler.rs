//! Cancellable periodic sweep task.
//!
//! One tokio task per scheduler, driven by `tokio::time::interval` and
//! stopped through a `watch` channel. The sweep itself runs on the blocking
//! pool so a large registry never stalls the runtime's workers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use vigil_core::errors::{ConfigError, SchedulerError, VigilResult};
use vigil_core::traits::ITrustStrategy;

use crate::lifecycle::TrustLifecycle;

struct RunningTask {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
    interval: Duration,
}

impl RunningTask {
    /// Ask the loop to exit. An in-flight sweep runs to completion first.
    fn signal_stop(&self) {
        // The receiver is gone only if the task already exited.
        let _ = self.shutdown.send(true);
    }
}

/// Owner of at most one periodic sweep task.
///
/// `start` replaces any running task, so a restart never leaves two timers
/// alive. `stop` is idempotent and safe during a sweep.
pub struct SweepScheduler {
    running: Mutex<Option<RunningTask>>,
}

impl SweepScheduler {
    pub fn new() -> Self {
        Self {
            running: Mutex::new(None),
        }
    }

    /// Start sweeping `lifecycle` every `interval`, stopping any task this
    /// scheduler already runs. The first sweep fires one interval after start.
    pub fn start<S: ITrustStrategy>(
        &self,
        lifecycle: Arc<TrustLifecycle<S>>,
        interval: Duration,
    ) -> VigilResult<()> {
        if interval.is_zero() {
            return Err(ConfigError::InvalidInterval {
                component: "scheduler",
            }
            .into());
        }
        let runtime = Handle::try_current().map_err(|_| SchedulerError::NoRuntime)?;

        let mut slot = self.lock();
        if let Some(previous) = slot.take() {
            previous.signal_stop();
        }

        let name = lifecycle.strategy().name();
        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let handle = runtime.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticker.tick().await;

            loop {
                tokio::select! {
                    biased;
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        let target = Arc::clone(&lifecycle);
                        match tokio::task::spawn_blocking(move || target.sweep(Utc::now())).await {
                            Ok(report) => info!(
                                strategy = name,
                                assessed = report.assessed,
                                failed = report.failed,
                                duration_ms = report.duration_ms,
                                "scheduled sweep finished"
                            ),
                            Err(err) => error!(strategy = name, error = %err, "scheduled sweep aborted"),
                        }
                    }
                }
            }
            info!(strategy = name, "sweep scheduler stopped");
        });

        *slot = Some(RunningTask {
            shutdown,
            handle,
            interval,
        });
        info!(
            strategy = name,
            interval_ms = interval.as_millis() as u64,
            "sweep scheduler started"
        );
        Ok(())
    }

    /// Stop the running task, if any. Returns true if a task was signalled.
    pub fn stop(&self) -> bool {
        match self.lock().take() {
            Some(task) => {
                task.signal_stop();
                true
            }
            None => false,
        }
    }

    /// Stop the running task and wait for it (and any in-flight sweep) to exit.
    pub async fn shutdown(&self) -> VigilResult<()> {
        let task = self.lock().take();
        if let Some(task) = task {
            task.signal_stop();
            task.handle.await.map_err(|e| SchedulerError::TaskFailed {
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.lock()
            .as_ref()
            .is_some_and(|task| !task.handle.is_finished())
    }

    /// Interval of the running task.
    pub fn interval(&self) -> Option<Duration> {
        self.lock().as_ref().map(|task| task.interval)
    }

    fn lock(&self) -> MutexGuard<'_, Option<RunningTask>> {
        self.running.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SweepScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SweepScheduler {
    fn drop(&mut self) {
        let slot = self.running.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = slot.take() {
            task.signal_stop();
        }
    }
}
