use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::event::QuizEvent;

/// Countdown resolution.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Source of the once-per-second countdown ticks.
///
/// The controller owns its ticker and is the only caller of these methods.
/// `start` must stop any tick source that is already running, so at most one
/// is ever active.
pub trait Ticker {
    /// Starts ticking; every tick is tagged with `generation`.
    fn start(&mut self, generation: u64);

    /// Stops ticking. Calling it on a stopped ticker does nothing.
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

//
// ─── INTERVAL TICKER ──────────────────────────────────────────────────────────
//

/// Ticker backed by a tokio task that pushes `QuizEvent::Tick` into the
/// event channel on a fixed period.
pub struct IntervalTicker {
    runtime: Handle,
    events: UnboundedSender<QuizEvent>,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl IntervalTicker {
    #[must_use]
    pub fn new(runtime: Handle, events: UnboundedSender<QuizEvent>) -> Self {
        Self {
            runtime,
            events,
            period: TICK_PERIOD,
            task: None,
        }
    }

    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }
}

impl Ticker for IntervalTicker {
    fn start(&mut self, generation: u64) {
        self.stop();

        let events = self.events.clone();
        let period = self.period;
        let task = self.runtime.spawn(async move {
            // First tick lands one full period after start, not immediately.
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if events.send(QuizEvent::Tick { generation }).is_err() {
                    tracing::debug!(generation, "event channel closed, ticker exiting");
                    break;
                }
            }
        });
        tracing::debug!(generation, ?period, "ticker started");
        self.task = Some(task);
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("ticker stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

//
// ─── MANUAL TICKER ────────────────────────────────────────────────────────────
//

/// Ticker that never fires on its own; the owner calls
/// `QuizController::tick` instead. Keeps start/stop bookkeeping so callers can
/// check the lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualTicker {
    generation: Option<u64>,
    starts: usize,
    stops: usize,
}

impl ManualTicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the running tick source, if any.
    #[must_use]
    pub fn generation(&self) -> Option<u64> {
        self.generation
    }

    #[must_use]
    pub fn starts(&self) -> usize {
        self.starts
    }

    /// Number of times a running tick source was actually stopped.
    #[must_use]
    pub fn stops(&self) -> usize {
        self.stops
    }
}

impl Ticker for ManualTicker {
    fn start(&mut self, generation: u64) {
        self.stop();
        self.generation = Some(generation);
        self.starts += 1;
    }

    fn stop(&mut self) {
        if self.generation.take().is_some() {
            self.stops += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.generation.is_some()
    }
}
