//! Async driver that ticks a task on a fixed period.
//!
//! The task itself is synchronous; the driver only decides *when* to tick it.
//! Every wait races against a [`StopSignal`], so a stop request always runs
//! the task's teardown even if it arrives between ticks.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::collaborators::{Combatant, Host};
use crate::error::Result;
use crate::task::{Phase, TargetOfInterest, TickReport};
use crate::world::{Timestamp, WorldView};

/// Supplies a fresh world snapshot for each tick.
pub trait WorldSource {
    type World: WorldView;

    fn snapshot(&mut self) -> Self::World;
}

/// Sending half of the host's stop channel.
#[derive(Debug)]
pub struct StopHandle(watch::Sender<bool>);

/// Receiving half of the host's stop channel.
#[derive(Clone, Debug)]
pub struct StopSignal(watch::Receiver<bool>);

/// Creates a connected stop handle and signal.
pub fn stop_channel() -> (StopHandle, StopSignal) {
    let (tx, rx) = watch::channel(false);
    (StopHandle(tx), StopSignal(rx))
}

impl StopHandle {
    /// Requests a stop. Further calls are harmless.
    pub fn stop(&self) {
        self.0.send_replace(true);
    }
}

impl StopSignal {
    pub fn is_stopped(&self) -> bool {
        *self.0.borrow()
    }

    /// Resolves once a stop has been requested.
    ///
    /// If the handle is dropped without stopping, this never resolves.
    pub async fn stopped(&mut self) {
        if self.0.wait_for(|stopped| *stopped).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Owns the collaborators and ticks a task until it finishes or is stopped.
pub struct Driver<H, C, S> {
    host: H,
    combat: C,
    source: S,
    period: Duration,
}

impl<H, C, S> Driver<H, C, S>
where
    H: Host,
    C: Combatant,
    S: WorldSource,
{
    /// Creates a driver ticking every `period` (at least one millisecond).
    pub fn new(host: H, combat: C, source: S, period: Duration) -> Self {
        Self {
            host,
            combat,
            source,
            period: period.max(Duration::from_millis(1)),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn combat(&self) -> &C {
        &self.combat
    }

    pub fn into_parts(self) -> (H, C, S) {
        (self.host, self.combat, self.source)
    }

    /// Ticks `task` until it is done or `stop` fires, returning the final phase.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::TaskError::Configuration`] from a task that cannot start.
    pub async fn run(&mut self, task: &mut TargetOfInterest, stop: StopSignal) -> Result<Phase> {
        self.run_observed(task, stop, |_, _| {}).await
    }

    /// Like [`Driver::run`], handing every tick's report to `observe` along
    /// with the snapshot time it was evaluated at.
    pub async fn run_observed<F>(
        &mut self,
        task: &mut TargetOfInterest,
        mut stop: StopSignal,
        mut observe: F,
    ) -> Result<Phase>
    where
        F: FnMut(Timestamp, &TickReport),
    {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = stop.stopped() => {
                    tracing::info!("stop requested");
                    task.stop(&mut self.host);
                    break;
                }

                _ = interval.tick() => {
                    let world = self.source.snapshot();
                    let report = task.tick(&mut self.host, &world, &mut self.combat)?;
                    observe(world.now(), &report);
                    if task.phase() == Phase::Done {
                        break;
                    }
                }
            }
        }

        Ok(task.phase())
    }
}
