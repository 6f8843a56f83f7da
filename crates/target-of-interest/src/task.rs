//! Task lifecycle: activation, per-tick evaluation, and teardown.
//!
//! ```text
//! NotStarted --start (host idle + composable)--> Running --done / stop--> Done
//! ```
//!
//! Activation is retried every tick until the host is ready. Teardown runs
//! exactly once, whether it is triggered by completion or by a stop request.

use std::collections::HashMap;

use behavior_tree::{Behavior, Status};

use crate::collaborators::{Combatant, Host};
use crate::config::EncounterConfig;
use crate::context::{Decision, Observations, TickContext};
use crate::error::{ConfigError, Result, TaskError};
use crate::exclusion::ExclusionSet;
use crate::policy::{DecisionTree, target_selection_tree};
use crate::state::TaskState;
use crate::world::WorldView;

/// Name under which the task attaches itself to the host.
pub const TASK_NAME: &str = "TargetOfInterest";

/// Lifecycle phase of the task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Phase {
    NotStarted,
    Running,
    Done,
}

/// Outcome of an activation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The task attached itself to the host and is now running.
    Started,
    /// The host was busy or not composable; try again next tick.
    Deferred,
    /// The task was already running.
    AlreadyRunning,
    /// The task has already finished and will not start again.
    Finished,
}

/// What happened during one call to [`TargetOfInterest::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickReport {
    /// Activation was deferred; the tree was not evaluated.
    Deferred,
    /// The tree was evaluated once.
    Evaluated {
        status: Status,
        decision: Option<Decision>,
    },
    /// The task is done; nothing was evaluated.
    Finished,
}

/// Boss encounter task that picks one target per tick.
pub struct TargetOfInterest {
    config: std::result::Result<EncounterConfig, ConfigError>,
    tree: DecisionTree,
    exclusions: ExclusionSet,
    state: TaskState,
    phase: Phase,
}

impl TargetOfInterest {
    /// Creates a task from an already-parsed configuration.
    ///
    /// An invalid configuration still yields a task, but one that refuses to start.
    pub fn new(config: EncounterConfig) -> Self {
        let config = config.validate().map(|()| config);
        Self::with_config(config)
    }

    /// Creates a task from quest-profile attributes.
    pub fn from_attributes(attributes: &HashMap<String, String>) -> Self {
        Self::with_config(EncounterConfig::from_attributes(attributes))
    }

    fn with_config(config: std::result::Result<EncounterConfig, ConfigError>) -> Self {
        if let Err(e) = &config {
            tracing::error!(field = e.field(), error = %e, "invalid {TASK_NAME} parameters");
        }
        Self {
            config,
            tree: target_selection_tree(),
            exclusions: ExclusionSet::new(),
            state: TaskState::new(),
            phase: Phase::NotStarted,
        }
    }

    pub fn config(&self) -> std::result::Result<&EncounterConfig, &ConfigError> {
        self.config.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` once the boss has been dealt with.
    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// Attempts to attach the task to the host.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Configuration`] if the parameters were invalid;
    /// such a task never starts.
    pub fn start(&mut self, host: &mut dyn Host) -> Result<Activation> {
        match self.phase {
            Phase::Running => return Ok(Activation::AlreadyRunning),
            Phase::Done => return Ok(Activation::Finished),
            Phase::NotStarted => {}
        }

        if let Err(e) = &self.config {
            return Err(TaskError::Configuration(e.clone()));
        }

        if !host.is_idle() || !host.is_composable() {
            tracing::debug!("host not ready, deferring activation");
            return Ok(Activation::Deferred);
        }

        host.attach(TASK_NAME);
        self.phase = Phase::Running;
        tracing::info!("{TASK_NAME} started");
        Ok(Activation::Started)
    }

    /// Runs one evaluation cycle.
    ///
    /// A task that has not started yet tries to activate first. When the
    /// evaluation completes the task, teardown runs before returning.
    pub fn tick<W>(
        &mut self,
        host: &mut dyn Host,
        world: &W,
        combat: &mut dyn Combatant,
    ) -> Result<TickReport>
    where
        W: WorldView + ?Sized,
    {
        match self.phase {
            Phase::Done => return Ok(TickReport::Finished),
            Phase::NotStarted => {
                if self.start(host)? == Activation::Deferred {
                    return Ok(TickReport::Deferred);
                }
            }
            Phase::Running => {}
        }

        let config = self.config.as_ref().map_err(|e| e.clone())?;
        let now = world.now();
        let seen = Observations::observe(config, world, &self.exclusions, now);
        let mut ctx = TickContext::new(
            config,
            now,
            seen,
            &mut self.exclusions,
            &mut self.state,
            combat,
        );

        let status = self.tree.tick(&mut ctx);
        let decision = ctx.decision();
        tracing::debug!(
            ?status,
            decision = decision.as_ref().map(Decision::as_ref),
            "evaluated"
        );

        if self.state.is_done() {
            self.teardown(host);
        }

        Ok(TickReport::Evaluated { status, decision })
    }

    /// Handles an external stop request.
    ///
    /// Safe to call any number of times; only the first call has an effect.
    pub fn stop(&mut self, host: &mut dyn Host) {
        match self.phase {
            Phase::NotStarted => {
                tracing::debug!("stopped before activation");
                self.phase = Phase::Done;
            }
            Phase::Running => self.teardown(host),
            Phase::Done => {}
        }
    }

    fn teardown(&mut self, host: &mut dyn Host) {
        if self.phase != Phase::Running {
            return;
        }
        host.detach(TASK_NAME);
        host.clear_status_text();
        self.phase = Phase::Done;
        tracing::info!(completed = self.state.is_done(), "{TASK_NAME} finished");
    }
}
