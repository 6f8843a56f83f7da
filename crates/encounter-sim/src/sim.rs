//! Simulated host and combat routine, and the loop that ties them to a script.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Result;
use target_of_interest::{
    CombatError, Combatant, Driver, Guid, Host, Phase, Status, TargetOfInterest, Timestamp,
    stop_channel,
};

use crate::report::TickRecord;
use crate::script::{Script, ScriptedWorld, SharedTarget};

/// Host bot that is always ready to accept the task.
#[derive(Debug, Default)]
pub struct SimHost;

impl Host for SimHost {
    fn is_idle(&self) -> bool {
        true
    }

    fn is_composable(&self) -> bool {
        true
    }

    fn attach(&mut self, name: &'static str) {
        tracing::debug!(task = name, "attached");
    }

    fn detach(&mut self, name: &'static str) {
        tracing::debug!(task = name, "detached");
    }

    fn clear_status_text(&mut self) {}
}

/// Combat routine with nothing to heal or buff; attacking always succeeds.
///
/// Excluded units are remembered so the routine refuses to switch onto them.
#[derive(Debug)]
pub struct SimCombatant {
    target: SharedTarget,
    excluded: BTreeMap<Guid, Timestamp>,
}

impl SimCombatant {
    pub fn new(target: SharedTarget) -> Self {
        Self {
            target,
            excluded: BTreeMap::new(),
        }
    }

    /// Units the routine is currently told to leave alone.
    pub fn excluded(&self) -> Vec<Guid> {
        self.excluded.keys().copied().collect()
    }
}

impl Combatant for SimCombatant {
    fn target(&mut self, guid: Guid) -> std::result::Result<(), CombatError> {
        if self.excluded.contains_key(&guid) {
            return Err(CombatError::Untargetable(guid));
        }
        self.target.set(Some(guid));
        Ok(())
    }

    fn exclude(&mut self, guid: Guid, until: Timestamp) {
        tracing::debug!(%guid, until = until.0, "routine excludes unit");
        self.excluded.insert(guid, until);
    }

    fn flush_exclusions(&mut self) {
        tracing::debug!(count = self.excluded.len(), "routine exclusions lifted");
        self.excluded.clear();
    }

    fn heal(&mut self) -> Status {
        Status::Failure
    }

    fn combat_buff(&mut self) -> Status {
        Status::Failure
    }

    fn combat(&mut self) -> Status {
        Status::Success
    }
}

/// Result of replaying a script.
#[derive(Debug)]
pub struct Simulation {
    pub phase: Phase,
    pub completed: bool,
    pub ticks: Vec<TickRecord>,
    /// Units still excluded by the routine when the replay ended.
    pub excluded: Vec<Guid>,
}

/// Replays `script` through a fresh task, one frame every `period`.
pub async fn simulate(script: Script, period: Duration) -> Result<Simulation> {
    let mut task = TargetOfInterest::from_attributes(&script.attributes);

    let target = SharedTarget::default();
    let (stop_handle, stop) = stop_channel();
    let world = ScriptedWorld::new(script.frames, target.clone(), stop_handle);
    let mut driver = Driver::new(SimHost, SimCombatant::new(target), world, period);

    let mut ticks = Vec::new();
    let phase = driver
        .run_observed(&mut task, stop, |now: Timestamp, report| {
            ticks.push(TickRecord::new(ticks.len() + 1, now, report));
        })
        .await?;

    Ok(Simulation {
        phase,
        completed: task.is_done(),
        ticks,
        excluded: driver.combat().excluded(),
    })
}
