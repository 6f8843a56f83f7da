//! Recording collaborators shared by the integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use target_of_interest::{
    CombatError, Combatant, Guid, Host, Result, Status, TargetOfInterest, TickReport, Timestamp,
    WorldSnapshot,
};

#[derive(Debug)]
pub struct RecordingHost {
    pub idle: bool,
    pub composable: bool,
    pub attached: Vec<&'static str>,
    pub detached: Vec<&'static str>,
    pub status_clears: usize,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            idle: true,
            composable: true,
            attached: Vec::new(),
            detached: Vec::new(),
            status_clears: 0,
        }
    }
}

impl Host for RecordingHost {
    fn is_idle(&self) -> bool {
        self.idle
    }

    fn is_composable(&self) -> bool {
        self.composable
    }

    fn attach(&mut self, name: &'static str) {
        self.attached.push(name);
    }

    fn detach(&mut self, name: &'static str) {
        self.detached.push(name);
    }

    fn clear_status_text(&mut self) {
        self.status_clears += 1;
    }
}

/// Combat routine stand-in: heal and buff decline, attack succeeds.
#[derive(Debug)]
pub struct RecordingCombatant {
    pub current_target: Option<Guid>,
    pub targeted: Vec<Guid>,
    pub refuse: HashSet<Guid>,
    /// Exclusions the routine was told about, with their expiry.
    pub excluded: HashMap<Guid, Timestamp>,
    pub flushes: usize,
    pub heal: Status,
    pub combat_buff: Status,
    pub combat: Status,
    pub routine_calls: usize,
}

impl Default for RecordingCombatant {
    fn default() -> Self {
        Self {
            current_target: None,
            targeted: Vec::new(),
            refuse: HashSet::new(),
            excluded: HashMap::new(),
            flushes: 0,
            heal: Status::Failure,
            combat_buff: Status::Failure,
            combat: Status::Success,
            routine_calls: 0,
        }
    }
}

impl Combatant for RecordingCombatant {
    fn target(&mut self, guid: Guid) -> std::result::Result<(), CombatError> {
        if self.refuse.contains(&guid) {
            return Err(CombatError::Untargetable(guid));
        }
        self.current_target = Some(guid);
        self.targeted.push(guid);
        Ok(())
    }

    fn exclude(&mut self, guid: Guid, until: Timestamp) {
        self.excluded.insert(guid, until);
    }

    fn flush_exclusions(&mut self) {
        self.excluded.clear();
        self.flushes += 1;
    }

    fn heal(&mut self) -> Status {
        self.routine_calls += 1;
        self.heal
    }

    fn combat_buff(&mut self) -> Status {
        self.routine_calls += 1;
        self.combat_buff
    }

    fn combat(&mut self) -> Status {
        self.routine_calls += 1;
        self.combat
    }
}

/// A task together with the collaborators it is ticked against.
pub struct Encounter {
    pub task: TargetOfInterest,
    pub host: RecordingHost,
    pub combat: RecordingCombatant,
}

impl Encounter {
    pub fn new(task: TargetOfInterest) -> Self {
        Self {
            task,
            host: RecordingHost::default(),
            combat: RecordingCombatant::default(),
        }
    }

    /// Ticks against `world`, with the current target taken from the combatant
    /// so earlier target switches carry over.
    pub fn tick(&mut self, world: WorldSnapshot) -> Result<TickReport> {
        let world = WorldSnapshot {
            current_target: self.combat.current_target.or(world.current_target),
            ..world
        };
        self.task.tick(&mut self.host, &world, &mut self.combat)
    }
}
