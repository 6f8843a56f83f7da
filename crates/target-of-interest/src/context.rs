//! Per-tick blackboard for the decision tree.
//!
//! [`Observations`] are computed once at the start of a tick from the world
//! snapshot and handed to every node through [`TickContext`], instead of each
//! guard re-scanning the world. Nothing in here survives the tick.

use serde::Serialize;

use crate::collaborators::Combatant;
use crate::config::EncounterConfig;
use crate::exclusion::ExclusionSet;
use crate::query;
use crate::state::TaskState;
use crate::world::{Guid, Timestamp, Unit, WorldView};

/// Units of interest resolved for one tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct Observations<'w> {
    /// First unit of the boss kind, living or dead.
    pub boss: Option<&'w Unit>,

    /// Nearest living unit of the highest-ranked kill-order kind present.
    pub priority_unit: Option<&'w Unit>,

    /// Nearest living blacklist-kind unit that is not excluded and not the boss.
    pub blacklist_candidate: Option<&'w Unit>,

    /// Nearest living blacklist-kind unit that is currently excluded.
    pub excluded_candidate: Option<&'w Unit>,

    /// Unit the player is targeting, if it is among the known units.
    pub current_target: Option<&'w Unit>,
}

impl<'w> Observations<'w> {
    /// Resolves every unit of interest against `world`.
    pub fn observe<W>(
        config: &EncounterConfig,
        world: &'w W,
        exclusions: &ExclusionSet,
        now: Timestamp,
    ) -> Self
    where
        W: WorldView + ?Sized,
    {
        let units = world.units();
        let boss_id = config.boss_id;

        let blacklist_candidate =
            query::nearest_alive_where(units, &config.blacklist_mobs, |u| {
                u.entry != boss_id && !exclusions.contains(u.guid, now)
            });
        let excluded_candidate = query::nearest_alive_where(units, &config.blacklist_mobs, |u| {
            u.entry != boss_id && exclusions.contains(u.guid, now)
        });

        Self {
            boss: query::by_kind(units, boss_id),
            priority_unit: query::nearest_alive(units, &config.kill_order),
            blacklist_candidate,
            excluded_candidate,
            current_target: world
                .current_target()
                .and_then(|guid| query::by_guid(units, guid)),
        }
    }

    /// Identity of the current target.
    pub fn current_target_guid(&self) -> Option<Guid> {
        self.current_target.map(|u| u.guid)
    }
}

/// Step of the combat routine that was delegated to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RoutineStep {
    Heal,
    CombatBuff,
    Combat,
}

/// The single action leaf that did work during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Decision {
    /// The boss is gone; the task is complete.
    Complete,
    /// A blacklist candidate was excluded.
    Exclude(Guid),
    /// Targeted the priority unit.
    EngagePriority(Guid),
    /// All exclusions were dropped.
    FlushExclusions,
    /// Targeted the boss.
    EngageBoss(Guid),
    /// Delegated to the combat routine.
    Routine(RoutineStep),
}

/// Blackboard shared by all nodes during one evaluation.
pub struct TickContext<'a> {
    pub config: &'a EncounterConfig,
    pub now: Timestamp,
    pub seen: Observations<'a>,
    pub exclusions: &'a mut ExclusionSet,
    pub state: &'a mut TaskState,
    pub combat: &'a mut dyn Combatant,
    decision: Option<Decision>,
}

impl<'a> TickContext<'a> {
    pub fn new(
        config: &'a EncounterConfig,
        now: Timestamp,
        seen: Observations<'a>,
        exclusions: &'a mut ExclusionSet,
        state: &'a mut TaskState,
        combat: &'a mut dyn Combatant,
    ) -> Self {
        Self {
            config,
            now,
            seen,
            exclusions,
            state,
            combat,
            decision: None,
        }
    }

    /// Records the decision made by an action leaf.
    ///
    /// Only one leaf may do work per tick; a second record is a tree bug and
    /// is ignored in release builds.
    pub fn record(&mut self, decision: Decision) {
        debug_assert!(
            self.decision.is_none(),
            "decision {:?} already recorded, refusing {:?}",
            self.decision,
            decision
        );
        if self.decision.is_none() {
            self.decision = Some(decision);
        }
    }

    /// The decision recorded this tick, if any leaf did work.
    pub fn decision(&self) -> Option<Decision> {
        self.decision
    }
}
