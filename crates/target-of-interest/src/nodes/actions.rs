//! Action leaves for the target-selection tree.
//!
//! Each leaf performs exactly one effect: flip the completion flag, touch the
//! exclusion set, switch target, or hand the tick to the combat routine. A
//! leaf that does work records a [`Decision`] in the context.

use behavior_tree::{Behavior, Status};

use crate::context::{Decision, RoutineStep, TickContext};
use crate::exclusion::EXCLUSION_TTL;
use crate::world::{Guid, Unit};

/// Terminal effects, one per leaf in the policy tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Act {
    /// Marks the task done.
    Complete,

    /// Excludes the current blacklist candidate for [`EXCLUSION_TTL`].
    ExcludeCandidate,

    /// Targets the priority unit.
    TargetPriorityUnit,

    /// Drops every exclusion.
    FlushExclusions,

    /// Targets the boss.
    TargetBoss,

    /// Runs the combat routine's heal behavior.
    Heal,

    /// Runs the combat routine's buff behavior.
    CombatBuff,

    /// Runs the combat routine's attack behavior.
    Combat,
}

impl Behavior<TickContext<'_>> for Act {
    fn tick(&self, ctx: &mut TickContext<'_>) -> Status {
        let status = self.perform(ctx);
        tracing::trace!(action = %self, ?status, "leaf");
        status
    }
}

impl Act {
    fn perform(&self, ctx: &mut TickContext<'_>) -> Status {
        match self {
            Act::Complete => {
                if ctx.state.mark_done() {
                    tracing::info!(boss = %ctx.config.boss_id, "behavior finished");
                }
                ctx.record(Decision::Complete);
                Status::Success
            }

            Act::ExcludeCandidate => {
                let Some(unit) = ctx.seen.blacklist_candidate else {
                    return Status::Failure;
                };
                let until = ctx.exclusions.add(unit.guid, EXCLUSION_TTL, ctx.now);
                ctx.combat.exclude(unit.guid, until);
                tracing::debug!(guid = %unit.guid, entry = %unit.entry, until = until.0, "excluding add");
                ctx.record(Decision::Exclude(unit.guid));
                Status::Success
            }

            Act::TargetPriorityUnit => {
                let unit = ctx.seen.priority_unit;
                engage(ctx, unit, Decision::EngagePriority)
            }

            Act::FlushExclusions => {
                ctx.exclusions.flush();
                ctx.combat.flush_exclusions();
                tracing::debug!("no priority unit left, flushing exclusions");
                ctx.record(Decision::FlushExclusions);
                Status::Success
            }

            Act::TargetBoss => {
                let unit = ctx.seen.boss;
                engage(ctx, unit, Decision::EngageBoss)
            }

            Act::Heal => routine(ctx, RoutineStep::Heal),
            Act::CombatBuff => routine(ctx, RoutineStep::CombatBuff),
            Act::Combat => routine(ctx, RoutineStep::Combat),
        }
    }
}

/// Switches the player's target to `unit`.
///
/// Fails when there is no unit or the collaborator refuses, letting the
/// enclosing branch fall through to its next child.
fn engage(
    ctx: &mut TickContext<'_>,
    unit: Option<&Unit>,
    decision: fn(Guid) -> Decision,
) -> Status {
    let Some(unit) = unit else {
        return Status::Failure;
    };

    match ctx.combat.target(unit.guid) {
        Ok(()) => {
            tracing::debug!(guid = %unit.guid, entry = %unit.entry, "switching target");
            ctx.record(decision(unit.guid));
            Status::Success
        }
        Err(e) => {
            tracing::warn!(guid = %unit.guid, error = %e, "failed to switch target");
            Status::Failure
        }
    }
}

fn routine(ctx: &mut TickContext<'_>, step: RoutineStep) -> Status {
    let status = match step {
        RoutineStep::Heal => ctx.combat.heal(),
        RoutineStep::CombatBuff => ctx.combat.combat_buff(),
        RoutineStep::Combat => ctx.combat.combat(),
    };
    if !status.is_failure() {
        ctx.record(Decision::Routine(step));
    }
    status
}
