//! Guard conditions for the target-selection tree.
//!
//! Conditions only read the tick context; they never mutate state or talk
//! to collaborators.

use behavior_tree::Condition;

use crate::context::TickContext;

/// Guard predicates, one per gate in the policy tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Check {
    /// The task has not completed yet.
    NotDone,

    /// The boss is dead or no longer exists.
    BossDefeated,

    /// A blacklist candidate exists and is not excluded yet.
    UnexcludedCandidate,

    /// A priority unit is up while the boss carries the aura, or the boss is
    /// ignored outright.
    PriorityWindow,

    /// The current target is not the priority unit, or it is dead.
    OffPriorityTarget,

    /// An excluded candidate is still around but no priority unit is left.
    StaleExclusions,

    /// The boss exists and does not carry the aura.
    BossEngageable,

    /// The current target is not the boss.
    OffBoss,
}

impl Condition<TickContext<'_>> for Check {
    fn check(&self, ctx: &TickContext<'_>) -> bool {
        let seen = &ctx.seen;
        let aura = ctx.config.aura_id;

        let held = match self {
            Check::NotDone => !ctx.state.is_done(),

            Check::BossDefeated => seen.boss.is_none_or(|boss| boss.is_dead()),

            Check::UnexcludedCandidate => {
                !ctx.config.blacklist_mobs.is_empty()
                    && seen
                        .blacklist_candidate
                        .is_some_and(|unit| !ctx.exclusions.contains(unit.guid, ctx.now))
            }

            Check::PriorityWindow => {
                (seen.priority_unit.is_some() && seen.boss.is_some_and(|b| b.has_aura(aura)))
                    || ctx.config.ignore_boss
            }

            Check::OffPriorityTarget => {
                seen.current_target_guid() != seen.priority_unit.map(|u| u.guid)
                    || seen.current_target.is_some_and(|t| t.is_dead())
            }

            Check::StaleExclusions => {
                seen.excluded_candidate.is_some() && seen.priority_unit.is_none()
            }

            Check::BossEngageable => seen.boss.is_some_and(|boss| !boss.has_aura(aura)),

            Check::OffBoss => seen.current_target_guid() != seen.boss.map(|u| u.guid),
        };
        tracing::trace!(guard = %self, held, "guard");
        held
    }
}
