//! Target-selection policy.
//!
//! The policy is a fixed priority branch behind a not-done guard:
//!
//! 1. `done_yet` - complete once the boss is dead or gone
//! 2. `blacklist_adds` - exclude the nearest unexcluded blacklist add
//! 3. `priority_kill` - engage the kill order while the boss is shielded
//! 4. `remove_blacklist_adds` - flush exclusions once no priority unit is left
//! 5. `kill_boss` - engage the boss once it drops its aura
//!
//! Only the first branch whose guard holds does work in a tick.

use behavior_tree::Node;
use behavior_tree::builder::{action, guard, priority};

use crate::nodes::{Act, Check};

/// The decision tree type used by the task.
pub type DecisionTree = Node<Check, Act>;

/// Builds the complete target-selection tree.
pub fn target_selection_tree() -> DecisionTree {
    guard(
        Check::NotDone,
        priority(vec![
            done_yet(),
            blacklist_adds(),
            priority_kill(),
            remove_blacklist_adds(),
            kill_boss(),
        ]),
    )
}

pub fn done_yet() -> DecisionTree {
    guard(Check::BossDefeated, action(Act::Complete))
}

pub fn blacklist_adds() -> DecisionTree {
    guard(Check::UnexcludedCandidate, action(Act::ExcludeCandidate))
}

pub fn priority_kill() -> DecisionTree {
    guard(
        Check::PriorityWindow,
        priority(vec![
            guard(Check::OffPriorityTarget, action(Act::TargetPriorityUnit)),
            use_combat_routine(),
        ]),
    )
}

pub fn remove_blacklist_adds() -> DecisionTree {
    guard(Check::StaleExclusions, action(Act::FlushExclusions))
}

pub fn kill_boss() -> DecisionTree {
    guard(
        Check::BossEngageable,
        priority(vec![
            guard(Check::OffBoss, action(Act::TargetBoss)),
            use_combat_routine(),
        ]),
    )
}

/// Heal, then buff, then attack; the first behavior that does not fail wins.
pub fn use_combat_routine() -> DecisionTree {
    priority(vec![
        action(Act::Heal),
        action(Act::CombatBuff),
        action(Act::Combat),
    ])
}
