//! Capabilities the task borrows from its host.
//!
//! The core never reimplements these: the host bot decides how targeting and
//! combat are performed, and owns the behavior tree the task attaches to.

use behavior_tree::Status;

use crate::error::CombatError;
use crate::world::{Guid, Timestamp};

/// Combat-execution subsystem.
pub trait Combatant {
    /// Switches the player's current target.
    fn target(&mut self, guid: Guid) -> Result<(), CombatError>;

    /// Tells the routine not to engage `guid` before `until`.
    fn exclude(&mut self, guid: Guid, until: Timestamp);

    /// Lifts every exclusion previously handed to [`Combatant::exclude`].
    fn flush_exclusions(&mut self);

    /// Healing behavior of the active combat routine.
    fn heal(&mut self) -> Status;

    /// Combat-buff behavior of the active combat routine.
    fn combat_buff(&mut self) -> Status;

    /// Attack behavior of the active combat routine.
    fn combat(&mut self) -> Status;
}

/// Host scheduler that re-evaluates the bot's root tree every tick.
pub trait Host {
    /// Returns `false` while the host's root is in the middle of an evaluation.
    fn is_idle(&self) -> bool;

    /// Returns `true` if the host's root is a priority container that can
    /// accept an inserted child.
    fn is_composable(&self) -> bool;

    /// Inserts the task at the front of the host's re-evaluation path.
    fn attach(&mut self, name: &'static str);

    /// Removes the task from the host's re-evaluation path.
    fn detach(&mut self, name: &'static str);

    /// Clears goal and status text shown to the operator.
    fn clear_status_text(&mut self);
}
