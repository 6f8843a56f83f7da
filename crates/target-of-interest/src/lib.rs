//! Boss-encounter target selection driven by a priority decision tree.
//!
//! Every tick the task looks at the live world and picks exactly one thing to
//! do: finish because the boss is gone, exclude a low-value add, switch to a
//! priority unit while the boss is shielded, drop stale exclusions, or go
//! after the boss. The host bot supplies the world, the combat routine, and
//! the scheduler; this crate only decides.
//!
//! Modules are organized by responsibility:
//! - [`task`] hosts the lifecycle state machine and per-tick entry point
//! - [`policy`] builds the decision tree from [`nodes`]
//! - [`context`] resolves the tick's observations and carries the blackboard
//! - [`exclusion`], [`query`], and [`world`] provide the data the nodes read
//! - [`driver`] ticks a task on a tokio interval until it finishes or is stopped
pub mod collaborators;
pub mod config;
pub mod context;
pub mod driver;
pub mod error;
pub mod exclusion;
pub mod nodes;
pub mod policy;
pub mod query;
pub mod state;
pub mod task;
pub mod world;

pub use behavior_tree::Status;
pub use collaborators::{Combatant, Host};
pub use config::EncounterConfig;
pub use context::{Decision, Observations, RoutineStep, TickContext};
pub use driver::{Driver, StopHandle, StopSignal, WorldSource, stop_channel};
pub use error::{CombatError, ConfigError, Result, TaskError};
pub use exclusion::{EXCLUSION_TTL, ExclusionSet};
pub use nodes::{Act, Check};
pub use policy::{DecisionTree, target_selection_tree};
pub use state::TaskState;
pub use task::{Activation, Phase, TASK_NAME, TargetOfInterest, TickReport};
pub use world::{AuraId, Guid, KindId, Timestamp, Unit, WorldSnapshot, WorldView};
