//! Encounter-specific decision tree nodes.
//!
//! Nodes are divided into:
//!
//! - `conditions`: [`Check`] guards that read the tick's observations
//! - `actions`: [`Act`] leaves that perform exactly one effect

pub mod actions;
pub mod conditions;

pub use actions::Act;
pub use conditions::Check;
