//! Lightweight behavior tree library for tick-driven decision making.
//!
//! This library provides a minimal, deterministic behavior tree implementation
//! designed to be re-evaluated from the root on every tick.
//!
//! - **Data trees**: Nodes are tagged variants over caller-defined condition
//!   and action types, so trees are inspectable and comparable
//! - **Tri-state results**: Success, Failure, or Running
//! - **No per-node memory**: All state lives in the context passed to `tick`
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for anything that can be ticked
//! - [`Condition`]: Read-only predicate evaluated by guards
//! - [`Status`]: Success, Failure, or Running
//! - [`Node`]: Guard, Priority branch, and Action leaf

pub mod behavior;
pub mod builder;
pub mod node;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, Condition};
pub use node::Node;
pub use status::Status;
