//! Core behavior and condition traits.
//!
//! [`Behavior`] is the fundamental abstraction for anything that can be
//! ticked. [`Condition`] is its read-only sibling used by guard nodes: it
//! inspects the context without being allowed to mutate it. Both are generic
//! over a context type `C` so nodes can read world state and record decisions.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes can read
    ///   world state and modify it (e.g., to record the decision they made).
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if the behavior is still in progress
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

/// A side-effect free predicate evaluated by guard nodes.
pub trait Condition<C>: Send + Sync {
    /// Returns `true` when the guarded child should be evaluated.
    fn check(&self, ctx: &C) -> bool;
}
