//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing `Node::guard(cond, Node::priority(vec![...]))`,
//! you can use shorter functions like `guard(cond, priority(vec![...]))`.

use crate::Node;

/// Creates a guard node.
///
/// Shorthand for `Node::guard(condition, child)`.
#[inline]
pub fn guard<G, A>(condition: G, child: Node<G, A>) -> Node<G, A> {
    Node::guard(condition, child)
}

/// Creates a priority branch.
///
/// Shorthand for `Node::priority(children)`.
#[inline]
pub fn priority<G, A>(children: Vec<Node<G, A>>) -> Node<G, A> {
    Node::priority(children)
}

/// Creates an action leaf.
///
/// Shorthand for `Node::action(action)`.
#[inline]
pub fn action<G, A>(action: A) -> Node<G, A> {
    Node::action(action)
}
