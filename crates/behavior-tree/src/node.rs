//! Tagged-variant tree nodes.
//!
//! A [`Node`] is plain data: guards and actions are values of caller-defined
//! types `G` and `A` (usually enums), so a whole tree can be built once,
//! printed, compared in tests, and re-evaluated every tick without capturing
//! any outer state. Everything a node needs at evaluation time comes from the
//! context passed to [`Behavior::tick`].

use crate::{Behavior, Condition, Status};

/// A node in a decision tree.
///
/// # Semantics
///
/// - [`Node::Guard`]: if the condition is false, returns `Failure` **without**
///   evaluating the child; otherwise returns the child's result
/// - [`Node::Priority`]: evaluates children left to right and returns the
///   first result that is not `Failure`; returns `Failure` if every child fails
/// - [`Node::Action`]: delegates to the action's own `tick`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<G, A> {
    /// Conditional gate around a single child.
    Guard { condition: G, child: Box<Node<G, A>> },

    /// Ordered alternatives, first non-failure wins.
    Priority(Vec<Node<G, A>>),

    /// Terminal node performing one effect.
    Action(A),
}

impl<G, A> Node<G, A> {
    /// Creates a guard node.
    pub fn guard(condition: G, child: Node<G, A>) -> Self {
        Node::Guard {
            condition,
            child: Box::new(child),
        }
    }

    /// Creates a priority branch.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A branch with no children is
    /// meaningless and likely indicates a programming error.
    pub fn priority(children: Vec<Node<G, A>>) -> Self {
        assert!(
            !children.is_empty(),
            "Priority branch must have at least one child"
        );
        Node::Priority(children)
    }

    /// Creates an action leaf.
    pub fn action(action: A) -> Self {
        Node::Action(action)
    }

    /// Lists action leaves in the order a full left-to-right walk reaches them.
    pub fn leaves(&self) -> Vec<&A> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a A>) {
        match self {
            Node::Guard { child, .. } => child.collect_leaves(out),
            Node::Priority(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
            Node::Action(action) => out.push(action),
        }
    }
}

impl<C, G, A> Behavior<C> for Node<G, A>
where
    G: Condition<C>,
    A: Behavior<C>,
{
    fn tick(&self, ctx: &mut C) -> Status {
        match self {
            Node::Guard { condition, child } => {
                if condition.check(ctx) {
                    child.tick(ctx)
                } else {
                    Status::Failure
                }
            }
            Node::Priority(children) => {
                for child in children {
                    match child.tick(ctx) {
                        Status::Failure => continue, // Try next child
                        other => return other,       // Short-circuit
                    }
                }
                Status::Failure
            }
            Node::Action(action) => action.tick(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
        log: Vec<&'static str>,
    }

    impl TestContext {
        fn new(value: i32) -> Self {
            Self {
                value,
                log: Vec::new(),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Check {
        Positive,
        Always,
    }

    impl Condition<TestContext> for Check {
        fn check(&self, ctx: &TestContext) -> bool {
            match self {
                Check::Positive => ctx.value > 0,
                Check::Always => true,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Act {
        Increment,
        Decrement,
        Fail,
        Pending,
    }

    impl Behavior<TestContext> for Act {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            match self {
                Act::Increment => {
                    ctx.value += 1;
                    ctx.log.push("inc");
                    Status::Success
                }
                Act::Decrement => {
                    ctx.value -= 1;
                    ctx.log.push("dec");
                    Status::Success
                }
                Act::Fail => {
                    ctx.log.push("fail");
                    Status::Failure
                }
                Act::Pending => {
                    ctx.log.push("pending");
                    Status::Running
                }
            }
        }
    }

    type TestNode = Node<Check, Act>;

    #[test]
    fn guard_skips_child_when_condition_false() {
        let node: TestNode = Node::guard(Check::Positive, Node::action(Act::Increment));

        let mut ctx = TestContext::new(0);
        assert_eq!(node.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 0);
        assert!(ctx.log.is_empty());
    }

    #[test]
    fn guard_returns_child_result() {
        let node: TestNode = Node::guard(Check::Always, Node::action(Act::Fail));

        let mut ctx = TestContext::new(0);
        assert_eq!(node.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.log, vec!["fail"]);
    }

    #[test]
    fn priority_succeeds_on_first_success() {
        let node: TestNode = Node::priority(vec![
            Node::action(Act::Fail),
            Node::action(Act::Increment),
            Node::action(Act::Decrement), // Should not execute
        ]);

        let mut ctx = TestContext::new(0);
        assert_eq!(node.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1);
        assert_eq!(ctx.log, vec!["fail", "inc"]);
    }

    #[test]
    fn priority_stops_on_running() {
        let node: TestNode = Node::priority(vec![
            Node::action(Act::Pending),
            Node::action(Act::Increment),
        ]);

        let mut ctx = TestContext::new(0);
        assert_eq!(node.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.value, 0);
    }

    #[test]
    fn priority_fails_when_all_fail() {
        let node: TestNode = Node::priority(vec![Node::action(Act::Fail), Node::action(Act::Fail)]);

        let mut ctx = TestContext::new(0);
        assert_eq!(node.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.log, vec!["fail", "fail"]);
    }

    #[test]
    #[should_panic(expected = "at least one child")]
    fn empty_priority_panics() {
        let _: TestNode = Node::priority(Vec::new());
    }

    #[test]
    fn leaves_follow_priority_order() {
        let node: TestNode = Node::priority(vec![
            Node::guard(Check::Positive, Node::action(Act::Decrement)),
            Node::priority(vec![Node::action(Act::Pending), Node::action(Act::Fail)]),
            Node::action(Act::Increment),
        ]);

        assert_eq!(
            node.leaves(),
            vec![&Act::Decrement, &Act::Pending, &Act::Fail, &Act::Increment]
        );
    }
}
