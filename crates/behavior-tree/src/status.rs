//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Tick Semantics
///
/// The tree is re-evaluated from the root on every tick:
/// - Conditions evaluate immediately (e.g., "Is the boss dead?")
/// - Actions either complete within the tick or report `Running` when the
///   effect they started is still in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action executed without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be executed (e.g., no unit to target).
    Failure,

    /// The behavior started work that has not finished yet.
    ///
    /// Parents treat this like `Success` when deciding whether to try the
    /// next sibling: the branch has committed to this child for the tick.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }
}
