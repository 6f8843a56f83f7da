//! Completion state of the task.

/// Monotonic completion flag.
///
/// Starts not-done and flips to done at most once; there is no way back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskState {
    done: bool,
}

impl TaskState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Marks the task done. Returns `true` only on the first call.
    pub fn mark_done(&mut self) -> bool {
        let first = !self.done;
        self.done = true;
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_is_monotonic() {
        let mut state = TaskState::new();
        assert!(!state.is_done());

        assert!(state.mark_done());
        assert!(state.is_done());

        assert!(!state.mark_done());
        assert!(state.is_done());
    }
}
