//! Time-boxed exclusion ("blacklist") set.
//!
//! Excluded units are ignored while a priority-kill window is open. Entries
//! expire on their own so a stale exclusion never outlives the fight, and the
//! whole set can be flushed once no priority target is left.

use std::collections::HashMap;
use std::time::Duration;

use crate::world::{Guid, Timestamp};

/// Lifetime of an exclusion added by the policy.
pub const EXCLUSION_TTL: Duration = Duration::from_secs(5 * 60);

/// Set of unit identities with per-entry expiry.
///
/// An identity is excluded at `now` iff its entry expires strictly after
/// `now`. Expired entries are pruned lazily; callers cannot observe whether
/// pruning has happened.
#[derive(Clone, Debug, Default)]
pub struct ExclusionSet {
    entries: HashMap<Guid, Timestamp>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `guid`, or refreshes its expiry, so that it stays excluded
    /// until `now + ttl`. Returns the new expiry.
    pub fn add(&mut self, guid: Guid, ttl: Duration, now: Timestamp) -> Timestamp {
        self.prune(now);
        let expires_at = now.saturating_add(ttl);
        self.entries.insert(guid, expires_at);
        expires_at
    }

    /// Returns `true` iff `guid` has an unexpired entry at `now`.
    pub fn contains(&self, guid: Guid, now: Timestamp) -> bool {
        self.entries
            .get(&guid)
            .is_some_and(|&expires_at| expires_at > now)
    }

    /// Removes every entry.
    pub fn flush(&mut self) {
        self.entries.clear();
    }

    /// Number of entries still live at `now`.
    pub fn len(&self, now: Timestamp) -> usize {
        self.entries.values().filter(|&&at| at > now).count()
    }

    pub fn is_empty(&self, now: Timestamp) -> bool {
        self.len(now) == 0
    }

    fn prune(&mut self, now: Timestamp) {
        self.entries.retain(|_, expires_at| *expires_at > now);
    }
}
