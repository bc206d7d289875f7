//! The Accepting Set: membership testing over a small, sorted set of state identifiers.
//!
//! Built by collecting accepting-state identifiers and sorting once, then queried by
//! binary search — the same shape as the reference C implementation's
//! `is_state_accepted`, which sorts its `acceptedList` with `qsort` and binary-searches
//! it per step. Unlike the reference implementation, this does not silently drop
//! states past a fixed capacity (see `DESIGN.md`, Open Questions); the default
//! pre-allocated capacity of ~100 is retained purely as a hot-path sizing hint.

use crate::transition::StateId;

/// Default pre-allocated capacity, matching the reference implementation's
/// `ACCEPTED_SIZE`. The set grows past this transparently.
pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Default, Clone)]
pub struct AcceptingSet {
    states: Vec<StateId>,
}

impl AcceptingSet {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Same as [`Self::new`] but pre-allocates `capacity` entries instead of
    /// [`DEFAULT_CAPACITY`] — used by the parser to honor
    /// [`crate::config::RuntimeConfig::accepting_set_initial_capacity`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: Vec::with_capacity(capacity),
        }
    }

    /// Adds an accepting state. Duplicates are not rejected; they simply sort next
    /// to each other and do not affect membership results.
    pub fn add(&mut self, state: StateId) {
        self.states.push(state);
    }

    /// Sorts the collected states so `contains` can binary-search. Must be called
    /// after all `add` calls and before any `contains` query.
    pub fn finalize(&mut self) {
        self.states.sort_unstable();
    }

    pub fn contains(&self, state: StateId) -> bool {
        self.states.binary_search(&state).is_ok()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_after_finalize() {
        let mut set = AcceptingSet::new();
        set.add(5);
        set.add(1);
        set.add(3);
        set.finalize();
        assert!(set.contains(1));
        assert!(set.contains(3));
        assert!(set.contains(5));
        assert!(!set.contains(2));
        assert!(!set.contains(0));
    }

    #[test]
    fn duplicates_do_not_break_membership() {
        let mut set = AcceptingSet::new();
        set.add(2);
        set.add(2);
        set.add(2);
        set.finalize();
        assert!(set.contains(2));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn grows_past_default_capacity() {
        let mut set = AcceptingSet::new();
        for s in 0..(DEFAULT_CAPACITY as u32 * 3) {
            set.add(s);
        }
        set.finalize();
        assert_eq!(set.len(), DEFAULT_CAPACITY * 3);
        assert!(set.contains(DEFAULT_CAPACITY as u32 * 3 - 1));
    }

    #[test]
    fn empty_set_accepts_nothing() {
        let mut set = AcceptingSet::new();
        set.finalize();
        assert!(set.is_empty());
        assert!(!set.contains(0));
    }

    #[test]
    fn with_capacity_honors_the_requested_size() {
        let set = AcceptingSet::with_capacity(4);
        assert!(set.states.capacity() >= 4);
    }
}
