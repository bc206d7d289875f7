//! The Transition Table: `(state, symbol) -> ordered list of transitions`.
//!
//! Sparse across both states and symbols. Each state that actually appears in the
//! description owns a dense row of [`crate::symbol::ALPHABET_SIZE`] slots (so a lookup
//! is a row fetch plus a direct index rather than a hash per symbol); states that never
//! appear never allocate a row at all. This is the same trade-off the reference crate's
//! `TransitionTableGeneric` makes with its per-state array, generalized here to carry a
//! `Vec<Transition>` per slot instead of a single transition, since this machine is
//! nondeterministic.

use hashbrown::HashMap;

use crate::symbol::ALPHABET_SIZE;
use crate::transition::{StateId, Transition};

type Row = [Vec<Transition>; ALPHABET_SIZE];

fn empty_row() -> Row {
    std::array::from_fn(|_| Vec::new())
}

#[derive(Debug, Default)]
pub struct TransitionTable {
    rows: HashMap<StateId, Row>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Appends a transition under key `(source, read)`. Insertion order within the
    /// key is preserved; it affects only search traversal order, never the verdict.
    pub fn add(&mut self, source: StateId, read_index: usize, transition: Transition) {
        let row = self.rows.entry(source).or_insert_with(empty_row);
        row[read_index].push(transition);
    }

    /// Returns the (possibly empty) transition list for `(state, read)`. Missing keys
    /// return an empty slice rather than an error.
    pub fn lookup(&self, state: StateId, read_index: usize) -> &[Transition] {
        match self.rows.get(&state) {
            Some(row) => &row[read_index],
            None => &[],
        }
    }

    /// Number of distinct states that own at least one transition.
    pub fn state_count(&self) -> usize {
        self.rows.len()
    }
}
