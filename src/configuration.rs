//! A single point in the branching computation: the control state, head position,
//! remaining step budget, and the tape as it stood when this configuration was
//! enqueued.

use crate::tape::TapeHandle;
use crate::transition::StateId;

#[derive(Debug, Clone)]
pub struct Configuration {
    pub state: StateId,
    pub head: i64,
    /// Steps this branch may still take before the run gives up on it as
    /// undetermined. Decremented when the branch that spawned this configuration
    /// enqueued it, not when it is dequeued.
    pub steps_remaining: u64,
    pub tape: TapeHandle,
}

impl Configuration {
    pub fn new(state: StateId, head: i64, steps_remaining: u64, tape: TapeHandle) -> Self {
        Self {
            state,
            head,
            steps_remaining,
            tape,
        }
    }
}
