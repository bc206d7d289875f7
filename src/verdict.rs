//! The three-valued outcome of a run.
//!
//! Grounded on the shape of the reference crate's `MachineStatus`: a small
//! `#[derive(Debug, PartialEq, Eq, Clone, Copy)]` enum with its own `Display` impl
//! rather than callers formatting ad hoc. Here the outcome space is fixed at three
//! variants instead of growing a decider-specific reason per variant, since the
//! external interface only ever prints `1`, `0`, or `U`.

use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verdict {
    /// Some branch reached an accepting state.
    Accept,
    /// Every branch exhausted its transitions without accepting.
    Reject,
    /// The queue drained without a definite answer within the step budget, or every
    /// remaining branch was pruned as a benign self-loop.
    Undetermined,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Verdict::Accept => '1',
            Verdict::Reject => '0',
            Verdict::Undetermined => 'U',
        };
        write!(f, "{c}")
    }
}
