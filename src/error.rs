//! Engine-level failure conditions.
//!
//! Grounded on the `thiserror`-derived enums used for `FenError`/`BoardError` in the
//! chess-engine pack entry: one variant per distinct fatal condition, `#[error(...)]`
//! messages instead of a single free-text string. The reference implementation's own
//! `error.rs` was a bare string wrapper; this replaces it rather than generalizing it,
//! since the whole point of a typed error is to let callers match on the variant.

use thiserror::Error;

/// Fatal conditions raised while simulating a machine. Distinct from
/// [`crate::parser::ParseError`], which covers malformed input before simulation
/// ever starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The Configuration Queue reached its configured capacity. Per the design, this
    /// is a hard stop rather than a silent drop of branches: the overall verdict for
    /// the run cannot be trusted if it happened.
    #[error("configuration queue overflowed its capacity of {capacity} entries")]
    QueueOverflow { capacity: usize },
}
