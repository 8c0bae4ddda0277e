//! Failure modes of the snapshot iterators.
//!
//! These are the only error-signaling paths in the crate: an empty heap or
//! queue answers `peek`/`poll` with [`None`], and removing an element that is
//! not present answers `false`. Only iterator misuse is an error.

use thiserror::Error;

/// Error raised when advancing a snapshot iterator.
///
/// Both variants are terminal for the iterator instance that produced them;
/// the caller must obtain a fresh iterator from the source structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IterationError {
    /// The source structure was mutated (offer, poll, successful remove or
    /// clear) after this iterator was created.
    #[error("collection was structurally modified while an iterator was active")]
    ConcurrentModification,

    /// The iterator was advanced past its last element.
    #[error("iterator advanced past the last element")]
    Exhausted,
}
