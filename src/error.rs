//! Errors reported by the tree and its bounded queue.

use std::fmt;

use thiserror::Error;

/// Result type alias for tree and queue operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The recoverable failures of this crate. None of them are fatal: callers are expected to
/// match on them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A value was requested from a structure holding nothing, e.g. the maximum of an empty
    /// tree or the front of an empty queue.
    #[error("{0} is empty")]
    EmptyStructure(Structure),

    /// An element was offered to a bounded queue that was already full.
    #[error("queue capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// The fixed capacity of the queue that rejected the element.
        capacity: usize,
    },
}

/// Which kind of structure an [`Error::EmptyStructure`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    /// A [`Tree`](crate::Tree).
    Tree,
    /// A [`BoundedQueue`](crate::BoundedQueue).
    Queue,
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tree => f.write_str("tree"),
            Self::Queue => f.write_str("queue"),
        }
    }
}
