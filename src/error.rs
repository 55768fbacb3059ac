// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Usage errors reported by [`BigList`](crate::BigList).
//!
//! Only caller mistakes are reported here. A corrupted tree is not a usage
//! error: the engine panics as soon as it notices one.

use crate::index::Index;

/// Errors returned by the public list API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigListError {
    /// An element index or insert position lies past the end of the list.
    #[error("index {index} is out of range for length {length}")]
    IndexOutOfRange { index: Index, length: Index },

    /// A range `index..index + count` reached past the allowed end.
    #[error("range starting at {index} with {count} elements exceeds length {length}")]
    RangeOutOfBounds {
        index: Index,
        count: Index,
        length: Index,
    },

    /// A capacity request would drop elements.
    #[error("capacity {capacity} is smaller than length {length}")]
    CapacityBelowLength { capacity: Index, length: Index },

    /// The tree shape parameters are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Result alias for list operations.
pub type Result<T> = std::result::Result<T, BigListError>;
