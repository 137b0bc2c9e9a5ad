/// Errors reported by the recycler surface and its item lists.
///
/// All of them describe a disagreement between positions and the current item count. They are
/// programmer errors surfaced as values so hosts can log them instead of aborting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("position {position} is out of range for {count} items")]
    PositionOutOfRange { position: usize, count: usize },

    #[error("range {start}..{start}+{len} is out of bounds for {count} items")]
    RangeOutOfBounds {
        start: usize,
        len: usize,
        count: usize,
    },

    #[error("inconsistent item count: notifications imply {expected}, adapter reports {actual}")]
    InconsistentCount { expected: usize, actual: usize },

    #[error("no attached row at position {position}")]
    NotAttached { position: usize },

    #[error("span count must be at least 1")]
    InvalidSpanCount,
}

pub type Result<T> = core::result::Result<T, Error>;
