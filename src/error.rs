use thiserror::Error;

/// Errors returned by [`PriorityHeap`](crate::PriorityHeap) operations.
///
/// Both kinds are caused by the caller; the heap is never modified when one
/// of them is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Index passed to `remove_at` is outside `0..len`.
    #[error("invalid index {index} for heap of size {len}")]
    InvalidIndex { index: usize, len: usize },
    /// Returned by `peek` on an empty heap.
    #[error("heap is empty")]
    EmptyHeap,
}

pub type Result<T> = std::result::Result<T, HeapError>;
