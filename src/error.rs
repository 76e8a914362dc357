use thiserror::Error;

/// Why a view could not be produced, or why a key was refused by a view.
///
/// Returned by the `try_*` methods of [`SortedMap`](crate::SortedMap). The
/// plain methods (`sub_map`, `head_map`, `tail_map`, `put`) report the same
/// conditions as `None` or the empty-value sentinel instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum ViewError {
    /// `from` is greater than `to`.
    #[error("range start is greater than range end")]
    InvertedRange,

    /// The requested lower end lies below this handle's lower bound.
    #[error("requested range starts below the view's lower bound")]
    LowerBoundNotCovered,

    /// The requested upper end lies above this handle's upper bound.
    #[error("requested range ends above the view's upper bound")]
    UpperBoundNotCovered,

    /// The handle is unbounded on a side the request depends on and the
    /// shared storage holds no entries.
    #[error("view is unbounded and the storage has no entries")]
    EmptyStorage,

    /// The key lies outside this handle's bounds.
    #[error("key lies outside the view's bounds")]
    KeyOutOfRange,
}
