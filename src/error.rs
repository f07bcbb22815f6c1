use thiserror::Error;

/// Error type returned by the fallible [`LinkedList`](crate::LinkedList)
/// operations.
///
/// A failed operation never leaves the list partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The index (after resolving the `-1` marker) falls outside the range
    /// accepted by the operation.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfRange {
        /// Index as supplied by the caller.
        index: isize,
        /// Length of the list when the call was made.
        len: usize,
    },

    /// A slice step that could never select an element of `start..stop`.
    #[error("step {step} is not valid for slice {start}..{stop}")]
    InvalidStep {
        /// Inclusive start of the slice.
        start: isize,
        /// Exclusive end of the slice.
        stop: isize,
        /// Requested stride.
        step: isize,
    },

    /// The chain ended before a position that passed bounds checking.
    ///
    /// This indicates a broken length invariant, not a caller mistake.
    #[error("chain ended before reaching validated position {position}")]
    BrokenChain {
        /// Position the walk was looking for.
        position: usize,
    },
}

/// Coarse classification of a [`ListError`], for callers that only care
/// about which family of failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied an index or slice outside the accepted range.
    Index,
    /// An internal consistency check failed.
    Value,
}

impl ListError {
    /// Returns the family this error belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::ErrorKind;
    /// use chain_list::LinkedList;
    ///
    /// let list = LinkedList::from([1, 2]);
    /// let err = list.get(10).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Index);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListError::IndexOutOfRange { .. } | ListError::InvalidStep { .. } => {
                ErrorKind::Index
            }
            ListError::BrokenChain { .. } => ErrorKind::Value,
        }
    }
}
