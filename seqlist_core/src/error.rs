use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

/// Alias for `Result<T, seqlist_core::ListError>`.
pub type Result<T> = StdResult<T, ListError>;

/// Represents all possible errors which can occur when operating on a [`List`](crate::List).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Raised when an index falls outside the range an operation accepts. Reads, writes and
    /// removals accept `0..len`, indexed inserts accept `0..=len`. The list is left untouched.
    InvalidIndex { index: usize, len: usize },

    /// Raised when the backing buffer could not be grown to `requested` slots.
    AllocationFailure { requested: usize },
}

impl StdError for ListError {}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ListError::InvalidIndex { index, len } => {
                write!(f, "Invalid Index: {index} (list length: {len})")
            }
            ListError::AllocationFailure { requested } => {
                write!(f, "Allocation Failure: unable to reserve {requested} slots")
            }
        }
    }
}
