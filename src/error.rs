use thiserror::Error;

/// Result type for checked `GrowVec` and `FixedArray` accessors
pub type Result<T> = core::result::Result<T, GrowVecError>;

/// Error types for `GrowVec` and `FixedArray` operations
///
/// Checked access is the only reportable failure. Everything else that a caller
/// can get wrong (stale cursors, inverted ranges) is a precondition, not an error.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// The requested position has no live element
    #[error("Index out of range in {operation}(): index {index} is beyond size {size}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Number of live elements at the time of the access
        size: usize,
        /// Name of the accessor that failed
        operation: &'static str,
    },
}

impl GrowVecError {
    pub(crate) fn out_of_range(operation: &'static str, index: usize, size: usize) -> Self {
        Self::OutOfRange {
            index,
            size,
            operation,
        }
    }

    /// Index carried by the error.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::OutOfRange { index, .. } => *index,
        }
    }

    /// Container size at the moment the error was raised.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::OutOfRange { size, .. } => *size,
        }
    }
}
