//! Error types for `collection`.

use std::fmt;

/// Errors returned by [`GrowableArray`](crate::GrowableArray) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index argument fell outside the range the operation accepts.
    ///
    /// The array is left exactly as it was before the call.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of live elements at the time of the call.
        count: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, count } => {
                write!(f, "index {index} is out of range for collection of {count} elements")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for `collection` operations.
pub type Result<T> = std::result::Result<T, Error>;
