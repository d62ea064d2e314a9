//! `collection`: a growable array with checked indexing.
//!
//! [`GrowableArray`] owns a contiguous backing store and separates the
//! number of live elements (`count`) from the number of allocated slots
//! (`capacity`). It provides:
//!
//! - **Checked access**: every index is validated and rejected with
//!   [`Error::IndexOutOfRange`] before anything is modified
//! - **Shifting insert and remove** at arbitrary positions
//! - **Amortised growth** driven by a [`GrowthPolicy`]
//! - **Bracketed rendering** through `Display`, recursive for nested arrays
//!
//! # Architecture
//!
//! - [`array`]: the container and its trait implementations
//! - [`policy`]: how much to grow and the initial capacity
//! - `raw`: the uninitialised slot buffer
//! - [`iter`]: the owning iterator
//!
//! Storage events are logged through [`collection_log`] at debug level and
//! rejected indices at trace level.
//!
//! # Example
//!
//! ```rust
//! use collection::{collection, GrowableArray};
//!
//! let mut numbers = collection![5, 6];
//! numbers.add_range([7, 8]);
//! numbers.remove_at(0)?;
//!
//! assert_eq!(numbers.to_string(), "[6, 7, 8]");
//!
//! let nested: GrowableArray<GrowableArray<i32>> = collection![numbers, GrowableArray::new()];
//! assert_eq!(nested.to_string(), "[[6, 7, 8], []]");
//! # Ok::<(), collection::Error>(())
//! ```

pub mod array;
pub mod error;
pub mod iter;
pub mod policy;
mod raw;

pub use array::GrowableArray;
pub use error::{Error, Result};
pub use iter::IntoIter;
pub use policy::{DEFAULT_CAPACITY, GrowthPolicy};

/// Creates a [`GrowableArray`] from a list of elements.
///
/// ```
/// use collection::collection;
///
/// let empty: collection::GrowableArray<u8> = collection![];
/// assert_eq!(empty.to_string(), "[]");
///
/// let single = collection![5];
/// assert_eq!(single.to_string(), "[5]");
///
/// let pair = collection![5, 6];
/// assert_eq!(pair.to_string(), "[5, 6]");
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::GrowableArray::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::GrowableArray::from([$($item),+])
    };
}
