// Shared helpers for the collection integration tests.

#![allow(dead_code)]

use collection::{Error, GrowableArray};

/// Builds an array of owned strings.
pub fn names(items: &[&str]) -> GrowableArray<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds `[0, 1, ..., n - 1]`.
pub fn numbers(n: usize) -> GrowableArray<usize> {
    let mut array = GrowableArray::new();
    array.add_range(0..n);
    array
}

/// Asserts `count <= capacity`.
pub fn assert_capacity_invariant<T>(array: &GrowableArray<T>) {
    assert!(
        array.capacity() >= array.count(),
        "capacity {} below count {}",
        array.capacity(),
        array.count()
    );
}

/// The error expected for `index` on an array of `count` elements.
pub fn out_of_range(index: usize, count: usize) -> Error {
    Error::IndexOutOfRange { index, count }
}
