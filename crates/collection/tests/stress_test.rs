//! Stress tests for `GrowableArray` under large element counts.
//!
//! Run with: `cargo test --release --test stress_test -- --nocapture`

mod common;

use collection::GrowableArray;
use common::{assert_capacity_invariant, numbers};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

// ============================================================================
// Bulk append
// ============================================================================

#[test]
fn test_add_range_2000_then_remove_all() {
    let mut array = numbers(2000);

    assert_eq!(array.count(), 2000);
    assert_capacity_invariant(&array);

    for i in (0..2000).rev() {
        assert_eq!(array.remove_at(i), Ok(i));
    }

    assert_eq!(array.count(), 0);
    assert_eq!(array.to_string(), "[]");
    assert_capacity_invariant(&array);
}

#[test]
fn test_one_million_items() {
    const N: usize = 1_000_000;
    collection_log::init_from_env();

    let start = Instant::now();
    let mut array = GrowableArray::new();
    array.add_range(0..N);
    println!("add_range({N}) took {:?}", start.elapsed());

    assert_eq!(array.count(), N);
    assert_capacity_invariant(&array);
    for i in 0..N {
        assert_eq!(array[i], i);
    }

    let start = Instant::now();
    for i in (0..N).rev() {
        assert_eq!(array.remove_at(i), Ok(i));
    }
    println!("{N} x remove_at took {:?}", start.elapsed());

    assert_eq!(array.to_string(), "[]");
    assert_capacity_invariant(&array);
}

#[test]
fn test_one_million_single_adds_amortised() {
    const N: usize = 1_000_000;

    let mut array = GrowableArray::new();
    let mut reallocations = 0;
    let mut last_capacity = array.capacity();

    for i in 0..N {
        array.add(i);
        if array.capacity() != last_capacity {
            reallocations += 1;
            last_capacity = array.capacity();
        }
    }

    assert_eq!(array.count(), N);
    // Doubling from 16 reaches 1M in 16 steps.
    assert_eq!(reallocations, 16);
    assert!(array.capacity() < 2 * N);
}

#[test]
fn test_front_inserts() {
    let mut array = GrowableArray::new();
    for i in 0..5000 {
        array.insert_at(0, i).unwrap();
    }

    assert_eq!(array.count(), 5000);
    assert_eq!(array[0], 4999);
    assert_eq!(array[4999], 0);
    assert_capacity_invariant(&array);
}

// ============================================================================
// Ownership
// ============================================================================

struct Tracked(Arc<AtomicUsize>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_every_element_dropped_once() {
    const N: usize = 10_000;
    let drops = Arc::new(AtomicUsize::new(0));

    let mut array = GrowableArray::new();
    array.add_range((0..N).map(|_| Tracked(Arc::clone(&drops))));

    // Remove alternating elements front to back.
    let mut removed = 0;
    let mut index = 0;
    while index < array.count() {
        drop(array.remove_at(index).unwrap());
        removed += 1;
        index += 2;
    }
    assert_eq!(drops.load(Ordering::SeqCst), removed);

    array.exchange(0, array.count() - 1).unwrap();
    drop(array);

    assert_eq!(drops.load(Ordering::SeqCst), N);
}

#[test]
fn test_nested_arrays() {
    let mut outer = GrowableArray::new();
    for row in 0..100 {
        outer.add(numbers(row));
    }

    assert_eq!(outer.count(), 100);
    assert_eq!(outer[0].to_string(), "[]");
    assert_eq!(outer[3].to_string(), "[0, 1, 2]");

    let rendered = outer.to_string();
    assert!(rendered.starts_with("[[], [0], [0, 1], "));
    assert!(rendered.ends_with(", 98]]"));
}

#[test]
fn test_array_moves_across_threads() {
    let array = numbers(1000);

    let handle = std::thread::spawn(move || array.iter().sum::<usize>());

    assert_eq!(handle.join().unwrap(), 999 * 1000 / 2);
}
