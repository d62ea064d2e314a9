//! The growable array.
//!
//! [`GrowableArray`] keeps `count` live elements at the front of a
//! [`RawBuf`] of `capacity` slots. Every index argument is validated before
//! storage is touched, so a rejected call leaves count, capacity and element
//! order exactly as they were.
//!
//! # Examples
//!
//! ```
//! use collection::{GrowableArray, Error};
//!
//! let mut names = GrowableArray::from(["Ivan", "Peter"]);
//! names.add("Gosho");
//! names.insert_at(0, "Maria")?;
//! names.exchange(1, 3)?;
//!
//! assert_eq!(names.to_string(), "[Maria, Gosho, Peter, Ivan]");
//! assert_eq!(
//!     names.get(4),
//!     Err(Error::IndexOutOfRange { index: 4, count: 4 })
//! );
//! # Ok::<(), collection::Error>(())
//! ```

use std::fmt;
use std::mem::{self, ManuallyDrop};
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use collection_log::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::IntoIter;
use crate::policy::GrowthPolicy;
use crate::raw::{self, RawBuf};

/// A contiguous array that grows as elements are added.
///
/// Capacity starts at the policy's initial capacity (16 by default) and at
/// least doubles whenever an operation needs more room. It only shrinks on
/// [`clear`](GrowableArray::clear).
///
/// Elements render with [`Display`](fmt::Display) as `[a, b, c]`, and since
/// a `GrowableArray` of displayable elements is itself displayable, nested
/// arrays render recursively. Each element is written in its plain form;
/// width and alignment flags given to the outer format are not applied.
pub struct GrowableArray<T> {
    buf: RawBuf<T>,
    count: usize,
    policy: GrowthPolicy,
}

impl<T> GrowableArray<T> {
    /// Creates an empty array with the default growth policy.
    ///
    /// ```
    /// use collection::GrowableArray;
    ///
    /// let array: GrowableArray<i32> = GrowableArray::new();
    /// assert_eq!(array.count(), 0);
    /// assert_eq!(array.capacity(), 16);
    /// assert_eq!(array.to_string(), "[]");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Creates an empty array that grows according to `policy`.
    #[must_use]
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        GrowableArray {
            buf: RawBuf::with_capacity(policy.initial_capacity()),
            count: 0,
            policy,
        }
    }

    /// Creates an empty array with room for at least `capacity` elements.
    ///
    /// The capacity is never below the default initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let policy = GrowthPolicy::default();
        GrowableArray {
            buf: RawBuf::with_capacity(capacity.max(policy.initial_capacity())),
            count: 0,
            policy,
        }
    }

    /// Creates an array holding `items` in order.
    ///
    /// Capacity is grown the same way [`add_range`](Self::add_range) grows
    /// it, so it ends up at least as large as the item count.
    ///
    /// ```
    /// use collection::GrowableArray;
    ///
    /// let array = GrowableArray::from_items(vec![5, 6]);
    /// assert_eq!(array.count(), 2);
    /// assert!(array.capacity() > array.count());
    /// ```
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut array = Self::new();
        array.add_range(items);
        array
    }

    /// Number of live elements.
    #[must_use]
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of allocated slots. Always at least [`count`](Self::count).
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns true if there are no live elements.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The growth policy this array was created with.
    #[must_use]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Rejects `index` unless it is below `bound`.
    ///
    /// `bound` is `count` for access and removal, `count + 1` for insertion.
    #[inline]
    fn check_index(&self, index: usize, bound: usize) -> Result<()> {
        if index < bound {
            return Ok(());
        }

        trace!("rejected index {index} (count {})", self.count);
        Err(Error::IndexOutOfRange {
            index,
            count: self.count,
        })
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `index < count`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index, self.count)?;
        // SAFETY: index < count, and every slot below count is initialised.
        Ok(unsafe { &*self.buf.ptr().add(index) })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `index < count`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index, self.count)?;
        // SAFETY: index < count, and every slot below count is initialised.
        Ok(unsafe { &mut *self.buf.ptr().add(index) })
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// No other element moves.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `index < count`. `value` is dropped
    /// and the array is unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Appends `value` to the end, growing the backing store if it is full.
    pub fn add(&mut self, value: T) {
        if self.count == self.buf.capacity() {
            self.grow_for(self.required(1));
        }

        // SAFETY: count < capacity after the growth above, and the slot at
        // count is uninitialised.
        unsafe {
            self.buf.ptr().add(self.count).write(value);
        }
        self.count += 1;
    }

    /// Appends every value of `values` in order.
    ///
    /// When the iterator reports a lower size bound, capacity is grown once
    /// up front to fit it.
    ///
    /// ```
    /// use collection::GrowableArray;
    ///
    /// let mut array = GrowableArray::new();
    /// array.add_range(0..2000);
    /// assert_eq!(array.count(), 2000);
    /// assert_eq!(array.capacity(), 2000);
    /// ```
    pub fn add_range<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let (lower, _) = values.size_hint();
        self.reserve(lower);

        for value in values {
            self.add(value);
        }
    }

    /// Makes room for at least `additional` more elements without further
    /// reallocation.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.required(additional);
        if required > self.buf.capacity() {
            self.grow_for(required);
        }
    }

    /// Inserts `value` at `index`, shifting the elements at and after it one
    /// slot to the right.
    ///
    /// `index == count` appends.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `index <= count`. The array is
    /// unchanged and no growth happens.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index, self.required(1))?;

        if self.count == self.buf.capacity() {
            self.grow_for(self.required(1));
        }

        // SAFETY:
        // 1. count < capacity, so slots [index + 1, count + 1) are in bounds
        // 2. ptr::copy handles the overlapping ranges
        // 3. the slot at index is logically uninitialised after the shift
        unsafe {
            let slot = self.buf.ptr().add(index);
            ptr::copy(slot, slot.add(1), self.count - index);
            slot.write(value);
        }
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// one slot to the left.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `index < count`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index, self.count)?;

        // SAFETY:
        // 1. index < count, so the slot is initialised and is read exactly once
        // 2. slots (index, count) are shifted down over it with ptr::copy
        // 3. the old last slot is left as a stale bitwise copy and is outside
        //    the live range once count is decremented
        let value = unsafe {
            let slot = self.buf.ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.count - index - 1);
            value
        };
        self.count -= 1;
        Ok(value)
    }

    /// Swaps the elements at `first` and `second`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] for the first index that is not below
    /// `count`. Both indices are checked before anything moves.
    pub fn exchange(&mut self, first: usize, second: usize) -> Result<()> {
        self.check_index(first, self.count)?;
        self.check_index(second, self.count)?;

        self.as_mut_slice().swap(first, second);
        Ok(())
    }

    /// Drops every element and returns the backing store to the policy's
    /// initial capacity.
    pub fn clear(&mut self) {
        let live = self.count;
        // Zero first so a panicking destructor cannot lead to a double drop.
        self.count = 0;

        // SAFETY: slots [0, live) were initialised and are now outside the
        // live range, so they are dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), live));
        }

        let initial = self.policy.initial_capacity();
        if self.buf.capacity() != initial {
            self.buf = RawBuf::with_capacity(initial);
        }

        trace!("cleared {live} elements, capacity reset to {initial}");
    }

    /// The live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: ptr is non-null and aligned, and [0, count) is initialised.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.count) }
    }

    /// The live elements as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for as_slice, with unique access through &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.count) }
    }

    /// Iterates over the live elements in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates mutably over the live elements in order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    fn required(&self, additional: usize) -> usize {
        match self.count.checked_add(additional) {
            Some(required) => required,
            None => raw::capacity_overflow(),
        }
    }

    #[cold]
    fn grow_for(&mut self, required: usize) {
        let old = self.buf.capacity();
        let new = self.policy.grow(old, required);
        debug!("growing from {old} to {new} slots (count {})", self.count);
        self.buf.grow_to(new);
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        // SAFETY: [0, count) is initialised and never touched again.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.count));
        }
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let mut copy = GrowableArray {
            buf: RawBuf::with_capacity(self.capacity()),
            count: 0,
            policy: self.policy,
        };
        for item in self {
            copy.add(item.clone());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with the [`Error::IndexOutOfRange`] message unless
    /// `index < count`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_items(items)
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped or used again, so ownership of the
        // buffer and its live prefix moves to the iterator exactly once.
        let buf = unsafe { ptr::read(&this.buf) };
        IntoIter::new(buf, this.count)
    }
}
