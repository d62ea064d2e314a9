//! Owning iterator for [`GrowableArray`](crate::GrowableArray).

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use crate::raw::RawBuf;

/// Yields the elements of a consumed array by value, front to back.
///
/// Elements that are not yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Takes ownership of `buf`, whose first `count` slots are live.
    pub(crate) fn new(buf: RawBuf<T>, count: usize) -> Self {
        IntoIter {
            buf,
            start: 0,
            end: count,
        }
    }

    /// The elements not yet yielded.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [start, end) are live and not yet handed out.
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, so the slot is live; advancing start hands it
        // out exactly once.
        let item = unsafe { self.buf.ptr().add(self.start).read() };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: the slot at the new end was live and is now outside [start, end).
        Some(unsafe { self.buf.ptr().add(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.end - self.start;
        self.end = self.start;
        // SAFETY: the remaining slots are live and are dropped once here; the
        // buffer itself is freed by RawBuf afterwards.
        unsafe {
            let first = self.buf.ptr().add(self.start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, remaining));
        }
    }
}
