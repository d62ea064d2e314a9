//! Raw slot storage behind [`GrowableArray`](crate::GrowableArray).
//!
//! [`RawBuf`] owns an allocation of `capacity` uninitialised `T` slots. It
//! knows nothing about which slots are live; the array tracks that and is
//! responsible for dropping elements before the buffer goes away.

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A heap allocation of `cap` slots of `T`.
///
/// # Safety
///
/// - `ptr` is dangling when no memory is allocated (`cap == 0` or `T` is
///   zero-sized), and otherwise points to an allocation made with
///   `Layout::array::<T>(cap)`
/// - Slots are never read or dropped by `RawBuf` itself
/// - For zero-sized `T`, `cap` is bookkeeping only and no allocator call is
///   ever made
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf owns its slots like a Box<[T]>; sending or sharing it is as
// safe as sending or sharing the `T`s it may hold.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

const fn is_zst<T>() -> bool {
    std::mem::size_of::<T>() == 0
}

fn layout_for<T>(cap: usize) -> Layout {
    match Layout::array::<T>(cap) {
        Ok(layout) => layout,
        Err(_) => capacity_overflow(),
    }
}

#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T> RawBuf<T> {
    /// Allocates a buffer with room for `cap` elements.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        if cap == 0 || is_zst::<T>() {
            return RawBuf {
                ptr: NonNull::dangling(),
                cap,
                _marker: PhantomData,
            };
        }

        let layout = layout_for::<T>(cap);

        // SAFETY: layout has a non-zero size (cap > 0 and T is not zero-sized).
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        };

        RawBuf {
            ptr,
            cap,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Reallocates to exactly `new_cap` slots, preserving the contents of the
    /// first `min(cap, new_cap)` slots.
    ///
    /// Callers only ever grow, so `new_cap > cap`.
    pub(crate) fn grow_to(&mut self, new_cap: usize) {
        debug_assert!(new_cap > self.cap);

        if is_zst::<T>() {
            self.cap = new_cap;
            return;
        }

        let new_layout = layout_for::<T>(new_cap);

        let raw = if self.cap == 0 {
            // SAFETY: new_layout has a non-zero size.
            unsafe { alloc::alloc(new_layout) }
        } else {
            let old_layout = layout_for::<T>(self.cap);
            // SAFETY:
            // 1. self.ptr was allocated with old_layout (cap > 0, not a ZST)
            // 2. new_layout.size() is non-zero and did not overflow isize
            // 3. realloc copies the old bytes, which is a move of every slot
            unsafe { alloc::realloc(self.ptr.as_ptr().cast::<u8>(), old_layout, new_layout.size()) }
        };

        self.ptr = match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(new_layout),
        };
        self.cap = new_cap;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 || is_zst::<T>() {
            return;
        }

        let layout = layout_for::<T>(self.cap);
        // SAFETY: ptr came from alloc/realloc with this layout and is freed once.
        unsafe {
            alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}
