use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use crate::policy::capacity_overflow;

/// Owned, uninitialized storage for `capacity` elements of `T`.
///
/// `RawBuf` only tracks the allocation. Which slots hold live values is the
/// owner's business, so dropping a `RawBuf` frees memory but never runs element
/// destructors.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// The buffer exclusively owns its allocation, like `Box<[T]>`
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// A buffer with no allocation behind it.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates exactly `capacity` slots.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 || Self::IS_ZST {
            return Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            };
        }

        let layout = Self::layout(capacity);
        // Safety: layout has a non-zero size, checked above
        let raw = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            handle_alloc_error(layout)
        };

        Self {
            ptr,
            capacity,
            _marker: PhantomData,
        }
    }

    fn layout(capacity: usize) -> Layout {
        match Layout::array::<T>(capacity) {
            Ok(layout) if layout.size() <= isize::MAX as usize => layout,
            _ => capacity_overflow(),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn is_allocated(&self) -> bool {
        self.capacity > 0 && !Self::IS_ZST
    }

    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Replaces this buffer with a fresh one of `new_capacity` slots, moving the
    /// first `live` elements across in order. The old allocation is released.
    ///
    /// `live` must not exceed either capacity and the first `live` slots must be
    /// initialized.
    pub(crate) fn relocate(&mut self, live: usize, new_capacity: usize) {
        debug_assert!(live <= self.capacity && live <= new_capacity);

        log::trace!(
            "growvec: relocating {} elements, capacity {} -> {}",
            live,
            self.capacity,
            new_capacity
        );

        let fresh = Self::with_capacity(new_capacity);
        // Safety: both regions are valid for `live` elements and belong to
        // distinct allocations. After the copy the old slots are treated as
        // uninitialized and only the memory is released.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr(), fresh.ptr(), live);
        }
        *self = fresh;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.is_allocated() {
            // Safety: the pointer came from `alloc` with exactly this layout
            unsafe {
                dealloc(self.ptr.as_ptr().cast::<u8>(), Self::layout(self.capacity));
            }
        }
    }
}
