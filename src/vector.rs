use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr;
use core::slice;

use crate::cursor::Cursor;
use crate::error::{GrowVecError, Result};
use crate::policy::{grow_target, pad};
use crate::raw::RawBuf;

/// Capacity substituted for a `reserve(0)` request.
const MIN_RESERVE: usize = 2;

/// A growable contiguous vector whose allocations are padded to multiples of
/// [`ALIGNMENT`](crate::ALIGNMENT) elements.
///
/// Elements `[0, len)` are live. Slots `[len, capacity)` are allocated but hold
/// no values. Capacity only goes down through [`shrink_to_fit`](Self::shrink_to_fit).
pub struct GrowVec<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> GrowVec<T> {
    /// Creates an empty vector. Nothing is allocated.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an empty vector with room for at least `capacity` elements.
    /// The allocation is `pad(capacity)` slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(pad(capacity)),
            len: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](Self::len).
    #[must_use]
    pub fn size(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Base pointer of the storage. Dangling (never dereferenceable) while the
    /// capacity is zero.
    #[must_use]
    pub fn data(&self) -> *const T {
        self.buf.ptr()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // Safety: the first `len` slots are initialized and the pointer is
        // non-null and aligned even when nothing is allocated
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: see `as_slice`
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Returns a reference to the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        &*self.buf.ptr().add(index)
    }

    /// Returns a mutable reference to the element at `index` without a bounds
    /// check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        &mut *self.buf.ptr().add(index)
    }

    /// Checked access.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or(GrowVecError::out_of_range("at", index, self.len))
    }

    /// Checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(GrowVecError::out_of_range("at", index, len))
    }

    /// First element.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::OutOfRange` if the vector is empty.
    pub fn front(&self) -> Result<&T> {
        self.as_slice()
            .first()
            .ok_or(GrowVecError::out_of_range("front", 0, 0))
    }

    /// # Errors
    ///
    /// Returns `GrowVecError::OutOfRange` if the vector is empty.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice()
            .first_mut()
            .ok_or(GrowVecError::out_of_range("front", 0, 0))
    }

    /// Last element.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::OutOfRange` if the vector is empty.
    pub fn back(&self) -> Result<&T> {
        self.as_slice()
            .last()
            .ok_or(GrowVecError::out_of_range("back", 0, 0))
    }

    /// # Errors
    ///
    /// Returns `GrowVecError::OutOfRange` if the vector is empty.
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice()
            .last_mut()
            .ok_or(GrowVecError::out_of_range("back", 0, 0))
    }

    /// Cursor at the first element.
    #[must_use]
    pub fn begin(&self) -> Cursor {
        Cursor::new(0)
    }

    /// Cursor one past the last element.
    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor::new(self.len)
    }

    /// Cursor at logical index `index`.
    #[must_use]
    pub fn cursor(&self, index: usize) -> Cursor {
        Cursor::new(index)
    }

    /// Ensures the capacity is at least `new_capacity` slots.
    ///
    /// A request for zero is treated as a request for two. When the buffer has
    /// to grow, the new capacity is `pad(new_capacity)` and all elements are
    /// relocated in order. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        let requested = if new_capacity == 0 {
            MIN_RESERVE
        } else {
            new_capacity
        };
        if requested <= self.capacity() {
            return;
        }
        self.buf.relocate(self.len, pad(requested));
    }

    /// Reallocates to exactly `len()` slots, without padding.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() == self.len {
            return;
        }
        self.buf.relocate(self.len, self.len);
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements at `[new_len, len)`. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let removed = self.len - new_len;
        // Shorten first so a panicking destructor cannot lead to a double drop
        self.len = new_len;
        // Safety: the slots were live and are no longer reachable through `len`
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(new_len),
                removed,
            ));
        }
    }

    /// Resizes to `new_size`, filling new slots with values produced by `fill`.
    ///
    /// Shrinking truncates in place. Growing within the current capacity
    /// writes directly; otherwise the buffer is first reserved to `new_size`.
    pub fn resize_with<F>(&mut self, new_size: usize, fill: F)
    where
        F: FnMut() -> T,
    {
        if new_size < self.len {
            self.truncate(new_size);
            return;
        }
        if !(new_size > self.len && new_size < self.capacity()) {
            self.reserve(new_size);
        }
        self.fill_to(new_size, fill);
    }

    /// Appends values from `fill` until `len == new_size`. The capacity must
    /// already cover `new_size`.
    fn fill_to<F>(&mut self, new_size: usize, mut fill: F)
    where
        F: FnMut() -> T,
    {
        debug_assert!(new_size <= self.capacity());
        while self.len < new_size {
            // Safety: `len < new_size <= capacity`; `len` is bumped per slot so
            // a panicking `fill` leaves only initialized elements covered
            unsafe { self.buf.ptr().add(self.len).write(fill()) };
            self.len += 1;
        }
    }

    /// Resizes to `new_size`, filling new slots with default values.
    pub fn resize_default(&mut self, new_size: usize)
    where
        T: Default,
    {
        self.resize_with(new_size, T::default);
    }

    /// Exchanges contents with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    ///
    /// ```
    /// use growvec::growvec;
    /// let mut a = growvec![1, 2, 3];
    /// let b = a.take();
    /// assert_eq!(b, [1, 2, 3]);
    /// assert_eq!(a.capacity(), 0);
    /// a.push_back(4);
    /// assert_eq!(a, [4]);
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    fn grow_for_append(&mut self) {
        if self.len == self.capacity() {
            self.reserve(grow_target(self.len));
        }
    }

    /// Appends `value`, doubling the capacity when full.
    pub fn push_back(&mut self, value: T) {
        self.grow_for_append();
        // Safety: `len < capacity` after growth
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Builds the new last element in place from `make`.
    ///
    /// Grows exactly like [`push_back`](Self::push_back). Returns a reference
    /// to the constructed element.
    pub fn emplace_back<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.grow_for_append();
        // Safety: `len < capacity` after growth; the slot is initialized before
        // `len` covers it
        unsafe {
            let slot = self.buf.ptr().add(self.len);
            slot.write(make());
            self.len += 1;
            &mut *slot
        }
    }

    /// Removes the last element. Returns `None` on an empty vector.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // Safety: the slot was live and is no longer covered by `len`
        Some(unsafe { self.buf.ptr().add(self.len).read() })
    }

    /// Inserts `value` before `pos` and returns a cursor to it.
    ///
    /// Grows to `grow_target(len)` when full. Cursors at or after `pos` now
    /// denote the element that used to precede them.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past `end()`.
    pub fn insert(&mut self, pos: Cursor, value: T) -> Cursor {
        let index = pos.index();
        assert!(
            index <= self.len,
            "insertion cursor {index} is past the end (size {})",
            self.len
        );

        self.grow_for_append();
        // Safety: `index <= len < capacity`; the suffix moves up one slot
        // (overlapping copy) before the gap is filled
        unsafe {
            let slot = self.buf.ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;
        Cursor::new(index)
    }

    /// Inserts every value produced by `values` before `pos`, in order, and
    /// returns a cursor to the first inserted element.
    ///
    /// When the result would not fit, the capacity becomes at least
    /// `pad(2 * len + count)`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past `end()`.
    pub fn insert_range<I>(&mut self, pos: Cursor, values: I) -> Cursor
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let index = pos.index();
        assert!(
            index <= self.len,
            "insertion cursor {index} is past the end (size {})",
            self.len
        );

        let mut values = values.into_iter();
        let count = values.len();
        if count == 0 {
            return pos;
        }
        if self.len + count > self.capacity() {
            self.reserve(pad(self.len * 2 + count));
        }

        let tail = self.len - index;
        // Safety: `len + count <= capacity`; moving the suffix up by `count`
        // opens an uninitialized gap at `[index, index + count)`
        unsafe {
            let base = self.buf.ptr();
            ptr::copy(base.add(index), base.add(index + count), tail);
        }
        self.len = index;

        let mut gap = Gap {
            vec: self,
            index,
            count,
            written: 0,
            tail,
        };
        for value in values.by_ref().take(count) {
            // Safety: `written < count`, so the slot lies inside the gap
            unsafe {
                gap.vec
                    .buf
                    .ptr()
                    .add(gap.index + gap.written)
                    .write(value);
            }
            gap.written += 1;
        }
        drop(gap);

        Cursor::new(index)
    }

    /// Inserts clones of `values` before `pos`. See [`insert_range`](Self::insert_range).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past `end()`.
    pub fn insert_slice(&mut self, pos: Cursor, values: &[T]) -> Cursor
    where
        T: Clone,
    {
        self.insert_range(pos, values.iter().cloned())
    }

    /// Removes the element at `pos`, shifting the suffix down one slot.
    ///
    /// Returns a cursor to the element that now occupies `pos`, which is
    /// `end()` if the last element was removed.
    ///
    /// # Panics
    ///
    /// Panics if `pos` does not denote a live element.
    pub fn erase(&mut self, pos: Cursor) -> Cursor {
        let index = pos.index();
        assert!(
            index < self.len,
            "erase cursor {index} is out of range (size {})",
            self.len
        );

        // Safety: `index < len`; the removed value is read out before its slot
        // is overwritten, and dropped only once the vector is consistent again
        let removed = unsafe {
            let slot = self.buf.ptr().add(index);
            let removed = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            removed
        };
        self.len -= 1;
        drop(removed);

        Cursor::new(index)
    }

    /// Removes `[first, last)`, shifting the suffix starting at `last` down by
    /// `last - first` slots. Returns a cursor to the first element after the
    /// removed span (now at `first`).
    ///
    /// # Panics
    ///
    /// Panics if `last` precedes `first` or lies past `end()`.
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> Cursor {
        let count = last - first;
        let (start, end) = (first.index(), last.index());
        assert!(
            end <= self.len,
            "erase range end {end} is out of range (size {})",
            self.len
        );
        if count == 0 {
            return first;
        }

        let tail = self.len - end;
        self.len = start;
        // Safety: `[start, end)` is live and dropped exactly once; the tail is
        // then moved down over it. If a destructor panics the tail is leaked.
        unsafe {
            let base = self.buf.ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), count));
            ptr::copy(base.add(end), base.add(start), tail);
        }
        self.len = start + tail;

        first
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> crate::Iter<'_, T> {
        crate::Iter::new(self.as_slice())
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> crate::IterMut<'_, T> {
        crate::IterMut::new(self.as_mut_slice())
    }

    /// Returns an iterator over the elements from last to first.
    pub fn iter_rev(&self) -> crate::RevIter<'_, T> {
        crate::RevIter::new(self.as_slice())
    }

    /// Returns a mutable iterator over the elements from last to first.
    pub fn iter_rev_mut(&mut self) -> crate::RevIterMut<'_, T> {
        crate::RevIterMut::new(self.as_mut_slice())
    }
}

impl<T: Clone> GrowVec<T> {
    /// Creates a vector of `n` copies of `value`, with capacity `pad(n)`.
    #[must_use]
    pub fn from_elem(n: usize, value: T) -> Self {
        let mut vec = Self::with_capacity(n);
        vec.fill_to(n, || value.clone());
        vec
    }

    /// Creates a vector holding clones of `values`, with capacity
    /// `pad(values.len())`.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self {
        let mut vec = Self::with_capacity(values.len());
        for value in values {
            // Safety: capacity >= values.len() > len
            unsafe { vec.buf.ptr().add(vec.len).write(value.clone()) };
            vec.len += 1;
        }
        vec
    }

    /// Creates a vector from the half-open range `[first, last)` of `source`.
    ///
    /// ```
    /// use growvec::{growvec, GrowVec};
    /// let v = growvec![1, 2, 3, 4];
    /// let tail = GrowVec::from_range(&v, v.begin() + 1, v.end());
    /// assert_eq!(tail, [2, 3, 4]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `last` precedes `first` or lies past the end of `source`.
    #[must_use]
    pub fn from_range(source: &[T], first: Cursor, last: Cursor) -> Self {
        let count = last - first;
        let start = first.index();
        Self::from_slice(&source[start..start + count])
    }

    /// Resizes to `new_size`, filling new slots with clones of `value`.
    pub fn resize(&mut self, new_size: usize, value: T) {
        self.resize_with(new_size, || value.clone());
    }
}

/// Open gap inside a vector during `insert_range`. On drop, slides the saved
/// tail down onto whatever was written and restores `len`, so a panicking or
/// short iterator leaves every element accounted for.
struct Gap<'a, T> {
    vec: &'a mut GrowVec<T>,
    index: usize,
    count: usize,
    written: usize,
    tail: usize,
}

impl<T> Drop for Gap<'_, T> {
    fn drop(&mut self) {
        let filled_end = self.index + self.written;
        if self.written < self.count {
            // Safety: the tail sits at `index + count`; the slots between
            // `filled_end` and there are uninitialized
            unsafe {
                let base = self.vec.buf.ptr();
                ptr::copy(base.add(self.index + self.count), base.add(filled_end), self.tail);
            }
        }
        self.vec.len = filled_end + self.tail;
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // Safety: exactly the live elements are dropped; the buffer itself is
        // released by `RawBuf`'s own drop afterwards
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len));
        }
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    /// Deep copy. The capacity is recomputed as `pad(len)`, not copied.
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }

    /// Releases the current buffer, then copies `source`.
    fn clone_from(&mut self, source: &Self) {
        *self = Self::new();
        *self = Self::from_slice(source.as_slice());
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for GrowVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for GrowVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for GrowVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for GrowVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Index<Cursor> for GrowVec<T> {
    type Output = T;

    fn index(&self, pos: Cursor) -> &T {
        &self.as_slice()[pos.index()]
    }
}

impl<T> IndexMut<Cursor> for GrowVec<T> {
    fn index_mut(&mut self, pos: Cursor) -> &mut T {
        &mut self.as_mut_slice()[pos.index()]
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(values: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);
        for value in values {
            // Safety: capacity >= N > len
            unsafe { vec.buf.ptr().add(vec.len).write(value) };
            vec.len += 1;
        }
        vec
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vec = Self::with_capacity(iter.size_hint().0);
        vec.extend(iter);
        vec
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(*value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, U> PartialEq<GrowVec<U>> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &GrowVec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T, U> PartialEq<[U]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Lexicographic over the live elements: the first differing element decides,
/// and a strict prefix orders first.
impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
