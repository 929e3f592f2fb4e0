use core::array;
use core::mem;
use core::ops::{Deref, DerefMut, Index, IndexMut};

use crate::cursor::Cursor;
use crate::error::{GrowVecError, Result};
use crate::iter::{Iter, IterMut, RevIter, RevIterMut};

/// An array of exactly `N` live elements stored inline.
///
/// No allocation, no capacity policy. Insertion and erasure keep the element
/// count at `N`: values shifted past the end fall off, and vacated slots are
/// reset to `T::default()`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedArray<T, const N: usize> {
    data: [T; N],
}

impl<T: Default, const N: usize> FixedArray<T, N> {
    /// Every slot holds `T::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: array::from_fn(|_| T::default()),
        }
    }

    /// Copies up to `N` values from `values`; remaining slots get defaults.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        values.iter().cloned().collect()
    }

    /// Moves the contents out, resetting every slot of `self` to the default.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Resets every slot to `T::default()`.
    pub fn clear(&mut self) {
        self.data.fill_with(T::default);
    }

    /// Removes the element at `pos`, shifting the suffix left and resetting the
    /// last slot. Returns `None` when `pos` is outside the array.
    pub fn erase(&mut self, pos: Cursor) -> Option<Cursor> {
        let index = pos.index();
        if index >= N {
            return None;
        }
        self.data[index..].rotate_left(1);
        self.data[N - 1] = T::default();
        Some(pos)
    }

    /// Removes `[first, last)`, shifting the suffix left by `last - first` and
    /// resetting the vacated tail. Returns `None` when `first` is outside the
    /// array or `last` is past its end.
    ///
    /// # Panics
    ///
    /// Panics if `last` precedes `first`.
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> Option<Cursor> {
        if first.index() >= N || last.index() > N {
            return None;
        }
        let count = last - first;
        self.data[first.index()..].rotate_left(count);
        self.data[N - count..].fill_with(T::default);
        Some(first)
    }
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Every slot holds a clone of `value`.
    #[must_use]
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: array::from_fn(|_| value.clone()),
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Base pointer of the inline storage.
    #[must_use]
    pub fn data(&self) -> *const T {
        self.data.as_ptr()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Unwraps into the underlying array.
    #[must_use]
    pub fn into_inner(self) -> [T; N] {
        self.data
    }

    /// Checked access.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::OutOfRange` if `index >= N`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.data
            .get(index)
            .ok_or(GrowVecError::out_of_range("at", index, N))
    }

    /// # Errors
    ///
    /// Returns `GrowVecError::OutOfRange` if `index >= N`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.data
            .get_mut(index)
            .ok_or(GrowVecError::out_of_range("at", index, N))
    }

    /// # Errors
    ///
    /// Returns `GrowVecError::OutOfRange` if `N == 0`.
    pub fn front(&self) -> Result<&T> {
        self.data
            .first()
            .ok_or(GrowVecError::out_of_range("front", 0, 0))
    }

    /// # Errors
    ///
    /// Returns `GrowVecError::OutOfRange` if `N == 0`.
    pub fn back(&self) -> Result<&T> {
        self.data
            .last()
            .ok_or(GrowVecError::out_of_range("back", 0, 0))
    }

    #[must_use]
    pub fn begin(&self) -> Cursor {
        Cursor::new(0)
    }

    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor::new(N)
    }

    #[must_use]
    pub fn cursor(&self, index: usize) -> Cursor {
        Cursor::new(index)
    }

    /// Overwrites every slot with a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.data, &mut other.data);
    }

    /// Writes `value` at `pos`, shifting the suffix right. The last element
    /// falls off. Returns `None` (and drops `value`) when `pos` is outside the
    /// array.
    pub fn insert(&mut self, pos: Cursor, value: T) -> Option<Cursor> {
        let index = pos.index();
        if index >= N {
            return None;
        }
        self.data[index..].rotate_right(1);
        self.data[index] = value;
        Some(pos)
    }

    /// Writes the values produced by `values` starting at `pos`, shifting the
    /// suffix right by as many slots as are written. At most `N - pos` values
    /// are taken; the rest are ignored. Returns `None` when `pos` is outside the
    /// array.
    pub fn insert_range<I>(&mut self, pos: Cursor, values: I) -> Option<Cursor>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let index = pos.index();
        if index >= N {
            return None;
        }
        let values = values.into_iter();
        let limit = values.len().min(N - index);
        self.data[index..].rotate_right(limit);
        for (slot, value) in self.data[index..index + limit].iter_mut().zip(values) {
            *slot = value;
        }
        Some(pos)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.data)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.data)
    }

    pub fn iter_rev(&self) -> RevIter<'_, T> {
        RevIter::new(&self.data)
    }

    pub fn iter_rev_mut(&mut self) -> RevIterMut<'_, T> {
        RevIterMut::new(&mut self.data)
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

/// Takes the first `N` items; missing slots get `T::default()`.
impl<T: Default, const N: usize> FromIterator<T> for FixedArray<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut iter = iter.into_iter();
        Self {
            data: array::from_fn(|_| iter.next().unwrap_or_default()),
        }
    }
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> DerefMut for FixedArray<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T, const N: usize> Index<Cursor> for FixedArray<T, N> {
    type Output = T;

    fn index(&self, pos: Cursor) -> &T {
        &self.data[pos.index()]
    }
}

impl<T, const N: usize> IndexMut<Cursor> for FixedArray<T, N> {
    fn index_mut(&mut self, pos: Cursor) -> &mut T {
        &mut self.data[pos.index()]
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for FixedArray<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.data == *other
    }
}
