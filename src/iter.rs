use core::fmt;
use core::iter::{FusedIterator, Rev};
use core::mem;
use core::ptr;
use core::slice;

use crate::array::FixedArray;
use crate::raw::RawBuf;
use crate::vector::GrowVec;

/// Iterator over the elements of a `GrowVec` or `FixedArray`
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self { inner: items.iter() }
    }

    /// The elements not yet yielded.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over the elements of a `GrowVec` or `FixedArray`
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T]) -> Self {
        Self {
            inner: items.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Reverse iterator over the elements of a `GrowVec` or `FixedArray`
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct RevIter<'a, T> {
    inner: Rev<slice::Iter<'a, T>>,
}

impl<'a, T> RevIter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            inner: items.iter().rev(),
        }
    }
}

impl<'a, T> Iterator for RevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for RevIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for RevIter<'_, T> {}

impl<T> FusedIterator for RevIter<'_, T> {}

/// Mutable reverse iterator over the elements of a `GrowVec` or `FixedArray`
#[derive(Debug)]
pub struct RevIterMut<'a, T> {
    inner: Rev<slice::IterMut<'a, T>>,
}

impl<'a, T> RevIterMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T]) -> Self {
        Self {
            inner: items.iter_mut().rev(),
        }
    }
}

impl<'a, T> Iterator for RevIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for RevIterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for RevIterMut<'_, T> {}

impl<T> FusedIterator for RevIterMut<'_, T> {}

/// Owning iterator over the elements of a `GrowVec`
///
/// Elements not consumed are dropped together with the iterator, and the
/// buffer is released afterwards.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // Safety: `[front, back)` are the live, not yet yielded slots
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.front), self.back - self.front) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        // Safety: the slot is live and leaves the live range before the read
        // value is handed out
        let value = unsafe { self.buf.ptr().add(self.front).read() };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // Safety: see `next`
        Some(unsafe { self.buf.ptr().add(self.back).read() })
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
        let remaining = self.back - self.front;
        self.back = self.front;
        // Safety: the remaining slots are live and no longer reachable
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(self.front),
                remaining,
            ));
        }
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let back = mem::replace(&mut self.len, 0);
        let buf = mem::replace(&mut self.buf, RawBuf::new());
        IntoIter { buf, front: 0, back }
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
