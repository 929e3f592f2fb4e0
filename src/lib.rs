#![no_std]
#![deny(unsafe_code)]

//! `GrowVec`: a growable contiguous vector with a padded capacity policy.
//!
//! `GrowVec<T>` owns a single heap buffer and a count of live elements. Every
//! allocation it asks for is rounded up to a multiple of [`ALIGNMENT`] (16)
//! elements, and appends grow the buffer geometrically, so a run of `N`
//! pushes costs O(N) relocation work in total.
//!
//! `FixedArray<T, N>` is the allocation-free sibling: exactly `N` inline
//! elements with the same access, comparison, cursor and iteration surface.
//!
//! This crate is `no_std` compatible; it needs only `core` and `alloc`.
//!
//! # Capacity Policy
//!
//! - [`pad`] rounds a request up to the alignment granularity; `pad(0) == 0`.
//! - [`grow_target`] is the capacity chosen when an append finds the buffer
//!   full: `pad(max(1, len) * 2)`.
//! - `reserve(n)` never shrinks and treats `n == 0` as a request for 2.
//! - `shrink_to_fit()` is the only operation that lowers capacity, and the
//!   only one that allocates an unpadded buffer.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::new();
//! assert_eq!(v.capacity(), 0);
//!
//! v.push_back(1);
//! assert_eq!(v.capacity(), 16);
//!
//! for i in 2..=17 {
//!     v.push_back(i);
//! }
//! assert_eq!(v.len(), 17);
//! assert_eq!(v.capacity(), 32);
//!
//! v.shrink_to_fit();
//! assert_eq!(v.capacity(), 17);
//! ```
//!
//! # Cursors
//!
//! Insertion and erasure are addressed with [`Cursor`]s: logical positions
//! obtained from `begin()`, `end()` or `cursor(i)`. A cursor is not tied to the
//! lifetime of the container, so it goes stale after structural mutation; see
//! the [`Cursor`] docs for exactly which operations move elements.
//!
//! ```
//! use growvec::growvec;
//!
//! let mut v = growvec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let at = v.insert(v.begin() + 4, 123);
//! assert_eq!(v, [1, 2, 3, 4, 123, 5, 6, 7, 8, 9, 10]);
//!
//! v.erase(at);
//! assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//!
//! let first = v.begin() + 2;
//! let next = v.erase_range(first, first + 3);
//! assert_eq!(v, [1, 2, 6, 7, 8, 9, 10]);
//! assert_eq!(v[next], 6);
//! ```
//!
//! # Checked Access
//!
//! `at`, `front` and `back` return [`GrowVecError::OutOfRange`] instead of
//! panicking, and leave the container untouched:
//!
//! ```
//! use growvec::{growvec, GrowVecError};
//!
//! let v = growvec![10, 20, 30];
//! assert_eq!(v.at(2), Ok(&30));
//! assert!(matches!(v.at(3), Err(GrowVecError::OutOfRange { index: 3, size: 3, .. })));
//! ```
//!
//! # Comparison
//!
//! Equality compares sizes and then elements in order; ordering is
//! lexicographic.
//!
//! ```
//! use growvec::growvec;
//!
//! assert!(growvec![1, 2, 3] < growvec![1, 2, 4]);
//! assert!(growvec![1, 2] < growvec![1, 2, 3]);
//! assert_eq!(growvec![1, 2, 3], growvec![1, 2, 3]);
//! ```
//!
//! # Fixed Arrays
//!
//! ```
//! use growvec::FixedArray;
//!
//! let mut a: FixedArray<i32, 4> = FixedArray::from([1, 2, 3, 4]);
//! a.insert(a.begin() + 1, 9);
//! assert_eq!(a, [1, 9, 2, 3]);
//!
//! a.erase(a.begin());
//! assert_eq!(a, [9, 2, 3, 0]);
//!
//! assert!(a.insert(a.end(), 5).is_none());
//! ```

extern crate alloc;

mod array;
mod cursor;
mod error;
#[allow(unsafe_code)]
mod iter;
mod policy;
#[allow(unsafe_code)]
mod raw;
#[allow(unsafe_code)]
mod vector;

pub use array::FixedArray;
pub use cursor::Cursor;
pub use error::{GrowVecError, Result};
pub use iter::{IntoIter, Iter, IterMut, RevIter, RevIterMut};
pub use policy::{grow_target, pad, ALIGNMENT};
pub use vector::GrowVec;

/// Creates a [`GrowVec`] from a list of values or from a value and a count.
///
/// ```
/// use growvec::growvec;
///
/// let v = growvec![1, 2, 3];
/// assert_eq!(v.capacity(), 16);
///
/// let zeros = growvec![0u8; 20];
/// assert_eq!(zeros.len(), 20);
/// assert_eq!(zeros.capacity(), 32);
/// ```
#[macro_export]
macro_rules! growvec {
    () => {
        $crate::GrowVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::GrowVec::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::GrowVec::from([$($x),+])
    };
}
