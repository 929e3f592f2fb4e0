use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A position inside a `GrowVec` or `FixedArray`.
///
/// A cursor is a plain logical index. It does not borrow the container, so the
/// container can be mutated while a cursor is held, and the following
/// operations leave a held cursor pointing at a different element (or past the
/// end):
///
/// - growth of any kind (`push_back`, `emplace_back`, `insert*`, `reserve`,
///   `resize`) when it reallocates; the index survives but any reference or
///   pointer obtained through it does not
/// - `insert*` and `erase*` at or before the cursor
/// - truncation (`clear`, `resize`, `pop_back`, `shrink_to_fit`) past it
/// - `swap`, `take` and `clone_from` on the container
///
/// Re-derive cursors after such operations. Using a cursor outside
/// `[begin, end]` is a caller error and panics where the container indexes
/// through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Logical index this cursor denotes.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;

    fn add(self, rhs: usize) -> Cursor {
        Cursor::new(self.index + rhs)
    }
}

impl AddAssign<usize> for Cursor {
    fn add_assign(&mut self, rhs: usize) {
        self.index += rhs;
    }
}

impl Sub<usize> for Cursor {
    type Output = Cursor;

    fn sub(self, rhs: usize) -> Cursor {
        Cursor::new(self.index - rhs)
    }
}

impl SubAssign<usize> for Cursor {
    fn sub_assign(&mut self, rhs: usize) {
        self.index -= rhs;
    }
}

/// Distance between two cursors.
///
/// # Panics
///
/// Panics if `rhs` lies after `self`.
impl Sub<Cursor> for Cursor {
    type Output = usize;

    fn sub(self, rhs: Cursor) -> usize {
        assert!(
            rhs.index <= self.index,
            "cursor range is inverted: {} precedes {}",
            self.index,
            rhs.index
        );
        self.index - rhs.index
    }
}

impl From<usize> for Cursor {
    fn from(index: usize) -> Self {
        Cursor::new(index)
    }
}
