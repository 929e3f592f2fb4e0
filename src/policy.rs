//! Capacity policy: how many slots to allocate for a request, and how far to
//! grow when an append finds the buffer full.
//!
//! Both functions are pure. They never allocate.

/// Every capacity handed to the allocator is a multiple of this many elements
/// (except the exact-fit buffer produced by `shrink_to_fit`).
pub const ALIGNMENT: usize = 16;

/// Rounds `n` up to the next multiple of [`ALIGNMENT`].
///
/// ```
/// use growvec::pad;
/// assert_eq!(pad(0), 0);
/// assert_eq!(pad(1), 16);
/// assert_eq!(pad(16), 16);
/// assert_eq!(pad(17), 32);
/// ```
///
/// # Panics
///
/// Panics on arithmetic overflow, which can only happen for requests that no
/// allocator could satisfy anyway.
#[must_use]
pub const fn pad(n: usize) -> usize {
    match n.checked_add(ALIGNMENT - 1) {
        Some(rounded) => rounded / ALIGNMENT * ALIGNMENT,
        None => capacity_overflow(),
    }
}

/// Capacity to grow to when an append-style mutation finds `size == capacity`:
/// double the current size, with a floor of one, then pad.
///
/// ```
/// use growvec::grow_target;
/// assert_eq!(grow_target(0), 16);
/// assert_eq!(grow_target(16), 32);
/// assert_eq!(grow_target(40), 80);
/// ```
#[must_use]
pub const fn grow_target(current_size: usize) -> usize {
    let base = if current_size == 0 { 1 } else { current_size };
    match base.checked_mul(2) {
        Some(doubled) => pad(doubled),
        None => capacity_overflow(),
    }
}

#[cold]
#[inline(never)]
pub(crate) const fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_rounds_up_to_alignment() {
        assert_eq!(pad(0), 0);
        for n in 1..=16 {
            assert_eq!(pad(n), 16);
        }
        assert_eq!(pad(17), 32);
        assert_eq!(pad(31), 32);
        assert_eq!(pad(32), 32);
        assert_eq!(pad(1000), 1008);
    }

    #[test]
    fn test_pad_is_idempotent() {
        for n in 0..200 {
            assert_eq!(pad(pad(n)), pad(n));
            assert_eq!(pad(n) % ALIGNMENT, 0);
            assert!(pad(n) >= n);
        }
    }

    #[test]
    fn test_grow_target_doubles_with_floor() {
        assert_eq!(grow_target(0), 16);
        assert_eq!(grow_target(1), 16);
        assert_eq!(grow_target(8), 16);
        assert_eq!(grow_target(9), 32);
        assert_eq!(grow_target(16), 32);
        assert_eq!(grow_target(32), 64);
        assert_eq!(grow_target(100), 208);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_pad_overflow_panics() {
        let _ = pad(usize::MAX);
    }
}
