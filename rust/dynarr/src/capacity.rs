//! Overflow-checked capacity arithmetic.
//!
//! Pure functions over `(capacity, element_width, max_bytes)`; nothing here touches
//! memory. A `None` result means the computation would exceed `max_bytes` (or wrap
//! `usize`) and must not be committed.

/// Largest element count whose byte size fits in `max_bytes`.
#[inline]
pub fn max_elements(element_width: usize, max_bytes: usize) -> usize {
    debug_assert_ne!(element_width, 0);
    max_bytes / element_width
}

/// Byte size of `capacity` elements, if it fits in `max_bytes`.
#[inline]
pub fn checked_bytes(capacity: usize, element_width: usize, max_bytes: usize) -> Option<usize> {
    capacity
        .checked_mul(element_width)
        .filter(|&bytes| bytes <= max_bytes)
}

/// Capacity after doubling (a left shift by one), if both the element count and the
/// byte size stay representable.
///
/// An empty allocation doubles to a single element.
pub fn doubled(capacity: usize, element_width: usize, max_bytes: usize) -> Option<usize> {
    if capacity == 0 {
        return checked_bytes(1, element_width, max_bytes).map(|_| 1);
    }
    if capacity > usize::MAX >> 1 {
        return None;
    }
    let new_capacity = capacity << 1;
    checked_bytes(new_capacity, element_width, max_bytes).map(|_| new_capacity)
}

/// Capacity after growing by exactly `extra` elements, if it stays representable.
pub fn grown_by(
    capacity: usize,
    extra: usize,
    element_width: usize,
    max_bytes: usize,
) -> Option<usize> {
    let new_capacity = capacity.checked_add(extra)?;
    checked_bytes(new_capacity, element_width, max_bytes).map(|_| new_capacity)
}

/// Number of elements still available below the byte limit.
///
/// This is the growth step used when doubling is rejected: it takes the capacity
/// straight to the true maximum instead of refusing service early.
#[inline]
pub fn fallback_extra(capacity: usize, element_width: usize, max_bytes: usize) -> usize {
    max_elements(element_width, max_bytes).saturating_sub(capacity)
}

/// Capacity to shrink to after a removal, if any.
///
/// Shrinks to half the capacity once `len <= capacity / 4`. The gap between this
/// threshold and the full-buffer growth threshold keeps alternating push/remove at
/// one boundary from reallocating every time.
pub fn shrink_target(len: usize, capacity: usize) -> Option<usize> {
    let target = capacity / 2;
    (len <= capacity / 4 && target < capacity).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = usize::MAX;

    #[test]
    fn test_max_elements() {
        assert_eq!(max_elements(1, 100), 100);
        assert_eq!(max_elements(4, 100), 25);
        assert_eq!(max_elements(3, 100), 33);
        assert_eq!(max_elements(8, MAX), MAX / 8);
    }

    #[test]
    fn test_checked_bytes() {
        assert_eq!(checked_bytes(0, 4, 100), Some(0));
        assert_eq!(checked_bytes(25, 4, 100), Some(100));
        assert_eq!(checked_bytes(26, 4, 100), None);
        assert_eq!(checked_bytes(MAX / 2 + 1, 2, MAX), None);
        assert_eq!(checked_bytes(MAX / 2, 2, MAX), Some(MAX - 1));
    }

    #[test]
    fn test_doubled() {
        assert_eq!(doubled(0, 4, 100), Some(1));
        assert_eq!(doubled(0, 200, 100), None);
        assert_eq!(doubled(2, 4, 100), Some(4));
        assert_eq!(doubled(12, 4, 100), Some(24));
        assert_eq!(doubled(13, 4, 100), None);
        // Element count overflow.
        assert_eq!(doubled(MAX / 2 + 1, 1, MAX), None);
        // Byte size overflow.
        assert_eq!(doubled(MAX / 4, 4, MAX), None);
        assert_eq!(doubled(MAX / 2, 1, MAX), Some(MAX - 1));
    }

    #[test]
    fn test_grown_by() {
        assert_eq!(grown_by(16, 9, 4, 100), Some(25));
        assert_eq!(grown_by(16, 10, 4, 100), None);
        assert_eq!(grown_by(MAX, 1, 1, MAX), None);
        assert_eq!(grown_by(1, MAX, 1, MAX), None);
        assert_eq!(grown_by(10, 0, 4, 100), Some(10));
    }

    #[test]
    fn test_fallback_extra() {
        assert_eq!(fallback_extra(16, 4, 100), 9);
        assert_eq!(fallback_extra(25, 4, 100), 0);
        assert_eq!(fallback_extra(30, 4, 100), 0);
        let cap = fallback_extra(0, 8, MAX);
        assert_eq!(grown_by(0, cap, 8, MAX), Some(MAX / 8));
    }

    #[test]
    fn test_shrink_target() {
        assert_eq!(shrink_target(0, 0), None);
        assert_eq!(shrink_target(0, 1), Some(0));
        assert_eq!(shrink_target(2, 8), Some(4));
        assert_eq!(shrink_target(3, 8), None);
        assert_eq!(shrink_target(4, 16), Some(8));
        assert_eq!(shrink_target(5, 16), None);
        assert_eq!(shrink_target(0, 16), Some(8));
    }

    #[test]
    fn test_shrink_target_never_below_len() {
        for capacity in 0..512 {
            for len in 0..=capacity {
                if let Some(target) = shrink_target(len, capacity) {
                    assert!(target >= len);
                    assert!(target < capacity);
                }
            }
        }
    }
}
