use std::{collections::TryReserveError, ops::Range};

/// A contiguous, exclusively owned byte buffer with fallible capacity management.
///
/// `ByteVec` reserves exactly what it is asked for (subject to the allocator rounding
/// up) and never grows implicitly: every method that could reallocate returns a
/// `Result`, and on `Err` the previous contents and capacity remain intact.
///
/// Data movement inside the buffer (`insert_gap`, `remove_span`) is overlap-safe.
#[derive(Default)]
pub struct ByteVec {
    inner: Vec<u8>,
}

impl ByteVec {
    /// Creates a new empty buffer with no allocation.
    pub fn new() -> ByteVec {
        ByteVec { inner: Vec::new() }
    }

    /// Creates an empty buffer able to hold at least `capacity` bytes.
    pub fn try_with_capacity(capacity: usize) -> Result<ByteVec, TryReserveError> {
        let mut inner = Vec::new();
        inner.try_reserve_exact(capacity)?;
        Ok(ByteVec { inner })
    }

    /// Creates a buffer holding a copy of `data`, with capacity for at least
    /// `capacity` bytes.
    pub fn try_from_slice(data: &[u8], capacity: usize) -> Result<ByteVec, TryReserveError> {
        let mut vec = ByteVec::try_with_capacity(capacity.max(data.len()))?;
        vec.inner.extend_from_slice(data);
        Ok(vec)
    }

    /// Returns the number of bytes in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of bytes the buffer can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the number of bytes that can be appended without reallocating.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.inner.capacity() - self.inner.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.inner
    }

    /// Reserves capacity for at least `additional` more bytes beyond the current length.
    ///
    /// Does nothing if the capacity is already sufficient. On failure the buffer is
    /// unchanged.
    pub fn try_reserve_exact(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.inner.try_reserve_exact(additional)
    }

    /// Shrinks the capacity to `capacity` bytes, but never below the current length.
    ///
    /// The data is moved into a fresh allocation of the requested size, so a failed
    /// allocation leaves the existing buffer in place.
    pub fn try_shrink_to(&mut self, capacity: usize) -> Result<(), TryReserveError> {
        if capacity >= self.inner.capacity() {
            return Ok(());
        }
        let target = capacity.max(self.inner.len());
        let mut inner = Vec::new();
        inner.try_reserve_exact(target)?;
        inner.extend_from_slice(&self.inner);
        self.inner = inner;
        Ok(())
    }

    /// Appends a slice to the buffer, reserving exactly the missing space if needed.
    pub fn try_extend_from_slice(&mut self, data: &[u8]) -> Result<(), TryReserveError> {
        self.inner.try_reserve_exact(data.len())?;
        self.inner.extend_from_slice(data);
        Ok(())
    }

    /// Opens a gap of `count` bytes at `offset`, shifting `[offset, len)` to the right,
    /// and returns the gap for the caller to fill.
    ///
    /// The gap initially holds stale bytes of the shifted region.
    ///
    /// # Panics
    ///
    /// Panics if `offset > len`.
    pub fn try_insert_gap(
        &mut self,
        offset: usize,
        count: usize,
    ) -> Result<&mut [u8], TryReserveError> {
        let len = self.inner.len();
        assert!(offset <= len, "gap offset {offset} past length {len}");
        self.inner.try_reserve_exact(count)?;
        self.inner.resize(len + count, 0);
        self.inner.copy_within(offset..len, offset + count);
        Ok(&mut self.inner[offset..offset + count])
    }

    /// Removes the bytes in `range`, moving the tail `[range.end, len)` over it in a
    /// single block move.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or extends past the length.
    pub fn remove_span(&mut self, range: Range<usize>) {
        let len = self.inner.len();
        assert!(
            range.start <= range.end && range.end <= len,
            "span {range:?} out of bounds for length {len}"
        );
        self.inner.copy_within(range.end..len, range.start);
        self.inner.truncate(len - range.len());
    }

    /// Shortens the buffer to `len` bytes, keeping the capacity.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.inner.truncate(len);
    }

    /// Removes all bytes, keeping the capacity.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Deep copy with at least the same capacity as `self`.
    pub fn try_clone(&self) -> Result<ByteVec, TryReserveError> {
        ByteVec::try_from_slice(&self.inner, self.inner.capacity())
    }
}

impl std::ops::Deref for ByteVec {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl std::ops::DerefMut for ByteVec {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl std::fmt::Debug for ByteVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteVec")
            .field("values", &self.as_slice())
            .field("len", &self.len())
            .field("cap", &self.capacity())
            .finish()
    }
}
