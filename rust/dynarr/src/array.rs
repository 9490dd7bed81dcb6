//! The storage core and element operations of [`DynamicArray`].

use dynarr_bytes::ByteVec;
use dynarr_common::{Error, ErrorKind, Result, result::verify_width, verify_arg};

use crate::{capacity, config::ArrayConfig};

/// A growable array of fixed-width, type-erased elements.
///
/// Elements are runs of `element_width` bytes stored contiguously in insertion order.
/// The array tracks its own capacity (in elements) and proves before every
/// reallocation that `capacity * element_width` stays within
/// [`ArrayConfig::max_bytes`].
///
/// Every mutating method either succeeds or leaves the array exactly as it was before
/// the call. The only exception is the automatic shrink after a removal, whose failure
/// is logged and otherwise ignored: the element is still removed and the array keeps
/// its larger buffer.
///
/// Equality and search compare raw bytes. The array knows nothing about what the bytes
/// mean; pointers or handles stored inside elements are the caller's to release.
///
/// # Examples
///
/// ```
/// use dynarr::DynamicArray;
///
/// let mut arr = DynamicArray::new(4).unwrap();
/// for v in [1u32, 2, 3] {
///     arr.push(&v.to_ne_bytes()).unwrap();
/// }
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.get(1).unwrap(), &2u32.to_ne_bytes());
///
/// let removed = arr.remove_at(0).unwrap();
/// assert_eq!(removed, 1u32.to_ne_bytes());
/// assert_eq!(arr.len(), 2);
/// ```
pub struct DynamicArray {
    /// Live elements, `len * element_width` bytes. The physical allocation may
    /// exceed `capacity` elements, never fall short of it.
    pub(crate) buf: ByteVec,
    pub(crate) element_width: usize,
    /// Logical capacity in elements.
    pub(crate) capacity: usize,
    pub(crate) config: ArrayConfig,
}

impl DynamicArray {
    /// Creates an empty array of `element_width`-byte elements with the default
    /// capacity ([`ArrayConfig::DEFAULT_CAPACITY`]).
    pub fn new(element_width: usize) -> Result<DynamicArray> {
        let config = ArrayConfig::default();
        Self::with_config(config.default_capacity, element_width, config)
    }

    /// Creates an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, element_width: usize) -> Result<DynamicArray> {
        Self::with_config(capacity, element_width, ArrayConfig::default())
    }

    /// Creates an empty array with room for `capacity` elements, governed by `config`.
    ///
    /// Fails with `InvalidArgument` for a zero element width, with `CapacityOverflow`
    /// if `capacity * element_width` exceeds `config.max_bytes`, and with
    /// `AllocationFailed` if the buffer cannot be allocated.
    pub fn with_config(
        capacity: usize,
        element_width: usize,
        config: ArrayConfig,
    ) -> Result<DynamicArray> {
        verify_arg!(element_width, element_width != 0);
        let bytes = capacity::checked_bytes(capacity, element_width, config.max_bytes)
            .ok_or_else(|| Error::capacity_overflow(capacity, element_width))?;
        let buf = ByteVec::try_with_capacity(bytes)
            .map_err(|e| Error::allocation_failed(bytes, e))?;
        Ok(DynamicArray {
            buf,
            element_width,
            capacity,
            config,
        })
    }

    /// Creates a deep copy of `source`, which must hold `element_width`-byte elements.
    ///
    /// The copy gets the capacity and configuration of the source.
    pub fn from_array(source: &DynamicArray, element_width: usize) -> Result<DynamicArray> {
        verify_width(source.element_width, element_width)?;
        let bytes = source.capacity * element_width;
        let buf = ByteVec::try_from_slice(source.as_bytes(), bytes)
            .map_err(|e| Error::allocation_failed(bytes, e))?;
        Ok(DynamicArray {
            buf,
            element_width,
            capacity: source.capacity,
            config: source.config.clone(),
        })
    }

    /// Deep copy of this array.
    pub fn try_clone(&self) -> Result<DynamicArray> {
        Self::from_array(self, self.element_width)
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len() / self.element_width
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of elements the array can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size of one element in bytes, fixed at construction.
    #[inline]
    pub fn element_width(&self) -> usize {
        self.element_width
    }

    #[inline]
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// The live elements as one byte slice, valid until the next mutation.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// Iterates over the elements as `element_width`-byte slices.
    pub fn iter(&self) -> std::slice::ChunksExact<'_, u8> {
        self.buf.chunks_exact(self.element_width)
    }
}

impl DynamicArray {
    /// Returns a view of the element at `index`, valid until the next mutation.
    pub fn get(&self, index: usize) -> Result<&[u8]> {
        self.check_index(index)?;
        Ok(&self.buf[self.element_range(index)])
    }

    /// Copies the element at `index` into `out`, which must be exactly one element wide.
    pub fn get_into(&self, index: usize, out: &mut [u8]) -> Result<()> {
        verify_width(self.element_width, out.len())?;
        out.copy_from_slice(self.get(index)?);
        Ok(())
    }

    /// Overwrites the element at `index` with `data`.
    pub fn set(&mut self, index: usize, data: &[u8]) -> Result<()> {
        verify_width(self.element_width, data.len())?;
        self.check_index(index)?;
        let range = self.element_range(index);
        self.buf[range].copy_from_slice(data);
        Ok(())
    }

    /// Appends `data` as the last element, growing the buffer if it is full.
    pub fn push(&mut self, data: &[u8]) -> Result<()> {
        verify_width(self.element_width, data.len())?;
        self.grow_for_push()?;
        self.buf
            .try_extend_from_slice(data)
            .map_err(|e| Error::allocation_failed(data.len(), e))
    }

    /// Inserts `data` at `index`, shifting the elements at `index..` one slot right.
    ///
    /// `index` must refer to an existing element; use [`push`](Self::push) to append.
    pub fn insert(&mut self, index: usize, data: &[u8]) -> Result<()> {
        verify_width(self.element_width, data.len())?;
        self.check_index(index)?;
        self.grow_for_push()?;
        let offset = index * self.element_width;
        self.buf
            .try_insert_gap(offset, self.element_width)
            .map_err(|e| Error::allocation_failed(data.len(), e))?
            .copy_from_slice(data);
        Ok(())
    }

    /// Removes the element at `index` and returns an owned copy of its bytes.
    ///
    /// Elements after `index` move one slot left. May shrink the buffer, see
    /// [`ArrayConfig::auto_shrink`].
    pub fn remove_at(&mut self, index: usize) -> Result<Vec<u8>> {
        self.check_index(index)?;
        let mut removed = Vec::new();
        removed
            .try_reserve_exact(self.element_width)
            .map_err(|e| Error::allocation_failed(self.element_width, e))?;
        removed.extend_from_slice(&self.buf[self.element_range(index)]);
        self.remove_index(index);
        Ok(removed)
    }

    /// Removes the first element byte-equal to `data` and returns its former index.
    ///
    /// Fails with `NotFound` if there is no such element.
    pub fn remove_element(&mut self, data: &[u8]) -> Result<usize> {
        let index = self.index_of(data)?.ok_or_else(Error::not_found)?;
        self.remove_index(index);
        Ok(index)
    }

    /// For every element of `other`, removes one byte-equal occurrence from this array.
    ///
    /// Duplicates in `other` remove one occurrence each. Elements with no match are
    /// skipped. Returns the number of elements removed.
    pub fn remove_all(&mut self, other: &DynamicArray) -> Result<usize> {
        verify_width(self.element_width, other.element_width)?;
        let mut removed = 0;
        for element in other.iter() {
            if let Some(index) = self.index_of(element)? {
                self.remove_index(index);
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Removes the elements in the half-open range `start..end`.
    ///
    /// Fails with `InvalidRange` unless `start < end <= len`.
    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<()> {
        self.check_range(start, end)?;
        let w = self.element_width;
        self.buf.remove_span(start * w..end * w);
        self.shrink_after_removal();
        Ok(())
    }

    /// Removes all elements, keeping the capacity.
    ///
    /// If the elements hold pointers or handles, release their referents first; the
    /// array only forgets the bytes.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl DynamicArray {
    /// Reallocates the buffer to hold exactly `capacity` elements, in either direction.
    ///
    /// Fails with `InvalidArgument` if `capacity < len`, and with `CapacityOverflow` if
    /// the byte size exceeds the limit. On failure the array is unchanged.
    pub fn ensure_capacity(&mut self, capacity: usize) -> Result<()> {
        verify_arg!(capacity, capacity >= self.len());
        if capacity == self.capacity {
            return Ok(());
        }
        self.resize_buffer(capacity)
    }

    /// Shrinks the capacity to the current length.
    pub fn trim_to_size(&mut self) -> Result<()> {
        self.ensure_capacity(self.len())
    }

    /// Reallocates to exactly `new_capacity` elements; never shrinks.
    pub(crate) fn expand_to(&mut self, new_capacity: usize) -> Result<()> {
        verify_arg!(new_capacity, new_capacity >= self.capacity);
        self.resize_buffer(new_capacity)
    }

    pub(crate) fn double_capacity(&mut self) -> Result<()> {
        let w = self.element_width;
        let new_capacity = capacity::doubled(self.capacity, w, self.config.max_bytes)
            .ok_or_else(|| Error::capacity_overflow(self.capacity.saturating_mul(2), w))?;
        self.expand_to(new_capacity)
    }

    pub(crate) fn grow_by(&mut self, extra: usize) -> Result<()> {
        let w = self.element_width;
        let new_capacity = capacity::grown_by(self.capacity, extra, w, self.config.max_bytes)
            .ok_or_else(|| Error::capacity_overflow(self.capacity.saturating_add(extra), w))?;
        self.expand_to(new_capacity)
    }

    /// Makes room for one more element.
    ///
    /// Doubles the capacity; when doubling would overflow the byte limit, grows
    /// straight to the largest capacity the limit allows instead.
    fn grow_for_push(&mut self) -> Result<()> {
        if self.len() < self.capacity {
            return Ok(());
        }
        match self.double_capacity() {
            Err(e) if matches!(e.kind(), ErrorKind::CapacityOverflow { .. }) => {
                let w = self.element_width;
                let extra = capacity::fallback_extra(self.capacity, w, self.config.max_bytes);
                log::debug!(
                    "dynarr: doubling {} elements of {w} bytes overflows, growing by {extra}",
                    self.capacity
                );
                if extra == 0 {
                    return Err(e);
                }
                self.grow_by(extra)
            }
            res => res,
        }
    }

    /// Applies the shrink policy after a removal. Failure keeps the current buffer.
    fn shrink_after_removal(&mut self) {
        if !self.config.auto_shrink {
            return;
        }
        if let Some(target) = capacity::shrink_target(self.len(), self.capacity) {
            if let Err(e) = self.resize_buffer(target) {
                log::warn!(
                    "dynarr: shrinking to {target} elements failed, keeping {}: {e}",
                    self.capacity
                );
            }
        }
    }

    fn resize_buffer(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.len());
        let w = self.element_width;
        let bytes = capacity::checked_bytes(new_capacity, w, self.config.max_bytes)
            .ok_or_else(|| Error::capacity_overflow(new_capacity, w))?;
        let res = if new_capacity > self.capacity {
            self.buf.try_reserve_exact(bytes - self.buf.len())
        } else {
            self.buf.try_shrink_to(bytes)
        };
        res.map_err(|e| Error::allocation_failed(bytes, e))?;
        log::trace!(
            "dynarr: capacity {} -> {new_capacity} elements of {w} bytes",
            self.capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }
}

impl DynamicArray {
    /// Removes the element at a validated `index` and applies the shrink policy.
    pub(crate) fn remove_index(&mut self, index: usize) {
        let range = self.element_range(index);
        self.buf.remove_span(range);
        self.shrink_after_removal();
    }

    #[inline]
    pub(crate) fn element_range(&self, index: usize) -> std::ops::Range<usize> {
        let start = index * self.element_width;
        start..start + self.element_width
    }

    #[inline]
    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            Err(Error::index_out_of_range(index, len))
        }
    }

    #[inline]
    pub(crate) fn check_range(&self, start: usize, end: usize) -> Result<()> {
        let len = self.len();
        if start < end && end <= len {
            Ok(())
        } else {
            Err(Error::invalid_range(start, end, len))
        }
    }
}

impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        self.element_width == other.element_width && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for DynamicArray {}

impl std::fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("element_width", &self.element_width)
            .field("bytes", &self.as_bytes())
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a [u8];
    type IntoIter = std::slice::ChunksExact<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
