//! Search, merge, range extraction and sorting.

use std::cmp::Ordering;

use dynarr_bytes::ByteVec;
use dynarr_common::{Error, Result, result::verify_width, verify_arg};

use crate::{DynamicArray, capacity};

impl DynamicArray {
    /// Returns true if some element is byte-equal to `data`.
    pub fn contains(&self, data: &[u8]) -> Result<bool> {
        Ok(self.index_of(data)?.is_some())
    }

    /// Index of the first element byte-equal to `data`, or `None`.
    pub fn index_of(&self, data: &[u8]) -> Result<Option<usize>> {
        verify_width(self.element_width, data.len())?;
        Ok(self.iter().position(|element| element == data))
    }

    /// Index of the last element byte-equal to `data`, or `None`.
    pub fn last_index_of(&self, data: &[u8]) -> Result<Option<usize>> {
        verify_width(self.element_width, data.len())?;
        Ok(self.iter().rposition(|element| element == data))
    }

    /// Appends all elements of `other`, in order.
    ///
    /// Grows the buffer at most once, to exactly the combined length.
    pub fn extend_from_array(&mut self, other: &DynamicArray) -> Result<()> {
        verify_width(self.element_width, other.element_width)?;
        self.extend_from_bytes(other.as_bytes())
    }

    /// Appends the elements packed in `bytes`, whose length must be a multiple of the
    /// element width.
    pub fn extend_from_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let w = self.element_width;
        verify_arg!(bytes, bytes.len() % w == 0);
        let count = bytes.len() / w;
        if count == 0 {
            return Ok(());
        }
        let required = self
            .len()
            .checked_add(count)
            .filter(|&n| capacity::checked_bytes(n, w, self.config.max_bytes).is_some())
            .ok_or_else(|| Error::capacity_overflow(self.len().saturating_add(count), w))?;
        if required > self.capacity {
            self.grow_by(required - self.capacity)?;
        }
        self.buf
            .try_extend_from_slice(bytes)
            .map_err(|e| Error::allocation_failed(bytes.len(), e))
    }

    /// Returns a new array holding a copy of the elements in `start..end`.
    ///
    /// The sub-list has capacity `end - start` and shares nothing with `self`.
    pub fn sub_list(&self, start: usize, end: usize) -> Result<DynamicArray> {
        self.check_range(start, end)?;
        let w = self.element_width;
        let mut sub = DynamicArray::with_config(end - start, w, self.config.clone())?;
        let bytes = &self.buf[start * w..end * w];
        sub.buf
            .try_extend_from_slice(bytes)
            .map_err(|e| Error::allocation_failed(bytes.len(), e))?;
        Ok(sub)
    }

    /// Sorts the elements in place with `compare`, which must be a total order over
    /// element byte slices.
    ///
    /// The sort is stable. Fails with `InvalidOperation` on an empty array. The
    /// elements are rewritten only after all comparisons are done, so a panicking
    /// comparator leaves the array untouched.
    pub fn sort_by<F>(&mut self, mut compare: F) -> Result<()>
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        if self.is_empty() {
            return Err(Error::invalid_operation("sort of an empty array"));
        }
        let len = self.len();
        let w = self.element_width;

        let mut order = Vec::new();
        order
            .try_reserve_exact(len)
            .map_err(|e| Error::allocation_failed(len * std::mem::size_of::<usize>(), e))?;
        order.extend(0..len);
        let mut sorted = ByteVec::try_with_capacity(self.buf.len())
            .map_err(|e| Error::allocation_failed(self.buf.len(), e))?;

        let bytes = self.buf.as_slice();
        order.sort_by(|&a, &b| compare(&bytes[a * w..(a + 1) * w], &bytes[b * w..(b + 1) * w]));
        for &i in &order {
            sorted
                .try_extend_from_slice(&bytes[i * w..(i + 1) * w])
                .map_err(|e| Error::allocation_failed(w, e))?;
        }

        self.buf.as_mut_slice().copy_from_slice(&sorted);
        Ok(())
    }
}
