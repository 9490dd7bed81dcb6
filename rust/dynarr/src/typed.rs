//! Statically typed front-end over [`DynamicArray`].

use std::{cmp::Ordering, marker::PhantomData};

use bytemuck::Pod;
use dynarr_common::{Result, result::verify_width};

use crate::{DynamicArray, config::ArrayConfig};

/// A [`DynamicArray`] whose element width is `size_of::<T>()`.
///
/// Values go in and out by copy through `bytemuck`, so `T` must be [`Pod`]. The
/// buffer carries no alignment for `T`; reads are unaligned. Equality in searches
/// is still byte equality of the value representation, as in the untyped array.
///
/// Zero-sized types are rejected at construction.
///
/// # Examples
///
/// ```
/// use dynarr::TypedArray;
///
/// let mut arr = TypedArray::<u32>::from_slice(&[10, 20, 30, 40]).unwrap();
/// let sub = arr.sub_list(1, 3).unwrap();
/// arr.set(1, 99).unwrap();
/// assert_eq!(sub.to_vec(), vec![20, 30]);
/// assert_eq!(arr.to_vec(), vec![10, 99, 30, 40]);
/// ```
pub struct TypedArray<T> {
    inner: DynamicArray,
    _t: PhantomData<T>,
}

impl<T: Pod> TypedArray<T> {
    pub fn new() -> Result<TypedArray<T>> {
        DynamicArray::new(Self::WIDTH).map(Self::wrap)
    }

    pub fn with_capacity(capacity: usize) -> Result<TypedArray<T>> {
        DynamicArray::with_capacity(capacity, Self::WIDTH).map(Self::wrap)
    }

    pub fn with_config(capacity: usize, config: ArrayConfig) -> Result<TypedArray<T>> {
        DynamicArray::with_config(capacity, Self::WIDTH, config).map(Self::wrap)
    }

    /// Creates an array holding a copy of `values`, with capacity `values.len()`.
    pub fn from_slice(values: &[T]) -> Result<TypedArray<T>> {
        let mut arr = Self::with_capacity(values.len())?;
        arr.extend_from_slice(values)?;
        Ok(arr)
    }

    /// Wraps an untyped array whose element width is `size_of::<T>()`.
    pub fn from_untyped(inner: DynamicArray) -> Result<TypedArray<T>> {
        verify_width(Self::WIDTH, inner.element_width())?;
        Ok(Self::wrap(inner))
    }

    pub fn try_clone(&self) -> Result<TypedArray<T>> {
        self.inner.try_clone().map(Self::wrap)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.inner.get(index).map(bytemuck::pod_read_unaligned)
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.inner.set(index, bytemuck::bytes_of(&value))
    }

    pub fn push(&mut self, value: T) -> Result<()> {
        self.inner.push(bytemuck::bytes_of(&value))
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.inner.insert(index, bytemuck::bytes_of(&value))
    }

    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<()> {
        self.inner.extend_from_bytes(bytemuck::cast_slice(values))
    }

    pub fn extend_from_array(&mut self, other: &TypedArray<T>) -> Result<()> {
        self.inner.extend_from_array(&other.inner)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.inner
            .remove_at(index)
            .map(|bytes| bytemuck::pod_read_unaligned(&bytes))
    }

    /// Removes the first occurrence of `value`; see [`DynamicArray::remove_element`].
    pub fn remove_element(&mut self, value: &T) -> Result<usize> {
        self.inner.remove_element(bytemuck::bytes_of(value))
    }

    /// See [`DynamicArray::remove_all`].
    pub fn remove_all(&mut self, other: &TypedArray<T>) -> Result<usize> {
        self.inner.remove_all(&other.inner)
    }

    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<()> {
        self.inner.remove_range(start, end)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        let needle = bytemuck::bytes_of(value);
        self.inner.iter().position(|element| element == needle)
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        let needle = bytemuck::bytes_of(value);
        self.inner.iter().rposition(|element| element == needle)
    }

    pub fn sub_list(&self, start: usize, end: usize) -> Result<TypedArray<T>> {
        self.inner.sub_list(start, end).map(Self::wrap)
    }

    pub fn sort_by<F>(&mut self, mut compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.inner.sort_by(|a, b| {
            compare(
                &bytemuck::pod_read_unaligned(a),
                &bytemuck::pod_read_unaligned(b),
            )
        })
    }

    pub fn sort(&mut self) -> Result<()>
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    pub fn ensure_capacity(&mut self, capacity: usize) -> Result<()> {
        self.inner.ensure_capacity(capacity)
    }

    pub fn trim_to_size(&mut self) -> Result<()> {
        self.inner.trim_to_size()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.inner.iter().map(bytemuck::pod_read_unaligned)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    pub fn as_untyped(&self) -> &DynamicArray {
        &self.inner
    }

    pub fn into_untyped(self) -> DynamicArray {
        self.inner
    }
}

impl<T: Pod> TypedArray<T> {
    const WIDTH: usize = std::mem::size_of::<T>();

    fn wrap(inner: DynamicArray) -> TypedArray<T> {
        TypedArray {
            inner,
            _t: PhantomData,
        }
    }
}

impl<T> PartialEq for TypedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Pod + std::fmt::Debug> std::fmt::Debug for TypedArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
