//! Construction-time parameters of a [`DynamicArray`](crate::DynamicArray).

/// Configuration for a dynamic array.
///
/// Copied into every container built with it and inherited by containers derived
/// from it (clones and sub-lists). All values are immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Capacity (in elements) of a container created without an explicit capacity.
    ///
    /// Default: 2.
    pub default_capacity: usize,

    /// Upper bound on the size of the backing buffer in bytes.
    ///
    /// Every capacity change proves `capacity * element_width <= max_bytes` before
    /// it is committed. Default: `isize::MAX`, the largest allocation Rust permits.
    pub max_bytes: usize,

    /// Whether removals shrink the buffer once the length drops to a quarter of
    /// the capacity.
    ///
    /// Default: `true`.
    pub auto_shrink: bool,
}

impl ArrayConfig {
    /// Default capacity of an empty container, in elements.
    pub const DEFAULT_CAPACITY: usize = 2;

    /// Default byte limit of the backing buffer.
    pub const DEFAULT_MAX_BYTES: usize = isize::MAX as usize;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            default_capacity: Self::DEFAULT_CAPACITY,
            max_bytes: Self::DEFAULT_MAX_BYTES,
            auto_shrink: true,
        }
    }

    pub fn with_default_capacity(mut self, default_capacity: usize) -> Self {
        self.default_capacity = default_capacity;
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn with_auto_shrink(mut self, auto_shrink: bool) -> Self {
        self.auto_shrink = auto_shrink;
        self
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}
