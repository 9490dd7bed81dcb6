//! A growable array of fixed-width elements with overflow-checked capacity arithmetic.
//!
//! [`DynamicArray`] stores type-erased elements, each exactly `element_width` bytes,
//! in one contiguous buffer. It grows by doubling (falling back to linear growth up to
//! the byte limit when doubling would overflow) and shrinks to half its capacity once
//! a removal leaves it a quarter full.
//!
//! [`TypedArray`] is the same container with the width fixed by a `bytemuck::Pod`
//! type parameter.
//!
//! All failures are reported through [`Result`]; no operation panics on bad input or
//! aborts on allocation failure, and a failed operation leaves the container as it
//! was.

pub mod array;
mod bulk;
pub mod capacity;
pub mod config;
pub mod typed;

#[cfg(test)]
mod tests;

pub use array::DynamicArray;
pub use config::ArrayConfig;
pub use dynarr_common::{Error, ErrorCategory, ErrorKind, Result};
pub use typed::TypedArray;
