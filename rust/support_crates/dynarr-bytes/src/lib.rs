//! Byte storage for the dynarr containers.
//!
//! Unlike `Vec<u8>`, every operation of [`ByteVec`] that may allocate is fallible
//! and reports [`std::collections::TryReserveError`] instead of aborting, leaving
//! the buffer untouched on failure.

pub mod buffer;

pub use buffer::ByteVec;
