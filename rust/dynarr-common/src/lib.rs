//! Core definitions (error kinds and result helpers), relied upon by all dynarr-* crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorCategory, ErrorKind};
pub use result::Result;
