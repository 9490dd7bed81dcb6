use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Coarse classification of the failure, see [`ErrorCategory`].
    pub fn category(&self) -> ErrorCategory {
        self.kind().category()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound)
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn width_mismatch(expected: usize, actual: usize) -> Error {
        ErrorKind::WidthMismatch { expected, actual }.into()
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Error {
        ErrorKind::IndexOutOfRange { index, len }.into()
    }

    pub fn invalid_range(start: usize, end: usize, len: usize) -> Error {
        ErrorKind::InvalidRange { start, end, len }.into()
    }

    pub fn capacity_overflow(capacity: usize, element_width: usize) -> Error {
        ErrorKind::CapacityOverflow {
            capacity,
            element_width,
        }
        .into()
    }

    pub fn allocation_failed(bytes: usize, source: TryReserveError) -> Error {
        ErrorKind::AllocationFailed { bytes, source }.into()
    }

    pub fn not_found() -> Error {
        ErrorKind::NotFound.into()
    }

    pub fn invalid_operation(name: impl Into<String>) -> Error {
        Error(ErrorKind::InvalidOperation { name: name.into() }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("element width mismatch: expected {expected} bytes, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid range {start}..{end} for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("capacity of {capacity} elements of {element_width} bytes exceeds the size limit")]
    CapacityOverflow {
        capacity: usize,
        element_width: usize,
    },

    #[error("failed to allocate {bytes} bytes: {source}")]
    AllocationFailed {
        bytes: usize,
        source: TryReserveError,
    },

    #[error("element not found")]
    NotFound,

    #[error("invalid operation {name}")]
    InvalidOperation { name: String },
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::InvalidArgument { .. } | ErrorKind::WidthMismatch { .. } => {
                ErrorCategory::InvalidArgument
            }
            ErrorKind::IndexOutOfRange { .. } | ErrorKind::InvalidRange { .. } => {
                ErrorCategory::OutOfRange
            }
            ErrorKind::CapacityOverflow { .. } | ErrorKind::AllocationFailed { .. } => {
                ErrorCategory::ResourceExhausted
            }
            ErrorKind::NotFound => ErrorCategory::NotFound,
            ErrorKind::InvalidOperation { .. } => ErrorCategory::InvalidOperation,
        }
    }
}

/// Coarse failure classes a caller typically branches on.
///
/// A failed call of any category leaves the container exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Degenerate argument or element width mismatch.
    InvalidArgument,
    /// Index or range outside the live elements.
    OutOfRange,
    /// Allocation failure or size arithmetic overflow.
    ResourceExhausted,
    /// Search or remove-by-value found no match.
    NotFound,
    /// Operation not meaningful in the current state.
    InvalidOperation,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
