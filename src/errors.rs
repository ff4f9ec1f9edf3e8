//! Error types for word-buffer bit operations.
//!
//! Every variant is a precondition violation detected before the buffer is
//! touched, so an `Err` always means the destination is unchanged.

use thiserror::Error;

/// Errors produced by mask construction, bit addressing, range transfer and packing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitsError {
    /// A width argument (mask size, write width, element width) is above its limit.
    #[error("invalid width {width}: must be at most {max}")]
    InvalidArgument { width: usize, max: usize },

    /// Bit index or range reaches past the end of the addressed buffer.
    #[error("bit range of {len} bits at {start} exceeds buffer of {capacity} bits")]
    OutOfRange {
        start: usize,
        len: usize,
        capacity: usize,
    },

    /// A value has set bits at or above the requested width.
    #[error("value {value:#x} does not fit in {width} bits")]
    ValueOutOfRange { value: u64, width: usize },
}

/// Result alias for operations in this crate.
pub type Result<T> = std::result::Result<T, BitsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let err = BitsError::OutOfRange {
            start: 60,
            len: 8,
            capacity: 64,
        };
        assert_eq!(
            err.to_string(),
            "bit range of 8 bits at 60 exceeds buffer of 64 bits"
        );
    }

    #[test]
    fn test_display_value_out_of_range() {
        let err = BitsError::ValueOutOfRange {
            value: 0xa,
            width: 3,
        };
        assert_eq!(err.to_string(), "value 0xa does not fit in 3 bits");
    }
}
