//! Bit ranges and the bounds check shared by every multi-bit operation.

use crate::errors::{BitsError, Result};

/// A contiguous span of `len` bits starting at global bit index `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitRange {
    pub start: usize,
    pub len: usize,
}

impl BitRange {
    pub fn new(start: usize, len: usize) -> Self {
        BitRange { start, len }
    }

    /// One past the last bit of the range, or `None` if it overflows `usize`.
    pub fn end(&self) -> Option<usize> {
        self.start.checked_add(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fails unless the whole range lies within `capacity` bits.
    pub fn check(&self, capacity: usize) -> Result<()> {
        if self.end().is_none_or(|end| end > capacity) {
            log::debug!(
                "bit range {}+{} rejected against {} bits",
                self.start,
                self.len,
                capacity
            );
            return Err(BitsError::OutOfRange {
                start: self.start,
                len: self.len,
                capacity,
            });
        }

        Ok(())
    }
}

/// Fails unless `width` is at most `max`.
pub(crate) fn check_width(width: usize, max: usize) -> Result<()> {
    if width > max {
        log::debug!("width {} rejected, limit {}", width, max);
        return Err(BitsError::InvalidArgument { width, max });
    }

    Ok(())
}

/// Fails if `value` has any set bit at or above `width`.
pub(crate) fn check_value(value: u64, width: usize) -> Result<()> {
    let excess = u32::try_from(width)
        .ok()
        .and_then(|w| value.checked_shr(w))
        .unwrap_or(0);

    if excess != 0 {
        log::debug!("value {:#x} rejected for width {}", value, width);
        return Err(BitsError::ValueOutOfRange { value, width });
    }

    Ok(())
}
