//! Left- and right-justified masks within a single word.

use crate::{errors::Result, range::check_width, word::Word};

/// Word with the `n` most significant bits set. Fails if `n > W::BITS`.
pub fn left_mask<W: Word>(n: usize) -> Result<W> {
    check_width(n, W::BITS)?;
    Ok(lmask(n))
}

/// Word with the `n` least significant bits set. Fails if `n > W::BITS`.
pub fn right_mask<W: Word>(n: usize) -> Result<W> {
    check_width(n, W::BITS)?;
    Ok(rmask(n))
}

/// Unchecked [left_mask]; `n` must already be at most `W::BITS`.
#[inline]
pub(crate) fn lmask<W: Word>(n: usize) -> W {
    debug_assert!(n <= W::BITS);
    W::ALL.shl_or_zero(W::BITS - n)
}

/// Unchecked [right_mask]; `n` must already be at most `W::BITS`.
#[inline]
pub(crate) fn rmask<W: Word>(n: usize) -> W {
    debug_assert!(n <= W::BITS);
    W::ALL.shr_or_zero(W::BITS - n)
}

/// Mask covering `len` bits starting `offset` bits from the top of a word.
#[inline]
pub(crate) fn span_mask<W: Word>(offset: usize, len: usize) -> W {
    debug_assert!(offset + len <= W::BITS);
    lmask::<W>(len).shr_or_zero(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BitsError;

    #[test]
    fn test_sixteen_bit_masks() {
        assert_eq!(left_mask::<u16>(4).unwrap(), 0xf000);
        assert_eq!(right_mask::<u16>(4).unwrap(), 0x000f);
        assert_eq!(left_mask::<u16>(0).unwrap(), 0);
        assert_eq!(right_mask::<u16>(16).unwrap(), 0xffff);
    }

    #[test]
    fn test_left_mask_grows_from_top() {
        let mut expected = 0u32;
        for n in 0..=32 {
            assert_eq!(left_mask::<u32>(n).unwrap(), expected);
            expected = (expected >> 1) | 0x8000_0000;
        }
    }

    #[test]
    fn test_right_mask_grows_from_bottom() {
        let mut expected = 0u8;
        for n in 0..=8 {
            assert_eq!(right_mask::<u8>(n).unwrap(), expected);
            expected = (expected << 1) | 1;
        }
    }

    #[test]
    fn test_masks_complement() {
        for n in 0..=64 {
            let l = left_mask::<u64>(n).unwrap();
            let r = right_mask::<u64>(64 - n).unwrap();
            assert_eq!(l | r, u64::MAX);
            assert_eq!(l & r, 0);
            assert_eq!(l.count_ones() as usize, n);
        }
    }

    #[test]
    fn test_mask_too_wide() {
        assert_eq!(
            left_mask::<u16>(17).unwrap_err(),
            BitsError::InvalidArgument { width: 17, max: 16 }
        );
        assert!(right_mask::<u8>(9).is_err());
    }

    #[test]
    fn test_span_mask() {
        assert_eq!(span_mask::<u16>(4, 4), 0x0f00);
        assert_eq!(span_mask::<u16>(12, 4), 0x000f);
        assert_eq!(span_mask::<u16>(0, 16), 0xffff);
        assert_eq!(span_mask::<u16>(16, 0), 0);
    }
}
