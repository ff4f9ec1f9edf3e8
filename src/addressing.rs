//! Single-bit access by global bit index.
//!
//! Bits are addressed MSB-first: index 0 is the high bit of word 0, index
//! `W::BITS` is the high bit of word 1.

use crate::{
    errors::{BitsError, Result},
    word::{Word, bit_capacity},
};

/// Reads the bit at global `index`.
pub fn get_bit<W: Word>(buffer: &[W], index: usize) -> Result<bool> {
    let (word, bit) = locate(buffer, index)?;
    Ok(buffer[word] & bit != W::ZERO)
}

/// Sets or clears the bit at global `index`.
pub fn set_bit<W: Word>(buffer: &mut [W], index: usize, value: bool) -> Result<()> {
    let (word, bit) = locate(buffer, index)?;

    if value {
        buffer[word] |= bit;
    } else {
        buffer[word] &= !bit;
    }

    Ok(())
}

/// Word index and single-bit mask for a global bit index.
fn locate<W: Word>(buffer: &[W], index: usize) -> Result<(usize, W)> {
    let capacity = bit_capacity(buffer);
    if index >= capacity {
        return Err(BitsError::OutOfRange {
            start: index,
            len: 1,
            capacity,
        });
    }

    let offset = index % W::BITS;
    let bit = W::from_u64(1).shl_or_zero(W::BITS - 1 - offset);

    Ok((index / W::BITS, bit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_bit_msb_first() {
        let data = [0b1000_0001u8, 0b0001_0000];
        assert!(get_bit(&data, 0).unwrap());
        assert!(!get_bit(&data, 1).unwrap());
        assert!(get_bit(&data, 7).unwrap());
        assert!(get_bit(&data, 11).unwrap());
        assert!(!get_bit(&data, 12).unwrap());
    }

    #[test]
    fn test_get_bit_crosses_words() {
        let data = [0u16, 0x8000];
        assert!(get_bit(&data, 16).unwrap());
        assert!(!get_bit(&data, 15).unwrap());
    }

    #[test]
    fn test_get_bit_out_of_range() {
        let data = [0u32; 2];
        assert_eq!(
            get_bit(&data, 64).unwrap_err(),
            BitsError::OutOfRange {
                start: 64,
                len: 1,
                capacity: 64
            }
        );
        assert!(get_bit::<u8>(&[], 0).is_err());
    }

    #[test]
    fn test_set_bit() {
        let mut data = [0u16; 2];
        set_bit(&mut data, 3, true).unwrap();
        set_bit(&mut data, 31, true).unwrap();
        assert_eq!(data, [0x1000, 0x0001]);

        set_bit(&mut data, 3, false).unwrap();
        assert_eq!(data, [0, 1]);
    }

    #[test]
    fn test_set_bit_out_of_range() {
        let mut data = [0u8];
        assert!(set_bit(&mut data, 8, true).is_err());
        assert_eq!(data, [0]);
    }
}
