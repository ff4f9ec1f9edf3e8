//! Storage word types.
//!
//! A buffer is a `[W]` for some [Word] `W`. The word width fixes the unit of
//! masking and shifting; bit 0 of a buffer is the most significant bit of its
//! first word.

use core::fmt::Debug;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// An unsigned integer usable as the storage unit of a bit buffer.
///
/// This trait cannot be implemented outside this crate.
pub trait Word:
    Copy
    + Eq
    + Debug
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + seal::Sealed
{
    /// Width of the word in bits.
    const BITS: usize;
    /// The word with no bits set.
    const ZERO: Self;
    /// The word with every bit set.
    const ALL: Self;

    /// Truncates `value` to the low `BITS` bits.
    fn from_u64(value: u64) -> Self;

    /// Widens the word to a `u64`.
    fn to_u64(self) -> u64;

    /// `self << n`, or zero once `n >= BITS`.
    fn shl_or_zero(self, n: usize) -> Self;

    /// `self >> n`, or zero once `n >= BITS`.
    fn shr_or_zero(self, n: usize) -> Self;
}

macro_rules! word {
    ($($t:ty),+ $(,)?) => { $(
        impl Word for $t {
            const BITS: usize = <$t>::BITS as usize;
            const ZERO: Self = 0;
            const ALL: Self = !0;

            #[inline]
            fn from_u64(value: u64) -> Self {
                value as $t
            }

            #[inline]
            fn to_u64(self) -> u64 {
                self as u64
            }

            #[inline]
            fn shl_or_zero(self, n: usize) -> Self {
                u32::try_from(n)
                    .ok()
                    .and_then(|n| self.checked_shl(n))
                    .unwrap_or(0)
            }

            #[inline]
            fn shr_or_zero(self, n: usize) -> Self {
                u32::try_from(n)
                    .ok()
                    .and_then(|n| self.checked_shr(n))
                    .unwrap_or(0)
            }
        }
        impl seal::Sealed for $t {}
    )+ };
}

word!(u8, u16, u32, u64, usize);

/// Number of `W` words needed to hold `bits` bits.
pub fn words_for<W: Word>(bits: usize) -> usize {
    bits.div_ceil(W::BITS)
}

/// Total number of addressable bits in `buffer`.
#[inline]
pub fn bit_capacity<W: Word>(buffer: &[W]) -> usize {
    buffer.len() * W::BITS
}

mod seal {
    pub trait Sealed {}
}
