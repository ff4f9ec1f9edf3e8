//! Reading and writing right-justified integer values at arbitrary bit positions.
//!
//! A value of `nb_bits` bits occupies `[pos, pos + nb_bits)` with its most
//! significant bit at `pos`. Values wider than the requested width are
//! rejected, never truncated.

use crate::{
    errors::Result,
    range::{BitRange, check_value, check_width},
    transfer::Chunks,
    word::{Word, bit_capacity},
};

/// Widest value accepted by [set_bits_from_right] and [get_bits_from_right].
pub const MAX_VALUE_BITS: usize = u64::BITS as usize;

/// Writes the low `nb_bits` of `value` at global bit `pos`, keeping every other bit.
///
/// Fails with `InvalidArgument` if `nb_bits > 64`, `ValueOutOfRange` if `value`
/// has bits set at or above `nb_bits`, and `OutOfRange` if the span leaves the
/// buffer. Nothing is written on failure.
pub fn set_bits_from_right<W: Word>(
    buffer: &mut [W],
    pos: usize,
    nb_bits: usize,
    value: u64,
) -> Result<()> {
    check_width(nb_bits, MAX_VALUE_BITS)?;
    check_value(value, nb_bits)?;
    BitRange::new(pos, nb_bits).check(bit_capacity(buffer))?;

    write_unchecked(buffer, pos, nb_bits, value);

    Ok(())
}

/// Reads `nb_bits` starting at global bit `pos` into the low bits of a `u64`.
pub fn get_bits_from_right<W: Word>(buffer: &[W], pos: usize, nb_bits: usize) -> Result<u64> {
    check_width(nb_bits, MAX_VALUE_BITS)?;
    BitRange::new(pos, nb_bits).check(bit_capacity(buffer))?;

    Ok(read_unchecked(buffer, pos, nb_bits))
}

/// Mask-clear-then-OR write of `value`, held MSB-first in a one-word `u64`
/// register, chunked against the buffer's words like any range transfer.
///
/// The caller has validated the width, the value and the range.
pub(crate) fn write_unchecked<W: Word>(buffer: &mut [W], pos: usize, nb_bits: usize, value: u64) {
    let register = [value];

    for chunk in Chunks::forward(MAX_VALUE_BITS - nb_bits, pos, nb_bits, MAX_VALUE_BITS, W::BITS) {
        let bits = chunk.read(&register).shr_or_zero(MAX_VALUE_BITS - W::BITS);
        chunk.write(buffer, W::from_u64(bits));
    }
}

/// Inverse of [write_unchecked]: the span lands right-justified in a `u64`.
pub(crate) fn read_unchecked<W: Word>(buffer: &[W], pos: usize, nb_bits: usize) -> u64 {
    let mut register = [0u64];

    for chunk in Chunks::forward(pos, MAX_VALUE_BITS - nb_bits, nb_bits, W::BITS, MAX_VALUE_BITS) {
        let bits = chunk.read(buffer).to_u64().shl_or_zero(MAX_VALUE_BITS - W::BITS);
        chunk.write(&mut register, bits);
    }

    register[0]
}
