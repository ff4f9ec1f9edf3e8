//! Bit range copies between word buffers.
//!
//! A range is moved in chunks: each chunk is the longest span that stays
//! inside one source word and one destination word. A chunk is read in full
//! before any destination bit it covers is written.

use crate::{
    errors::Result,
    mask::{lmask, span_mask},
    range::BitRange,
    word::{Word, bit_capacity},
};

/// Copies `length` bits starting at `src_start` in `source` to `dst_start` in `dest`.
///
/// Bits of `dest` outside the target range are preserved. Both ranges are
/// checked before anything is written.
pub fn copy_range<W: Word>(
    source: &[W],
    src_start: usize,
    length: usize,
    dest: &mut [W],
    dst_start: usize,
) -> Result<()> {
    BitRange::new(src_start, length).check(bit_capacity(source))?;
    BitRange::new(dst_start, length).check(bit_capacity(dest))?;

    log::trace!(
        "copy {} bits from {} to {} ({}-bit words)",
        length,
        src_start,
        dst_start,
        W::BITS
    );

    for chunk in Chunks::forward(src_start, dst_start, length, W::BITS, W::BITS) {
        let bits = chunk.read(source);
        chunk.write(dest, bits);
    }

    Ok(())
}

/// Copies `length` bits starting at `pos` in `source` to the start of `dest`.
pub fn get_bits<W: Word>(source: &[W], pos: usize, length: usize, dest: &mut [W]) -> Result<()> {
    copy_range(source, pos, length, dest, 0)
}

/// Copies `length` bits from `src_start` to `dst_start` within one buffer.
///
/// The two ranges may overlap; the result is as if the source range had been
/// copied out to a scratch buffer first.
pub fn copy_within<W: Word>(
    buffer: &mut [W],
    src_start: usize,
    length: usize,
    dst_start: usize,
) -> Result<()> {
    let capacity = bit_capacity(buffer);
    BitRange::new(src_start, length).check(capacity)?;
    BitRange::new(dst_start, length).check(capacity)?;

    log::trace!(
        "copy {} bits within buffer from {} to {}",
        length,
        src_start,
        dst_start
    );

    let chunks = if dst_start > src_start {
        Chunks::backward(src_start, dst_start, length, W::BITS, W::BITS)
    } else {
        Chunks::forward(src_start, dst_start, length, W::BITS, W::BITS)
    };

    for chunk in chunks {
        let bits = chunk.read(buffer);
        chunk.write(buffer, bits);
    }

    Ok(())
}

/// One step of a range transfer: `len` bits at `src` copied to `dst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Chunk {
    pub(crate) src: usize,
    pub(crate) dst: usize,
    pub(crate) len: usize,
}

impl Chunk {
    /// Reads the chunk from `source`, left-justified in the returned word.
    #[inline]
    pub(crate) fn read<W: Word>(&self, source: &[W]) -> W {
        let word = source[self.src / W::BITS];
        word.shl_or_zero(self.src % W::BITS) & lmask(self.len)
    }

    /// Writes left-justified `bits` over the chunk's destination span.
    #[inline]
    pub(crate) fn write<W: Word>(&self, dest: &mut [W], bits: W) {
        let offset = self.dst % W::BITS;
        let mask = span_mask::<W>(offset, self.len);
        let word = &mut dest[self.dst / W::BITS];
        *word = (*word & !mask) | (bits.shr_or_zero(offset) & mask);
    }
}

/// Splits a transfer into [Chunk]s, front-to-back or back-to-front.
///
/// Source and destination are cut at their own unit widths, so a transfer
/// between a `u64` register and a buffer of narrower words splits the same
/// way as one between two buffers.
pub(crate) struct Chunks {
    src: usize,
    dst: usize,
    remaining: usize,
    src_width: usize,
    dst_width: usize,
    reverse: bool,
}

impl Chunks {
    pub(crate) fn forward(
        src: usize,
        dst: usize,
        len: usize,
        src_width: usize,
        dst_width: usize,
    ) -> Self {
        Chunks {
            src,
            dst,
            remaining: len,
            src_width,
            dst_width,
            reverse: false,
        }
    }

    /// `src` and `dst` are still the range starts; iteration begins at the ends.
    pub(crate) fn backward(
        src: usize,
        dst: usize,
        len: usize,
        src_width: usize,
        dst_width: usize,
    ) -> Self {
        Chunks {
            src: src + len,
            dst: dst + len,
            remaining: len,
            src_width,
            dst_width,
            reverse: true,
        }
    }
}

impl Iterator for Chunks {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.remaining == 0 {
            return None;
        }

        if self.reverse {
            // Bits available below an end position within its unit.
            let tail = |end: usize, width: usize| match end % width {
                0 => width,
                n => n,
            };
            let len = tail(self.src, self.src_width)
                .min(tail(self.dst, self.dst_width))
                .min(self.remaining);

            self.src -= len;
            self.dst -= len;
            self.remaining -= len;

            Some(Chunk {
                src: self.src,
                dst: self.dst,
                len,
            })
        } else {
            let len = (self.src_width - self.src % self.src_width)
                .min(self.dst_width - self.dst % self.dst_width)
                .min(self.remaining);

            let chunk = Chunk {
                src: self.src,
                dst: self.dst,
                len,
            };

            self.src += len;
            self.dst += len;
            self.remaining -= len;

            Some(chunk)
        }
    }
}
