//! In-place shifting of a whole word buffer.

use crate::word::Word;

/// Direction of a buffer shift in global bit index terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShiftDirection {
    /// Toward lower indices: bit `i + k` moves to bit `i`.
    Left,
    /// Toward higher indices: bit `i` moves to bit `i + k`.
    Right,
}

/// Shifts the bit string held by `buffer` by `amount` bits.
///
/// Vacated bits are zero and bits shifted past either end are dropped. Any
/// `amount` is accepted; shifting by the buffer width or more clears it.
pub fn shift_in_place<W: Word>(buffer: &mut [W], amount: usize, direction: ShiftDirection) {
    let n = buffer.len();
    let whole = amount / W::BITS;
    let sub = amount % W::BITS;

    log::trace!(
        "shift {} words {:?} by {} ({} words + {} bits)",
        n,
        direction,
        amount,
        whole,
        sub
    );

    if whole >= n {
        buffer.fill(W::ZERO);
        return;
    }

    match direction {
        ShiftDirection::Left => {
            if whole > 0 {
                buffer.copy_within(whole.., 0);
                buffer[n - whole..].fill(W::ZERO);
            }

            if sub > 0 {
                for i in 0..n {
                    let carry = buffer.get(i + 1).copied().unwrap_or(W::ZERO);
                    buffer[i] = buffer[i].shl_or_zero(sub) | carry.shr_or_zero(W::BITS - sub);
                }
            }
        }
        ShiftDirection::Right => {
            if whole > 0 {
                buffer.copy_within(..n - whole, whole);
                buffer[..whole].fill(W::ZERO);
            }

            if sub > 0 {
                for i in (0..n).rev() {
                    let carry = if i > 0 { buffer[i - 1] } else { W::ZERO };
                    buffer[i] = buffer[i].shr_or_zero(sub) | carry.shl_or_zero(W::BITS - sub);
                }
            }
        }
    }
}
