//! Fixed-width packing of integer sequences.
//!
//! Element `i` occupies bits `[i * width, (i + 1) * width)` of the buffer,
//! most significant bit first.

use crate::{
    errors::{BitsError, Result},
    mask::rmask,
    range::{BitRange, check_value, check_width},
    word::{Word, bit_capacity},
    writer::{MAX_VALUE_BITS, read_unchecked, write_unchecked},
};

/// Packs `elements` into `dest`, each taking exactly `bits_per_element` bits.
///
/// Works for any unsigned element type (and `bool`). The width, the buffer
/// capacity and every element are validated before the first write, so a
/// failing call leaves `dest` unchanged.
pub fn pack_fixed_width<W, E>(dest: &mut [W], bits_per_element: usize, elements: &[E]) -> Result<()>
where
    W: Word,
    E: Copy + Into<u64>,
{
    check_width(bits_per_element, MAX_VALUE_BITS)?;
    packed_range(elements.len(), bits_per_element).check(bit_capacity(dest))?;

    for &element in elements {
        check_value(element.into(), bits_per_element)?;
    }

    log::trace!(
        "pack {} elements of {} bits into {} words",
        elements.len(),
        bits_per_element,
        dest.len()
    );

    for (i, &element) in elements.iter().enumerate() {
        write_unchecked(dest, i * bits_per_element, bits_per_element, element.into());
    }

    Ok(())
}

/// Reads `out.len()` consecutive `bits_per_element`-bit values from the start of `source`.
///
/// Fails with `ValueOutOfRange`, before writing anything, if `E` cannot hold
/// every `bits_per_element`-bit value.
pub fn unpack_fixed_width<W, E>(source: &[W], bits_per_element: usize, out: &mut [E]) -> Result<()>
where
    W: Word,
    E: TryFrom<u64>,
{
    check_width(bits_per_element, MAX_VALUE_BITS)?;
    packed_range(out.len(), bits_per_element).check(bit_capacity(source))?;

    // Integer conversions accept a contiguous range from zero, so the widest
    // value decides for all of them.
    let widest = rmask::<u64>(bits_per_element);
    if !out.is_empty() && E::try_from(widest).is_err() {
        return Err(element_overflow::<E>(widest));
    }

    for (i, slot) in out.iter_mut().enumerate() {
        let value = read_unchecked(source, i * bits_per_element, bits_per_element);
        *slot = E::try_from(value).map_err(|_| element_overflow::<E>(value))?;
    }

    Ok(())
}

fn element_overflow<E>(value: u64) -> BitsError {
    BitsError::ValueOutOfRange {
        value,
        width: size_of::<E>() * 8,
    }
}

/// Bit range covered by `count` elements, saturating so oversize requests fail the bounds check.
fn packed_range(count: usize, bits_per_element: usize) -> BitRange {
    BitRange::new(0, count.saturating_mul(bits_per_element))
}
