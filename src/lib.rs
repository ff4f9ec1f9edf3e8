//! # wordbits
//!
//! Bit-exact primitives over caller-owned buffers of fixed-width words.
//!
//! A buffer is a `[W]` for any [word::Word] (`u8` through `u64`, `usize`)
//! holding one bit string, addressed MSB-first: bit 0 is the high bit of the
//! first word. Ranges may start at any bit and cross any number of word
//! boundaries. Nothing here allocates or keeps state between calls, and every
//! failing call leaves its destination untouched.
//!
//! ## Example
//!
//! ```
//! use wordbits::packer::pack_fixed_width;
//! use wordbits::shift::{ShiftDirection, shift_in_place};
//! use wordbits::transfer::get_bits;
//! use wordbits::writer::get_bits_from_right;
//!
//! let mut buf = [0u16; 2];
//! pack_fixed_width(&mut buf, 3, &[5u8, 5, 5]).unwrap();
//! assert_eq!(get_bits_from_right(&buf, 0, 9).unwrap(), 0b101_101_101);
//!
//! shift_in_place(&mut buf, 3, ShiftDirection::Left);
//! let mut out = [0u16];
//! get_bits(&buf, 0, 6, &mut out).unwrap();
//! assert_eq!(out, [0b101_101 << 10]);
//! ```

pub mod addressing;
pub mod errors;
pub mod mask;
pub mod packer;
pub mod range;
pub mod shift;
pub mod transfer;
pub mod word;
pub mod writer;

pub use errors::{BitsError, Result};
pub use range::BitRange;
pub use shift::ShiftDirection;
pub use word::Word;
