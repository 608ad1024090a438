//! This crate contains common developer utilities for crates within the
//! `msqrt` system: the storage `Digit` type, bitwidth arithmetic, widening
//! digit primitives, and the `KernelError` type shared by every fallible
//! register operation. Most users should never have to interact with this
//! directly, everything needed is reexported from `msqrt_core` and `msqrt`.

// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
#![allow(clippy::needless_range_loop)]

mod error;
mod radix;
mod widening;

use core::num::NonZeroUsize;

pub use error::KernelError;
pub use radix::{char_to_digit, digit_to_char, radix_bits, MAX_RADIX_BITS};
pub use widening::{widen_add, widen_mul_add};

/// The basic element of the internal storage of a `Register`. This is the
/// unsigned integer of the architecture's registers.
pub type Digit = usize;

/// Bitwidth of a `Digit`
pub const BITS: usize = Digit::BITS as usize;

/// Maximum value of a `Digit`
pub const MAX: Digit = Digit::MAX;

/// Utility free function for converting a `usize` to a `NonZeroUsize`. This is
/// mainly intended for usage with literals and widths that are known to be
/// nonzero by construction, and shouldn't be used for fallible conversions.
///
/// # Panics
///
/// If `w == 0`, this function will panic.
#[inline]
#[track_caller]
#[must_use]
pub const fn bw(w: usize) -> NonZeroUsize {
    match NonZeroUsize::new(w) {
        None => {
            panic!("tried to construct an invalid bitwidth of 0 using the `msqrt::bw` function")
        }
        Some(w) => w,
    }
}

/// Returns the number of extra bits given `w`
#[inline]
pub const fn extra_u(w: usize) -> usize {
    w & (BITS - 1)
}

/// Returns the number of _whole_ digits (not including a digit with unused
/// bits) given `w`
#[inline]
pub const fn digits_u(w: usize) -> usize {
    w.wrapping_shr(BITS.trailing_zeros())
}

/// Returns the number of extra bits given `w`
#[inline]
pub const fn extra(w: NonZeroUsize) -> usize {
    extra_u(w.get())
}

/// Returns the number of _whole_ digits (not including a digit with unused
/// bits) given `w`
#[inline]
pub const fn digits(w: NonZeroUsize) -> usize {
    digits_u(w.get())
}

/// Returns the number of `Digit`s needed to represent `w`, including any
/// digit with unused bits
#[inline]
pub const fn total_digits(w: NonZeroUsize) -> usize {
    digits(w) + ((extra(w) != 0) as usize)
}

/// Returns `ceil(lhs / rhs)`
///
/// # Panics
///
/// If `rhs == 0`
#[inline]
pub const fn ceil_div(lhs: usize, rhs: usize) -> usize {
    let q = lhs / rhs;
    if lhs % rhs != 0 {
        q + 1
    } else {
        q
    }
}

#[test]
fn width_arithmetic() {
    assert_eq!(total_digits(bw(1)), 1);
    assert_eq!(total_digits(bw(BITS)), 1);
    assert_eq!(total_digits(bw(BITS + 1)), 2);
    assert_eq!(extra(bw(BITS + 3)), 3);
    assert_eq!(digits(bw(2 * BITS + 3)), 2);
    assert_eq!(ceil_div(11, 9), 2);
    assert_eq!(ceil_div(18, 9), 2);
    assert_eq!(ceil_div(0, 4), 0);
}
