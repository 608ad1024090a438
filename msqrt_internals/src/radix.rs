//! Power-of-two radix helpers used by register rendering and parsing

use crate::KernelError;

/// The widest digit a `DigitList` can hold
pub const MAX_RADIX_BITS: usize = 32;

/// Returns `log2(radix)` if `radix` is a power of two in `2..=512`, the
/// radices that registers can be rendered in.
pub const fn radix_bits(radix: u32) -> Result<usize, KernelError> {
    if radix < 2 || radix > 512 || !radix.is_power_of_two() {
        return Err(KernelError::InvalidRadix(radix))
    }
    Ok(radix.trailing_zeros() as usize)
}

/// Converts a digit below 36 into `0..=9` or `A..=Z`
pub const fn digit_to_char(digit: u32) -> Option<char> {
    match digit {
        0..=9 => Some((b'0' + digit as u8) as char),
        10..=35 => Some((b'A' + (digit - 10) as u8) as char),
        _ => None,
    }
}

/// Converts `0..=9`, `a..=z`, or `A..=Z` into its digit value. Returns
/// `InvalidChar` if the value is not below `radix`.
pub const fn char_to_digit(c: u8, radix: u32) -> Result<u32, KernelError> {
    let val: u32 = match c {
        b'0'..=b'9' => (c - b'0') as u32,
        b'a'..=b'z' => (c - b'a') as u32 + 10,
        b'A'..=b'Z' => (c - b'A') as u32 + 10,
        _ => return Err(KernelError::InvalidChar),
    };
    if val >= radix {
        return Err(KernelError::InvalidChar)
    }
    Ok(val)
}

#[test]
fn radix_helpers() {
    assert_eq!(radix_bits(2), Ok(1));
    assert_eq!(radix_bits(512), Ok(9));
    assert_eq!(radix_bits(10), Err(KernelError::InvalidRadix(10)));
    assert_eq!(radix_bits(1024), Err(KernelError::InvalidRadix(1024)));
    assert_eq!(digit_to_char(15), Some('F'));
    assert_eq!(char_to_digit(b'f', 16), Ok(15));
    assert_eq!(char_to_digit(b'g', 16), Err(KernelError::InvalidChar));
}
