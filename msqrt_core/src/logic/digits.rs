use msqrt_internals::*;
use smallvec::SmallVec;

use crate::{DigitList, Register};

/// # Digit decomposition and rendering
impl Register {
    /// Splits the magnitude of `self` into big endian digits of
    /// `bits_per_digit` bits each. There are always
    /// `ceil(self.bw() / bits_per_digit)` digits, the most significant one
    /// being zero padded.
    ///
    /// ```
    /// use msqrt_core::{bw, Register};
    ///
    /// let r = Register::from_u128(bw(12), 0o7153);
    /// let list = r.to_digit_list(3).unwrap();
    /// assert_eq!(list.count(), 4);
    /// assert_eq!(list.digit(1), Some(7));
    /// assert_eq!(list.as_slice(), &[7, 1, 5, 3]);
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidDigitWidth` if `bits_per_digit` is not in
    /// `1..=MAX_RADIX_BITS`
    pub fn to_digit_list(&self, bits_per_digit: usize) -> Result<DigitList, KernelError> {
        if (bits_per_digit == 0) || (bits_per_digit > MAX_RADIX_BITS) {
            return Err(KernelError::InvalidDigitWidth(bits_per_digit))
        }
        let mag = self.absolute();
        let w = mag.bw();
        let count = ceil_div(w, bits_per_digit);
        let mut digits = SmallVec::with_capacity(count);
        for k in (0..count).rev() {
            let lo = k * bits_per_digit;
            let hi = (lo + bits_per_digit).min(w);
            let mut digit = 0u32;
            for i in (lo..hi).rev() {
                digit = (digit << 1) | (mag.bit(i) as u32);
            }
            digits.push(digit);
        }
        Ok(DigitList::from_parts(bits_per_digit, digits))
    }

    /// Renders the magnitude of `self` in a power of two `radix`. Radices up to
    /// 16 use one character per digit. Larger radices write each digit as a
    /// zero padded decimal group, 2 characters wide for radices 32 and 64 and
    /// 3 characters wide above that, separated by `|`. Leading zero digits are
    /// kept, see [trim_radix_string] for removing them.
    ///
    /// ```
    /// use msqrt_core::{bw, Register};
    ///
    /// let r = Register::from_u128(bw(16), 0xbeef);
    /// assert_eq!(r.to_string_radix(16).unwrap(), "BEEF");
    /// let r = Register::from_u128(bw(18), 3 * 512 + 77);
    /// assert_eq!(r.to_string_radix(512).unwrap(), "003|077");
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidRadix` if `radix` is not a power of two in `2..=512`
    pub fn to_string_radix(&self, radix: u32) -> Result<String, KernelError> {
        let bits_per_digit = radix_bits(radix)?;
        let list = self.to_digit_list(bits_per_digit)?;
        if bits_per_digit <= 4 {
            let mut s = String::with_capacity(list.count());
            for digit in list.iter() {
                s.push(digit_to_char(digit).ok_or(KernelError::InvalidChar)?);
            }
            return Ok(s)
        }
        let group = if bits_per_digit >= 7 { 3 } else { 2 };
        let groups: Vec<String> = list
            .iter()
            .map(|digit| format!("{digit:0group$}"))
            .collect();
        Ok(groups.join("|"))
    }
}

/// Removes leading zero digits and `|` separators from a string produced by
/// [Register::to_string_radix]. A string of only zeros becomes `"0"`.
pub fn trim_radix_string(s: &str) -> &str {
    let trimmed = s.trim_start_matches(|c| (c == '0') || (c == '|'));
    if trimmed.is_empty() {
        if s.is_empty() {
            s
        } else {
            "0"
        }
    } else {
        trimmed
    }
}
