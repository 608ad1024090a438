use smallvec::SmallVec;

/// A big endian list of fixed width unsigned digits, produced by
/// [Register::to_digit_list](crate::Register::to_digit_list) from the
/// magnitude of a register. Digits are accessed 1-indexed, most significant
/// first, which is the order a digit recurrence consumes them in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitList {
    bits_per_digit: usize,
    digits: SmallVec<[u32; 24]>,
}

impl DigitList {
    pub(crate) fn from_parts(bits_per_digit: usize, digits: SmallVec<[u32; 24]>) -> Self {
        Self {
            bits_per_digit,
            digits,
        }
    }

    /// The number of digits in the list
    #[inline]
    pub fn count(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn bits_per_digit(&self) -> usize {
        self.bits_per_digit
    }

    /// Returns digit `i` counted from 1 at the most significant end, or
    /// `None` if `i == 0 || i > self.count()`
    #[inline]
    pub fn digit(&self, i: usize) -> Option<u32> {
        if i == 0 {
            None
        } else {
            self.digits.get(i - 1).copied()
        }
    }

    /// Iterates over the digits most significant first
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.digits.iter().copied()
    }

    /// Returns the digits most significant first
    pub fn as_slice(&self) -> &[u32] {
        &self.digits
    }
}
