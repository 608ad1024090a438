use core::num::NonZeroUsize;

use crate::Register;

/// # Primitive conversions
///
/// These are used to feed constants into a register and to check results
/// against native integer arithmetic. They are not used by the recurrence
/// datapath itself.
impl Register {
    /// Creates an unsigned register of width `w` holding the low bits of `x`.
    /// `overflow` is latched if `x` does not fit.
    pub fn from_u128(w: NonZeroUsize, x: u128) -> Register {
        let mut res = Register::zero(w);
        let mut x = x;
        let mut i = 0;
        while x != 0 {
            if i >= res.bw() {
                res.latch_overflow(true);
                break
            }
            res.set_bit(i, (x & 1) != 0);
            x >>= 1;
            i += 1;
        }
        res
    }

    /// Creates a signed register of width `w` holding the low bits of the
    /// two's complement `x`. `overflow` is latched if `x` is outside of the
    /// signed range of `w` bits.
    pub fn from_i128(w: NonZeroUsize, x: i128) -> Register {
        let mut res = Register::zero_signed(w);
        let w = w.get();
        for i in 0..w {
            let bit = if i < 128 { ((x >> i) & 1) != 0 } else { x < 0 };
            res.set_bit(i, bit);
        }
        let fits = if w >= 128 {
            true
        } else {
            let min = -(1i128 << (w - 1));
            let max = (1i128 << (w - 1)) - 1;
            (min <= x) && (x <= max)
        };
        res.latch_overflow(!fits);
        res
    }

    /// Returns the value of `self` as a `u128`, or `None` if it is negative or
    /// too large
    pub fn to_u128(&self) -> Option<u128> {
        if self.is_negative() || (self.significant_bits() > 128) {
            return None
        }
        let mut res = 0u128;
        for i in (0..self.significant_bits()).rev() {
            res = (res << 1) | (self.bit(i) as u128);
        }
        Some(res)
    }

    /// Returns the value of `self` as an `i128`, or `None` if it does not fit
    pub fn to_i128(&self) -> Option<i128> {
        if self.is_negative() {
            // the magnitude of the most negative `i128` is `1 << 127`
            let mag = self.absolute().to_u128()?;
            if mag > (1u128 << 127) {
                None
            } else {
                Some((mag as i128).wrapping_neg())
            }
        } else {
            i128::try_from(self.to_u128()?).ok()
        }
    }
}
