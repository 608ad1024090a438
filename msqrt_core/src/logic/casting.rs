use core::num::NonZeroUsize;

use msqrt_internals::*;

use crate::Register;

/// # Loading and extracting bit fields
impl Register {
    /// Returns a copy of `self` resized to `w` bits, sign extended if `self` is
    /// negative and zero extended otherwise. The sign mode is kept, the flags
    /// are not.
    pub(crate) fn resized(&self, w: NonZeroUsize) -> Register {
        let mut res = if self.is_signed() {
            Register::zero_signed(w)
        } else {
            Register::zero(w)
        };
        res.copy_bits_from(self);
        if self.is_negative() {
            res.fill_high(self.bw(), true);
        }
        res
    }

    /// Load-assigns the bits of `src` into `self` starting at bit `position`.
    ///
    /// Bits of `src` that land at or beyond `self.bw()` must equal the sign
    /// extension of `self` (its sign bit if signed, else zero). The first one
    /// that does not latches `overflow` and stops the copy there. All bits
    /// that landed inside `self` have been written by then.
    ///
    /// # Errors
    ///
    /// `SignMismatch` if `self` and `src` do not have the same sign mode
    pub fn load(&mut self, src: &Register, position: usize) -> Result<(), KernelError> {
        if self.is_signed() != src.is_signed() {
            return Err(KernelError::SignMismatch)
        }
        let extension = self.is_negative();
        let w = self.bw();
        for j in 0..src.bw() {
            let bit = src.bit(j);
            match position.checked_add(j) {
                Some(i) if i < w => self.set_bit(i, bit),
                _ => {
                    if bit != extension {
                        self.latch_overflow(true);
                        break
                    }
                }
            }
        }
        Ok(())
    }

    /// Load-assigns the low `bitcount` bits of the two's complement literal
    /// `value` into `self` starting at bit `position`. This has the same
    /// contract as [Register::load], where the literal counts as negative
    /// only if `self` is signed and `value < 0`.
    ///
    /// # Errors
    ///
    /// `BitcountTooLarge` if `bitcount > 64`
    pub fn load_constant(
        &mut self,
        value: i64,
        position: usize,
        bitcount: usize,
    ) -> Result<(), KernelError> {
        if bitcount > 64 {
            return Err(KernelError::BitcountTooLarge(bitcount))
        }
        let extension = self.is_signed() && (value < 0);
        let w = self.bw();
        for k in 0..bitcount {
            let bit = ((value >> k) & 1) != 0;
            match position.checked_add(k) {
                Some(i) if i < w => self.set_bit(i, bit),
                _ => {
                    if bit != extension {
                        self.latch_overflow(true);
                        break
                    }
                }
            }
        }
        Ok(())
    }

    /// Extract-assigns a window of `src` into `self`: bit `j` of `self`
    /// becomes bit `position + j` of `src`. Positions below zero read as zero,
    /// positions at or above `src.bw()` read as the sign extension of `src`.
    /// The flags of `self` are not affected, and `self` may be wider than
    /// `src`.
    pub fn extract_from(&mut self, src: &Register, position: isize) {
        let extension = src.is_negative();
        let src_w = src.bw();
        for j in 0..self.bw() {
            let bit = match position.checked_add(j as isize) {
                Some(i) if i < 0 => false,
                Some(i) if (i as usize) < src_w => src.bit(i as usize),
                _ => extension,
            };
            self.set_bit(j, bit);
        }
    }
}
