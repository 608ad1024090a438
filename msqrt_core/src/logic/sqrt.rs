use crate::{KernelError, Register};

/// # Integer square root
impl Register {
    /// Returns `floor(sqrt(self))` in a new unsigned register of the same
    /// width with clear flags.
    ///
    /// This is the digit-by-digit method: a trial bit starts at the highest
    /// even position, is moved down to the highest power of four not above the
    /// radicand, and then each step either subtracts `result + bit` from the
    /// remainder or not.
    ///
    /// ```
    /// use msqrt_core::{bw, Register};
    ///
    /// let r = Register::from_u128(bw(20), 1000);
    /// assert_eq!(r.integer_sqrt().unwrap().to_u128(), Some(31));
    /// ```
    ///
    /// # Errors
    ///
    /// `NegativeRadicand` if `self` is negative
    pub fn integer_sqrt(&self) -> Result<Register, KernelError> {
        if self.is_negative() {
            return Err(KernelError::NegativeRadicand)
        }
        let w = self.nzbw();
        let mut remainder = self.absolute();
        let mut result = Register::zero(w);
        let mut bit = Register::zero(w);
        bit.set_bit((w.get() - 1) & !1, true);
        while bit.compare(&remainder).is_gt() {
            bit.raw_shr(2, false);
        }
        let mut trial = Register::zero(w);
        while !bit.is_zero() {
            trial.copy_bits_from(&result);
            trial.add_assign(&bit);
            result.raw_shr(1, false);
            if remainder.compare(&trial).is_ge() {
                remainder.sub_assign(&trial);
                result.add_assign(&bit);
            }
            bit.raw_shr(2, false);
        }
        Ok(result)
    }
}
