use msqrt_internals::*;

use crate::{KernelError, Register};

/// # Multiplication
impl Register {
    /// Multiply-assigns `lhs * rhs` to `self`, overwriting all of its bits.
    ///
    /// This is a schoolbook multiplication of the magnitudes of `lhs` and
    /// `rhs`, with the sign reapplied by negation afterwards if the operand
    /// signs differ. `overflow` is latched if the exact product does not fit
    /// in the range of `self`, in which case the low bits are kept.
    ///
    /// # Errors
    ///
    /// `NegativeIntoUnsigned` if the product is negative and `self` is
    /// unsigned
    pub fn multiply(&mut self, lhs: &Register, rhs: &Register) -> Result<(), KernelError> {
        let negative = lhs.is_negative() != rhs.is_negative();
        if negative && !self.is_signed() {
            return Err(KernelError::NegativeIntoUnsigned)
        }
        let lhs = lhs.absolute();
        let rhs = rhs.absolute();
        let mut product = Register::zero(bw((lhs.len() + rhs.len()) * BITS));
        {
            let rhs_len = rhs.len();
            let prod = product.as_mut_slice();
            for (i, x) in lhs.as_slice().iter().enumerate() {
                if *x == 0 {
                    continue
                }
                let mut carry = 0;
                for (j, y) in rhs.as_slice().iter().enumerate() {
                    let tmp0 = widen_mul_add(*x, *y, carry);
                    let tmp1 = widen_add(prod[i + j], tmp0.0, 0);
                    prod[i + j] = tmp1.0;
                    carry = tmp0.1 + tmp1.1;
                }
                prod[i + rhs_len] = carry;
            }
        }
        let w = self.bw();
        let sig = product.significant_bits();
        let lost = if !self.is_signed() {
            sig > w
        } else if negative {
            // the magnitude of the most negative value is `1 << (w - 1)`
            (sig > w) || ((sig == w) && (product.count_ones() != 1))
        } else {
            sig >= w
        };
        self.copy_bits_from(&product);
        if negative {
            self.wrapping_neg_assign();
        }
        self.latch_overflow(lost);
        Ok(())
    }
}
