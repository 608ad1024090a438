use msqrt_internals::*;

use crate::Register;

/// Whether [Register::add_shifted] adds or subtracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddSign {
    Add,
    Sub,
}

/// Add-assigns `rhs` with a carry-in to `lhs`, digitwise, discarding the
/// final carry
fn add_digits(lhs: &mut [Digit], rhs: &[Digit], cin: Digit) {
    let mut carry = cin;
    for (x, y) in lhs.iter_mut().zip(rhs.iter()) {
        let tmp = widen_add(*x, *y, carry);
        *x = tmp.0;
        carry = tmp.1;
    }
}

/// # Summation
impl Register {
    /// Increments the storage, wrapping
    pub(crate) fn inc_assign(&mut self) {
        for x in self.as_mut_slice() {
            match x.overflowing_add(1) {
                (v, false) => {
                    *x = v;
                    break
                }
                (v, true) => {
                    *x = v;
                }
            }
        }
        self.clear_unused_bits();
    }

    /// Two's complement negation of the storage, wrapping. The most negative
    /// value maps to itself.
    pub(crate) fn wrapping_neg_assign(&mut self) {
        self.not_assign();
        self.inc_assign();
    }

    /// Negate-assigns `self`. Negating the most negative value leaves it
    /// unchanged and latches `overflow`, negating zero gives zero.
    ///
    /// # Errors
    ///
    /// `Unsigned` if `self` is not signed
    pub fn negate(&mut self) -> Result<(), KernelError> {
        if !self.is_signed() {
            return Err(KernelError::Unsigned)
        }
        let imin = self.is_imin();
        self.wrapping_neg_assign();
        self.latch_overflow(imin);
        Ok(())
    }

    /// Returns a new unsigned register of the same width holding the magnitude
    /// of `self`. The magnitude of the most negative value is representable
    /// in the unsigned result. Flags are carried over.
    pub fn absolute(&self) -> Register {
        let mut res = self.clone();
        if self.is_negative() {
            res.wrapping_neg_assign();
        }
        res.set_signed(false);
        res
    }

    /// Adds (or subtracts, depending on `sign`) `addend << position` to
    /// `self`. Each operand is interpreted in its own sign mode, and the carry
    /// is propagated arbitrarily far beyond the width of `self`. The low
    /// `self.bw()` bits of the exact result are kept, and `overflow` is
    /// latched if the exact result is outside of the range representable by
    /// `self`.
    ///
    /// ```
    /// use msqrt_core::{bw, AddSign, Register};
    ///
    /// let mut w = Register::from_i128(bw(8), -100);
    /// let addend = Register::from_u128(bw(4), 0b1010);
    /// w.add_shifted(&addend, AddSign::Add, 3);
    /// assert_eq!(w.to_i128(), Some(-20));
    /// assert!(!w.overflow());
    /// // 127 + 1 is out of range for an `i8`
    /// let mut w = Register::from_i128(bw(8), 127);
    /// w.add_shifted(&Register::from_u128(bw(1), 1), AddSign::Add, 0);
    /// assert!(w.overflow());
    /// ```
    pub fn add_shifted(&mut self, addend: &Register, sign: AddSign, position: usize) {
        let w = self.bw();
        if position >= w {
            // the low bits are unchanged and any nonzero addend puts the
            // exact result out of range
            self.latch_overflow(!addend.is_zero());
            return
        }
        // wide enough to hold the exact result plus a sign bit
        let ext_w = bw(w.max(position + addend.bw()).saturating_add(2));
        let mut acc = self.resized(ext_w);
        let mut rhs = addend.resized(ext_w);
        rhs.raw_shl(position);
        match sign {
            AddSign::Add => add_digits(acc.as_mut_slice(), rhs.as_slice(), 0),
            AddSign::Sub => {
                rhs.not_assign();
                add_digits(acc.as_mut_slice(), rhs.as_slice(), 1)
            }
        }
        acc.clear_unused_bits();
        let extension = acc.msb();
        let top = if self.is_signed() { w - 1 } else { w };
        let lost = (!self.is_signed() && extension)
            || (top..ext_w.get()).any(|i| acc.bit(i) != extension);
        self.copy_bits_from(&acc);
        self.latch_overflow(lost);
    }

    /// Add-assigns `rhs`, see [Register::add_shifted]
    pub fn add_assign(&mut self, rhs: &Register) {
        self.add_shifted(rhs, AddSign::Add, 0)
    }

    /// Subtract-assigns `rhs`, see [Register::add_shifted]
    pub fn sub_assign(&mut self, rhs: &Register) {
        self.add_shifted(rhs, AddSign::Sub, 0)
    }
}
