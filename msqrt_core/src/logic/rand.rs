use crate::{KernelError, Register};

/// A source of random bits. This is the only way registers consume
/// randomness, which keeps the kernel independent of any particular random
/// number generator.
pub trait BitSource {
    fn random_bit(&mut self) -> bool;
}

#[cfg(feature = "rand_support")]
impl<R: rand_core::RngCore + ?Sized> BitSource for R {
    /// Takes the most significant bit of `next_u32`, which is the better
    /// quality bit for most generators
    fn random_bit(&mut self) -> bool {
        (self.next_u32() >> 31) != 0
    }
}

/// # Random
impl Register {
    /// Randomly-assigns `self` with a value that uses its full width.
    ///
    /// Bits are drawn until two consecutive draws differ, the first of the
    /// pair being `prev`. A signed register gets `prev` as its sign bit and
    /// `!prev` below it, so the value is as far from zero as the sign allows.
    /// An unsigned register gets a set top bit, followed by a zero bit if
    /// `prev` is set. All remaining bits are drawn from `src`.
    ///
    /// # Errors
    ///
    /// `DegenerateSigned` if `self` is signed and has a width of 1
    pub fn randomize_using<B: BitSource + ?Sized>(
        &mut self,
        src: &mut B,
    ) -> Result<(), KernelError> {
        let w = self.bw();
        if self.is_signed() && (w < 2) {
            return Err(KernelError::DegenerateSigned)
        }
        let mut prev = src.random_bit();
        while src.random_bit() == prev {
            prev = src.random_bit();
        }
        let mut rest = w - 1;
        if self.is_signed() {
            self.set_bit(w - 1, prev);
            self.set_bit(w - 2, !prev);
            rest = w - 2;
        } else {
            self.set_bit(w - 1, true);
            if prev && (w >= 2) {
                self.set_bit(w - 2, false);
                rest = w - 2;
            }
        }
        for i in (0..rest).rev() {
            let bit = src.random_bit();
            self.set_bit(i, bit);
        }
        Ok(())
    }
}
