use core::num::NonZeroUsize;

use msqrt_core::{bw, BitSource, Register};

use crate::{ConfigError, EngineError};

/// The operands of one square root run. `A` and `B` are chosen such that
/// `sqrt(A * B)` is the exact integer `S`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    a: Register,
    b: Register,
    s: Register,
}

impl Problem {
    /// Creates a problem from explicit operands. Nothing is checked, see
    /// [Problem::verify]. The operands may be stored in registers of any
    /// width, the engines only require their values to fit the processor.
    pub fn new(a: Register, b: Register, s: Register) -> Self {
        Self { a, b, s }
    }

    /// Builds `A = x^2`, `B = y^2`, and `S = x * y` in unsigned `processor`
    /// bit registers
    ///
    /// # Errors
    ///
    /// `OperandOverflow` if any of them does not fit
    pub fn from_seeds(
        processor: NonZeroUsize,
        x: &Register,
        y: &Register,
    ) -> Result<Self, EngineError> {
        let mut a = Register::zero(processor);
        let mut b = Register::zero(processor);
        let mut s = Register::zero(processor);
        a.multiply(x, x)?;
        b.multiply(y, y)?;
        s.multiply(x, y)?;
        if a.overflow() || b.overflow() || s.overflow() {
            return Err(EngineError::OperandOverflow)
        }
        Ok(Self { a, b, s })
    }

    /// Builds a problem from two random full width seeds of `processor / 2`
    /// bits
    ///
    /// # Errors
    ///
    /// `OddProcessor` if `processor` is odd or zero
    pub fn random<B: BitSource + ?Sized>(
        processor: usize,
        src: &mut B,
    ) -> Result<Self, EngineError> {
        if (processor == 0) || ((processor % 2) != 0) {
            return Err(ConfigError::OddProcessor(processor).into())
        }
        let half = bw(processor / 2);
        let mut x = Register::zero(half);
        let mut y = Register::zero(half);
        x.randomize_using(src)?;
        y.randomize_using(src)?;
        Self::from_seeds(bw(processor), &x, &y)
    }

    /// The multiplicand
    pub fn a(&self) -> &Register {
        &self.a
    }

    /// The multiplier
    pub fn b(&self) -> &Register {
        &self.b
    }

    /// The expected root
    pub fn s(&self) -> &Register {
        &self.s
    }

    /// Returns `A * B` in an unsigned register wide enough to never overflow
    pub fn product(&self) -> Result<Register, EngineError> {
        let mut p = Register::zero(bw(self.a.bw() + self.b.bw()));
        p.multiply(&self.a, &self.b)?;
        Ok(p)
    }

    /// Checks that `S` is the exact root of `A * B`, both through the
    /// integer square root of the product and by squaring `S`
    pub fn verify(&self) -> Result<bool, EngineError> {
        let product = self.product()?;
        let root = product.integer_sqrt()?;
        let mut square = Register::zero(bw(2 * self.s.bw()));
        square.multiply(&self.s, &self.s)?;
        Ok(root.compare(&self.s).is_eq() && square.compare(&product).is_eq())
    }

    /// Returns an error if any operand has set bits at or above `processor`
    pub(crate) fn check_width(&self, processor: usize) -> Result<(), EngineError> {
        for r in [&self.a, &self.b, &self.s] {
            if r.is_negative() || (r.significant_bits() > processor) {
                return Err(EngineError::OperandTooWide {
                    processor,
                    found: r.significant_bits(),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds() {
        let x = Register::from_u128(bw(8), 200);
        let y = Register::from_u128(bw(8), 131);
        let p = Problem::from_seeds(bw(16), &x, &y).unwrap();
        assert_eq!(p.a().to_u128(), Some(40000));
        assert_eq!(p.b().to_u128(), Some(17161));
        assert_eq!(p.s().to_u128(), Some(26200));
        assert!(p.verify().unwrap());
        assert_eq!(p.product().unwrap().to_u128(), Some(40000 * 17161));
        assert!(p.check_width(16).is_ok());
        assert!(p.check_width(15).is_err());

        let bad = Problem::new(p.a().clone(), p.b().clone(), Register::from_u128(bw(16), 26201));
        assert!(!bad.verify().unwrap());
        assert_eq!(
            Problem::from_seeds(bw(15), &x, &y),
            Err(EngineError::OperandOverflow)
        );
    }
}
