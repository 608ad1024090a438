//! Digit streams feeding the recurrences
//!
//! Both streams are read-only views of a `DigitList` that give the digit
//! consumed at a given iteration, with zeros past the end.

use msqrt_core::{DigitList, KernelError, Register};

/// The base `2^m` digits of the multiplier B, taken from a `processor` bit
/// register so that the digit count does not depend on the storage width of
/// B. Digit 1 seeds the residual, iteration `i` consumes digit `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplierStream {
    digits: DigitList,
}

impl MultiplierStream {
    pub fn new(b: &Register, processor: usize, m: usize) -> Result<Self, KernelError> {
        let mut fitted = Register::try_zero(processor)?;
        fitted.set_signed(b.is_signed());
        fitted.load(b, 0)?;
        fitted.set_signed(false);
        Ok(Self {
            digits: fitted.to_digit_list(m)?,
        })
    }

    /// The digit that seeds the residual before the first iteration
    pub fn first(&self) -> u32 {
        self.digits.digit(1).unwrap_or(0)
    }

    /// The digit consumed at `iteration`
    pub fn at(&self, iteration: usize) -> u32 {
        if iteration < self.digits.count() {
            self.digits.digit(iteration + 1).unwrap_or(0)
        } else {
            0
        }
    }

    pub fn count(&self) -> usize {
        self.digits.count()
    }

    pub fn digits(&self) -> &DigitList {
        &self.digits
    }
}

/// The base `2^m` digits of the padded root, iteration `i` consumes digit `i`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootStream {
    digits: DigitList,
}

impl RootStream {
    /// Loads `s` at bit `padding` of a `padded_width` register and splits it
    /// into digits
    pub fn new(
        s: &Register,
        padding: usize,
        padded_width: usize,
        m: usize,
    ) -> Result<Self, KernelError> {
        let mut padded = Register::try_zero(padded_width)?;
        padded.set_signed(s.is_signed());
        padded.load(s, padding)?;
        padded.set_signed(false);
        Ok(Self {
            digits: padded.to_digit_list(m)?,
        })
    }

    /// The digit consumed at `iteration`, which is 1-based
    pub fn at(&self, iteration: usize) -> u32 {
        self.digits.digit(iteration).unwrap_or(0)
    }

    pub fn count(&self) -> usize {
        self.digits.count()
    }

    pub fn digits(&self) -> &DigitList {
        &self.digits
    }
}
