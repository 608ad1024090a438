//! ## Basic Invariants
//!
//! - A `Register` has a nonzero bitwidth stored in a `NonZeroUsize`. A zero
//!   width register cannot be constructed, fallible constructors taking a
//!   plain `usize` return `KernelError::ZeroWidth` instead.
//! - Bits are stored in little endian order in a `Vec<Digit>`. The number of
//!   `Digit`s is the minimum needed to store all bits. If the bitwidth is not a
//!   multiple of `Digit::BITS`, the unused high bits of the last digit are kept
//!   zeroed.
//! - The `overflow` and `underflow` flags are sticky. They can only be set by
//!   operations and are cleared only by constructing a new register. `Clone`
//!   carries them over, `load`ing fresh bits into a register does not clear
//!   them.
//! - The sign mode decides whether the most significant bit is interpreted as
//!   a two's complement sign bit. It is a property of the storage element, not
//!   of the bits, and can be changed with [Register::set_signed].

use core::{fmt, num::NonZeroUsize};

use msqrt_internals::*;

/// An arbitrary width hardware register. See the [module level
/// documentation](crate) for the flag semantics.
///
/// Function names of the form `*_assign` denote an inplace operation where
/// `self` is used as an input before being reassigned the output, which is
/// how hardware registers are driven.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Register {
    raw: Vec<Digit>,
    bw: NonZeroUsize,
    signed: bool,
    overflow: bool,
    underflow: bool,
}

/// # Construction and basic access
impl Register {
    /// Creates an unsigned register of bitwidth `w` with all bits zero and
    /// clear flags
    pub fn zero(w: NonZeroUsize) -> Self {
        Self {
            raw: vec![0; total_digits(w)],
            bw: w,
            signed: false,
            overflow: false,
            underflow: false,
        }
    }

    /// Creates a signed register of bitwidth `w` with all bits zero and clear
    /// flags
    pub fn zero_signed(w: NonZeroUsize) -> Self {
        let mut res = Self::zero(w);
        res.signed = true;
        res
    }

    /// The same as [Register::zero] except that `w` is checked
    pub fn try_zero(w: usize) -> Result<Self, KernelError> {
        NonZeroUsize::new(w)
            .map(Self::zero)
            .ok_or(KernelError::ZeroWidth)
    }

    /// The same as [Register::zero_signed] except that `w` is checked
    pub fn try_zero_signed(w: usize) -> Result<Self, KernelError> {
        NonZeroUsize::new(w)
            .map(Self::zero_signed)
            .ok_or(KernelError::ZeroWidth)
    }

    /// Returns the bitwidth as a `NonZeroUsize`
    #[inline]
    pub fn nzbw(&self) -> NonZeroUsize {
        self.bw
    }

    /// Returns the bitwidth as a `usize`
    #[inline]
    pub fn bw(&self) -> usize {
        self.bw.get()
    }

    /// Returns the number of backing digits
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns the number of unused bits in the last digit subtracted from
    /// `Digit::BITS`, or zero if the bitwidth is a multiple of `Digit::BITS`
    #[inline]
    pub fn extra(&self) -> usize {
        extra(self.bw)
    }

    #[inline]
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Changes the sign mode. The bits and flags are left alone.
    #[inline]
    pub fn set_signed(&mut self, signed: bool) {
        self.signed = signed;
    }

    /// If a meaningful bit has been lost above the register since it was
    /// created
    #[inline]
    pub fn overflow(&self) -> bool {
        self.overflow
    }

    /// If a nonzero bit has been lost below the register since it was created
    #[inline]
    pub fn underflow(&self) -> bool {
        self.underflow
    }

    /// Latches the overflow flag if `lost`
    #[inline]
    pub(crate) fn latch_overflow(&mut self, lost: bool) {
        self.overflow |= lost;
    }

    /// Latches the underflow flag if `lost`
    #[inline]
    pub(crate) fn latch_underflow(&mut self, lost: bool) {
        self.underflow |= lost;
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Digit] {
        &self.raw
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Digit] {
        &mut self.raw
    }

    /// Zeroes the unused bits of the last digit
    #[inline]
    pub(crate) fn clear_unused_bits(&mut self) {
        let extra = self.extra();
        if extra != 0 {
            let last = self.raw.len() - 1;
            self.raw[last] &= MAX >> (BITS - extra);
        }
    }

    /// Returns bit `inx` without checking the index against the bitwidth
    /// beyond a debug assertion
    #[inline]
    pub(crate) fn bit(&self, inx: usize) -> bool {
        debug_assert!(inx < self.bw());
        (self.raw[digits_u(inx)] >> extra_u(inx)) & 1 != 0
    }

    /// Sets bit `inx` to `bit` without checking the index against the bitwidth
    /// beyond a debug assertion
    #[inline]
    pub(crate) fn set_bit(&mut self, inx: usize, bit: bool) {
        debug_assert!(inx < self.bw());
        let digit = &mut self.raw[digits_u(inx)];
        let mask = 1 << extra_u(inx);
        if bit {
            *digit |= mask;
        } else {
            *digit &= !mask;
        }
    }

    /// Returns bit `inx`, or `None` if `inx >= self.bw()`
    #[inline]
    pub fn get(&self, inx: usize) -> Option<bool> {
        if inx >= self.bw() {
            None
        } else {
            Some(self.bit(inx))
        }
    }

    /// Sets bit `inx` to `bit`, or returns `None` if `inx >= self.bw()`. This
    /// is a raw storage access, flags are not affected.
    #[inline]
    pub fn set(&mut self, inx: usize, bit: bool) -> Option<()> {
        if inx >= self.bw() {
            None
        } else {
            self.set_bit(inx, bit);
            Some(())
        }
    }

    /// Returns the least significant bit
    #[inline]
    pub fn lsb(&self) -> bool {
        self.raw[0] & 1 != 0
    }

    /// Returns the most significant bit
    #[inline]
    pub fn msb(&self) -> bool {
        self.bit(self.bw() - 1)
    }

    /// If `self` is signed and its sign bit is set. This is also the value of
    /// every bit that conceptually lies above the register.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.signed && self.msb()
    }

    /// Copies the bits of `rhs` into the same positions of `self`, truncating
    /// or zero extending. No sign extension, no flags.
    pub(crate) fn copy_bits_from(&mut self, rhs: &Register) {
        let len = self.len().min(rhs.len());
        self.raw[..len].copy_from_slice(&rhs.raw[..len]);
        for x in &mut self.raw[len..] {
            *x = 0;
        }
        self.clear_unused_bits();
    }

    /// Lowercase hexadecimal of the bits viewed as an unsigned integer, without
    /// leading zeros
    pub(crate) fn hex_string(&self) -> String {
        let nibbles = ceil_div(self.bw(), 4);
        let mut s = String::with_capacity(nibbles);
        let mut leading = true;
        for i in (0..nibbles).rev() {
            let mut nibble = 0u32;
            for j in (0..4).rev() {
                let inx = i * 4 + j;
                nibble <<= 1;
                if inx < self.bw() && self.bit(inx) {
                    nibble |= 1;
                }
            }
            if leading && nibble == 0 && i != 0 {
                continue
            }
            leading = false;
            s.push(char::from_digit(nibble, 16).unwrap_or('?'));
        }
        s
    }
}

impl fmt::Debug for Register {
    /// Hexadecimal bits with a `_u{bw}` or `_i{bw}` suffix, followed by any
    /// latched flags
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{}_{}{}",
            self.hex_string(),
            if self.signed { 'i' } else { 'u' },
            self.bw()
        )?;
        match (self.overflow, self.underflow) {
            (false, false) => Ok(()),
            (true, false) => write!(f, " (overflow)"),
            (false, true) => write!(f, " (underflow)"),
            (true, true) => write!(f, " (overflow, underflow)"),
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::LowerHex for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_string())
    }
}

impl fmt::Binary for Register {
    /// All `bw` bits, most significant first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = (0..self.bw())
            .rev()
            .map(|i| if self.bit(i) { '1' } else { '0' })
            .collect();
        f.pad_integral(true, "0b", &s)
    }
}
