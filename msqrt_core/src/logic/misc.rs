use msqrt_internals::*;

use crate::Register;

/// # Miscellaneous
impl Register {
    /// Returns the number of trailing zero bits, or `self.bw()` if `self` is
    /// zero
    pub fn tz(&self) -> usize {
        for (i, x) in self.as_slice().iter().enumerate() {
            if *x != 0 {
                return (i * BITS) + (x.trailing_zeros() as usize)
            }
        }
        self.bw()
    }

    /// Returns the number of leading zero bits of the storage, independent of
    /// sign mode
    pub fn lz(&self) -> usize {
        self.bw() - self.significant_bits()
    }

    /// Returns the position of the highest set bit plus one, or zero if
    /// `self` is zero. This is the width a normalized copy of the value needs.
    pub fn significant_bits(&self) -> usize {
        for (i, x) in self.as_slice().iter().enumerate().rev() {
            if *x != 0 {
                return (i * BITS) + (BITS - (x.leading_zeros() as usize))
            }
        }
        0
    }

    /// Returns the number of set bits
    pub fn count_ones(&self) -> usize {
        self.as_slice()
            .iter()
            .map(|x| x.count_ones() as usize)
            .sum()
    }

    /// If `self` is signed and holds the most negative value
    pub fn is_imin(&self) -> bool {
        self.is_negative() && (self.count_ones() == 1)
    }

    /// Shifts the bits up until the highest set bit lands on the most
    /// significant bit, returning the shift amount. A zero register is left
    /// alone and returns 0. No bits are lost, so the flags are not affected,
    /// but a signed register will read as negative afterwards.
    pub fn normalize(&mut self) -> usize {
        if self.is_zero() {
            return 0
        }
        let s = self.lz();
        self.raw_shl(s);
        s
    }

    /// Returns the value of `self` as an `f64`, rounded toward zero on the
    /// magnitude. Only meant for rough displays of wide registers.
    pub fn approximate_value(&self) -> f64 {
        let mag = self.absolute();
        let sig = mag.significant_bits();
        // 64 significant bits are plenty for a 53 bit mantissa
        let low = sig.saturating_sub(64);
        let mut top = 0u64;
        for i in (low..sig).rev() {
            top = (top << 1) | (mag.bit(i) as u64);
        }
        let scale = i32::try_from(low).unwrap_or(i32::MAX);
        let res = (top as f64) * 2f64.powi(scale);
        if self.is_negative() {
            -res
        } else {
            res
        }
    }
}
