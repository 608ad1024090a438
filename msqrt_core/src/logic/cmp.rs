use core::cmp::Ordering;

use crate::Register;

/// # Comparison
impl Register {
    /// If all bits are zero
    pub fn is_zero(&self) -> bool {
        self.as_slice().iter().all(|x| *x == 0)
    }

    /// Three way comparison of the bits of `self` against another bit source,
    /// both sides being sign extended to the wider of the two widths
    fn cmp_with(&self, rhs_neg: bool, rhs_w: usize, rhs_bit: impl Fn(usize) -> bool) -> Ordering {
        let lhs_neg = self.is_negative();
        if lhs_neg != rhs_neg {
            return if lhs_neg {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        let lhs_w = self.bw();
        for i in (0..lhs_w.max(rhs_w)).rev() {
            let lhs = if i < lhs_w { self.bit(i) } else { lhs_neg };
            let rhs = if i < rhs_w { rhs_bit(i) } else { rhs_neg };
            if lhs != rhs {
                return if lhs {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
        }
        Ordering::Equal
    }

    /// Compares the values of `self` and `rhs`, each interpreted in its own
    /// sign mode. Unsigned registers are always non-negative. The widths may
    /// differ.
    pub fn compare(&self, rhs: &Register) -> Ordering {
        self.cmp_with(rhs.is_negative(), rhs.bw(), |i| rhs.bit(i))
    }

    /// Compares the value of `self` against the constant `k`
    pub fn compare_i64(&self, k: i64) -> Ordering {
        self.cmp_with(k < 0, 64, |i| ((k >> i) & 1) != 0)
    }
}
