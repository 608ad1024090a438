use msqrt_internals::*;

use crate::Register;

/// # Bitwise
impl Register {
    /// Zero-assigns. Flags are not affected.
    pub fn zero_assign(&mut self) {
        for x in self.as_mut_slice() {
            *x = 0;
        }
    }

    /// Not-assigns, inverting every bit. This is independent of sign mode, and
    /// flags are not affected.
    pub fn not_assign(&mut self) {
        for x in self.as_mut_slice() {
            *x = !*x;
        }
        self.clear_unused_bits();
    }

    /// Sets the bits in `from..self.bw()` to `bit`
    pub(crate) fn fill_high(&mut self, from: usize, bit: bool) {
        let w = self.bw();
        if from >= w {
            return
        }
        let first = digits_u(from);
        let sub = extra_u(from);
        let raw = self.as_mut_slice();
        if bit {
            raw[first] |= MAX << sub;
            for x in &mut raw[(first + 1)..] {
                *x = MAX;
            }
        } else {
            raw[first] &= !(MAX << sub);
            for x in &mut raw[(first + 1)..] {
                *x = 0;
            }
        }
        self.clear_unused_bits();
    }
}
