use msqrt_internals::*;

use crate::Register;

/// # Shifts
///
/// These are the register shifts of the recurrence datapath. They never fail,
/// lost bits are recorded in the flags instead.
impl Register {
    /// Logical left shift of the storage by `s` bits with zero fill, ignoring
    /// sign mode and flags
    pub(crate) fn raw_shl(&mut self, s: usize) {
        if s == 0 {
            return
        }
        if s >= self.bw() {
            self.zero_assign();
            return
        }
        let digit_s = digits_u(s);
        let bit_s = extra_u(s);
        let raw = self.as_mut_slice();
        for i in (0..raw.len()).rev() {
            let hi = if i >= digit_s { raw[i - digit_s] << bit_s } else { 0 };
            let lo = if (bit_s != 0) && (i > digit_s) {
                raw[i - digit_s - 1] >> (BITS - bit_s)
            } else {
                0
            };
            raw[i] = hi | lo;
        }
        self.clear_unused_bits();
    }

    /// Right shift of the storage by `s` bits, filling the vacated high bits
    /// with `extension`, ignoring sign mode and flags
    pub(crate) fn raw_shr(&mut self, s: usize, extension: bool) {
        if s == 0 {
            return
        }
        let w = self.bw();
        if s >= w {
            self.fill_high(0, extension);
            return
        }
        let digit_s = digits_u(s);
        let bit_s = extra_u(s);
        let raw = self.as_mut_slice();
        let len = raw.len();
        // unused bits are zero, so they shift in as zeros
        for i in 0..len {
            let lo = if (i + digit_s) < len {
                raw[i + digit_s] >> bit_s
            } else {
                0
            };
            let hi = if (bit_s != 0) && ((i + digit_s + 1) < len) {
                raw[i + digit_s + 1] << (BITS - bit_s)
            } else {
                0
            };
            raw[i] = lo | hi;
        }
        self.fill_high(w - s, extension);
    }

    /// Left-shift-assigns by `s` bits with zero fill.
    ///
    /// For signed registers the sign bit stays in place and only the bits
    /// below it move. `overflow` is latched if any discarded bit disagrees
    /// with the current sign (zero for unsigned registers). For example, a
    /// signed `0b0011` shifted by 1 is `0b0110` with no overflow, while a
    /// signed `0b0100` shifted by 1 discards a 1 bit next to a positive sign
    /// and latches overflow.
    pub fn shl_assign(&mut self, s: usize) {
        if s == 0 {
            return
        }
        let w = self.bw();
        let movable = w - (self.is_signed() as usize);
        let sign = self.is_negative();
        let lost = (movable.saturating_sub(s)..movable).any(|i| self.bit(i) != sign);
        let msb = self.msb();
        self.raw_shl(s);
        if self.is_signed() {
            self.set_bit(w - 1, msb);
        }
        self.latch_overflow(lost);
    }

    /// Right-shift-assigns by `s` bits. The vacated high bits are filled with
    /// the sign bit if `self` is signed, else with zeros. `underflow` is
    /// latched if any discarded bit is nonzero.
    pub fn shr_assign(&mut self, s: usize) {
        if s == 0 {
            return
        }
        let lost = !self.is_zero() && (self.tz() < s);
        let sign = self.is_negative();
        self.raw_shr(s, sign);
        self.latch_underflow(lost);
    }
}
