use crate::{Digit, BITS};

// `Digit` is a `usize`, so a `u128` always holds a double digit
const _: () = assert!(BITS <= 64);

/// Returns `x + y + carry` as `(sum, carry_out)`. The carry out is at most 2.
#[inline]
pub const fn widen_add(x: Digit, y: Digit, carry: Digit) -> (Digit, Digit) {
    let (sum, c0) = x.overflowing_add(y);
    let (sum, c1) = sum.overflowing_add(carry);
    (sum, (c0 as Digit) + (c1 as Digit))
}

/// Returns `(x * y) + add` as `(lo, hi)` digits. The maximum is
/// `(2^BITS - 1)^2 + 2^BITS - 1 < 2^(2 * BITS)`, so nothing is lost.
#[inline]
pub const fn widen_mul_add(x: Digit, y: Digit, add: Digit) -> (Digit, Digit) {
    let wide = (x as u128) * (y as u128) + (add as u128);
    (wide as Digit, (wide >> BITS) as Digit)
}

#[test]
fn widening() {
    assert_eq!(widen_add(Digit::MAX, 1, 1), (1, 1));
    assert_eq!(widen_add(Digit::MAX, Digit::MAX, 1), (Digit::MAX, 1));
    assert_eq!(widen_add(3, 4, 0), (7, 0));
    assert_eq!(widen_mul_add(Digit::MAX, Digit::MAX, Digit::MAX), (0, Digit::MAX));
    assert_eq!(widen_mul_add(Digit::MAX, 2, 1), (Digit::MAX, 1));
    assert_eq!(widen_mul_add(3, 5, 7), (22, 0));
}
