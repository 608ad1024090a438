use msqrt::{bw, Register};
use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};

mod identities;
mod wide;

pub use identities::identities;
pub use wide::wide_identities;

/// Checks that the unused bits of the storage are zero
#[track_caller]
fn check_invariants(x: &Register) {
    if x.significant_bits() > x.bw() {
        panic!("unused bits are set: {x:?}");
    }
}

/// Checks for equality of bits, sign mode, and flags, and that invariants are
/// being kept
#[track_caller]
pub fn eq(lhs: &Register, rhs: &Register) {
    check_invariants(lhs);
    check_invariants(rhs);
    if lhs.bw() != rhs.bw() {
        panic!(
            "mismatched bitwidths: lhs.bw(): {} rhs.bw(): {}",
            lhs.bw(),
            rhs.bw()
        )
    }
    if lhs != rhs {
        panic!("lhs and rhs are not equal when they should be:\nlhs:{lhs:?} rhs:{rhs:?}");
    }
}

/// Checks that `x` holds `expected` and that invariants are being kept
#[track_caller]
pub fn eq_val(x: &Register, expected: i128) {
    check_invariants(x);
    match x.to_i128() {
        Some(v) if v == expected => (),
        other => panic!("expected {expected}, found {other:?} in {x:?}"),
    }
}

pub fn next_u128(rng: &mut Xoshiro128StarStar) -> u128 {
    (u128::from(rng.next_u64()) << 64) | u128::from(rng.next_u64())
}

/// A random register of width `w <= 128` with clear flags. The value is
/// biased toward having long runs of zeros or ones at the top, where most of
/// the flag edge cases are.
pub fn rand_reg(rng: &mut Xoshiro128StarStar, w: usize, signed: bool) -> Register {
    let mut x = next_u128(rng);
    match rng.next_u32() % 4 {
        0 => x >>= rng.next_u32() % 128,
        1 => x = !(!x >> (rng.next_u32() % 128)),
        _ => (),
    }
    if w < 128 {
        x &= (1u128 << w) - 1;
    }
    let mut r = Register::from_u128(bw(w), x);
    r.set_signed(signed);
    r
}

/// Reduces `x` into the range of a `w` bit register
pub fn wrap(x: i128, w: usize, signed: bool) -> i128 {
    let m = x.rem_euclid(1i128 << w);
    if signed && (m >= (1i128 << (w - 1))) {
        m - (1i128 << w)
    } else {
        m
    }
}

/// If `x` is in the range of a `w` bit register
pub fn fits(x: i128, w: usize, signed: bool) -> bool {
    if signed {
        (-(1i128 << (w - 1)) <= x) && (x < (1i128 << (w - 1)))
    } else {
        (0 <= x) && (x < (1i128 << w))
    }
}
