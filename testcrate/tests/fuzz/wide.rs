use std::cmp::Ordering;

use msqrt::{bw, AddSign, Register};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::{check_invariants, eq};

/// A random unsigned register of width `w` with any number of digits. Like
/// `rand_reg` it is biased toward runs of zeros or ones at the top.
fn rand_wide(rng: &mut Xoshiro128StarStar, w: usize) -> Register {
    let mut r = Register::zero(bw(w));
    let mut bits = 0u64;
    for i in 0..w {
        if (i % 64) == 0 {
            bits = rng.next_u64();
        }
        r.set(i, (bits & 1) != 0).unwrap();
        bits >>= 1;
    }
    let run = rng.next_u32() as usize % (w + 1);
    match rng.next_u32() % 4 {
        0 => {
            for i in (w - run)..w {
                r.set(i, false).unwrap();
            }
        }
        1 => {
            for i in (w - run)..w {
                r.set(i, true).unwrap();
            }
        }
        _ => (),
    }
    r
}

/// The bits `from..to` of `x` at the bottom of a `w` bit register
fn field(x: &Register, from: usize, to: usize, w: usize) -> Register {
    let mut r = Register::zero(bw(w));
    for i in from..to {
        r.set(i - from, x.get(i).unwrap()).unwrap();
    }
    r
}

#[track_caller]
fn product(lhs: &Register, rhs: &Register, w: usize, signed: bool) -> Register {
    let mut p = if signed {
        Register::zero_signed(bw(w))
    } else {
        Register::zero(bw(w))
    };
    p.multiply(lhs, rhs).unwrap();
    assert!(!p.overflow(), "{lhs:?} * {rhs:?}");
    check_invariants(&p);
    p
}

/// Checks algebraic identities of the multi digit carry chains for unsigned
/// operands of width `w`, where there is no primitive reference to compare
/// against
pub fn wide_identities(iters: u32, seed: u64, w: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..iters {
        let a = rand_wide(&mut rng, w);
        let b = rand_wide(&mut rng, w);

        // commutativity
        let ab = product(&a, &b, 2 * w, false);
        eq(&ab, &product(&b, &a, 2 * w, false));

        // splitting `a` at `j` and recombining the partial products
        let j = 1 + (rng.next_u32() as usize % (w - 1));
        let hi = field(&a, j, w, w);
        let lo = field(&a, 0, j, w);
        let mut recombined = product(&hi, &b, 2 * w, false);
        recombined.shl_assign(j);
        recombined.add_assign(&product(&lo, &b, 2 * w, false));
        assert!(!recombined.overflow());
        assert_eq!(recombined.compare(&ab), Ordering::Equal);

        // addition and subtraction are inverse without faults
        let mut sum = Register::zero(bw(w + 1));
        sum.load(&a, 0).unwrap();
        sum.add_assign(&b);
        assert!(!sum.overflow());
        assert!(sum.compare(&a).is_ge() && sum.compare(&b).is_ge());
        sum.sub_assign(&b);
        assert!(!sum.overflow());
        assert_eq!(sum.compare(&a), Ordering::Equal);
        // `a + b` does not fit `w` bits exactly when the carry is set
        let mut wrapped = a.clone();
        wrapped.add_assign(&b);
        let mut exact = Register::zero(bw(w + 1));
        exact.load(&a, 0).unwrap();
        exact.add_assign(&b);
        assert_eq!(wrapped.overflow(), exact.get(w).unwrap());

        // floor square roots on both sides of an exact square
        let square = product(&a, &a, 2 * w, false);
        let root = square.integer_sqrt().unwrap();
        assert_eq!(root.compare(&a), Ordering::Equal);
        // (a + 1)^2 - 1 = a^2 + 2a
        let mut below = Register::zero(bw(2 * w + 1));
        below.load(&square, 0).unwrap();
        below.add_shifted(&a, AddSign::Add, 1);
        assert!(!below.overflow());
        let root = below.integer_sqrt().unwrap();
        assert_eq!(root.compare(&a), Ordering::Equal);

        // reapplying the sign across digits
        let mut pos = Register::zero(bw(w + 1));
        pos.load(&a, 0).unwrap();
        pos.set_signed(true);
        let mut neg = pos.clone();
        neg.negate().unwrap();
        let mut expected = product(&pos, &b, 2 * w + 2, true);
        expected.negate().unwrap();
        eq(&product(&neg, &b, 2 * w + 2, true), &expected);

        // digit lists rebuild the value
        let bits_per_digit = 1 + (rng.next_u32() as usize % 32);
        let list = a.to_digit_list(bits_per_digit).unwrap();
        let mut rebuilt = Register::zero(bw(w));
        for digit in list.iter() {
            rebuilt.shl_assign(bits_per_digit);
            rebuilt
                .load_constant(i64::from(digit), 0, bits_per_digit)
                .unwrap();
        }
        assert!(!rebuilt.overflow());
        assert_eq!(rebuilt.compare(&a), Ordering::Equal);
    }
}
