use std::cmp::Ordering;

use msqrt::{bw, AddSign, KernelError, Register};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::{eq, eq_val, fits, rand_reg, wrap};

fn val(x: &Register) -> i128 {
    x.to_i128().unwrap()
}

/// Checks the register operations against `i128` arithmetic for random
/// operands of widths up to `w`, which must be in `2..=60` so that every
/// product fits
pub fn identities(iters: u32, seed: u64, w: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..iters {
        let signed = (rng.next_u32() & 1) != 0;
        let x = rand_reg(&mut rng, w, signed);
        let xv = val(&x);

        // duplication and comparison
        let y = x.clone();
        eq(&x, &y);
        assert_eq!(x.compare(&y), Ordering::Equal);
        assert_eq!(x.compare_i64(xv as i64), Ordering::Equal);
        let len = 1 + (rng.next_u32() as usize % w);
        let z = rand_reg(&mut rng, len, !signed);
        assert_eq!(x.compare(&z), xv.cmp(&val(&z)));

        // shifts
        let s = rng.next_u32() as usize % w;
        let mut y = x.clone();
        y.shr_assign(s);
        eq_val(&y, xv >> s);
        assert_eq!(y.underflow(), (xv & ((1i128 << s) - 1)) != 0);
        assert!(!y.overflow());
        let s = if signed && (w >= 2) {
            rng.next_u32() as usize % (w - 1)
        } else {
            rng.next_u32() as usize % (w + 1)
        };
        let mut y = x.clone();
        y.shl_assign(s);
        let shifted = xv << s;
        assert_eq!(y.overflow(), !fits(shifted, w, signed));
        if !y.overflow() {
            eq_val(&y, shifted);
            // and back without loss
            y.shr_assign(s);
            eq_val(&y, xv);
            assert!(!y.underflow());
        }

        // negation and magnitude
        let a = x.absolute();
        assert!(!a.is_signed());
        eq_val(&a, xv.abs());
        if signed {
            let mut y = x.clone();
            y.negate().unwrap();
            assert_eq!(y.overflow(), x.is_imin());
            eq_val(&y, wrap(-xv, w, true));
        } else {
            assert_eq!(x.clone().negate(), Err(KernelError::Unsigned));
        }

        // addition
        let len = 1 + (rng.next_u32() as usize % w);
        let addend = rand_reg(&mut rng, len, !signed);
        let av = val(&addend);
        let position = rng.next_u32() as usize % 8;
        let sign = if (rng.next_u32() & 1) != 0 {
            AddSign::Add
        } else {
            AddSign::Sub
        };
        let exact = match sign {
            AddSign::Add => xv + (av << position),
            AddSign::Sub => xv - (av << position),
        };
        let mut y = x.clone();
        y.add_shifted(&addend, sign, position);
        eq_val(&y, wrap(exact, w, signed));
        assert_eq!(y.overflow(), !fits(exact, w, signed));

        // multiplication
        let len = 1 + (rng.next_u32() as usize % w);
        let rhs = rand_reg(&mut rng, len, !signed);
        let product = xv * val(&rhs);
        let rw = 1 + (rng.next_u32() as usize % (2 * w));
        let result_signed = (rng.next_u32() & 1) != 0;
        let mut y = if result_signed {
            Register::zero_signed(bw(rw))
        } else {
            Register::zero(bw(rw))
        };
        let res = y.multiply(&x, &rhs);
        if (product < 0) && !result_signed {
            assert_eq!(res, Err(KernelError::NegativeIntoUnsigned));
        } else if (x.is_negative() != rhs.is_negative()) && !result_signed {
            // a zero product of differently signed operands still needs a
            // signed result
            assert_eq!(res, Err(KernelError::NegativeIntoUnsigned));
        } else {
            res.unwrap();
            eq_val(&y, wrap(product, rw, result_signed));
            assert_eq!(y.overflow(), !fits(product, rw, result_signed));
        }

        // digit lists
        let bpd = 1 + (rng.next_u32() as usize % 12);
        let list = x.to_digit_list(bpd).unwrap();
        assert_eq!(list.count(), (w + bpd - 1) / bpd);
        let mut rebuilt = 0i128;
        for d in list.iter() {
            assert!(d < (1 << bpd));
            rebuilt = (rebuilt << bpd) | i128::from(d);
        }
        assert_eq!(rebuilt, xv.abs());

        // integer square root
        if xv >= 0 {
            let root = x.integer_sqrt().unwrap();
            assert_eq!(root.bw(), w);
            assert!(!root.is_signed());
            let r = val(&root);
            assert!(r * r <= xv);
            assert!((r + 1) * (r + 1) > xv);
        } else {
            assert_eq!(x.integer_sqrt(), Err(KernelError::NegativeRadicand));
        }

        // loading into a wider register at an offset
        let position = rng.next_u32() as usize % 8;
        let mut y = if signed {
            Register::zero_signed(bw(w + 8))
        } else {
            Register::zero(bw(w + 8))
        };
        y.load(&x, position).unwrap();
        assert!(!y.overflow());
        let mut back = x.clone();
        back.zero_assign();
        back.extract_from(&y, position as isize);
        assert_eq!(back.compare(&x), Ordering::Equal);
    }
}
