mod fuzz;

const N: u32 = if cfg!(miri) {
    32
} else if cfg!(debug_assertions) {
    2_000
} else {
    100_000
};

macro_rules! test_identities {
    ($($name:ident, $n:expr, $seed:expr, $w:expr);*;) => {
        $(
            #[test]
            fn $name() {
                fuzz::identities($n, $seed, $w);
            }
        )*
    };
}

// small widths hit the sign and padding edge cases most often, the rest are
// primes and widths around digit boundaries
test_identities!(
    identities2, N, 0, 2;
    identities3, N, 0, 3;
    identities4, N, 0, 4;
    identities7, N, 0, 7;
    identities9, N, 0, 9;
    identities13, N, 0, 13;
    identities31, N, 0, 31;
    identities32, N, 0, 32;
    identities33, N, 0, 33;
    identities59, N, 0, 59;
    identities60, N, 1, 60;
);

macro_rules! test_wide_identities {
    ($($name:ident, $n:expr, $seed:expr, $w:expr);*;) => {
        $(
            #[test]
            fn $name() {
                fuzz::wide_identities($n, $seed, $w);
            }
        )*
    };
}

// multiple storage digits, around the digit boundaries and one odd width
test_wide_identities!(
    wide_identities65, N / 4, 0, 65;
    wide_identities100, N / 4, 0, 100;
    wide_identities127, N / 4, 0, 127;
    wide_identities128, N / 4, 0, 128;
    wide_identities129, N / 4, 1, 129;
    wide_identities200, N / 8, 2, 200;
);
