//! Bit-level hardware register kernel
//!
//! This is the core library of the `msqrt` system of crates. It supplies the
//! [Register] type, an arbitrary width bit vector that models a hardware
//! storage element: it has a sign mode and two sticky fault flags, `overflow`
//! and `underflow`, which latch whenever an operation loses a meaningful bit.
//! The square root recurrences in `msqrt_engine` are built exclusively on the
//! operations here, and their correctness depends on the exact flag semantics
//! documented on each operation.
//!
//! Fallible operations return a `Result<_, KernelError>`. Errors are contract
//! violations such as sign mode mismatches, never numeric faults. Numeric
//! faults are only ever recorded in the flags.

// There are many guaranteed nonzero lengths
#![allow(clippy::len_without_is_empty)]
// We are using special indexing everywhere
#![allow(clippy::needless_range_loop)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]

pub use msqrt_internals::{bw, ceil_div, Digit, KernelError};

pub(crate) mod data;
pub use data::{DigitList, Register};

mod logic;
pub use logic::{trim_radix_string, AddSign, BitSource};

pub mod prelude {
    pub use crate::{bw, trim_radix_string, AddSign, BitSource, DigitList, KernelError, Register};
}
