//! The shared terms of both recurrences

use msqrt_core::{bw, KernelError, Register};

/// Creates an unsigned `m` bit register holding `digit`
pub(crate) fn digit_register(digit: u32, m: usize) -> Result<Register, KernelError> {
    let mut r = Register::zero(bw(m));
    r.load_constant(i64::from(digit), 0, m)?;
    Ok(r)
}

/// `(b * multiplicand) << m` in an unsigned register of width `w`
pub(crate) fn partial_product(
    b: u32,
    multiplicand: &Register,
    m: usize,
    w: usize,
) -> Result<Register, KernelError> {
    let mut pp = Register::try_zero(w)?;
    pp.multiply(&digit_register(b, m)?, multiplicand)?;
    pp.shl_assign(m);
    Ok(pp)
}

/// `(s * [root | 0 | s]) << shift` in an unsigned register of width `w`,
/// where the root is loaded at `m + 1` and `s` at 0
pub(crate) fn linear_quadratic(
    s: u32,
    root: &Register,
    m: usize,
    shift: usize,
    w: usize,
) -> Result<Register, KernelError> {
    let mut operand = Register::try_zero(w)?;
    operand.load(root, m + 1)?;
    operand.load_constant(i64::from(s), 0, m)?;
    let mut lq = Register::try_zero(w)?;
    lq.multiply(&digit_register(s, m)?, &operand)?;
    lq.shl_assign(shift);
    Ok(lq)
}
