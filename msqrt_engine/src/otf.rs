//! On-the-fly conversion of redundant digits
//!
//! A signed digit stream is turned into a conventional root without carry
//! propagation by keeping `S` next to its shadow `S - 1`. Appending a
//! negative digit to `S` is the same as appending `2^m + d` to `S - 1`, so
//! each step only chooses which register to continue from. The doubled
//! registers `2S` and `2S - 1` are maintained the same way for the operand of
//! the linear-quadratic term.

use msqrt_core::{KernelError, Register};

/// What appending digit `d` does to each register pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Plan {
    /// if `S` continues from `S - 1`
    sel: bool,
    /// the digit appended to `S`
    app: i64,
    /// if `S - 1` continues from `S - 1`
    sel_m1: bool,
    /// the digit appended to `S - 1`
    app_m1: i64,
}

impl Plan {
    fn new(d: i32, m: usize) -> Self {
        let radix = 1i64 << m;
        let d = i64::from(d);
        let (sel, app) = if d < 0 { (true, radix + d) } else { (false, d) };
        let (sel_m1, app_m1) = if d <= 0 {
            (true, radix + d - 1)
        } else {
            (false, d - 1)
        };
        Self {
            sel,
            app,
            sel_m1,
            app_m1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnTheFly {
    m: usize,
    root: Register,
    minus_one: Register,
    doubled: Register,
    doubled_minus_one: Register,
}

impl OnTheFly {
    /// Creates zeroed registers for a root of `root_width` bits built from
    /// `m` bit digits
    pub fn new(root_width: usize, m: usize) -> Result<Self, KernelError> {
        Ok(Self {
            m,
            root: Register::try_zero(root_width)?,
            minus_one: Register::try_zero(root_width)?,
            doubled: Register::try_zero(root_width + 1)?,
            doubled_minus_one: Register::try_zero(root_width + 1)?,
        })
    }

    /// The converted root
    pub fn root(&self) -> &Register {
        &self.root
    }

    /// The shadow root, one unit in the last place below `root`
    pub fn minus_one(&self) -> &Register {
        &self.minus_one
    }

    /// Returns the operand `[2S | d]` of the linear-quadratic term for the
    /// upcoming digit `d` in an unsigned `width` bit register. A negative
    /// digit borrows from `2S`, giving `[2S - 1 | 2^m + d]` instead.
    pub fn operand(&self, d: i32, width: usize) -> Result<Register, KernelError> {
        let plan = Plan::new(d, self.m);
        let mut operand = Register::try_zero(width)?;
        if plan.sel {
            operand.load(&self.doubled_minus_one, self.m)?;
        } else {
            operand.load(&self.doubled, self.m)?;
        }
        operand.load_constant(plan.app, 0, self.m)?;
        Ok(operand)
    }

    /// Appends the digit `d` in `[-(2^m - 1), 2^m - 1]`
    pub fn append(&mut self, d: i32) -> Result<(), KernelError> {
        let m = self.m;
        let plan = Plan::new(d, m);
        // only the low bits of the doubled registers are overwritten, their
        // top bit is shifted out below
        if plan.sel {
            self.root.load(&self.minus_one, 0)?;
            self.doubled.load(&self.minus_one, 0)?;
        } else {
            self.doubled.load(&self.root, 0)?;
        }
        if plan.sel_m1 {
            self.doubled_minus_one.load(&self.minus_one, 0)?;
        } else {
            self.minus_one.load(&self.root, 0)?;
            self.doubled_minus_one.load(&self.root, 0)?;
        }
        self.root.shl_assign(m);
        self.minus_one.shl_assign(m);
        self.root.load_constant(plan.app, 0, m)?;
        self.minus_one.load_constant(plan.app_m1, 0, m)?;
        self.doubled.shl_assign(m + 1);
        self.doubled_minus_one.shl_assign(m + 1);
        self.doubled.load_constant(plan.app << 1, 0, m + 1)?;
        self.doubled_minus_one
            .load_constant((plan.app_m1 << 1) + 1, 0, m + 1)?;
        Ok(())
    }
}
