//! The basic verification recurrence
//!
//! This replays the precomputed digits of the root through the residual
//! update equations without any digit selection. If the equations and the
//! register widths are right, the residual ends at exactly zero and the root
//! register rebuilds `S`.

use msqrt_core::{bw, Register};
use smallvec::SmallVec;

use crate::{
    datapath::{digit_register, linear_quadratic, partial_product},
    BasicConfig, BasicLayout, EngineError, MultiplierStream, Problem, RootStream, RunReport,
    Step, StepObserver,
};

#[derive(Debug, Clone)]
pub struct BasicEngine {
    layout: BasicLayout,
    multiplier: MultiplierStream,
    root_digits: RootStream,
    target: Register,
    product: Register,
    multiplicand: Register,
    root: Register,
    residual: Register,
    /// the last iteration that has been run
    iteration: usize,
    digits: SmallVec<[i32; 32]>,
}

impl BasicEngine {
    /// Sets up the registers of iteration 0
    ///
    /// # Errors
    ///
    /// Besides config and kernel errors, `RootDigitCount` if the padded root
    /// does not have exactly `n + overhead` digits
    pub fn new(config: &BasicConfig, problem: &Problem) -> Result<Self, EngineError> {
        let layout = config.layout()?;
        let m = layout.m;
        problem.check_width(layout.processor)?;
        let root_digits =
            RootStream::new(problem.s(), layout.excess, layout.padded_root_width, m)?;
        if root_digits.count() != layout.iterations {
            return Err(EngineError::RootDigitCount {
                expected: layout.iterations,
                found: root_digits.count(),
            })
        }
        let multiplier = MultiplierStream::new(problem.b(), layout.processor, m)?;
        let mut multiplicand = Register::zero(bw(layout.multiplicand_width));
        multiplicand.load(problem.a(), 0)?;
        let mut residual = Register::zero_signed(bw(layout.residual_width));
        residual.multiply(&digit_register(multiplier.first(), m)?, &multiplicand)?;
        Ok(Self {
            layout,
            multiplier,
            root_digits,
            target: problem.s().clone(),
            product: problem.product()?,
            multiplicand,
            root: Register::zero(bw(layout.root_width)),
            residual,
            iteration: 0,
            digits: SmallVec::new(),
        })
    }

    pub fn layout(&self) -> &BasicLayout {
        &self.layout
    }

    pub fn residual(&self) -> &Register {
        &self.residual
    }

    pub fn root(&self) -> &Register {
        &self.root
    }

    /// If all iterations have been run
    pub fn is_done(&self) -> bool {
        self.iteration >= self.layout.iterations
    }

    /// Runs the next iteration. Does nothing if the run is done.
    pub fn step<O: StepObserver + ?Sized>(&mut self, observer: &mut O) -> Result<(), EngineError> {
        if self.is_done() {
            return Ok(())
        }
        self.iteration += 1;
        let i = self.iteration;
        let l = &self.layout;
        let m = l.m;
        let b = self.multiplier.at(i);
        let s = self.root_digits.at(i);

        self.residual.shl_assign(2 * m);
        let pp = partial_product(b, &self.multiplicand, m, l.residual_width)?;
        let lq = linear_quadratic(s, &self.root, m, l.lq_shift, l.residual_width)?;
        self.residual.add_assign(&pp);
        self.residual.sub_assign(&lq);

        self.root.shl_assign(m);
        self.root.load_constant(i64::from(s), 0, m)?;
        if i < l.iterations {
            self.multiplicand.shl_assign(m);
        }
        self.digits.push(s as i32);

        if observer.wants_steps() {
            observer.observe(Step {
                iteration: i,
                multiplier_digit: b,
                root_digit: s,
                selected_digit: None,
                residual: self.residual.clone(),
                root: self.root.clone(),
                practical_residual: None,
                practical_root: None,
            });
        }
        Ok(())
    }

    /// Runs all remaining iterations and evaluates the terminal criteria
    pub fn run<O: StepObserver + ?Sized>(
        mut self,
        observer: &mut O,
    ) -> Result<RunReport, EngineError> {
        while !self.is_done() {
            self.step(observer)?;
        }
        let mut root = self.root;
        root.shr_assign(self.layout.excess);
        Ok(RunReport {
            residual_zero: self.residual.is_zero(),
            root_recovered: root.compare(&self.target).is_eq(),
            overflow: self.residual.overflow(),
            underflow: self.residual.underflow(),
            residual: self.residual,
            root,
            oracle: None,
            digits: self.digits,
            product: self.product,
            advisories: vec![],
        })
    }
}
