//! The practical recurrence
//!
//! Here the root digits are selected from truncated samples of the residual
//! and the partially built root, using an SRT table and a redundant digit
//! set, and converted on the fly. The recurrence driven by the precomputed
//! digits runs alongside as an oracle, so that every practical run can be
//! checked against the theoretical one.

use msqrt_core::{bw, Register};
use smallvec::SmallVec;

use crate::{
    datapath::{digit_register, linear_quadratic, partial_product},
    select_digit, Advisory, EngineError, MultiplierStream, OnTheFly, OracleReport,
    PracticalConfig, PracticalLayout, Problem, RootStream, RunReport, Samples, Step,
    StepObserver,
};

#[derive(Debug, Clone)]
pub struct PracticalEngine {
    config: PracticalConfig,
    layout: PracticalLayout,
    multiplier: MultiplierStream,
    root_digits: RootStream,
    target: Register,
    product: Register,
    multiplicand: Register,
    /// the oracle residual and root, driven by the precomputed digits
    residual: Register,
    root: Register,
    practical_residual: Register,
    otf: OnTheFly,
    cursor: isize,
    iteration: usize,
    digits: SmallVec<[i32; 32]>,
    advisories: Vec<Advisory>,
}

impl PracticalEngine {
    /// Sets up the registers of iteration 0. A padded root digit count that
    /// differs from the number of iterations is recorded as an advisory.
    pub fn new(config: &PracticalConfig, problem: &Problem) -> Result<Self, EngineError> {
        let layout = config.layout()?;
        let m = layout.m;
        problem.check_width(layout.processor)?;
        let root_digits = RootStream::new(problem.s(), layout.mb, layout.padded_root_width, m)?;
        let mut advisories = vec![];
        if root_digits.count() != layout.iterations {
            advisories.push(Advisory::RootDigitCount {
                expected: layout.iterations,
                found: root_digits.count(),
            });
        }
        let multiplier = MultiplierStream::new(problem.b(), layout.processor, m)?;
        let mut multiplicand = Register::zero(bw(layout.multiplicand_width));
        multiplicand.load(problem.a(), 0)?;
        let mut residual = Register::zero_signed(bw(layout.residual_width));
        residual.multiply(&digit_register(multiplier.first(), m)?, &multiplicand)?;
        let practical_residual = residual.clone();
        Ok(Self {
            config: config.clone(),
            layout,
            multiplier,
            root_digits,
            target: problem.s().clone(),
            product: problem.product()?,
            multiplicand,
            residual,
            root: Register::zero(bw(layout.root_width)),
            practical_residual,
            otf: OnTheFly::new(layout.root_width, m)?,
            cursor: layout.cursor,
            iteration: 0,
            digits: SmallVec::new(),
            advisories,
        })
    }

    pub fn layout(&self) -> &PracticalLayout {
        &self.layout
    }

    pub fn residual(&self) -> &Register {
        &self.practical_residual
    }

    pub fn root(&self) -> &Register {
        self.otf.root()
    }

    /// If all iterations have been run
    pub fn is_done(&self) -> bool {
        self.iteration >= self.layout.iterations
    }

    /// Takes the selection windows of the upcoming iteration
    fn samples(&self, iteration: usize) -> Samples {
        let l = &self.layout;
        let mut residual = Register::zero_signed(bw(l.residual_sample_width));
        residual.extract_from(&self.practical_residual, self.cursor);
        let mut root = Register::zero(bw(l.root_sample_width));
        let root_position = (((iteration - 1) * l.m) as isize)
            - (l.z as isize)
            - (self.config.ns as isize)
            - 1;
        root.extract_from(self.otf.root(), root_position);
        let mut leading = Register::zero(bw(3));
        leading.extract_from(&self.practical_residual, l.leading_position as isize);
        Samples {
            residual,
            root,
            leading,
        }
    }

    /// Runs the next iteration. Does nothing if the run is done.
    pub fn step<O: StepObserver + ?Sized>(&mut self, observer: &mut O) -> Result<(), EngineError> {
        if self.is_done() {
            return Ok(())
        }
        self.iteration += 1;
        let i = self.iteration;
        let samples = self.samples(i);
        let d = select_digit(&self.config, self.layout.delta, i, &samples)?;

        let l = &self.layout;
        let m = l.m;
        let b = self.multiplier.at(i);
        let s = self.root_digits.at(i);

        let mut digit = Register::zero_signed(bw(m + 1));
        digit.load_constant(i64::from(d), 0, m + 1)?;
        let operand = self.otf.operand(d, l.operand_width)?;
        let pp = partial_product(b, &self.multiplicand, m, l.residual_width)?;
        let lq = linear_quadratic(s, &self.root, m, l.lq_shift, l.residual_width)?;
        let mut lq_practical = Register::zero_signed(bw(l.residual_width));
        lq_practical.multiply(&digit, &operand)?;
        lq_practical.shl_assign(l.lq_shift);

        self.residual.shl_assign(2 * m);
        self.practical_residual.shl_assign(2 * m);
        self.residual.add_assign(&pp);
        self.practical_residual.add_assign(&pp);
        self.residual.sub_assign(&lq);
        self.practical_residual.sub_assign(&lq_practical);

        self.root.shl_assign(m);
        self.root.load_constant(i64::from(s), 0, m)?;
        self.otf.append(d)?;
        if i < l.iterations {
            self.multiplicand.shl_assign(m);
        }
        self.cursor += m as isize;
        self.digits.push(d);

        if observer.wants_steps() {
            observer.observe(Step {
                iteration: i,
                multiplier_digit: b,
                root_digit: s,
                selected_digit: Some(d),
                residual: self.residual.clone(),
                root: self.root.clone(),
                practical_residual: Some(self.practical_residual.clone()),
                practical_root: Some(self.otf.root().clone()),
            });
        }
        Ok(())
    }

    /// Runs all remaining iterations and evaluates the terminal criteria on
    /// both the practical and the oracle recurrence
    pub fn run<O: StepObserver + ?Sized>(
        mut self,
        observer: &mut O,
    ) -> Result<RunReport, EngineError> {
        while !self.is_done() {
            self.step(observer)?;
        }
        let l = self.layout;
        // the guard bit padding plus the zero digits appended past the end of
        // the padded root
        let surplus = l.iterations.saturating_sub(self.root_digits.count());
        let padding = l.mb + (l.m * surplus);

        let mut oracle_root = self.root;
        oracle_root.shr_assign(padding);
        let oracle = OracleReport {
            residual_zero: self.residual.is_zero(),
            root_recovered: oracle_root.compare(&self.target).is_eq(),
            overflow: self.residual.overflow(),
            underflow: self.residual.underflow(),
            residual: self.residual,
            root: oracle_root,
        };

        let mut root = self.otf.root().clone();
        root.shr_assign(padding);
        Ok(RunReport {
            residual_zero: self.practical_residual.is_zero(),
            root_recovered: root.compare(&self.target).is_eq(),
            overflow: self.practical_residual.overflow(),
            underflow: self.practical_residual.underflow(),
            residual: self.practical_residual,
            root,
            oracle: Some(oracle),
            digits: self.digits,
            product: self.product,
            advisories: self.advisories,
        })
    }
}
